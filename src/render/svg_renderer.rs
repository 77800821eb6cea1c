use std::fmt::Write as _;

use indexmap::IndexMap;
use tracing::trace;

use crate::core::{IdAllocator, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathData, PathHandle, PathKind, PathStyle, Renderer};

#[derive(Debug, Clone, PartialEq)]
struct SvgPathElement {
    style: PathStyle,
    d: String,
    visible: bool,
}

/// In-memory SVG surface.
///
/// Paths are retained in creation order, which is also their paint order,
/// and the whole surface serializes to a standalone SVG document.
#[derive(Debug)]
pub struct SvgRenderer {
    viewport: Viewport,
    ids: IdAllocator,
    elements: IndexMap<PathHandle, SvgPathElement>,
}

impl SvgRenderer {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        Ok(Self {
            viewport,
            ids: IdAllocator::new(),
            elements: IndexMap::new(),
        })
    }

    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        self.elements.len()
    }

    /// Path text currently held for `handle`.
    #[must_use]
    pub fn path_text(&self, handle: PathHandle) -> Option<&str> {
        self.elements.get(&handle).map(|element| element.d.as_str())
    }

    #[must_use]
    pub fn is_path_visible(&self, handle: PathHandle) -> Option<bool> {
        self.elements.get(&handle).map(|element| element.visible)
    }

    #[must_use]
    pub fn to_svg_document(&self) -> String {
        let Viewport { width, height } = self.viewport;
        let mut svg = String::with_capacity(256 + self.elements.len() * 512);
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for element in self.elements.values() {
            let style = &element.style;
            let role = match &style.kind {
                PathKind::Series { label } => format!(r#" data-series="{}""#, escape_attr(label)),
                PathKind::Cursor => r#" data-cursor="true""#.to_owned(),
            };
            let visibility = if element.visible {
                ""
            } else {
                r#" visibility="hidden""#
            };
            let _ = writeln!(
                svg,
                r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linejoin="round" transform="translate(0 {})" data-chart="{}"{role}{visibility}/>"#,
                element.d,
                style.color.to_hex(),
                style.stroke_width,
                style.offset_y,
                style.chart_id.raw(),
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn element_mut(&mut self, handle: PathHandle) -> ChartResult<&mut SvgPathElement> {
        self.elements
            .get_mut(&handle)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown path handle {}", handle.raw())))
    }
}

impl Renderer for SvgRenderer {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn create_path(&mut self, style: &PathStyle) -> ChartResult<PathHandle> {
        style.validate()?;
        let handle = PathHandle::new(self.ids.next_raw());
        self.elements.insert(
            handle,
            SvgPathElement {
                style: style.clone(),
                d: String::new(),
                visible: true,
            },
        );
        Ok(handle)
    }

    fn update_path(&mut self, handle: PathHandle, path: &PathData) -> ChartResult<()> {
        path.validate()?;
        let d = path.to_svg_path();
        trace!(handle = handle.raw(), points = path.len(), "svg path updated");
        self.element_mut(handle)?.d = d;
        Ok(())
    }

    fn set_path_visible(&mut self, handle: PathHandle, visible: bool) -> ChartResult<()> {
        self.element_mut(handle)?.visible = visible;
        Ok(())
    }
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
