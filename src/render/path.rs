use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::RenderPoint;
use crate::error::{ChartError, ChartResult};

/// Opaque handle of a path owned by a rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathHandle(u32);

impl PathHandle {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Polyline in chart pixel coordinates handed to the surface each frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathData {
    pub points: Vec<(f64, f64)>,
}

impl PathData {
    #[must_use]
    pub fn from_render_points(points: &[RenderPoint]) -> Self {
        Self {
            points: points
                .iter()
                .map(|point| (point.pixel_x, point.pixel_y))
                .collect(),
        }
    }

    #[must_use]
    pub fn vertical_line(x: f64, height: f64) -> Self {
        Self {
            points: vec![(x, 0.0), (x, height)],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self
            .points
            .iter()
            .any(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes the polyline as SVG path text (`M x y L x y ...`).
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        let mut text = String::with_capacity(self.points.len() * 16);
        for (index, (x, y)) in self.points.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            let _ = write!(text, "{command}{} {}", format_coord(*x), format_coord(*y));
        }
        text
    }
}

fn format_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_owned();
    }
    let text = format!("{rounded:.3}");
    text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
