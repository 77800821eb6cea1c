mod null_renderer;
mod path;
mod primitives;
mod svg_renderer;

pub use null_renderer::{NullRenderer, RecordedPath};
pub use path::{PathData, PathHandle};
pub use primitives::{Color, PathKind, PathStyle};
pub use svg_renderer::SvgRenderer;

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering surface.
///
/// The engine owns no drawing code: it creates one retained path per series
/// (plus the cursor line) and hands over fresh geometry whenever a frame
/// changed it. Surfaces keep paths by handle and decide how to draw them.
pub trait Renderer {
    /// Current pixel size of the surface.
    fn size(&self) -> Viewport;

    fn create_path(&mut self, style: &PathStyle) -> ChartResult<PathHandle>;

    fn update_path(&mut self, handle: PathHandle, path: &PathData) -> ChartResult<()>;

    fn set_path_visible(&mut self, handle: PathHandle, visible: bool) -> ChartResult<()>;
}
