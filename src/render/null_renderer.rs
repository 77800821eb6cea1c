use crate::core::{IdAllocator, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{PathData, PathHandle, PathStyle, Renderer};

/// Path state kept by [`NullRenderer`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedPath {
    pub handle: PathHandle,
    pub style: PathStyle,
    pub data: PathData,
    pub visible: bool,
    pub update_count: usize,
}

/// Headless surface used by tests and engine usage without a display.
///
/// It still validates styles and geometry so tests catch invalid output
/// before a real surface is involved.
#[derive(Debug)]
pub struct NullRenderer {
    viewport: Viewport,
    ids: IdAllocator,
    paths: Vec<RecordedPath>,
    pub total_updates: usize,
}

impl Default for NullRenderer {
    fn default() -> Self {
        Self::new(Viewport::new(800, 345))
    }
}

impl NullRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ids: IdAllocator::new(),
            paths: Vec::new(),
            total_updates: 0,
        }
    }

    /// Changes the reported surface size, as a container resize would.
    pub fn set_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[must_use]
    pub fn paths(&self) -> &[RecordedPath] {
        &self.paths
    }

    #[must_use]
    pub fn path(&self, handle: PathHandle) -> Option<&RecordedPath> {
        self.paths.iter().find(|path| path.handle == handle)
    }

    fn path_mut(&mut self, handle: PathHandle) -> ChartResult<&mut RecordedPath> {
        self.paths
            .iter_mut()
            .find(|path| path.handle == handle)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown path handle {}", handle.raw())))
    }
}

impl Renderer for NullRenderer {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn create_path(&mut self, style: &PathStyle) -> ChartResult<PathHandle> {
        style.validate()?;
        let handle = PathHandle::new(self.ids.next_raw());
        self.paths.push(RecordedPath {
            handle,
            style: style.clone(),
            data: PathData::default(),
            visible: true,
            update_count: 0,
        });
        Ok(handle)
    }

    fn update_path(&mut self, handle: PathHandle, path: &PathData) -> ChartResult<()> {
        path.validate()?;
        let recorded = self.path_mut(handle)?;
        recorded.data = path.clone();
        recorded.update_count += 1;
        self.total_updates += 1;
        Ok(())
    }

    fn set_path_visible(&mut self, handle: PathHandle, visible: bool) -> ChartResult<()> {
        self.path_mut(handle)?.visible = visible;
        Ok(())
    }
}
