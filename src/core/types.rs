use serde::{Deserialize, Serialize};

/// Pixel size of a rendering surface or chart area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Whether a rendered point is an original sample or the mean of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    Single,
    Group { len: usize },
}

/// Domain coordinates plus the pixel position derived for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderPoint {
    pub x: f64,
    pub y: f64,
    pub pixel_x: f64,
    pub pixel_y: f64,
    pub kind: PointKind,
}

impl RenderPoint {
    #[must_use]
    pub fn single(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            pixel_x: 0.0,
            pixel_y: 0.0,
            kind: PointKind::Single,
        }
    }

    #[must_use]
    pub fn group(x: f64, y: f64, len: usize) -> Self {
        Self {
            kind: PointKind::Group { len },
            ..Self::single(x, y)
        }
    }

    #[must_use]
    pub fn is_group(self) -> bool {
        matches!(self.kind, PointKind::Group { .. })
    }
}
