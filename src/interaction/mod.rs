use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer position and range captured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanOrigin {
    pub pixel_x: f64,
    pub range: (f64, f64),
    pub domain_per_pixel: f64,
}

impl PanOrigin {
    /// Range the drag should show with the pointer at `pixel_x`.
    ///
    /// Dragging right moves the window left, as if the content were grabbed.
    /// The shift stops at `bounds` so the window keeps its width at the data
    /// edges; a window already reaching past a bound may not move further out.
    #[must_use]
    pub fn dragged_range(self, pixel_x: f64, bounds: (f64, f64)) -> (f64, f64) {
        let (min, max) = self.range;
        let lowest = bounds.0.min(min) - min;
        let highest = bounds.1.max(max) - max;
        let shift = ((self.pixel_x - pixel_x) * self.domain_per_pixel)
            .max(lowest)
            .min(highest);
        (min + shift, max + shift)
    }
}

/// Pointer state of the main chart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    pan: Option<PanOrigin>,
    cursor_x: Option<f64>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.pan.is_some() {
            InteractionMode::Panning
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn pan_origin(self) -> Option<PanOrigin> {
        self.pan
    }

    pub fn on_pan_start(&mut self, origin: PanOrigin) {
        self.pan = Some(origin);
    }

    pub fn on_pan_end(&mut self) {
        self.pan = None;
    }

    /// Pixel x of the pointer while it is inside the chart.
    #[must_use]
    pub fn cursor_x(self) -> Option<f64> {
        self.cursor_x
    }

    pub fn on_pointer_move(&mut self, x: f64) {
        self.cursor_x = Some(x);
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor_x = None;
    }
}
