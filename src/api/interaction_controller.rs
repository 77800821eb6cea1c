use tracing::trace;

use crate::core::{ChartRole, RangeChange};
use crate::interaction::PanOrigin;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Starts a drag on the main chart at `pixel_x`.
    pub fn pan_start(&mut self, pixel_x: f64) {
        self.main.viewport_mut().cancel_range_animation();
        let viewport = self.main.viewport();
        self.interaction.on_pan_start(PanOrigin {
            pixel_x,
            range: viewport.range(),
            domain_per_pixel: viewport.domain_per_pixel(),
        });
    }

    /// Follows the drag. Padding ratios stay as they were at drag start and
    /// the window keeps its width when it reaches either end of the data.
    pub fn pan_move(&mut self, pixel_x: f64) -> Option<RangeChange> {
        let origin = self.interaction.pan_origin()?;
        let bounds = self.main.viewport().global_range();
        let (min, max) = origin.dragged_range(pixel_x, bounds);
        trace!(pixel_x, min, max, "pan move");
        let change = self.main.adjust_range(min, max);
        self.emit_range_changed(ChartRole::Main);
        Some(change)
    }

    pub fn pan_end(&mut self) {
        self.interaction.on_pan_end();
    }

    /// Zooms the main chart around `pixel_x`. `factor < 1` zooms in.
    ///
    /// The domain value under the pointer stays under the pointer; the
    /// change is animated with the configured range timing.
    pub fn zoom_at(&mut self, pixel_x: f64, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        let viewport = self.main.viewport();
        let anchor = viewport.pixel_to_domain(pixel_x);
        let (min, max) = viewport.range();
        self.animate_viewport_range_to(
            anchor - (anchor - min) * factor,
            anchor + (max - anchor) * factor,
        );
    }
}
