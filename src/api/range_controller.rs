use crate::core::{ChartRole, RangeAnimationOptions, RangeChange, RangeOptions};
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Sets the main chart range immediately, dropping any range animation.
    pub fn set_viewport_range(&mut self, min: f64, max: f64, options: RangeOptions) -> RangeChange {
        let change = self.main.set_range(min, max, options);
        self.emit_range_changed(ChartRole::Main);
        change
    }

    /// Animates the main chart range with the configured timing.
    pub fn animate_viewport_range_to(&mut self, min: f64, max: f64) {
        let options = self.config.range_animation;
        self.animate_viewport_range_with(min, max, options);
    }

    /// Animates the main chart range. A running range animation is replaced
    /// and the new one starts from the range currently shown.
    pub fn animate_viewport_range_with(
        &mut self,
        min: f64,
        max: f64,
        options: RangeAnimationOptions,
    ) {
        self.main.animate_range_to(min, max, options);
    }
}
