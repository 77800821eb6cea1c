use crate::core::{Series, Viewport};
use crate::interaction::InteractionMode;
use crate::render::Renderer;

use super::{ChartEngine, ChartEngineConfig, ChartView};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    #[must_use]
    pub fn main_view(&self) -> &ChartView {
        &self.main
    }

    #[must_use]
    pub fn navigator_view(&self) -> Option<&ChartView> {
        self.navigator.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Visible domain range of the main chart, padding included.
    #[must_use]
    pub fn visible_range(&self) -> (f64, f64) {
        self.main.viewport().range()
    }

    /// Inclusive axis index bracket of the main chart.
    #[must_use]
    pub fn visible_indexes(&self) -> (usize, usize) {
        self.main.viewport().indexes()
    }

    /// Animated extremes the main chart currently projects with.
    #[must_use]
    pub fn current_extremes(&self) -> (f64, f64) {
        self.main.extrema().current()
    }

    /// Extremes the main chart is animating towards.
    #[must_use]
    pub fn target_extremes(&self) -> (f64, f64) {
        self.main.extrema().local()
    }

    #[must_use]
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.main.series_by_label(label)
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// True while any range, extrema or selection animation is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        let view_animating = |view: &ChartView| {
            view.viewport().is_animating() || view.extrema().is_animating()
        };
        view_animating(&self.main)
            || self.navigator.as_ref().is_some_and(view_animating)
            || self
                .navigation
                .as_ref()
                .is_some_and(|navigation| navigation.is_animating())
    }
}
