use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    pub fn set_series_visible(&mut self, label: &str) -> ChartResult<()> {
        self.set_series_visibility(label, true).map(|_| ())
    }

    pub fn set_series_invisible(&mut self, label: &str) -> ChartResult<()> {
        self.set_series_visibility(label, false).map(|_| ())
    }

    /// Flips visibility and returns the new state.
    pub fn toggle_series(&mut self, label: &str) -> ChartResult<bool> {
        let visible = self
            .main
            .series_by_label(label)
            .map(|series| !series.is_visible())
            .ok_or_else(|| ChartError::UnknownSeries(label.to_owned()))?;
        self.set_series_visibility(label, visible)?;
        Ok(visible)
    }

    /// Applies visibility to the main chart and mirrors it on the navigator.
    /// Returns whether anything changed.
    ///
    /// Extremes are retargeted on the next update, so showing a series with
    /// larger values animates the vertical scale instead of jumping.
    pub fn set_series_visibility(&mut self, label: &str, visible: bool) -> ChartResult<bool> {
        let changed = self.main.set_series_visible(label, visible)?;
        if let Some(navigator) = self.navigator.as_mut() {
            navigator.set_series_visible(label, visible)?;
        }
        if !changed {
            return Ok(false);
        }

        debug!(label, visible, "series visibility changed");
        self.emit_event(ChartEvent::SeriesVisibilityChanged {
            label: label.to_owned(),
            visible,
        });
        Ok(true)
    }
}
