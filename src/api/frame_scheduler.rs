use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PendingTopic;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::ChartView;

/// What one tick of one view did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub range_changed: bool,
    pub indexes_changed: bool,
    pub extrema_changed: bool,
    pub extrema_animating: bool,
    /// Point count of the new decimation plan, when one was made.
    pub decimated_points: Option<usize>,
    pub projected: bool,
    pub paths_updated: usize,
    pub cursor_updated: bool,
}

impl FrameReport {
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::default()
    }
}

/// Per-tick orchestration of one [`ChartView`].
///
/// Work runs in a fixed order: range, extremes, decimation, projection with
/// surface hand-off, cursor. A view with nothing pending and no running
/// animation is left untouched.
pub struct FrameScheduler;

impl FrameScheduler {
    pub fn tick<R: Renderer>(
        view: &mut ChartView,
        delta_ms: f64,
        renderer: &mut R,
    ) -> ChartResult<FrameReport> {
        if !view.has_pending_work() {
            return Ok(FrameReport::default());
        }
        let delta_ms = if delta_ms.is_finite() {
            delta_ms.max(0.0)
        } else {
            0.0
        };
        let mut report = FrameReport::default();

        Self::advance_range(view, delta_ms, &mut report);
        Self::advance_extrema(view, delta_ms, &mut report);

        if view.viewport_mut().take_pending(PendingTopic::Decimation) {
            report.decimated_points = Some(view.decimate());
            view.viewport_mut().mark(PendingTopic::Positions);
        }

        if view.viewport_mut().take_pending(PendingTopic::Positions) {
            view.refresh_projection();
            report.projected = true;
            report.paths_updated = view.flush_paths(renderer)?;
        }

        if view.viewport_mut().take_pending(PendingTopic::Cursor) {
            report.cursor_updated = view.flush_cursor(renderer)?;
        }

        trace!(
            chart = view.id().raw(),
            delta_ms,
            range_changed = report.range_changed,
            extrema_animating = report.extrema_animating,
            paths_updated = report.paths_updated,
            "frame tick"
        );
        Ok(report)
    }

    fn advance_range(view: &mut ChartView, delta_ms: f64, report: &mut FrameReport) {
        let viewport = view.viewport_mut();
        let change = match viewport.step_range_animation(delta_ms) {
            Some(change) => {
                viewport.take_pending(PendingTopic::RangeRefresh);
                Some(change)
            }
            None if viewport.take_pending(PendingTopic::RangeRefresh) => {
                Some(viewport.refresh_range())
            }
            None => None,
        };

        if let Some(change) = change {
            report.range_changed = true;
            report.indexes_changed = change.indexes_changed;
        }
    }

    fn advance_extrema(view: &mut ChartView, delta_ms: f64, report: &mut FrameReport) {
        let stepped = view.extrema_mut().step(delta_ms);
        let retargeted =
            view.viewport_mut().take_pending(PendingTopic::Extrema) && view.refresh_extrema();

        if stepped || retargeted {
            view.viewport_mut().mark(PendingTopic::Positions);
        }
        report.extrema_changed = stepped || retargeted;
        report.extrema_animating = view.extrema().is_animating();
    }
}
