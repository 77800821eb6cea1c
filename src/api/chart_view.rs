use std::sync::Arc;

use tracing::{debug, trace};

use crate::core::{
    ChartId, ChartRoleConfig, Dataset, DecimationParams, DecimationPlan, ExtremaTracker,
    InitialRange, PendingTopic, Projection, RangeAnimationOptions, RangeChange, RangeOptions,
    Series, ViewportController, nearest_index, plan_decimation,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, PathData, PathHandle, PathKind, PathStyle, Renderer};

use super::ChartEngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SurfacePath {
    handle: PathHandle,
    visible: bool,
}

/// One chart area: its series, viewport, extremes, decimation plan and the
/// surface paths it draws into.
///
/// The main chart and the navigator are both `ChartView`s over the same
/// dataset, differing only in their [`ChartRoleConfig`].
#[derive(Debug, Clone)]
pub struct ChartView {
    id: ChartId,
    role: ChartRoleConfig,
    series: Vec<Series>,
    viewport: ViewportController,
    extrema: ExtremaTracker,
    decimation: DecimationParams,
    plan: DecimationPlan,
    projection: Projection,
    series_paths: Vec<SurfacePath>,
    cursor_path: Option<SurfacePath>,
    cursor_index: Option<usize>,
}

impl ChartView {
    /// Builds a view showing the role's initial range.
    ///
    /// Every recomputation is left pending, so the first scheduler tick
    /// produces the complete first frame.
    #[must_use]
    pub fn new(
        id: ChartId,
        role: ChartRoleConfig,
        dataset: &Dataset,
        config: &ChartEngineConfig,
    ) -> Self {
        let viewport = ViewportController::new(
            Arc::clone(dataset.axis()),
            f64::from(config.viewport.width),
            config.padding_px,
        );
        let mut view = Self {
            id,
            role,
            series: dataset.series().iter().cloned().map(Series::new).collect(),
            viewport,
            extrema: ExtremaTracker::new(config.extrema_animation),
            decimation: DecimationParams {
                grouping_pixels: config.grouping_pixels,
                domain_per_pixel: 1.0,
                small_set_threshold: role.small_set_threshold,
                boost_limit: config.boost_limit,
            },
            plan: DecimationPlan::default(),
            projection: Projection::default(),
            series_paths: Vec::new(),
            cursor_path: None,
            cursor_index: None,
        };

        let (min, max) = view.initial_range();
        view.viewport.set_range(min, max, RangeOptions::default());
        view.viewport.mark(PendingTopic::Extrema);
        view.viewport.mark(PendingTopic::Decimation);
        view
    }

    fn initial_range(&self) -> (f64, f64) {
        let (global_min, global_max) = self.viewport.global_range();
        match self.role.initial_range {
            InitialRange::Full => (global_min, global_max),
            InitialRange::TrailingShare(share) => {
                let start = global_max - (global_max - global_min) * share;
                let padding = self.viewport.padding_for(start, global_max);
                (start - padding, global_max + padding)
            }
        }
    }

    #[must_use]
    pub fn id(&self) -> ChartId {
        self.id
    }

    #[must_use]
    pub fn role(&self) -> ChartRoleConfig {
        self.role
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn series_by_label(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|series| series.label() == label)
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn extrema(&self) -> &ExtremaTracker {
        &self.extrema
    }

    #[must_use]
    pub fn plan(&self) -> &DecimationPlan {
        &self.plan
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    #[must_use]
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor_index
    }

    /// Handle of the surface path drawing `label`, once paths exist.
    #[must_use]
    pub fn path_handle(&self, label: &str) -> Option<PathHandle> {
        let position = self
            .series
            .iter()
            .position(|series| series.label() == label)?;
        self.series_paths.get(position).map(|path| path.handle)
    }

    #[must_use]
    pub fn cursor_path_handle(&self) -> Option<PathHandle> {
        self.cursor_path.map(|path| path.handle)
    }

    #[must_use]
    pub fn visible_series_count(&self) -> usize {
        self.series.iter().filter(|series| series.is_visible()).count()
    }

    /// True when a scheduler tick would do anything.
    #[must_use]
    pub fn has_pending_work(&self) -> bool {
        !self.viewport.pending().is_none()
            || self.viewport.is_animating()
            || self.extrema.is_animating()
    }

    pub fn set_range(&mut self, min: f64, max: f64, options: RangeOptions) -> RangeChange {
        self.viewport.cancel_range_animation();
        self.viewport.set_range(min, max, options)
    }

    pub fn adjust_range(&mut self, min: f64, max: f64) -> RangeChange {
        self.viewport.cancel_range_animation();
        self.viewport.adjust_range(min, max)
    }

    pub fn animate_range_to(&mut self, min: f64, max: f64, options: RangeAnimationOptions) {
        self.viewport.animate_range_to(min, max, options);
    }

    pub fn set_render_width(&mut self, width: f64) {
        self.viewport.set_render_width(width);
    }

    /// Shows or hides one series. Returns whether visibility changed.
    pub fn set_series_visible(&mut self, label: &str, visible: bool) -> ChartResult<bool> {
        let series = self
            .series
            .iter_mut()
            .find(|series| series.label() == label)
            .ok_or_else(|| ChartError::UnknownSeries(label.to_owned()))?;

        let changed = series.set_visible(visible);
        if changed {
            self.viewport.mark(PendingTopic::Extrema);
            self.viewport.mark(PendingTopic::Positions);
            self.viewport.mark(PendingTopic::Cursor);
        }
        Ok(changed)
    }

    /// Resolves the axis index under `pixel_x` and keeps it as the cursor.
    pub fn move_cursor(&mut self, pixel_x: f64) -> Option<usize> {
        if !self.role.cursor_enabled {
            return None;
        }
        let domain_x = self.viewport.pixel_to_domain(pixel_x);
        let index = nearest_index(self.viewport.axis(), domain_x, self.viewport.range());
        if index != self.cursor_index {
            trace!(pixel_x, index = ?index, "cursor moved");
        }
        self.cursor_index = index;
        self.viewport.mark(PendingTopic::Cursor);
        index
    }

    pub fn clear_cursor(&mut self) {
        if self.cursor_index.take().is_some() {
            self.viewport.mark(PendingTopic::Cursor);
        }
    }

    pub(crate) fn viewport_mut(&mut self) -> &mut ViewportController {
        &mut self.viewport
    }

    pub(crate) fn extrema_mut(&mut self) -> &mut ExtremaTracker {
        &mut self.extrema
    }

    /// Refreshes per-series extremes over the bracket and retargets the
    /// chart extremes. Returns whether the target changed.
    pub(crate) fn refresh_extrema(&mut self) -> bool {
        let (start, end) = self.viewport.indexes();
        for series in &mut self.series {
            series.update_local_extremes(start, end);
        }
        self.extrema.recompute(
            self.series
                .iter()
                .filter(|series| series.is_visible())
                .map(Series::local_extremes),
        )
    }

    /// Re-plans decimation for the current bracket and rebuilds every
    /// series' points from it.
    pub(crate) fn decimate(&mut self) -> usize {
        let (start, end) = self.viewport.expanded_indexes();
        let params = DecimationParams {
            domain_per_pixel: self.viewport.domain_per_pixel(),
            ..self.decimation
        };
        let axis = Arc::clone(self.viewport.axis());
        self.plan = plan_decimation(&axis, start, end, params);
        for series in &mut self.series {
            series.rebuild_points(&axis, &self.plan);
        }

        debug!(
            chart = self.id.raw(),
            start_index = start,
            end_index = end,
            points = self.plan.len(),
            "decimation planned"
        );
        self.plan.len()
    }

    /// Rebuilds the projection from the current range and animated extremes
    /// and re-projects every visible series.
    pub(crate) fn refresh_projection(&mut self) {
        self.projection = Projection::new(
            self.viewport.range(),
            self.viewport.render_width(),
            self.extrema.current(),
            self.role.height,
        );
        let projection = self.projection;

        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            self.series
                .par_iter_mut()
                .filter(|series| series.is_visible())
                .for_each(|series| projection.project_points(series.points_mut()));
        }
        #[cfg(not(feature = "parallel-projection"))]
        for series in self.series.iter_mut().filter(|series| series.is_visible()) {
            projection.project_points(series.points_mut());
        }

        for series in self.series.iter_mut().filter(|series| series.is_visible()) {
            series.request_path_update();
        }
    }

    /// Hands changed series geometry and visibility to the surface.
    /// Returns the number of paths whose geometry was replaced.
    pub(crate) fn flush_paths<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<usize> {
        self.ensure_paths(renderer)?;

        let mut updated = 0;
        for (series, path) in self.series.iter_mut().zip(self.series_paths.iter_mut()) {
            if path.visible != series.is_visible() {
                renderer.set_path_visible(path.handle, series.is_visible())?;
                path.visible = series.is_visible();
            }
            if series.is_visible() && series.needs_path_update() {
                renderer.update_path(path.handle, &PathData::from_render_points(series.points()))?;
                series.clear_path_update();
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Positions or hides the vertical cursor line. Returns whether the
    /// surface was touched.
    pub(crate) fn flush_cursor<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<bool> {
        self.ensure_paths(renderer)?;
        let Some(path) = self.cursor_path.as_mut() else {
            return Ok(false);
        };

        match self.cursor_index {
            Some(index) => {
                let x = self.projection.project_x(self.viewport.axis()[index]);
                renderer.update_path(path.handle, &PathData::vertical_line(x, self.role.height))?;
                if !path.visible {
                    renderer.set_path_visible(path.handle, true)?;
                    path.visible = true;
                }
            }
            None => {
                if path.visible {
                    renderer.set_path_visible(path.handle, false)?;
                    path.visible = false;
                }
            }
        }
        Ok(true)
    }

    fn ensure_paths<R: Renderer>(&mut self, renderer: &mut R) -> ChartResult<()> {
        if self.series_paths.len() == self.series.len() {
            return Ok(());
        }

        self.series_paths.clear();
        for series in &self.series {
            let handle = renderer.create_path(&PathStyle {
                chart_id: self.id,
                kind: PathKind::Series {
                    label: series.label().to_owned(),
                },
                color: series.color(),
                stroke_width: self.role.stroke_width,
                offset_y: self.role.offset_y,
            })?;
            self.series_paths.push(SurfacePath {
                handle,
                visible: true,
            });
        }

        if self.role.cursor_enabled && self.cursor_path.is_none() {
            let handle = renderer.create_path(&PathStyle {
                chart_id: self.id,
                kind: PathKind::Cursor,
                color: Color::CURSOR,
                stroke_width: 1.0,
                offset_y: self.role.offset_y,
            })?;
            renderer.set_path_visible(handle, false)?;
            self.cursor_path = Some(SurfacePath {
                handle,
                visible: false,
            });
        }

        debug!(
            chart = self.id.raw(),
            paths = self.series_paths.len(),
            cursor = self.cursor_path.is_some(),
            "surface paths created"
        );
        Ok(())
    }
}
