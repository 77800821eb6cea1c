use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::extrema::zero_anchored_extremes;
use crate::core::{DecimationPlan, RenderPoint};
use crate::render::Color;

/// Identity and values of one y column.
///
/// Values are shared behind `Arc` so the main chart and the navigator can
/// hold their own `Series` state over the same data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    pub label: String,
    pub name: String,
    pub color: Color,
    pub values: Arc<[f64]>,
}

impl SeriesData {
    /// Creates a series whose display name equals its label.
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        let label = label.into();
        Self {
            name: label.clone(),
            label,
            color: Color::DEFAULT_SERIES,
            values: values.into(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Per-view series state: visibility, cached visible extremes and the points
/// of the current frame.
#[derive(Debug, Clone)]
pub struct Series {
    data: SeriesData,
    visible: bool,
    local_min_y: f64,
    local_max_y: f64,
    points: Vec<RenderPoint>,
    path_dirty: bool,
}

impl Series {
    #[must_use]
    pub fn new(data: SeriesData) -> Self {
        Self {
            data,
            visible: true,
            local_min_y: 0.0,
            local_max_y: 0.0,
            points: Vec::new(),
            path_dirty: true,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.data.label
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.data.name
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.data.color
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.data.values
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets visibility and reports whether it changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.path_dirty = true;
        true
    }

    #[must_use]
    pub fn local_extremes(&self) -> (f64, f64) {
        (self.local_min_y, self.local_max_y)
    }

    /// Recomputes the zero-anchored extremes over `[start, end]`.
    pub fn update_local_extremes(&mut self, start: usize, end: usize) {
        let (min, max) = zero_anchored_extremes(&self.data.values, start, end);
        self.local_min_y = min;
        self.local_max_y = max;
    }

    #[must_use]
    pub fn points(&self) -> &[RenderPoint] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut [RenderPoint] {
        &mut self.points
    }

    /// Rebuilds this frame's points from the chart-wide decimation plan.
    pub fn rebuild_points(&mut self, axis: &[f64], plan: &DecimationPlan) {
        plan.points_into(axis, &self.data.values, &mut self.points);
        self.path_dirty = true;
    }

    pub fn request_path_update(&mut self) {
        self.path_dirty = true;
    }

    #[must_use]
    pub fn needs_path_update(&self) -> bool {
        self.path_dirty
    }

    pub(crate) fn clear_path_update(&mut self) {
        self.path_dirty = false;
    }
}
