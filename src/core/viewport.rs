use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::animation::{Easing, Tween};
use crate::core::pending::{PendingTopic, PendingWork};
use crate::core::projection::domain_per_pixel;
use crate::core::range_index::{SearchOrder, bracket};

/// Options for an immediate range change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RangeOptions {
    /// Leave the visible extremes untouched even if the bracket moves.
    pub skip_extremes: bool,
    /// Keep the edge padding ratios of the previous range.
    pub preserve_padding: bool,
}

/// Options for an animated range change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeAnimationOptions {
    pub duration_ms: f64,
    pub easing: Easing,
    pub preserve_padding: bool,
}

impl Default for RangeAnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: Easing::EaseInOutQuad,
            preserve_padding: false,
        }
    }
}

/// Outcome of one accepted range change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeChange {
    pub indexes_changed: bool,
    pub extrema_requested: bool,
}

/// Owns the visible domain range of one chart view and everything derived
/// from it: the index bracket into the shared axis, the pixel scale and the
/// edge padding that gives the "soft stop" at data boundaries.
#[derive(Debug, Clone)]
pub struct ViewportController {
    axis: Arc<[f64]>,
    range: (f64, f64),
    indexes: Option<(usize, usize)>,
    domain_per_pixel: f64,
    render_width: f64,
    padding_px: f64,
    left_padding_scale: f64,
    right_padding_scale: f64,
    range_animation: Option<Tween>,
    pending: PendingWork,
}

impl ViewportController {
    #[must_use]
    pub fn new(axis: Arc<[f64]>, render_width: f64, padding_px: f64) -> Self {
        let range = match (axis.first(), axis.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => (0.0, 0.0),
        };
        Self {
            axis,
            range,
            indexes: None,
            domain_per_pixel: domain_per_pixel(range, render_width),
            render_width,
            padding_px: padding_px.max(0.0),
            left_padding_scale: 0.0,
            right_padding_scale: 0.0,
            range_animation: None,
            pending: PendingWork::none(),
        }
    }

    #[must_use]
    pub fn axis(&self) -> &Arc<[f64]> {
        &self.axis
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Inclusive bracket of axis indices inside the visible range.
    #[must_use]
    pub fn indexes(&self) -> (usize, usize) {
        self.indexes.unwrap_or((0, 0))
    }

    /// Bracket widened by one index on each side for seam continuity.
    #[must_use]
    pub fn expanded_indexes(&self) -> (usize, usize) {
        let (start, end) = self.indexes();
        let last = self.axis.len().saturating_sub(1);
        (start.saturating_sub(1), (end + 1).min(last))
    }

    /// Domain units covered by one pixel of the render width.
    #[must_use]
    pub fn domain_per_pixel(&self) -> f64 {
        self.domain_per_pixel
    }

    #[must_use]
    pub fn render_width(&self) -> f64 {
        self.render_width
    }

    #[must_use]
    pub fn padding_scales(&self) -> (f64, f64) {
        (self.left_padding_scale, self.right_padding_scale)
    }

    #[must_use]
    pub fn global_range(&self) -> (f64, f64) {
        match (self.axis.first(), self.axis.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => (0.0, 0.0),
        }
    }

    #[must_use]
    pub fn pending(&self) -> PendingWork {
        self.pending
    }

    pub fn mark(&mut self, topic: PendingTopic) {
        self.pending.insert(topic);
    }

    pub fn take_pending(&mut self, topic: PendingTopic) -> bool {
        self.pending.take(topic)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.range_animation.as_ref().is_some_and(Tween::is_running)
    }

    /// Domain padding added on each side of `(min, max)` at full padding scale.
    #[must_use]
    pub fn padding_for(&self, min: f64, max: f64) -> f64 {
        domain_per_pixel((min, max), self.render_width) * self.padding_px
    }

    /// Translates a horizontal pixel offset into a domain value.
    #[must_use]
    pub fn pixel_to_domain(&self, pixel_x: f64) -> f64 {
        self.range.0 + pixel_x * self.domain_per_pixel
    }

    /// Applies an absolute range change.
    pub fn set_range(&mut self, min: f64, max: f64, options: RangeOptions) -> RangeChange {
        let (new_min, new_max) = self.clamp_range(min, max, options.preserve_padding);
        self.range = (new_min, new_max);
        self.domain_per_pixel = domain_per_pixel(self.range, self.render_width);

        let previous = self.indexes;
        let next = self.compute_indexes();
        self.indexes = Some(next);

        let indexes_changed = previous != Some(next);
        if indexes_changed {
            self.pending.insert(PendingTopic::Decimation);
        }
        let extrema_requested = indexes_changed && !options.skip_extremes;
        if extrema_requested {
            self.pending.insert(PendingTopic::Extrema);
        }
        self.pending.insert(PendingTopic::Positions);
        self.pending.insert(PendingTopic::Cursor);

        trace!(
            min = new_min,
            max = new_max,
            start_index = next.0,
            end_index = next.1,
            indexes_changed,
            "viewport range applied"
        );

        RangeChange {
            indexes_changed,
            extrema_requested,
        }
    }

    /// Range change during a continuous drag or zoom: padding ratios stay as
    /// they were when the gesture started.
    pub fn adjust_range(&mut self, min: f64, max: f64) -> RangeChange {
        self.set_range(
            min,
            max,
            RangeOptions {
                skip_extremes: false,
                preserve_padding: true,
            },
        )
    }

    /// Re-applies the current range, e.g. after the render width changed.
    pub fn refresh_range(&mut self) -> RangeChange {
        let (min, max) = self.range;
        self.set_range(
            min,
            max,
            RangeOptions {
                skip_extremes: true,
                preserve_padding: true,
            },
        )
    }

    /// Starts (or replaces) an animated transition to `(min, max)`.
    ///
    /// A transition already in flight is dropped and the new one starts from
    /// the currently displayed range. A zero duration lands on the next tick.
    pub fn animate_range_to(&mut self, min: f64, max: f64, options: RangeAnimationOptions) {
        let (target_min, target_max) = self.clamp_range(min, max, options.preserve_padding);
        if let Some(tween) = self.range_animation.as_mut() {
            tween.cancel();
        }
        debug!(
            from_min = self.range.0,
            from_max = self.range.1,
            to_min = target_min,
            to_max = target_max,
            duration_ms = options.duration_ms,
            "animate viewport range"
        );
        self.range_animation = Some(Tween::start(
            [self.range.0, self.range.1],
            [target_min, target_max],
            options.duration_ms,
            options.easing,
        ));
        self.pending.insert(PendingTopic::RangeRefresh);
    }

    pub fn cancel_range_animation(&mut self) {
        if let Some(tween) = self.range_animation.as_mut() {
            tween.cancel();
        }
        self.range_animation = None;
    }

    /// Advances a running range animation and applies its value.
    pub fn step_range_animation(&mut self, delta_ms: f64) -> Option<RangeChange> {
        let tween = self.range_animation.as_mut()?;
        let [min, max] = tween.update(delta_ms);
        if !tween.is_running() {
            self.range_animation = None;
        }
        Some(self.set_range(
            min,
            max,
            RangeOptions {
                skip_extremes: false,
                preserve_padding: true,
            },
        ))
    }

    /// Updates the render width and queues a range refresh for the next tick.
    pub fn set_render_width(&mut self, width: f64) {
        self.render_width = width;
        self.domain_per_pixel = domain_per_pixel(self.range, width);
        self.pending.insert(PendingTopic::RangeRefresh);
        self.pending.insert(PendingTopic::Decimation);
        self.pending.insert(PendingTopic::Positions);
        self.pending.insert(PendingTopic::Cursor);
    }

    /// Clamps a requested range to the axis and re-applies edge padding.
    ///
    /// The padding granted on each side is proportional to how far past the
    /// data edge the caller asked to go, capped at the full padding.
    pub fn clamp_range(&mut self, min: f64, max: f64, preserve_padding: bool) -> (f64, f64) {
        let min = if min.is_nan() { f64::NEG_INFINITY } else { min };
        let max = if max.is_nan() { f64::INFINITY } else { max };
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        if self.axis.is_empty() {
            return (min, max);
        }
        let (global_min, global_max) = self.global_range();

        let mut new_min = min.clamp(global_min, global_max);
        let mut new_max = max.clamp(global_min, global_max);

        let padding = self.padding_for(new_min, new_max);
        if padding > 0.0 {
            if !preserve_padding {
                self.left_padding_scale = (new_min - min).clamp(0.0, padding) / padding;
                self.right_padding_scale = (max - new_max).clamp(0.0, padding) / padding;
            }
            if self.left_padding_scale > 0.0 {
                new_min -= padding * self.left_padding_scale;
            }
            if self.right_padding_scale > 0.0 {
                new_max += padding * self.right_padding_scale;
            }
        }

        (new_min, new_max)
    }

    fn compute_indexes(&self) -> (usize, usize) {
        let len = self.axis.len();
        if len == 0 {
            return (0, 0);
        }
        let last = (len - 1) as isize;
        let start = bracket(&self.axis, self.range.0, SearchOrder::Ascending).upper;
        let end = bracket(&self.axis, self.range.1, SearchOrder::Ascending).lower;
        let start = start.clamp(0, last) as usize;
        let end = end.clamp(0, last) as usize;
        if start <= end { (start, end) } else { (end, start) }
    }
}
