use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::animation::{Easing, Tween};

/// Extremes of `values[start..=end]` widened to always include zero.
///
/// Returns `(0, 0)` for an empty or out-of-bounds range.
#[must_use]
pub fn zero_anchored_extremes(values: &[f64], start: usize, end: usize) -> (f64, f64) {
    if values.is_empty() || start > end || start >= values.len() {
        return (0.0, 0.0);
    }
    let end = end.min(values.len() - 1);

    values[start..=end]
        .iter()
        .filter(|value| value.is_finite())
        .fold((0.0_f64, 0.0_f64), |(min, max), value| {
            (min.min(*value), max.max(*value))
        })
}

/// Timing of the vertical rescale animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremaAnimation {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for ExtremaAnimation {
    fn default() -> Self {
        Self {
            duration_ms: 300.0,
            easing: Easing::EaseInOutQuad,
        }
    }
}

/// Chart-level target extremes and the animated pair used for projection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremaTracker {
    local: (f64, f64),
    current: Option<(f64, f64)>,
    animation: Option<Tween>,
    expanding: bool,
    timing: ExtremaAnimation,
}

impl ExtremaTracker {
    #[must_use]
    pub fn new(timing: ExtremaAnimation) -> Self {
        Self {
            local: (0.0, 0.0),
            current: None,
            animation: None,
            expanding: false,
            timing,
        }
    }

    /// Target extremes of the currently visible data.
    #[must_use]
    pub fn local(&self) -> (f64, f64) {
        self.local
    }

    /// Animated extremes; equals [`Self::local`] once no animation runs.
    #[must_use]
    pub fn current(&self) -> (f64, f64) {
        self.current.unwrap_or(self.local)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(Tween::is_running)
    }

    /// Folds per-series extremes into a new chart-level target.
    ///
    /// The first call seeds the animated pair directly. Later changes retarget
    /// the running animation: same direction patches the target in place, a
    /// direction flip restarts from the current value. Returns `true` when
    /// the target changed (always on the seeding call).
    pub fn recompute<I>(&mut self, visible_series_extremes: I) -> bool
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let next = visible_series_extremes
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(min, max), (series_min, series_max)| {
                (min.min(series_min), max.max(series_max))
            });

        let Some(current) = self.current else {
            self.local = next;
            self.current = Some(next);
            return true;
        };

        if next == self.local {
            return false;
        }
        self.local = next;

        let expanding = span(current) < span(next);
        match self.animation.as_mut() {
            Some(tween) if tween.is_running() && expanding == self.expanding => {
                trace!(min = next.0, max = next.1, "patch extrema animation");
                tween.retarget([next.0, next.1]);
            }
            _ => {
                if let Some(tween) = self.animation.as_mut() {
                    tween.cancel();
                }
                trace!(
                    from_min = current.0,
                    from_max = current.1,
                    to_min = next.0,
                    to_max = next.1,
                    expanding,
                    "start extrema animation"
                );
                self.expanding = expanding;
                self.animation = Some(Tween::start(
                    [current.0, current.1],
                    [next.0, next.1],
                    self.timing.duration_ms,
                    self.timing.easing,
                ));
                self.sync_current_from_animation();
            }
        }
        true
    }

    /// Advances the running animation. Returns `true` when `current` moved.
    pub fn step(&mut self, delta_ms: f64) -> bool {
        let Some(tween) = self.animation.as_mut() else {
            return false;
        };
        if !tween.is_running() {
            self.animation = None;
            return false;
        }

        tween.update(delta_ms);
        self.sync_current_from_animation();
        if self
            .animation
            .as_ref()
            .is_some_and(|tween| !tween.is_running())
        {
            self.animation = None;
        }
        true
    }

    /// Jumps straight to the target, dropping any animation.
    pub fn snap_to_local(&mut self) {
        if let Some(tween) = self.animation.as_mut() {
            tween.cancel();
        }
        self.animation = None;
        self.current = Some(self.local);
    }

    fn sync_current_from_animation(&mut self) {
        if let Some(tween) = &self.animation {
            let [min, max] = tween.value();
            self.current = Some(if min <= max { (min, max) } else { (max, min) });
        }
    }
}

fn span(extremes: (f64, f64)) -> f64 {
    extremes.1 - extremes.0
}
