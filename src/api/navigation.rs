use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ChartRole, RangeAnimationOptions, RangeOptions, Tween};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartEvent;
use crate::render::Renderer;

use super::ChartEngine;

/// Handle of the navigator selection currently being dragged.
///
/// The minimum selection width is enforced by moving the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NavigationSide {
    Left,
    #[default]
    Right,
}

/// Fractional `[0, 1]` selection of the navigator over the whole domain.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    range: (f64, f64),
    min_distance: f64,
    side: NavigationSide,
    animation: Option<Tween>,
    timing: RangeAnimationOptions,
}

impl NavigationState {
    #[must_use]
    pub fn new(range: (f64, f64), min_distance: f64, timing: RangeAnimationOptions) -> Self {
        let mut state = Self {
            range: (0.0, 1.0),
            min_distance: min_distance.clamp(0.0, 1.0),
            side: NavigationSide::Right,
            animation: None,
            timing,
        };
        state.range = state.clamp(range.0, range.1, false);
        state
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn side(&self) -> NavigationSide {
        self.side
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.as_ref().is_some_and(Tween::is_running)
    }

    /// Clamps a requested selection into `[0, 1]` and widens it to the
    /// minimum distance on the side opposite the dragged handle.
    ///
    /// With `preserve_distance` the requested width (itself clamped to
    /// `[min_distance, 1]`) is kept, which is what a whole-window drag wants.
    #[must_use]
    pub fn clamp(&self, min: f64, max: f64, preserve_distance: bool) -> (f64, f64) {
        let min = if min.is_nan() { 0.0 } else { min };
        let max = if max.is_nan() { 1.0 } else { max };
        let preserved = (max - min).clamp(self.min_distance, 1.0);

        let mut min = min.clamp(0.0, 1.0);
        let mut max = max.clamp(0.0, 1.0);
        let min_distance = if preserve_distance {
            preserved
        } else {
            self.min_distance
        };

        if max - min < min_distance {
            match self.side {
                NavigationSide::Right => {
                    if max - min_distance >= 0.0 {
                        min = max - min_distance;
                    } else {
                        min = 0.0;
                        max = min_distance;
                    }
                }
                NavigationSide::Left => {
                    if min + min_distance <= 1.0 {
                        max = min + min_distance;
                    } else {
                        max = 1.0;
                        min = 1.0 - min_distance;
                    }
                }
            }
        }
        (min, max)
    }

    fn cancel_animation(&mut self) {
        if let Some(tween) = self.animation.as_mut() {
            tween.cancel();
        }
        self.animation = None;
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn navigation_range(&self) -> Option<(f64, f64)> {
        self.navigation.as_ref().map(NavigationState::range)
    }

    pub fn set_navigation_side(&mut self, side: NavigationSide) -> ChartResult<()> {
        self.navigation_mut()?.side = side;
        Ok(())
    }

    /// Sets the navigator selection and moves the main chart to match.
    pub fn set_navigation_range(&mut self, min: f64, max: f64) -> ChartResult<()> {
        let navigation = self.navigation_mut()?;
        navigation.cancel_animation();
        let range = navigation.clamp(min, max, false);
        self.apply_navigation_range(range);
        Ok(())
    }

    /// Drags the whole selection window by `delta` (a fraction of the
    /// navigator width) from where it was at drag start.
    pub fn drag_navigation_window(&mut self, origin: (f64, f64), delta: f64) -> ChartResult<()> {
        let navigation = self.navigation_mut()?;
        navigation.cancel_animation();
        let range = navigation.clamp(origin.0 + delta, origin.1 + delta, true);
        self.apply_navigation_range(range);
        Ok(())
    }

    /// Animates the selection. A running selection animation is retargeted.
    pub fn animate_navigation_range_to(&mut self, min: f64, max: f64) -> ChartResult<()> {
        let navigation = self.navigation_mut()?;
        let (target_min, target_max) = navigation.clamp(min, max, false);
        match navigation.animation.as_mut().filter(|tween| tween.is_running()) {
            Some(tween) => tween.retarget([target_min, target_max]),
            None => {
                let from = [navigation.range.0, navigation.range.1];
                let timing = navigation.timing;
                navigation.animation = Some(Tween::start(
                    from,
                    [target_min, target_max],
                    timing.duration_ms,
                    timing.easing,
                ));
            }
        }
        debug!(min = target_min, max = target_max, "animate navigation range");
        Ok(())
    }

    /// Advances the selection animation. Returns whether the selection moved.
    pub(super) fn step_navigation(&mut self, delta_ms: f64) -> bool {
        let Some(navigation) = self.navigation.as_mut() else {
            return false;
        };
        let Some(tween) = navigation.animation.as_mut() else {
            return false;
        };

        let [min, max] = tween.update(delta_ms);
        if !tween.is_running() {
            navigation.animation = None;
        }
        self.apply_navigation_range((min, max));
        true
    }

    /// Maps a fractional selection onto the main chart's domain, padded so
    /// the selection edges land on the data rather than under the padding.
    #[must_use]
    pub fn resolve_navigation_range(&self, min: f64, max: f64) -> (f64, f64) {
        let (global_min, global_max) = self.main.viewport().global_range();
        let distance = global_max - global_min;
        let min_x = global_min + min * distance;
        let max_x = global_min + max * distance;
        let padding = self.main.viewport().padding_for(min_x, max_x);
        (min_x - padding, max_x + padding)
    }

    fn apply_navigation_range(&mut self, range: (f64, f64)) {
        if let Some(navigation) = self.navigation.as_mut() {
            navigation.range = range;
        }
        let (min_x, max_x) = self.resolve_navigation_range(range.0, range.1);
        self.main.set_range(min_x, max_x, RangeOptions::default());

        self.emit_event(ChartEvent::NavigationRangeChanged {
            min: range.0,
            max: range.1,
        });
        self.emit_range_changed(ChartRole::Main);
    }

    fn navigation_mut(&mut self) -> ChartResult<&mut NavigationState> {
        self.navigation
            .as_mut()
            .ok_or_else(|| ChartError::InvalidData("engine has no navigator".to_owned()))
    }
}
