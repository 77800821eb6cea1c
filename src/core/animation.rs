use serde::{Deserialize, Serialize};

/// Timing curve applied to normalized tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Maps progress in `[0, 1]` onto eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TweenState {
    #[default]
    Idle,
    Running,
    Cancelled,
    Completed,
}

/// Two-channel interpolation polled once per frame.
///
/// Used for both the viewport range (`[min_x, max_x]`) and the chart extremes
/// (`[min_y, max_y]`). The tween never schedules itself: the frame scheduler
/// advances it with the elapsed milliseconds of each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    from: [f64; 2],
    to: [f64; 2],
    value: [f64; 2],
    elapsed_ms: f64,
    duration_ms: f64,
    easing: Easing,
    state: TweenState,
}

impl Default for Tween {
    fn default() -> Self {
        Self {
            from: [0.0; 2],
            to: [0.0; 2],
            value: [0.0; 2],
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            easing: Easing::default(),
            state: TweenState::Idle,
        }
    }
}

impl Tween {
    /// Starts a fresh interpolation from `from` to `to`.
    ///
    /// A non-positive duration completes immediately.
    #[must_use]
    pub fn start(from: [f64; 2], to: [f64; 2], duration_ms: f64, easing: Easing) -> Self {
        let mut tween = Self {
            from,
            to,
            value: from,
            elapsed_ms: 0.0,
            duration_ms: duration_ms.max(0.0),
            easing,
            state: TweenState::Running,
        };
        if tween.duration_ms <= 0.0 {
            tween.value = to;
            tween.state = TweenState::Completed;
        }
        tween
    }

    #[must_use]
    pub fn state(&self) -> TweenState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TweenState::Running
    }

    #[must_use]
    pub fn value(&self) -> [f64; 2] {
        self.value
    }

    #[must_use]
    pub fn target(&self) -> [f64; 2] {
        self.to
    }

    /// Advances the tween and returns the interpolated value.
    pub fn update(&mut self, delta_ms: f64) -> [f64; 2] {
        if self.state != TweenState::Running {
            return self.value;
        }

        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.value = self.to;
            self.state = TweenState::Completed;
            return self.value;
        }

        let eased = self.easing.apply(self.elapsed_ms / self.duration_ms);
        for channel in 0..2 {
            self.value[channel] =
                self.from[channel] + (self.to[channel] - self.from[channel]) * eased;
        }
        self.value
    }

    /// Moves the target of a running tween without a jump in the current value.
    ///
    /// The start point is rebased so the eased curve passes through the
    /// current value at the current progress and still lands on `target` when
    /// the original duration elapses.
    pub fn retarget(&mut self, target: [f64; 2]) {
        if self.state != TweenState::Running {
            return;
        }

        let eased = self.easing.apply(self.elapsed_ms / self.duration_ms);
        self.to = target;
        if eased >= 1.0 - f64::EPSILON {
            self.from = self.value;
            self.elapsed_ms = 0.0;
            return;
        }
        for channel in 0..2 {
            self.from[channel] = (self.value[channel] - target[channel] * eased) / (1.0 - eased);
        }
    }

    pub fn cancel(&mut self) {
        if self.state == TweenState::Running {
            self.state = TweenState::Cancelled;
        }
    }
}
