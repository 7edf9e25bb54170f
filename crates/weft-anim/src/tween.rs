#![forbid(unsafe_code)]

//! Fixed-duration progress animation.

use std::time::Duration;

use crate::easing::{EasingFn, linear};
use crate::Animation;

/// A fixed-duration animation whose value is eased progress in [0.0, 1.0].
///
/// # Invariants
///
/// 1. `value()` is `easing(elapsed / duration)` with the ratio clamped to
///    [0.0, 1.0].
/// 2. A zero duration is clamped to 1ns so the ratio is well-defined; any
///    positive tick then completes it.
/// 3. Elapsed time accumulates saturating; `overshoot()` reports the time
///    advanced past the duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    elapsed: Duration,
    duration: Duration,
    easing: EasingFn,
}

impl Tween {
    /// Create a tween over `duration` with linear easing.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: if duration.is_zero() {
                Duration::from_nanos(1)
            } else {
                duration
            },
            easing: linear,
        }
    }

    /// Set the easing function (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Total duration.
    #[inline]
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Elapsed animation time, uncapped.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Raw (un-eased) progress in [0.0, 1.0].
    #[must_use]
    pub fn progress(&self) -> f32 {
        let t = self.elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (t as f32).clamp(0.0, 1.0)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        self.elapsed.saturating_sub(self.duration)
    }
}
