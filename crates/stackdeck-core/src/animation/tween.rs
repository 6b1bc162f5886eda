#![forbid(unsafe_code)]

//! Tween: a delayed, eased 0→1 progress over a fixed duration.
//!
//! A [`Tween`] is the building block the carousel animator uses for every
//! per-card move. It does not hold the values being interpolated; callers
//! combine [`Tween::value`] with [`lerp`].
//!
//! # Invariants
//!
//! 1. While `elapsed < delay`, `value()` is 0.0.
//! 2. `value()` reaches exactly 1.0 on completion, whatever the easing.
//! 3. A zero duration completes as soon as the delay has elapsed.
//!
//! # Failure Modes
//!
//! - Zero duration: treated as a step function, no division by zero.

use std::time::Duration;

use super::{Animation, EasingFn, linear};

/// Linear interpolation between `from` and `to` at `t`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Delayed, eased progress animation.
#[derive(Clone, Copy)]
pub struct Tween {
    delay: Duration,
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("delay", &self.delay)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

impl Tween {
    /// Create a linear tween with no delay.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            delay: Duration::ZERO,
            duration,
            elapsed: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing curve (builder pattern).
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Set a start delay (builder pattern).
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Configured duration, excluding delay.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Configured start delay.
    #[must_use]
    pub fn start_delay(&self) -> Duration {
        self.delay
    }

    /// Delay plus duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Linear (un-eased) progress in [0.0, 1.0].
    #[must_use]
    pub fn raw_progress(&self) -> f32 {
        if self.elapsed < self.delay {
            return 0.0;
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let active = self.elapsed - self.delay;
        (active.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    /// Time left until completion.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.total().saturating_sub(self.elapsed)
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.total()
    }

    fn value(&self) -> f32 {
        if self.is_complete() {
            return 1.0;
        }
        (self.easing)(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    fn overshoot(&self) -> Duration {
        if self.is_complete() {
            self.elapsed.saturating_sub(self.total())
        } else {
            Duration::ZERO
        }
    }
}
