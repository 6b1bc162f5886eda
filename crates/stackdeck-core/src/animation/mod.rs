#![forbid(unsafe_code)]

//! Animation primitives.
//!
//! Every primitive implements [`Animation`]: it is advanced by explicit
//! `tick(dt)` calls and reports a normalized value. There is no internal
//! clock, which keeps every animation deterministic under test.
//!
//! # Invariants
//!
//! 1. `value()` is the eased progress, in [0.0, 1.0] for the monotonic curves
//!    shipped here.
//! 2. `is_complete()` never reverts to `false` without `reset()`.
//! 3. `overshoot()` is zero until the animation completes.

use std::time::Duration;

pub mod stagger;
pub mod tween;

pub use stagger::{StaggerMode, stagger_offsets};
pub use tween::{Tween, lerp};

/// An easing curve: maps linear progress in [0.0, 1.0] to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// A time-driven animation.
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation reached its end.
    fn is_complete(&self) -> bool;

    /// Current eased value.
    fn value(&self) -> f32;

    /// Rewind to the initial state.
    fn reset(&mut self);

    /// Time accumulated past the end of the animation.
    fn overshoot(&self) -> Duration {
        Duration::ZERO
    }
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn tick(&mut self, dt: Duration) {
        (**self).tick(dt);
    }

    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }

    fn value(&self) -> f32 {
        (**self).value()
    }

    fn reset(&mut self) {
        (**self).reset();
    }

    fn overshoot(&self) -> Duration {
        (**self).overshoot()
    }
}

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Identity curve.
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (accelerating).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (decelerating).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic S-curve.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv / 2.0
    }
}

/// Cubic ease-in.
#[inline]
pub fn ease_in_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Cubic ease-out. Close to the default GSAP "power1.out" feel.
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}
