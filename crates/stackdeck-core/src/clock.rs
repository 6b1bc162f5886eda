#![forbid(unsafe_code)]

//! Frame clock: wall-clock deltas for driving [`Animation::tick`].
//!
//! Hosts call [`FrameClock::delta`] once per frame and feed the result to
//! the animator. Deltas are capped so a stalled frame (debugger, suspended
//! tab) does not teleport every card to its target.
//!
//! [`Animation::tick`]: crate::animation::Animation::tick

use std::time::Duration;

use web_time::Instant;

/// Largest delta handed out by default (two frames at 30fps).
pub const DEFAULT_MAX_DELTA: Duration = Duration::from_millis(66);

/// Monotonic per-frame delta source.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    max_delta: Duration,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock with [`DEFAULT_MAX_DELTA`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: None,
            max_delta: DEFAULT_MAX_DELTA,
        }
    }

    /// Set the delta cap (builder pattern). Zero disables the cap.
    #[must_use]
    pub fn max_delta(mut self, max_delta: Duration) -> Self {
        self.max_delta = max_delta;
        self
    }

    /// Time since the previous call, capped. The first call returns zero.
    pub fn delta(&mut self) -> Duration {
        self.delta_at(Instant::now())
    }

    /// Like [`FrameClock::delta`] with an explicit timestamp.
    pub fn delta_at(&mut self, now: Instant) -> Duration {
        let dt = self
            .last
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        self.last = Some(now);
        if self.max_delta.is_zero() {
            dt
        } else {
            dt.min(self.max_delta)
        }
    }

    /// Forget the previous timestamp; the next delta is zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_delta_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.delta_at(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn delta_measures_between_calls() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        assert_eq!(
            clock.delta_at(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        assert_eq!(
            clock.delta_at(start + Duration::from_secs(5)),
            DEFAULT_MAX_DELTA
        );
    }

    #[test]
    fn zero_cap_disables_capping() {
        let mut clock = FrameClock::new().max_delta(Duration::ZERO);
        let start = Instant::now();
        clock.delta_at(start);
        assert_eq!(
            clock.delta_at(start + Duration::from_secs(5)),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn reset_forgets_previous_timestamp() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.delta_at(start);
        clock.reset();
        assert_eq!(
            clock.delta_at(start + Duration::from_millis(40)),
            Duration::ZERO
        );
    }
}
