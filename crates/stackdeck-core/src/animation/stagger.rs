#![forbid(unsafe_code)]

//! Stagger: start offsets for a row of items animated together.
//!
//! [`stagger_offsets`] spreads `count` start times over
//! `(count - 1) * delay`, shaped by a [`StaggerMode`].

use std::time::Duration;

use super::{EasingFn, ease_in, ease_out, linear};

/// Distribution of start offsets across the staggered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StaggerMode {
    /// Equal spacing between successive starts.
    #[default]
    Linear,
    /// Starts bunch up early and spread out later.
    EaseIn,
    /// Starts spread out early and bunch up later.
    EaseOut,
}

impl StaggerMode {
    fn curve(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
        }
    }
}

/// Start offsets for `count` items, `delay` apart on average.
///
/// The first item always starts at zero and the last at
/// `(count - 1) * delay`, whatever the mode.
#[must_use]
pub fn stagger_offsets(count: usize, delay: Duration, mode: StaggerMode) -> Vec<Duration> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 || delay.is_zero() {
        return vec![Duration::ZERO; count];
    }

    let last = (count - 1) as u32;
    let span = delay.saturating_mul(last);
    let curve = mode.curve();
    (0..count)
        .map(|i| {
            let t = i as f32 / last as f32;
            span.mul_f64(f64::from(curve(t)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_50: Duration = Duration::from_millis(50);

    #[test]
    fn empty_and_single_counts() {
        assert!(stagger_offsets(0, MS_50, StaggerMode::Linear).is_empty());
        assert_eq!(
            stagger_offsets(1, MS_50, StaggerMode::EaseIn),
            vec![Duration::ZERO]
        );
    }

    #[test]
    fn linear_offsets_are_evenly_spaced() {
        let offsets = stagger_offsets(4, MS_50, StaggerMode::Linear);
        assert_eq!(offsets.len(), 4);
        assert_eq!(offsets[0], Duration::ZERO);
        assert_eq!(offsets[3], Duration::from_millis(150));
        let gap = offsets[2] - offsets[1];
        assert!(gap >= Duration::from_micros(49_900) && gap <= Duration::from_micros(50_100));
    }

    #[test]
    fn modes_share_endpoints() {
        for mode in [StaggerMode::Linear, StaggerMode::EaseIn, StaggerMode::EaseOut] {
            let offsets = stagger_offsets(5, MS_50, mode);
            assert_eq!(offsets[0], Duration::ZERO);
            assert_eq!(offsets[4], Duration::from_millis(200));
            assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn zero_delay_starts_everything_together() {
        let offsets = stagger_offsets(3, Duration::ZERO, StaggerMode::EaseOut);
        assert!(offsets.iter().all(Duration::is_zero));
    }
}
