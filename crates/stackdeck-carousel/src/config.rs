#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! [`CarouselConfig`] carries the layout constants (depth, spacing, scale
//! step), the transition timing and the busy policy. Defaults reproduce the
//! classic stack look: 80px spacing, 10% shrink per position, a 300ms move.
//!
//! # Example
//!
//! ```ignore
//! let config = CarouselConfig::default()
//!     .unit_spacing(96.0)
//!     .transition_duration(Duration::from_millis(250))
//!     .busy_policy(BusyPolicy::QueueLatest);
//! config.validate()?;
//! ```
//!
//! # Invariants
//!
//! - A validated config has finite, positive spacing and card width.
//! - `scale_step` and `min_scale` are in (0.0, 1.0].

use std::time::Duration;

use stackdeck_core::animation::{
    EasingFn, StaggerMode, ease_in, ease_in_out, ease_out, ease_out_cubic, linear,
};

use crate::error::{CarouselError, Result};

/// Depth order of the main card.
pub const DEFAULT_BASE_DEPTH: i32 = 50;
/// Horizontal distance between neighbouring cards.
pub const DEFAULT_UNIT_SPACING: f32 = 80.0;
/// Scale lost per position away from the center.
pub const DEFAULT_SCALE_STEP: f32 = 0.1;
/// Smallest scale a card is drawn at.
pub const DEFAULT_MIN_SCALE: f32 = 0.1;
/// Duration of one navigation step.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(300);
/// Width of the main card.
pub const DEFAULT_MAIN_CARD_WIDTH: f32 = 650.0;

// ============================================================================
// Easing
// ============================================================================

/// Easing curve for per-card transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TransitionEasing {
    /// Constant speed.
    Linear,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    #[default]
    EaseOut,
    /// S-curve.
    EaseInOut,
    /// Strongly decelerating.
    EaseOutCubic,
}

impl TransitionEasing {
    /// The curve function.
    #[must_use]
    pub fn curve(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
            Self::EaseOutCubic => ease_out_cubic,
        }
    }
}

// ============================================================================
// Busy policy
// ============================================================================

/// What happens to a navigation request that arrives mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BusyPolicy {
    /// Ignore the request.
    #[default]
    Drop,
    /// Remember the latest request and run it once the current step settles.
    QueueLatest,
}

// ============================================================================
// Centering placement
// ============================================================================

/// Anchor every card is centered on before its horizontal offset applies.
///
/// Percentages are of the carousel viewport; the card itself is translated
/// by half its own size so the anchor is its center.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CenteringPlacement {
    /// Vertical anchor, percent of viewport height.
    pub top_pct: f32,
    /// Horizontal anchor, percent of viewport width.
    pub left_pct: f32,
}

impl Default for CenteringPlacement {
    fn default() -> Self {
        Self {
            top_pct: 40.0,
            left_pct: 50.0,
        }
    }
}

impl CenteringPlacement {
    /// Anchor position in pixels for a viewport of the given size.
    #[must_use]
    pub fn resolve(&self, viewport_width: f32, viewport_height: f32) -> (f32, f32) {
        (
            viewport_width * self.left_pct / 100.0,
            viewport_height * self.top_pct / 100.0,
        )
    }
}

// ============================================================================
// Config
// ============================================================================

/// Configuration for a [`crate::StackCarousel`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Depth order of the main card; neighbours get one less per position.
    pub base_depth: i32,
    /// Horizontal distance between neighbouring cards.
    pub unit_spacing: f32,
    /// Scale lost per position away from the center.
    pub scale_step: f32,
    /// Scale floor for far-away cards.
    pub min_scale: f32,
    /// Duration of every per-card move in a step.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub transition_duration: Duration,
    /// Easing of every per-card move.
    pub easing: TransitionEasing,
    /// Extra start delay per position of distance from the new center.
    #[cfg_attr(feature = "serde", serde(with = "duration_ms"))]
    pub stagger: Duration,
    /// Shape of the stagger distribution.
    pub stagger_mode: StaggerMode,
    /// Handling of requests made mid-transition.
    pub busy_policy: BusyPolicy,
    /// Anchor every card is centered on.
    pub anchor: CenteringPlacement,
    /// Width the main card is drawn at.
    pub main_card_width: f32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            base_depth: DEFAULT_BASE_DEPTH,
            unit_spacing: DEFAULT_UNIT_SPACING,
            scale_step: DEFAULT_SCALE_STEP,
            min_scale: DEFAULT_MIN_SCALE,
            transition_duration: DEFAULT_TRANSITION_DURATION,
            easing: TransitionEasing::default(),
            stagger: Duration::ZERO,
            stagger_mode: StaggerMode::Linear,
            busy_policy: BusyPolicy::Drop,
            anchor: CenteringPlacement::default(),
            main_card_width: DEFAULT_MAIN_CARD_WIDTH,
        }
    }
}

impl CarouselConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration whose steps complete on the first animator tick.
    pub fn instant() -> Self {
        Self {
            transition_duration: Duration::ZERO,
            stagger: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Set the main card depth order.
    pub fn base_depth(mut self, depth: i32) -> Self {
        self.base_depth = depth;
        self
    }

    /// Set the spacing between neighbouring cards.
    pub fn unit_spacing(mut self, spacing: f32) -> Self {
        self.unit_spacing = spacing;
        self
    }

    /// Set the per-position scale step.
    pub fn scale_step(mut self, step: f32) -> Self {
        self.scale_step = step;
        self
    }

    /// Set the scale floor.
    pub fn min_scale(mut self, scale: f32) -> Self {
        self.min_scale = scale;
        self
    }

    /// Set the duration of one step.
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn easing(mut self, easing: TransitionEasing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the per-position stagger delay.
    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    /// Set the stagger distribution.
    pub fn stagger_mode(mut self, mode: StaggerMode) -> Self {
        self.stagger_mode = mode;
        self
    }

    /// Set the busy policy.
    pub fn busy_policy(mut self, policy: BusyPolicy) -> Self {
        self.busy_policy = policy;
        self
    }

    /// Set the centering anchor.
    pub fn anchor(mut self, anchor: CenteringPlacement) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the main card width.
    pub fn main_card_width(mut self, width: f32) -> Self {
        self.main_card_width = width;
        self
    }

    /// Reject values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.base_depth == i32::MIN {
            return Err(CarouselError::invalid(
                "base_depth",
                self.base_depth,
                "leaves no depth below the main card",
            ));
        }
        if !self.unit_spacing.is_finite() || self.unit_spacing <= 0.0 {
            return Err(CarouselError::invalid(
                "unit_spacing",
                self.unit_spacing,
                "must be finite and positive",
            ));
        }
        if !in_unit_interval(self.scale_step) {
            return Err(CarouselError::invalid(
                "scale_step",
                self.scale_step,
                "must be in (0, 1]",
            ));
        }
        if !in_unit_interval(self.min_scale) {
            return Err(CarouselError::invalid(
                "min_scale",
                self.min_scale,
                "must be in (0, 1]",
            ));
        }
        if !self.main_card_width.is_finite() || self.main_card_width <= 0.0 {
            return Err(CarouselError::invalid(
                "main_card_width",
                self.main_card_width,
                "must be finite and positive",
            ));
        }
        if !self.anchor.top_pct.is_finite() || !self.anchor.left_pct.is_finite() {
            return Err(CarouselError::invalid(
                "anchor",
                format!("{}%/{}%", self.anchor.top_pct, self.anchor.left_pct),
                "must be finite",
            ));
        }
        Ok(())
    }

    /// [`CarouselConfig::validate`], plus checks that depend on the stack size.
    ///
    /// `base_depth` must leave room for `card_count - 1` distinct depths below
    /// it, otherwise far cards saturate onto the main card's depth.
    pub fn validate_for(&self, card_count: usize) -> Result<()> {
        self.validate()?;
        let spread = i32::try_from(card_count.saturating_sub(1)).unwrap_or(i32::MAX);
        if self.base_depth.checked_sub(spread).is_none() {
            return Err(CarouselError::invalid(
                "base_depth",
                self.base_depth,
                "too small to give every card a distinct depth",
            ));
        }
        Ok(())
    }
}

fn in_unit_interval(value: f32) -> bool {
    value.is_finite() && value > 0.0 && value <= 1.0
}

#[cfg(feature = "serde")]
mod duration_ms {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
