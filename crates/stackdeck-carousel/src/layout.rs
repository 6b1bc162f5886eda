#![forbid(unsafe_code)]

//! Layout primitives: signed distance from center → offset, depth, scale.
//!
//! All functions are pure. Negative distances are left of center, positive
//! distances right of it; distance 0 is the main card at the centering
//! placement.
//!
//! # Invariants
//!
//! - `depth_for(0) == base_depth` and depth strictly decreases with `|d|` on
//!   each side until it saturates at `i32::MIN`.
//! - `scale_for(d)` is in `[min_scale, 1.0]` for every `d`.
//! - `offset_for(d)` has the sign of `d`.
//!
//! # Failure Modes
//!
//! - Past [`StackLayout::max_distinct_distance`] every card is drawn at
//!   `min_scale`, so far cards stop shrinking but keep their spacing.

use crate::config::CarouselConfig;
use crate::state::VisualState;

/// Upper bound for the distinct-distance search.
const MAX_SEARCH_DISTANCE: u32 = u16::MAX as u32;

/// Index of the initial main card for `count` cards: `ceil(count / 2) - 1`.
///
/// Returns `None` for an empty stack.
#[must_use]
pub fn initial_center(count: usize) -> Option<usize> {
    count.div_ceil(2).checked_sub(1)
}

/// Layout constants extracted from a [`CarouselConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Depth order of the main card.
    pub base_depth: i32,
    /// Horizontal distance between neighbouring cards.
    pub unit_spacing: f32,
    /// Scale lost per position away from center.
    pub scale_step: f32,
    /// Smallest scale a card is drawn at.
    pub min_scale: f32,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self::from_config(&CarouselConfig::default())
    }
}

impl StackLayout {
    #[must_use]
    pub fn from_config(config: &CarouselConfig) -> Self {
        Self {
            base_depth: config.base_depth,
            unit_spacing: config.unit_spacing,
            scale_step: config.scale_step,
            min_scale: config.min_scale,
        }
    }

    /// Horizontal offset from the anchor.
    #[inline]
    #[must_use]
    pub fn offset_for(&self, distance: i32) -> f32 {
        if distance == 0 {
            return 0.0;
        }
        distance as f32 * self.unit_spacing
    }

    /// Depth order; one less per position away from center.
    #[inline]
    #[must_use]
    pub fn depth_for(&self, distance: i32) -> i32 {
        let steps = i32::try_from(distance.unsigned_abs()).unwrap_or(i32::MAX);
        self.base_depth.saturating_sub(steps)
    }

    /// Scale, clamped to `[min_scale, 1.0]`.
    #[inline]
    #[must_use]
    pub fn scale_for(&self, distance: i32) -> f32 {
        self.raw_scale(distance.unsigned_abs())
            .clamp(self.min_scale.min(1.0), 1.0)
    }

    /// Full visual state for a card at `distance`.
    #[must_use]
    pub fn state_for(&self, distance: i32) -> VisualState {
        VisualState {
            slot: distance,
            horizontal_offset: self.offset_for(distance),
            depth_order: self.depth_for(distance),
            scale: self.scale_for(distance),
        }
    }

    /// Whether `state` is the main card's: distance 0 at `base_depth`.
    #[inline]
    #[must_use]
    pub fn is_center(&self, state: &VisualState) -> bool {
        state.slot == 0 && state.depth_order == self.base_depth
    }

    /// Largest distance whose scale is still above `min_scale`.
    ///
    /// Cards farther away than this all render at the floor scale and can no
    /// longer be told apart by size.
    #[must_use]
    pub fn max_distinct_distance(&self) -> u32 {
        let floor = self.min_scale + f32::EPSILON;
        let mut distance = 0;
        while distance < MAX_SEARCH_DISTANCE && self.raw_scale(distance + 1) > floor {
            distance += 1;
        }
        distance
    }

    fn raw_scale(&self, steps: u32) -> f32 {
        1.0 - steps as f32 * self.scale_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn initial_center_rounds_up_half() {
        assert_eq!(initial_center(0), None);
        assert_eq!(initial_center(1), Some(0));
        assert_eq!(initial_center(2), Some(0));
        assert_eq!(initial_center(3), Some(1));
        assert_eq!(initial_center(4), Some(1));
        assert_eq!(initial_center(5), Some(2));
        assert_eq!(initial_center(6), Some(2));
    }

    #[test]
    fn center_is_special_cased() {
        let layout = StackLayout::default();
        let center = layout.state_for(0);
        assert_eq!(center.horizontal_offset, 0.0);
        assert_eq!(center.depth_order, 50);
        assert_eq!(center.scale, 1.0);
        assert!(layout.is_center(&center));
    }

    #[test]
    fn offsets_follow_side() {
        let layout = StackLayout::default();
        assert_eq!(layout.offset_for(-2), -160.0);
        assert_eq!(layout.offset_for(-1), -80.0);
        assert_eq!(layout.offset_for(1), 80.0);
        assert_eq!(layout.offset_for(3), 240.0);
    }

    #[test]
    fn depth_decreases_symmetrically() {
        let layout = StackLayout::default();
        assert_eq!(layout.depth_for(-1), 49);
        assert_eq!(layout.depth_for(1), 49);
        assert_eq!(layout.depth_for(-4), 46);
        assert_eq!(layout.depth_for(4), 46);
        assert_eq!(layout.depth_for(i32::MIN), 50i32.saturating_sub(i32::MAX));
    }

    #[test]
    fn scale_shrinks_then_clamps() {
        let layout = StackLayout::default();
        assert!(approx(layout.scale_for(1), 0.9));
        assert!(approx(layout.scale_for(-3), 0.7));
        assert!(approx(layout.scale_for(9), 0.1));
        assert_eq!(layout.scale_for(10), 0.1);
        assert_eq!(layout.scale_for(-500), 0.1);
    }

    #[test]
    fn max_distinct_distance_for_defaults() {
        assert_eq!(StackLayout::default().max_distinct_distance(), 8);
        let coarse = StackLayout {
            scale_step: 0.25,
            min_scale: 0.25,
            ..StackLayout::default()
        };
        assert_eq!(coarse.max_distinct_distance(), 2);
    }

    #[test]
    fn full_scale_floor_has_no_distinct_distance() {
        let flat = StackLayout {
            min_scale: 1.0,
            ..StackLayout::default()
        };
        assert_eq!(flat.max_distinct_distance(), 0);
        assert_eq!(flat.scale_for(3), 1.0);
    }

    #[test]
    fn saturated_depth_is_not_mistaken_for_center() {
        let layout = StackLayout {
            base_depth: i32::MIN + 1,
            ..StackLayout::default()
        };
        let far = layout.state_for(-3);
        assert_eq!(far.depth_order, i32::MIN);
        let saturated = VisualState {
            depth_order: layout.base_depth,
            ..far
        };
        assert!(!layout.is_center(&saturated));
        assert!(layout.is_center(&layout.state_for(0)));
    }

    #[test]
    fn state_for_records_slot() {
        let layout = StackLayout::default();
        let state = layout.state_for(-2);
        assert_eq!(state.slot, -2);
        assert_eq!(state.horizontal_offset, -160.0);
        assert_eq!(state.depth_order, 48);
        assert!(approx(state.scale, 0.8));
    }
}
