#![forbid(unsafe_code)]

//! Per-card visual state and navigation result types.

use crate::config::CenteringPlacement;

/// Position, depth and scale of one card's container.
///
/// `slot` is the signed distance from the center card the other fields were
/// derived from: negative slots sit left of center, positive slots right.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualState {
    /// Signed distance from the center card.
    pub slot: i32,
    /// Horizontal offset from the centering anchor.
    pub horizontal_offset: f32,
    /// Stacking order; higher draws in front.
    pub depth_order: i32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl VisualState {
    /// The centering placement every card receives before the layout pass.
    pub const BASE: Self = Self {
        slot: 0,
        horizontal_offset: 0.0,
        depth_order: 0,
        scale: 1.0,
    };

    /// Read one animatable property.
    #[must_use]
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::HorizontalOffset => self.horizontal_offset,
            Property::DepthOrder => self.depth_order as f32,
            Property::Scale => self.scale,
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::BASE
    }
}

/// Animatable properties of a card container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    HorizontalOffset,
    DepthOrder,
    Scale,
}

/// Everything a renderer needs to draw one card container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    /// Anchor the container is centered on.
    pub anchor: CenteringPlacement,
    /// Target visual state.
    pub state: VisualState,
    /// Explicit width for the main card; `None` means natural width.
    pub width: Option<f32>,
}

/// Direction of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Center moves right; the stack slides left.
    Forward,
    /// Center moves left; the stack slides right.
    Backward,
}

impl Direction {
    /// Operation name, as used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Forward => "next",
            Self::Backward => "prev",
        }
    }
}

/// Transition phase of the engine.
///
/// State machine: Idle → Transitioning → Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarouselPhase {
    /// No step in flight.
    #[default]
    Idle,
    /// A step was issued and not every card has settled.
    Transitioning,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// A step was issued; the center moved `from` → `to`.
    Started { from: usize, to: usize },
    /// A step is in flight; the request will run once it settles.
    Queued,
    /// A step is in flight; the request was dropped.
    Busy,
    /// No card exists in the requested direction.
    AtBoundary,
    /// The carousel has no cards or was never initialized.
    Uninitialized,
}

impl NavOutcome {
    /// Whether a step was issued.
    #[inline]
    pub fn is_started(self) -> bool {
        matches!(self, Self::Started { .. })
    }
}
