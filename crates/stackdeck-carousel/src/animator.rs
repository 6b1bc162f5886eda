#![forbid(unsafe_code)]

//! Animation capability consumed by the carousel engine.
//!
//! The engine never interpolates anything itself. It hands every per-card
//! move to a [`CardAnimator`] as an [`AnimationRequest`] and expects the host
//! to report each finished request back through
//! [`crate::StackCarousel::on_animation_complete`].
//!
//! [`TweenAnimator`] is the bundled implementation: one [`Tween`] per card,
//! advanced by [`TweenAnimator::tick`], with interpolated values readable for
//! rendering.
//!
//! # Example
//!
//! ```ignore
//! let mut animator = TweenAnimator::new();
//! carousel.initialize(&mut animator);
//! carousel.next(&mut animator);
//!
//! // Each frame:
//! for ticket in animator.tick(clock.delta()) {
//!     carousel.on_animation_complete(ticket, &mut animator);
//! }
//! let scale = animator.current_value(card, Property::Scale);
//! ```

use std::time::Duration;

use stackdeck_core::animation::{Animation, EasingFn, Tween, lerp};

use crate::barrier::AnimationTicket;
use crate::state::{Property, VisualState};

/// One per-card move issued by a navigation step.
#[derive(Debug, Clone, Copy)]
pub struct AnimationRequest {
    /// Handle to report back on completion.
    pub ticket: AnimationTicket,
    /// State the engine recorded before the move.
    pub from: VisualState,
    /// State the card must end at.
    pub to: VisualState,
    /// Length of the move, excluding `delay`.
    pub duration: Duration,
    /// Wait before the move starts.
    pub delay: Duration,
    /// Easing of the move.
    pub easing: EasingFn,
}

impl AnimationRequest {
    /// Index of the card being moved.
    #[inline]
    pub fn card(&self) -> usize {
        self.ticket.card
    }
}

/// The "animate a card container" capability.
pub trait CardAnimator {
    /// Put `card` at `state` immediately, cancelling any move in progress.
    fn place(&mut self, card: usize, state: VisualState);

    /// Start a timed move. Fire-and-continue: the host reports completion
    /// later with the request's ticket.
    fn animate(&mut self, request: AnimationRequest);
}

impl<A: CardAnimator + ?Sized> CardAnimator for &mut A {
    fn place(&mut self, card: usize, state: VisualState) {
        (**self).place(card, state);
    }

    fn animate(&mut self, request: AnimationRequest) {
        (**self).animate(request);
    }
}

// ============================================================================
// Tween animator
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct Track {
    ticket: AnimationTicket,
    from: VisualState,
    to: VisualState,
    tween: Tween,
}

impl Track {
    fn sample(&self) -> VisualState {
        let t = self.tween.value();
        VisualState {
            slot: self.to.slot,
            horizontal_offset: lerp(self.from.horizontal_offset, self.to.horizontal_offset, t),
            depth_order: lerp(self.from.depth_order as f32, self.to.depth_order as f32, t).round()
                as i32,
            scale: lerp(self.from.scale, self.to.scale, t),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CardMotion {
    rest: Option<VisualState>,
    track: Option<Track>,
}

/// Tween-backed [`CardAnimator`].
#[derive(Debug, Clone, Default)]
pub struct TweenAnimator {
    cards: Vec<CardMotion>,
}

impl TweenAnimator {
    /// Create an animator with no cards placed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance every move by `dt`.
    ///
    /// Returns the tickets of moves that finished during this tick, ordered
    /// by finishing time (ties by card index).
    pub fn tick(&mut self, dt: Duration) -> Vec<AnimationTicket> {
        let mut finished: Vec<(Duration, AnimationTicket)> = Vec::new();

        for motion in &mut self.cards {
            let Some(track) = motion.track.as_mut() else {
                continue;
            };
            let remaining = track.tween.remaining();
            track.tween.tick(dt);
            if track.tween.is_complete() {
                finished.push((remaining, track.ticket));
                motion.rest = Some(track.to);
                motion.track = None;
            }
        }

        finished.sort_by_key(|(remaining, ticket)| (*remaining, ticket.card));
        finished.into_iter().map(|(_, ticket)| ticket).collect()
    }

    /// Interpolated state of `card`, or `None` if it was never placed.
    #[must_use]
    pub fn current_state(&self, card: usize) -> Option<VisualState> {
        let motion = self.cards.get(card)?;
        match &motion.track {
            Some(track) => Some(track.sample()),
            None => motion.rest,
        }
    }

    /// Interpolated value of one property of `card`.
    #[must_use]
    pub fn current_value(&self, card: usize, property: Property) -> Option<f32> {
        self.current_state(card).map(|state| state.get(property))
    }

    /// Whether `card` has a move in progress.
    #[must_use]
    pub fn is_animating(&self, card: usize) -> bool {
        self.cards
            .get(card)
            .is_some_and(|motion| motion.track.is_some())
    }

    /// Number of moves in progress.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cards.iter().filter(|m| m.track.is_some()).count()
    }

    /// Whether no move is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active_count() == 0
    }

    /// Longest time any move still needs.
    #[must_use]
    pub fn time_to_idle(&self) -> Duration {
        self.cards
            .iter()
            .filter_map(|m| m.track.as_ref())
            .map(|track| track.tween.remaining())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    fn motion_mut(&mut self, card: usize) -> &mut CardMotion {
        if card >= self.cards.len() {
            self.cards.resize_with(card + 1, CardMotion::default);
        }
        &mut self.cards[card]
    }
}

impl CardAnimator for TweenAnimator {
    fn place(&mut self, card: usize, state: VisualState) {
        let motion = self.motion_mut(card);
        motion.track = None;
        motion.rest = Some(state);
    }

    fn animate(&mut self, request: AnimationRequest) {
        // Start from what is on screen, which differs from the engine's record
        // only if the card is still moving.
        let from = self.current_state(request.card()).unwrap_or(request.from);
        let tween = Tween::new(request.duration)
            .delay(request.delay)
            .easing(request.easing);
        let motion = self.motion_mut(request.card());
        motion.rest = Some(from);
        motion.track = Some(Track {
            ticket: request.ticket,
            from,
            to: request.to,
            tween,
        });
    }
}
