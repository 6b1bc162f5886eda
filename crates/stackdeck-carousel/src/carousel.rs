#![forbid(unsafe_code)]

//! Stack carousel engine.
//!
//! [`StackCarousel`] owns the card sequence, one authoritative
//! [`VisualState`] per card and the center pointer. Navigation rewrites the
//! recorded states synchronously, hands each per-card move to a
//! [`CardAnimator`], and joins the moves with a [`StepBarrier`].
//!
//! # Example
//!
//! ```ignore
//! let mut carousel = StackCarousel::new(vec!["a", "b", "c", "d", "e"]);
//! let mut animator = TweenAnimator::new();
//! carousel.initialize(&mut animator);
//! assert_eq!(carousel.center_index(), Some(2));
//!
//! carousel.next(&mut animator);
//! assert_eq!(carousel.center_index(), Some(3)); // before any frame
//! assert!(carousel.is_transitioning());
//!
//! for ticket in animator.tick(Duration::from_millis(300)) {
//!     carousel.on_animation_complete(ticket, &mut animator);
//! }
//! assert!(!carousel.is_transitioning());
//! ```
//!
//! # Invariants
//!
//! - After `initialize` on a non-empty stack, `center_index < len` and
//!   exactly one card holds `base_depth`.
//! - Steps never overlap: the phase returns to idle only when the barrier
//!   has seen every move of the step.
//! - The center index changes when a step is issued, not when it settles.
//! - Once settled, every recorded state equals the resting layout for the
//!   current center.
//!
//! # Failure Modes
//!
//! - Completions for a step abandoned by re-initialization are ignored.
//! - A host that never reports completions leaves the carousel
//!   transitioning; further requests are dropped (or queued).

use std::time::Duration;

use stackdeck_core::animation::stagger_offsets;

use crate::animator::{AnimationRequest, CardAnimator};
use crate::barrier::{AnimationTicket, BarrierStatus, StepBarrier, StepId};
use crate::config::{BusyPolicy, CarouselConfig};
use crate::error::{CarouselError, Result};
use crate::layout::{StackLayout, initial_center};
use crate::state::{CardFrame, CarouselPhase, Direction, NavOutcome, VisualState};

/// Horizontally fanned stack of cards with one enlarged main card.
#[derive(Debug, Clone)]
pub struct StackCarousel<T> {
    cards: Vec<T>,
    states: Vec<VisualState>,
    config: CarouselConfig,
    layout: StackLayout,
    center: Option<usize>,
    phase: CarouselPhase,
    barrier: StepBarrier,
    steps_issued: u64,
    queued: Option<Direction>,
    reached_right_boundary: bool,
    reached_left_boundary: bool,
}

impl<T> StackCarousel<T> {
    /// Create a carousel with the default configuration.
    ///
    /// Nothing is placed until [`StackCarousel::initialize`] runs.
    pub fn new(cards: Vec<T>) -> Self {
        Self::build(cards, CarouselConfig::default())
    }

    /// Create a carousel with a custom configuration.
    ///
    /// Fails if the configuration is invalid or its `base_depth` cannot give
    /// every card of the stack a distinct depth.
    pub fn try_new(cards: Vec<T>, config: CarouselConfig) -> Result<Self> {
        config.validate_for(cards.len())?;
        Ok(Self::build(cards, config))
    }

    fn build(cards: Vec<T>, config: CarouselConfig) -> Self {
        let states = vec![VisualState::BASE; cards.len()];
        Self {
            cards,
            states,
            layout: StackLayout::from_config(&config),
            config,
            center: None,
            phase: CarouselPhase::Idle,
            barrier: StepBarrier::new(),
            steps_issued: 0,
            queued: None,
            reached_right_boundary: false,
            reached_left_boundary: false,
        }
    }

    // ------------------------------------------------------------------
    // Initial placement
    // ------------------------------------------------------------------

    /// Lay out the resting stack around the middle card, without animation.
    ///
    /// Calling it again resets the layout and abandons any step in flight.
    pub fn initialize<A: CardAnimator + ?Sized>(&mut self, animator: &mut A) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "carousel.initialize",
            operation = "initialize",
            card_count = self.cards.len()
        )
        .entered();

        self.barrier.cancel();
        self.phase = CarouselPhase::Idle;
        self.queued = None;

        let Some(center) = initial_center(self.cards.len()) else {
            self.center = None;
            return;
        };

        for (card, state) in self.states.iter_mut().enumerate() {
            *state = VisualState::BASE;
            animator.place(card, VisualState::BASE);
        }

        self.place_at(center, 0, animator);
        for (steps, card) in (0..center).rev().enumerate() {
            self.place_at(card, -slot_distance(steps + 1), animator);
        }
        for (steps, card) in (center + 1..self.cards.len()).enumerate() {
            self.place_at(card, slot_distance(steps + 1), animator);
        }

        self.center = Some(center);
        self.refresh_boundaries();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.placed",
            center_index = center,
            max_distinct_distance = self.layout.max_distinct_distance()
        );
    }

    fn place_at<A: CardAnimator + ?Sized>(&mut self, card: usize, slot: i32, animator: &mut A) {
        let state = self.layout.state_for(slot);
        self.states[card] = state;
        animator.place(card, state);
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move the center one card to the right (the stack slides left).
    pub fn next<A: CardAnimator + ?Sized>(&mut self, animator: &mut A) -> NavOutcome {
        self.navigate(Direction::Forward, animator)
    }

    /// Move the center one card to the left (the stack slides right).
    pub fn prev<A: CardAnimator + ?Sized>(&mut self, animator: &mut A) -> NavOutcome {
        self.navigate(Direction::Backward, animator)
    }

    /// Run one step in `direction`.
    pub fn navigate<A: CardAnimator + ?Sized>(
        &mut self,
        direction: Direction,
        animator: &mut A,
    ) -> NavOutcome {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "carousel.navigate",
            operation = direction.name(),
            center_index = self.center,
            card_count = self.cards.len()
        )
        .entered();

        let Some(center) = self.center else {
            return NavOutcome::Uninitialized;
        };
        if self.phase == CarouselPhase::Transitioning {
            return self.defer(direction);
        }

        match direction {
            Direction::Forward if center + 1 < self.cards.len() => {
                self.step_forward(center, animator)
            }
            Direction::Backward if center > 0 => self.step_backward(center, animator),
            _ => NavOutcome::AtBoundary,
        }
    }

    fn defer(&mut self, direction: Direction) -> NavOutcome {
        match self.config.busy_policy {
            BusyPolicy::Drop => {
                #[cfg(feature = "tracing")]
                tracing::trace!(message = "carousel.dropped", operation = direction.name());
                NavOutcome::Busy
            }
            BusyPolicy::QueueLatest => {
                #[cfg(feature = "tracing")]
                tracing::trace!(message = "carousel.queued", operation = direction.name());
                self.queued = Some(direction);
                NavOutcome::Queued
            }
        }
    }

    /// Forward step: scan the left side up to the main card, which hands its
    /// place to its right neighbour, then pull the rest of the right side in.
    fn step_forward<A: CardAnimator + ?Sized>(
        &mut self,
        center: usize,
        animator: &mut A,
    ) -> NavOutcome {
        let step = self.begin_step();
        let delays = self.stagger_delays();
        let mut promoted = None;

        for card in 0..=center {
            let current = self.states[card];
            if promoted.is_none() && self.layout.is_center(&current) {
                debug_assert_eq!(card, center, "main card must sit at the center index");
                self.issue(step, card, current.slot - 1, &delays, animator);
                let neighbour = card + 1;
                let incoming = self.states[neighbour];
                self.issue(step, neighbour, incoming.slot - 1, &delays, animator);
                promoted = Some(neighbour);
            } else {
                self.issue(step, card, current.slot - 1, &delays, animator);
            }
        }

        let new_center = promoted.unwrap_or(center + 1);
        self.center = Some(new_center);

        let right_start = promoted.map_or(center + 1, |p| p + 1);
        for card in right_start..self.cards.len() {
            let current = self.states[card];
            self.issue(step, card, current.slot - 1, &delays, animator);
        }

        self.seal_step(animator);
        NavOutcome::Started {
            from: center,
            to: new_center,
        }
    }

    /// Backward step: scan from the main card outward to the right, the main
    /// card handing its place to its left neighbour, then push the remaining
    /// left side toward the center.
    fn step_backward<A: CardAnimator + ?Sized>(
        &mut self,
        center: usize,
        animator: &mut A,
    ) -> NavOutcome {
        let step = self.begin_step();
        let delays = self.stagger_delays();
        let mut promoted = None;

        for card in center..self.cards.len() {
            let current = self.states[card];
            match card.checked_sub(1) {
                Some(neighbour) if promoted.is_none() && self.layout.is_center(&current) => {
                    debug_assert_eq!(card, center, "main card must sit at the center index");
                    self.issue(step, card, current.slot + 1, &delays, animator);
                    let incoming = self.states[neighbour];
                    self.issue(step, neighbour, incoming.slot + 1, &delays, animator);
                    promoted = Some(neighbour);
                }
                _ => self.issue(step, card, current.slot + 1, &delays, animator),
            }
        }

        let new_center = promoted.unwrap_or(center - 1);
        self.center = Some(new_center);

        let left_end = promoted.unwrap_or(center);
        for card in 0..left_end {
            let current = self.states[card];
            self.issue(step, card, current.slot + 1, &delays, animator);
        }

        self.seal_step(animator);
        NavOutcome::Started {
            from: center,
            to: new_center,
        }
    }

    fn begin_step(&mut self) -> StepId {
        self.steps_issued += 1;
        let step = StepId(self.steps_issued);
        self.barrier.begin(step, self.cards.len());
        self.phase = CarouselPhase::Transitioning;
        self.reached_right_boundary = false;
        self.reached_left_boundary = false;
        step
    }

    fn stagger_delays(&self) -> Vec<Duration> {
        stagger_offsets(
            self.cards.len(),
            self.config.stagger,
            self.config.stagger_mode,
        )
    }

    /// Record the new state for `card` and hand the move to the animator.
    fn issue<A: CardAnimator + ?Sized>(
        &mut self,
        step: StepId,
        card: usize,
        slot: i32,
        delays: &[Duration],
        animator: &mut A,
    ) {
        let from = self.states[card];
        let to = self.layout.state_for(slot);
        self.states[card] = to;
        self.barrier.expect(card);

        let delay = usize::try_from(slot.unsigned_abs())
            .ok()
            .and_then(|distance| delays.get(distance).copied())
            .unwrap_or_default();

        animator.animate(AnimationRequest {
            ticket: AnimationTicket { step, card },
            from,
            to,
            duration: self.config.transition_duration,
            delay,
            easing: self.config.easing.curve(),
        });
    }

    fn seal_step<A: CardAnimator + ?Sized>(&mut self, animator: &mut A) {
        if self.barrier.seal() {
            self.settle(animator);
        }
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Report a finished per-card move.
    ///
    /// Returns `true` when this completion settled the step.
    pub fn on_animation_complete<A: CardAnimator + ?Sized>(
        &mut self,
        ticket: AnimationTicket,
        animator: &mut A,
    ) -> bool {
        match self.barrier.complete(ticket) {
            BarrierStatus::Settled => {
                self.settle(animator);
                true
            }
            BarrierStatus::Pending(_) | BarrierStatus::Ignored => false,
        }
    }

    fn settle<A: CardAnimator + ?Sized>(&mut self, animator: &mut A) {
        self.phase = CarouselPhase::Idle;
        self.refresh_boundaries();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            message = "carousel.settled",
            center_index = self.center,
            reached_left_boundary = self.reached_left_boundary,
            reached_right_boundary = self.reached_right_boundary
        );

        if let Some(direction) = self.queued.take() {
            match self.navigate(direction, animator) {
                NavOutcome::Started { .. } => {}
                _outcome => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        message = "carousel.replay_dropped",
                        operation = direction.name(),
                        outcome = ?_outcome
                    );
                }
            }
        }
    }

    fn refresh_boundaries(&mut self) {
        match self.center {
            Some(center) => {
                self.reached_right_boundary = center + 1 >= self.cards.len();
                self.reached_left_boundary = center == 0;
            }
            None => {
                self.reached_right_boundary = false;
                self.reached_left_boundary = false;
            }
        }
    }

    // ------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------

    /// Number of cards.
    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the stack has no cards.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the resting stack has been laid out.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.center.is_some()
    }

    /// Index of the main card.
    #[inline]
    pub fn center_index(&self) -> Option<usize> {
        self.center
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Whether a step is in flight.
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.phase == CarouselPhase::Transitioning
    }

    /// No card right of the main card (settled state only).
    #[inline]
    pub fn reached_right_boundary(&self) -> bool {
        self.reached_right_boundary
    }

    /// No card left of the main card (settled state only).
    #[inline]
    pub fn reached_left_boundary(&self) -> bool {
        self.reached_left_boundary
    }

    /// Request held for replay under [`BusyPolicy::QueueLatest`].
    #[inline]
    pub fn queued(&self) -> Option<Direction> {
        self.queued
    }

    /// Moves of the current step that have not reported completion.
    #[inline]
    pub fn pending_animations(&self) -> usize {
        self.barrier.remaining()
    }

    /// Card content at `index`.
    pub fn card(&self, index: usize) -> Option<&T> {
        self.cards.get(index)
    }

    /// All card contents in order.
    pub fn cards(&self) -> &[T] {
        &self.cards
    }

    /// Recorded (target) visual state of `index`.
    pub fn visual_state(&self, index: usize) -> Option<VisualState> {
        self.states.get(index).copied()
    }

    /// Recorded visual states of every card.
    pub fn visual_states(&self) -> &[VisualState] {
        &self.states
    }

    /// Resting layout of `index` for the current center.
    pub fn resting_state(&self, index: usize) -> Option<VisualState> {
        let center = self.center?;
        if index >= self.cards.len() {
            return None;
        }
        let slot = if index >= center {
            slot_distance(index - center)
        } else {
            -slot_distance(center - index)
        };
        Some(self.layout.state_for(slot))
    }

    /// Renderer-facing frame of `index`.
    pub fn card_frame(&self, index: usize) -> Result<CardFrame> {
        let state = self
            .states
            .get(index)
            .copied()
            .ok_or(CarouselError::IndexOutOfRange {
                index,
                len: self.cards.len(),
            })?;
        Ok(CardFrame {
            anchor: self.config.anchor,
            state,
            width: (self.center == Some(index)).then_some(self.config.main_card_width),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Layout primitives in use.
    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }
}

fn slot_distance(steps: usize) -> i32 {
    i32::try_from(steps).unwrap_or(i32::MAX)
}
