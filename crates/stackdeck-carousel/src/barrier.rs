#![forbid(unsafe_code)]

//! Step barrier: joins every per-card animation issued by one navigation
//! step.
//!
//! The engine registers each card it animates with [`StepBarrier::expect`],
//! seals the barrier once the step has been issued, and feeds completions
//! back through [`StepBarrier::complete`]. The step settles when every
//! expected card has reported, in any order.
//!
//! # Invariants
//!
//! - A card counts at most once per step; duplicate completions are ignored.
//! - Completions carrying another step's id are ignored.
//! - An unsealed barrier never settles, so a completion delivered while the
//!   step is still being issued cannot end it early.

/// Identifier of one navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u64);

/// Identifies one per-card animation within a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationTicket {
    pub step: StepId,
    pub card: usize,
}

/// Result of reporting a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierStatus {
    /// Stale step, unknown card or duplicate report.
    Ignored,
    /// Accepted; this many cards are still moving.
    Pending(usize),
    /// Accepted; every card of the step has settled.
    Settled,
}

/// Join over the per-card animations of the current step.
#[derive(Debug, Clone, Default)]
pub struct StepBarrier {
    step: Option<StepId>,
    pending: Vec<bool>,
    remaining: usize,
    sealed: bool,
}

impl StepBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `step` over `card_count` cards, discarding any earlier
    /// step.
    pub fn begin(&mut self, step: StepId, card_count: usize) {
        self.step = Some(step);
        self.pending.clear();
        self.pending.resize(card_count, false);
        self.remaining = 0;
        self.sealed = false;
    }

    /// Register an animation for `card` in the current step.
    pub fn expect(&mut self, card: usize) {
        match self.pending.get_mut(card) {
            Some(slot) if !*slot => {
                *slot = true;
                self.remaining += 1;
            }
            _ => {}
        }
    }

    /// Mark the step as fully issued. Returns `true` when nothing is pending,
    /// i.e. the step settled on the spot.
    pub fn seal(&mut self) -> bool {
        self.sealed = true;
        if self.remaining == 0 {
            self.step = None;
            return true;
        }
        false
    }

    /// Report a finished animation.
    pub fn complete(&mut self, ticket: AnimationTicket) -> BarrierStatus {
        if self.step != Some(ticket.step) {
            return BarrierStatus::Ignored;
        }
        let Some(slot) = self.pending.get_mut(ticket.card) else {
            return BarrierStatus::Ignored;
        };
        if !*slot {
            return BarrierStatus::Ignored;
        }
        *slot = false;
        self.remaining -= 1;

        if self.remaining == 0 && self.sealed {
            self.step = None;
            BarrierStatus::Settled
        } else {
            BarrierStatus::Pending(self.remaining)
        }
    }

    /// Drop the current step without settling it.
    pub fn cancel(&mut self) {
        self.step = None;
        self.pending.clear();
        self.remaining = 0;
        self.sealed = false;
    }

    /// Step currently being joined.
    pub fn active_step(&self) -> Option<StepId> {
        self.step
    }

    /// Cards still moving in the current step.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}
