#![forbid(unsafe_code)]

//! Stack carousel: a row of cards fanned around one enlarged main card.
//!
//! # Role in StackDeck
//! `stackdeck-carousel` is the positioning-and-transition engine. It decides
//! where every card container sits (horizontal offset, depth order, scale)
//! and drives one-step `next` / `prev` transitions of the whole stack. Card
//! contents and drawing belong to the host.
//!
//! # Primary pieces
//! - [`layout`]: pure distance → offset/depth/scale primitives.
//! - [`StackCarousel`]: initial placement, transition driver, observables.
//! - [`barrier`]: join over the per-card moves of one step.
//! - [`animator`]: the animation capability ([`CardAnimator`]) and the
//!   tween-backed [`TweenAnimator`].
//! - [`config`]: layout constants, timing, busy policy.

pub mod animator;
pub mod barrier;
pub mod carousel;
pub mod config;
pub mod error;
pub mod layout;
pub mod state;

pub use animator::{AnimationRequest, CardAnimator, TweenAnimator};
pub use barrier::{AnimationTicket, StepId};
pub use carousel::StackCarousel;
pub use config::{BusyPolicy, CarouselConfig, CenteringPlacement, TransitionEasing};
pub use error::{CarouselError, Result};
pub use layout::{StackLayout, initial_center};
pub use state::{CardFrame, CarouselPhase, Direction, NavOutcome, Property, VisualState};
