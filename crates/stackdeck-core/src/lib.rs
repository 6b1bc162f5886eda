#![forbid(unsafe_code)]

//! Core: animation primitives for StackDeck.
//!
//! # Role in StackDeck
//! `stackdeck-core` is the motion layer. It owns the [`animation::Animation`]
//! trait, easing curves, delayed tweens and stagger distributions. It knows
//! nothing about cards or carousels.
//!
//! # How it fits in the system
//! The carousel engine (`stackdeck-carousel`) decides *where* every card goes;
//! its tween-backed animator uses [`animation::Tween`] to decide *how fast* a
//! card gets there. Hosts drive time with [`clock::FrameClock`].

pub mod animation;
pub mod clock;
