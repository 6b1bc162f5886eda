#![allow(dead_code)]

use std::time::Duration;

use stackdeck_carousel::{
    AnimationRequest, AnimationTicket, CardAnimator, CarouselConfig, StackCarousel, TweenAnimator,
    VisualState,
};

/// Long enough for any default step to finish.
pub const SETTLE: Duration = Duration::from_secs(2);

/// Carousel of `count` numbered cards, initialized against a fresh animator.
pub fn initialized(count: usize, config: CarouselConfig) -> (StackCarousel<usize>, TweenAnimator) {
    let mut carousel =
        StackCarousel::try_new((0..count).collect(), config).expect("valid test config");
    let mut animator = TweenAnimator::new();
    carousel.initialize(&mut animator);
    (carousel, animator)
}

/// Tick the animator until the carousel is idle, forwarding completions.
pub fn run_to_idle(carousel: &mut StackCarousel<usize>, animator: &mut TweenAnimator) {
    for _ in 0..64 {
        if !carousel.is_transitioning() {
            return;
        }
        for ticket in animator.tick(SETTLE) {
            carousel.on_animation_complete(ticket, animator);
        }
    }
    panic!("carousel did not settle");
}

/// Animator that records every call and never finishes on its own.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub placed: Vec<(usize, VisualState)>,
    pub requests: Vec<AnimationRequest>,
}

impl RecordingAnimator {
    pub fn tickets(&self) -> Vec<AnimationTicket> {
        self.requests.iter().map(|r| r.ticket).collect()
    }

    pub fn take_tickets(&mut self) -> Vec<AnimationTicket> {
        self.requests.drain(..).map(|r| r.ticket).collect()
    }
}

impl CardAnimator for RecordingAnimator {
    fn place(&mut self, card: usize, state: VisualState) {
        self.placed.push((card, state));
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.requests.push(request);
    }
}
