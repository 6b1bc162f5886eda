//! Property tests: arbitrary navigation never breaks the stack layout.

mod common;

use std::time::Duration;

use common::{initialized, run_to_idle};
use proptest::prelude::*;
use stackdeck_carousel::{BusyPolicy, CarouselConfig, NavOutcome, StackLayout};

#[derive(Debug, Clone, Copy)]
enum Op {
    Next,
    Prev,
    Tick(u64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Next),
        Just(Op::Prev),
        (0u64..400).prop_map(Op::Tick),
    ]
}

fn policy() -> impl Strategy<Value = BusyPolicy> {
    prop_oneof![Just(BusyPolicy::Drop), Just(BusyPolicy::QueueLatest)]
}

proptest! {
    #[test]
    fn settled_stack_matches_resting_layout(
        count in 1usize..14,
        ops in proptest::collection::vec(op(), 0..40),
        policy in policy(),
    ) {
        let config = CarouselConfig::default().busy_policy(policy);
        let (mut carousel, mut animator) = initialized(count, config);

        for op in ops {
            match op {
                Op::Next => { carousel.next(&mut animator); }
                Op::Prev => { carousel.prev(&mut animator); }
                Op::Tick(ms) => {
                    for ticket in animator.tick(Duration::from_millis(ms)) {
                        carousel.on_animation_complete(ticket, &mut animator);
                    }
                }
            }
            let center = carousel.center_index().expect("initialized");
            prop_assert!(center < count);
        }

        run_to_idle(&mut carousel, &mut animator);
        let center = carousel.center_index().expect("initialized");
        let mains = carousel
            .visual_states()
            .iter()
            .filter(|s| s.depth_order == carousel.config().base_depth)
            .count();
        prop_assert_eq!(mains, 1);
        prop_assert_eq!(carousel.visual_state(center).map(|s| s.slot), Some(0));

        for index in 0..count {
            prop_assert_eq!(carousel.visual_state(index), carousel.resting_state(index));
            prop_assert_eq!(animator.current_state(index), carousel.resting_state(index));
        }
        prop_assert_eq!(carousel.reached_left_boundary(), center == 0);
        prop_assert_eq!(carousel.reached_right_boundary(), center + 1 == count);
    }

    #[test]
    fn each_started_step_moves_center_by_one(
        count in 2usize..10,
        forward in proptest::collection::vec(any::<bool>(), 1..20),
    ) {
        let (mut carousel, mut animator) = initialized(count, CarouselConfig::default());
        for go_forward in forward {
            let before = carousel.center_index().expect("initialized");
            let outcome = if go_forward {
                carousel.next(&mut animator)
            } else {
                carousel.prev(&mut animator)
            };
            let after = carousel.center_index().expect("initialized");
            match outcome {
                NavOutcome::Started { from, to } => {
                    prop_assert_eq!(from, before);
                    prop_assert_eq!(to, after);
                    prop_assert_eq!(before.abs_diff(after), 1);
                    prop_assert!(carousel.is_transitioning());
                }
                NavOutcome::AtBoundary => prop_assert_eq!(before, after),
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
            run_to_idle(&mut carousel, &mut animator);
        }
    }

    #[test]
    fn layout_scale_is_clamped_and_depth_monotonic(
        step in 0.01f32..=1.0,
        floor in 0.01f32..=1.0,
        distance in -200i32..200,
    ) {
        let layout = StackLayout {
            scale_step: step,
            min_scale: floor,
            ..StackLayout::default()
        };
        let scale = layout.scale_for(distance);
        prop_assert!(scale >= floor.min(1.0) && scale <= 1.0);
        prop_assert_eq!(layout.scale_for(distance), layout.scale_for(-distance));
        prop_assert!(layout.depth_for(distance.abs() + 1) < layout.depth_for(distance.abs()));
        let offset = layout.offset_for(distance);
        match distance.signum() {
            0 => prop_assert_eq!(offset, 0.0),
            1 => prop_assert!(offset > 0.0),
            _ => prop_assert!(offset < 0.0),
        }
    }
}
