//! Config loading through serde (requires the `serde` feature).
#![cfg(feature = "serde")]

use std::time::Duration;

use stackdeck_carousel::{BusyPolicy, CarouselConfig, TransitionEasing};

#[test]
fn partial_json_fills_defaults() {
    let config: CarouselConfig = serde_json::from_str(
        r#"{ "unit_spacing": 96.0, "transition_duration": 250, "busy_policy": "queue_latest" }"#,
    )
    .expect("config json");
    assert_eq!(config.unit_spacing, 96.0);
    assert_eq!(config.transition_duration, Duration::from_millis(250));
    assert_eq!(config.busy_policy, BusyPolicy::QueueLatest);
    assert_eq!(config.base_depth, 50);
    assert_eq!(config.easing, TransitionEasing::EaseOut);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn durations_serialize_as_milliseconds() {
    let config = CarouselConfig::default().stagger(Duration::from_millis(40));
    let value = serde_json::to_value(&config).expect("serialize");
    assert_eq!(value["transition_duration"], 300);
    assert_eq!(value["stagger"], 40);
    assert_eq!(value["stagger_mode"], "linear");
    assert_eq!(value["anchor"]["top_pct"], 40.0);
}

#[test]
fn deserialized_config_is_still_validated() {
    let config: CarouselConfig =
        serde_json::from_str(r#"{ "scale_step": 0.0 }"#).expect("config json");
    assert!(config.validate().is_err());
}
