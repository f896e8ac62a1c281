//! Unit tests for gesture config defaults and slot state.

use touchable::input::{
    EdgePan, GestureConfig, GestureKind, LongPress, Pan, Pinch, RectEdge, Rotation, SlotStatus,
    Swipe, SwipeDirection, Tap,
};
use touchable::TouchableFacade;

/// Tap defaults to one tap with one touch.
#[test]
fn test_tap_defaults() {
    let tap = Tap::default();
    assert_eq!(tap.number_of_taps_required(), 1);
    assert_eq!(tap.number_of_touches_required(), 1);
    assert_eq!(tap.kind(), GestureKind::Tap);
}

/// Pan defaults to exactly one touch.
#[test]
fn test_pan_defaults() {
    let pan = Pan::default();
    assert_eq!(pan.minimum_number_of_touches(), 1);
    assert_eq!(pan.maximum_number_of_touches(), 1);
}

/// Long press defaults.
#[test]
fn test_long_press_defaults() {
    let long_press = LongPress::default();
    assert_eq!(long_press.minimum_press_duration(), 0.25);
    assert_eq!(long_press.number_of_taps_required(), 0);
    assert_eq!(long_press.number_of_touches_required(), 1);
    assert_eq!(long_press.allowable_movement(), 10.0);
}

/// Swipe and edge pan default to the left.
#[test]
fn test_directional_defaults() {
    let swipe = Swipe::default();
    assert_eq!(swipe.direction(), SwipeDirection::Left);
    assert_eq!(swipe.number_of_touches_required(), 1);

    assert_eq!(EdgePan::default().edges(), RectEdge::Left);
}

/// Fresh configs are unattached and enabled.
#[test]
fn test_fresh_configs_unattached() {
    assert_eq!(Pinch::default().status(), SlotStatus::Unattached);
    assert_eq!(Rotation::default().status(), SlotStatus::Unattached);
    assert!(Pinch::default().enabled());
    assert!(!Rotation::default().is_attached());
}

/// The facade starts with default configs and interaction enabled.
#[test]
fn test_facade_defaults() {
    let facade = TouchableFacade::default();
    assert!(facade.interaction_enabled());
    assert_eq!(facade.tap().number_of_taps_required(), 1);
    assert_eq!(facade.long_press().minimum_press_duration(), 0.25);
    assert_eq!(facade.swipe().direction(), SwipeDirection::Left);
    assert_eq!(facade.settings(), touchable::GestureSettings::default());
}
