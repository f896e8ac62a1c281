//! Integration tests for config forwarding to recognizers.

use super::init_tracing;
use super::recognizer_mock::{Call, MockRecognizer};
use touchable::input::{
    EdgePan, GestureConfig, LongPress, Pan, Pinch, RectEdge, Rotation, SlotStatus, Swipe,
    SwipeDirection, Tap,
};

/// Construction from a live recognizer pushes every default.
#[test]
fn test_new_pushes_defaults() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let _tap = Tap::new(&mock);
    assert!(mock.borrow().contains(&Call::TapsRequired(1)));
    assert!(mock.borrow().contains(&Call::TouchesRequired(1)));
    assert_eq!(mock.borrow().enabled(), Some(true));

    let mock = MockRecognizer::shared();
    let _pan = Pan::new(&mock);
    assert!(mock.borrow().contains(&Call::MinimumTouches(1)));
    assert!(mock.borrow().contains(&Call::MaximumTouches(1)));

    let mock = MockRecognizer::shared();
    let _long_press = LongPress::new(&mock);
    {
        let mock = mock.borrow();
        assert!(mock.contains(&Call::PressDuration(0.25)));
        assert!(mock.contains(&Call::TapsRequired(0)));
        assert!(mock.contains(&Call::TouchesRequired(1)));
        assert!(mock.contains(&Call::AllowableMovement(10.0)));
    }

    let mock = MockRecognizer::shared();
    let _swipe = Swipe::new(&mock);
    assert!(mock.borrow().contains(&Call::Direction(SwipeDirection::Left)));
    assert!(mock.borrow().contains(&Call::TouchesRequired(1)));

    let mock = MockRecognizer::shared();
    let _edge_pan = EdgePan::new(&mock);
    assert!(mock.borrow().contains(&Call::Edges(RectEdge::Left)));

    let mock = MockRecognizer::shared();
    let _pinch = Pinch::new(&mock);
    assert_eq!(mock.borrow().calls, vec![Call::Enabled(true)]);

    let mock = MockRecognizer::shared();
    let _rotation = Rotation::new(&mock);
    assert_eq!(mock.borrow().calls, vec![Call::Enabled(true)]);
}

/// Every write while attached reaches the recognizer immediately.
#[test]
fn test_attached_writes_forward() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let mut tap = Tap::new(&mock);
    tap.set_number_of_taps_required(2);
    assert_eq!(mock.borrow().last(), Some(&Call::TapsRequired(2)));
    tap.set_number_of_touches_required(3);
    assert_eq!(mock.borrow().last(), Some(&Call::TouchesRequired(3)));

    let mock = MockRecognizer::shared();
    let mut pan = Pan::new(&mock);
    pan.set_minimum_number_of_touches(2);
    assert_eq!(mock.borrow().last(), Some(&Call::MinimumTouches(2)));
    pan.set_maximum_number_of_touches(5);
    assert_eq!(mock.borrow().last(), Some(&Call::MaximumTouches(5)));

    let mock = MockRecognizer::shared();
    let mut long_press = LongPress::new(&mock);
    long_press.set_minimum_press_duration(1.5);
    assert_eq!(mock.borrow().last(), Some(&Call::PressDuration(1.5)));
    long_press.set_number_of_taps_required(1);
    assert_eq!(mock.borrow().last(), Some(&Call::TapsRequired(1)));
    long_press.set_number_of_touches_required(2);
    assert_eq!(mock.borrow().last(), Some(&Call::TouchesRequired(2)));
    long_press.set_allowable_movement(25.0);
    assert_eq!(mock.borrow().last(), Some(&Call::AllowableMovement(25.0)));

    let mock = MockRecognizer::shared();
    let mut swipe = Swipe::new(&mock);
    for direction in [
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
        SwipeDirection::Left,
    ] {
        swipe.set_direction(direction);
        assert_eq!(mock.borrow().last(), Some(&Call::Direction(direction)));
    }
    swipe.set_number_of_touches_required(2);
    assert_eq!(mock.borrow().last(), Some(&Call::TouchesRequired(2)));

    let mock = MockRecognizer::shared();
    let mut edge_pan = EdgePan::new(&mock);
    edge_pan.set_edges(RectEdge::Right);
    assert_eq!(mock.borrow().last(), Some(&Call::Edges(RectEdge::Right)));

    let mock = MockRecognizer::shared();
    let mut pinch = Pinch::new(&mock);
    pinch.set_enabled(false);
    assert_eq!(mock.borrow().last(), Some(&Call::Enabled(false)));
}

/// Writes while unattached are stored but never forwarded.
#[test]
fn test_unattached_writes_do_not_forward() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let mut long_press = LongPress::default();

    long_press.set_minimum_press_duration(2.0);
    long_press.set_allowable_movement(0.0);
    long_press.set_enabled(false);

    assert_eq!(long_press.status(), SlotStatus::Unattached);
    assert_eq!(long_press.minimum_press_duration(), 2.0);
    assert_eq!(long_press.allowable_movement(), 0.0);
    assert!(!long_press.enabled());
    assert!(mock.borrow().calls.is_empty());
}

/// After detach, writes are stored and silently skipped.
#[test]
fn test_detached_writes_do_not_forward() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let mut swipe = Swipe::new(&mock);
    swipe.detach();
    mock.borrow_mut().clear();

    swipe.set_direction(SwipeDirection::Up);
    swipe.set_number_of_touches_required(3);

    assert_eq!(swipe.status(), SlotStatus::Detached);
    assert_eq!(swipe.direction(), SwipeDirection::Up);
    assert_eq!(swipe.number_of_touches_required(), 3);
    assert!(mock.borrow().calls.is_empty());
}

/// A destroyed recognizer turns the slot detached without an error.
#[test]
fn test_destroyed_recognizer() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let mut pan = Pan::new(&mock);
    assert_eq!(pan.status(), SlotStatus::Attached);

    drop(mock);
    assert_eq!(pan.status(), SlotStatus::Detached);

    pan.set_maximum_number_of_touches(4);
    assert_eq!(pan.maximum_number_of_touches(), 4);
}

/// Attaching later pushes values written while unattached.
#[test]
fn test_attach_pushes_retained_config() {
    init_tracing();

    let mut long_press = LongPress::default();
    long_press.set_minimum_press_duration(0.8);
    long_press.set_number_of_touches_required(2);

    let mock = MockRecognizer::shared();
    long_press.attach(&mock);

    let mock = mock.borrow();
    assert!(mock.contains(&Call::PressDuration(0.8)));
    assert!(mock.contains(&Call::TouchesRequired(2)));
    assert!(mock.contains(&Call::TapsRequired(0)));
    assert!(mock.contains(&Call::AllowableMovement(10.0)));
    assert_eq!(mock.enabled(), Some(true));
}

/// Re-attaching after detach syncs the new recognizer.
#[test]
fn test_reattach_after_detach() {
    init_tracing();

    let first = MockRecognizer::shared();
    let mut edge_pan = EdgePan::new(&first);
    edge_pan.detach();
    edge_pan.set_edges(RectEdge::Bottom);

    let second = MockRecognizer::shared();
    edge_pan.attach(&second);

    assert_eq!(edge_pan.status(), SlotStatus::Attached);
    assert!(second.borrow().contains(&Call::Edges(RectEdge::Bottom)));
    assert!(!first.borrow().contains(&Call::Edges(RectEdge::Bottom)));
}

/// Out-of-range values pass straight through.
#[test]
fn test_values_pass_through_unvalidated() {
    init_tracing();

    let mock = MockRecognizer::shared();
    let mut pan = Pan::new(&mock);
    pan.set_minimum_number_of_touches(10);
    pan.set_maximum_number_of_touches(0);

    assert_eq!(pan.minimum_number_of_touches(), 10);
    assert_eq!(pan.maximum_number_of_touches(), 0);
    assert_eq!(mock.borrow().last(), Some(&Call::MaximumTouches(0)));
}
