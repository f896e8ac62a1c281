//! Mock recognizer recording every forwarded write.

use std::cell::RefCell;
use std::rc::Rc;
use touchable::input::{
    EdgePanRecognizer, GestureRecognizer, LongPressRecognizer, PanRecognizer, PinchRecognizer,
    RectEdge, RotationRecognizer, SwipeDirection, SwipeRecognizer, TapRecognizer,
};

/// A single forwarded write.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Enabled(bool),
    TapsRequired(i64),
    TouchesRequired(i64),
    MinimumTouches(i64),
    MaximumTouches(i64),
    PressDuration(f64),
    AllowableMovement(f64),
    Direction(SwipeDirection),
    Edges(RectEdge),
}

/// Stand-in for every platform recognizer kind.
#[derive(Debug, Default)]
pub struct MockRecognizer {
    pub calls: Vec<Call>,
}

impl MockRecognizer {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn last(&self) -> Option<&Call> {
        self.calls.last()
    }

    /// Last enabled flag forwarded, if any.
    pub fn enabled(&self) -> Option<bool> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Enabled(enabled) => Some(*enabled),
            _ => None,
        })
    }

    pub fn contains(&self, call: &Call) -> bool {
        self.calls.contains(call)
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl GestureRecognizer for MockRecognizer {
    fn set_enabled(&mut self, enabled: bool) {
        self.calls.push(Call::Enabled(enabled));
    }
}

impl TapRecognizer for MockRecognizer {
    fn set_number_of_taps_required(&mut self, taps: i64) {
        self.calls.push(Call::TapsRequired(taps));
    }

    fn set_number_of_touches_required(&mut self, touches: i64) {
        self.calls.push(Call::TouchesRequired(touches));
    }
}

impl PanRecognizer for MockRecognizer {
    fn set_minimum_number_of_touches(&mut self, touches: i64) {
        self.calls.push(Call::MinimumTouches(touches));
    }

    fn set_maximum_number_of_touches(&mut self, touches: i64) {
        self.calls.push(Call::MaximumTouches(touches));
    }
}

impl PinchRecognizer for MockRecognizer {}

impl RotationRecognizer for MockRecognizer {}

impl LongPressRecognizer for MockRecognizer {
    fn set_minimum_press_duration(&mut self, seconds: f64) {
        self.calls.push(Call::PressDuration(seconds));
    }

    fn set_number_of_taps_required(&mut self, taps: i64) {
        self.calls.push(Call::TapsRequired(taps));
    }

    fn set_number_of_touches_required(&mut self, touches: i64) {
        self.calls.push(Call::TouchesRequired(touches));
    }

    fn set_allowable_movement(&mut self, points: f64) {
        self.calls.push(Call::AllowableMovement(points));
    }
}

impl SwipeRecognizer for MockRecognizer {
    fn set_direction(&mut self, direction: SwipeDirection) {
        self.calls.push(Call::Direction(direction));
    }

    fn set_number_of_touches_required(&mut self, touches: i64) {
        self.calls.push(Call::TouchesRequired(touches));
    }
}

impl EdgePanRecognizer for MockRecognizer {
    fn set_edges(&mut self, edges: RectEdge) {
        self.calls.push(Call::Edges(edges));
    }
}

/// One mock per gesture kind.
pub struct MockSet {
    pub tap: Rc<RefCell<MockRecognizer>>,
    pub pan: Rc<RefCell<MockRecognizer>>,
    pub pinch: Rc<RefCell<MockRecognizer>>,
    pub rotation: Rc<RefCell<MockRecognizer>>,
    pub long_press: Rc<RefCell<MockRecognizer>>,
    pub swipe: Rc<RefCell<MockRecognizer>>,
    pub edge_pan: Rc<RefCell<MockRecognizer>>,
}

impl MockSet {
    pub fn new() -> Self {
        Self {
            tap: MockRecognizer::shared(),
            pan: MockRecognizer::shared(),
            pinch: MockRecognizer::shared(),
            rotation: MockRecognizer::shared(),
            long_press: MockRecognizer::shared(),
            swipe: MockRecognizer::shared(),
            edge_pan: MockRecognizer::shared(),
        }
    }

    pub fn all(&self) -> [&Rc<RefCell<MockRecognizer>>; 7] {
        [
            &self.tap,
            &self.pan,
            &self.pinch,
            &self.rotation,
            &self.long_press,
            &self.swipe,
            &self.edge_pan,
        ]
    }

    /// Attach every mock to the facade's configs.
    pub fn attach_to(&self, facade: &mut touchable::TouchableFacade) {
        facade.tap_mut().attach(&self.tap);
        facade.pan_mut().attach(&self.pan);
        facade.pinch_mut().attach(&self.pinch);
        facade.rotation_mut().attach(&self.rotation);
        facade.long_press_mut().attach(&self.long_press);
        facade.swipe_mut().attach(&self.swipe);
        facade.edge_pan_mut().attach(&self.edge_pan);
    }

    pub fn clear(&self) {
        for mock in self.all() {
            mock.borrow_mut().clear();
        }
    }
}
