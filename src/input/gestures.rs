//! Per-kind gesture configuration.
//!
//! Each config stores its fields locally and pushes every write to the
//! attached recognizer, if one is alive. Attaching a recognizer pushes the
//! whole retained configuration, so values written while unattached are
//! never lost.

use super::kinds::{GestureKind, RectEdge, SwipeDirection};
use super::recognizer::{
    EdgePanRecognizer, GestureRecognizer, LongPressRecognizer, PanRecognizer, PinchRecognizer,
    RecognizerSlot, RotationRecognizer, SlotStatus, SwipeRecognizer, TapRecognizer,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Behaviour common to every gesture config.
pub trait GestureConfig {
    /// Recognizer interface this config forwards to.
    type Recognizer: ?Sized + GestureRecognizer;

    fn slot(&self) -> &RecognizerSlot<Self::Recognizer>;

    fn slot_mut(&mut self) -> &mut RecognizerSlot<Self::Recognizer>;

    /// Push every kind-specific field to the recognizer.
    fn push_fields(&self);

    fn kind(&self) -> GestureKind {
        self.slot().kind()
    }

    fn status(&self) -> SlotStatus {
        self.slot().status()
    }

    fn is_attached(&self) -> bool {
        self.slot().is_attached()
    }

    /// Forget the recognizer. Later writes are retained only.
    fn detach(&mut self) {
        self.slot_mut().detach();
    }

    fn enabled(&self) -> bool {
        self.slot().enabled()
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.slot_mut().set_enabled(enabled);
    }

    /// Push the full retained configuration, enabled flag included.
    fn sync(&self) {
        self.push_fields();
        self.slot().push_enabled();
    }
}

/// Tap configuration.
#[derive(Debug)]
pub struct Tap {
    slot: RecognizerSlot<dyn TapRecognizer>,
    number_of_taps_required: i64,
    number_of_touches_required: i64,
}

impl Default for Tap {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::Tap),
            number_of_taps_required: 1,
            number_of_touches_required: 1,
        }
    }
}

impl Tap {
    /// Create a config bound to `recognizer`, pushing the defaults.
    pub fn new<T: TapRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut tap = Self::default();
        tap.attach(recognizer);
        tap
    }

    /// Bind to `recognizer` and push the retained configuration.
    pub fn attach<T: TapRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn TapRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }

    pub fn number_of_taps_required(&self) -> i64 {
        self.number_of_taps_required
    }

    pub fn set_number_of_taps_required(&mut self, taps: i64) {
        self.number_of_taps_required = taps;
        self.slot
            .forward("number_of_taps_required", |r| r.set_number_of_taps_required(taps));
    }

    pub fn number_of_touches_required(&self) -> i64 {
        self.number_of_touches_required
    }

    pub fn set_number_of_touches_required(&mut self, touches: i64) {
        self.number_of_touches_required = touches;
        self.slot.forward("number_of_touches_required", |r| {
            r.set_number_of_touches_required(touches)
        });
    }
}

impl GestureConfig for Tap {
    type Recognizer = dyn TapRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn TapRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn TapRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {
        let (taps, touches) = (self.number_of_taps_required, self.number_of_touches_required);
        self.slot.forward("tap", |r| {
            r.set_number_of_taps_required(taps);
            r.set_number_of_touches_required(touches);
        });
    }
}

/// Pan configuration.
#[derive(Debug)]
pub struct Pan {
    slot: RecognizerSlot<dyn PanRecognizer>,
    minimum_number_of_touches: i64,
    maximum_number_of_touches: i64,
}

impl Default for Pan {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::Pan),
            minimum_number_of_touches: 1,
            maximum_number_of_touches: 1,
        }
    }
}

impl Pan {
    /// Create a config bound to `recognizer`, pushing the defaults.
    pub fn new<T: PanRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut pan = Self::default();
        pan.attach(recognizer);
        pan
    }

    /// Bind to `recognizer` and push the retained configuration.
    pub fn attach<T: PanRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn PanRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }

    pub fn minimum_number_of_touches(&self) -> i64 {
        self.minimum_number_of_touches
    }

    pub fn set_minimum_number_of_touches(&mut self, touches: i64) {
        self.minimum_number_of_touches = touches;
        self.slot.forward("minimum_number_of_touches", |r| {
            r.set_minimum_number_of_touches(touches)
        });
    }

    pub fn maximum_number_of_touches(&self) -> i64 {
        self.maximum_number_of_touches
    }

    pub fn set_maximum_number_of_touches(&mut self, touches: i64) {
        self.maximum_number_of_touches = touches;
        self.slot.forward("maximum_number_of_touches", |r| {
            r.set_maximum_number_of_touches(touches)
        });
    }
}

impl GestureConfig for Pan {
    type Recognizer = dyn PanRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn PanRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn PanRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {
        let (min, max) = (self.minimum_number_of_touches, self.maximum_number_of_touches);
        self.slot.forward("touch_range", |r| {
            r.set_minimum_number_of_touches(min);
            r.set_maximum_number_of_touches(max);
        });
    }
}

/// Pinch configuration. Carries only the enabled flag.
#[derive(Debug)]
pub struct Pinch {
    slot: RecognizerSlot<dyn PinchRecognizer>,
}

impl Default for Pinch {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::Pinch),
        }
    }
}

impl Pinch {
    pub fn new<T: PinchRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut pinch = Self::default();
        pinch.attach(recognizer);
        pinch
    }

    pub fn attach<T: PinchRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn PinchRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }
}

impl GestureConfig for Pinch {
    type Recognizer = dyn PinchRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn PinchRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn PinchRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {}
}

/// Rotation configuration. Carries only the enabled flag.
#[derive(Debug)]
pub struct Rotation {
    slot: RecognizerSlot<dyn RotationRecognizer>,
}

impl Default for Rotation {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::Rotation),
        }
    }
}

impl Rotation {
    pub fn new<T: RotationRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut rotation = Self::default();
        rotation.attach(recognizer);
        rotation
    }

    pub fn attach<T: RotationRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn RotationRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }
}

impl GestureConfig for Rotation {
    type Recognizer = dyn RotationRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn RotationRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn RotationRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {}
}

/// Long-press configuration.
#[derive(Debug)]
pub struct LongPress {
    slot: RecognizerSlot<dyn LongPressRecognizer>,
    minimum_press_duration: f64,
    number_of_taps_required: i64,
    number_of_touches_required: i64,
    allowable_movement: f64,
}

impl Default for LongPress {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::LongPress),
            minimum_press_duration: 0.25,
            number_of_taps_required: 0,
            number_of_touches_required: 1,
            allowable_movement: 10.0,
        }
    }
}

impl LongPress {
    /// Create a config bound to `recognizer`, pushing the defaults.
    pub fn new<T: LongPressRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut long_press = Self::default();
        long_press.attach(recognizer);
        long_press
    }

    /// Bind to `recognizer` and push the retained configuration.
    pub fn attach<T: LongPressRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn LongPressRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }

    /// Seconds the press must be held.
    pub fn minimum_press_duration(&self) -> f64 {
        self.minimum_press_duration
    }

    pub fn set_minimum_press_duration(&mut self, seconds: f64) {
        self.minimum_press_duration = seconds;
        self.slot.forward("minimum_press_duration", |r| {
            r.set_minimum_press_duration(seconds)
        });
    }

    pub fn number_of_taps_required(&self) -> i64 {
        self.number_of_taps_required
    }

    pub fn set_number_of_taps_required(&mut self, taps: i64) {
        self.number_of_taps_required = taps;
        self.slot
            .forward("number_of_taps_required", |r| r.set_number_of_taps_required(taps));
    }

    pub fn number_of_touches_required(&self) -> i64 {
        self.number_of_touches_required
    }

    pub fn set_number_of_touches_required(&mut self, touches: i64) {
        self.number_of_touches_required = touches;
        self.slot.forward("number_of_touches_required", |r| {
            r.set_number_of_touches_required(touches)
        });
    }

    /// Points the touch may drift before the press fails.
    pub fn allowable_movement(&self) -> f64 {
        self.allowable_movement
    }

    pub fn set_allowable_movement(&mut self, points: f64) {
        self.allowable_movement = points;
        self.slot
            .forward("allowable_movement", |r| r.set_allowable_movement(points));
    }
}

impl GestureConfig for LongPress {
    type Recognizer = dyn LongPressRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn LongPressRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn LongPressRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {
        let duration = self.minimum_press_duration;
        let taps = self.number_of_taps_required;
        let touches = self.number_of_touches_required;
        let movement = self.allowable_movement;
        self.slot.forward("long_press", |r| {
            r.set_minimum_press_duration(duration);
            r.set_number_of_taps_required(taps);
            r.set_number_of_touches_required(touches);
            r.set_allowable_movement(movement);
        });
    }
}

/// Swipe configuration.
#[derive(Debug)]
pub struct Swipe {
    slot: RecognizerSlot<dyn SwipeRecognizer>,
    direction: SwipeDirection,
    number_of_touches_required: i64,
}

impl Default for Swipe {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::Swipe),
            direction: SwipeDirection::Left,
            number_of_touches_required: 1,
        }
    }
}

impl Swipe {
    /// Create a config bound to `recognizer`, pushing the defaults.
    pub fn new<T: SwipeRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut swipe = Self::default();
        swipe.attach(recognizer);
        swipe
    }

    /// Bind to `recognizer` and push the retained configuration.
    pub fn attach<T: SwipeRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn SwipeRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }

    pub fn direction(&self) -> SwipeDirection {
        self.direction
    }

    pub fn set_direction(&mut self, direction: SwipeDirection) {
        self.direction = direction;
        self.slot.forward("direction", |r| r.set_direction(direction));
    }

    pub fn number_of_touches_required(&self) -> i64 {
        self.number_of_touches_required
    }

    pub fn set_number_of_touches_required(&mut self, touches: i64) {
        self.number_of_touches_required = touches;
        self.slot.forward("number_of_touches_required", |r| {
            r.set_number_of_touches_required(touches)
        });
    }
}

impl GestureConfig for Swipe {
    type Recognizer = dyn SwipeRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn SwipeRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn SwipeRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {
        let (direction, touches) = (self.direction, self.number_of_touches_required);
        self.slot.forward("swipe", |r| {
            r.set_direction(direction);
            r.set_number_of_touches_required(touches);
        });
    }
}

/// Screen-edge pan configuration.
#[derive(Debug)]
pub struct EdgePan {
    slot: RecognizerSlot<dyn EdgePanRecognizer>,
    edges: RectEdge,
}

impl Default for EdgePan {
    fn default() -> Self {
        Self {
            slot: RecognizerSlot::new(GestureKind::EdgePan),
            edges: RectEdge::Left,
        }
    }
}

impl EdgePan {
    pub fn new<T: EdgePanRecognizer + 'static>(recognizer: &Rc<RefCell<T>>) -> Self {
        let mut edge_pan = Self::default();
        edge_pan.attach(recognizer);
        edge_pan
    }

    pub fn attach<T: EdgePanRecognizer + 'static>(&mut self, recognizer: &Rc<RefCell<T>>) {
        let recognizer: Rc<RefCell<dyn EdgePanRecognizer>> = recognizer.clone();
        self.slot.link(Rc::downgrade(&recognizer));
        self.sync();
    }

    pub fn edges(&self) -> RectEdge {
        self.edges
    }

    pub fn set_edges(&mut self, edges: RectEdge) {
        self.edges = edges;
        self.slot.forward("edges", |r| r.set_edges(edges));
    }
}

impl GestureConfig for EdgePan {
    type Recognizer = dyn EdgePanRecognizer;

    fn slot(&self) -> &RecognizerSlot<dyn EdgePanRecognizer> {
        &self.slot
    }

    fn slot_mut(&mut self) -> &mut RecognizerSlot<dyn EdgePanRecognizer> {
        &mut self.slot
    }

    fn push_fields(&self) {
        let edges = self.edges;
        self.slot.forward("edges", |r| r.set_edges(edges));
    }
}
