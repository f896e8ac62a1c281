//! Touchable facade: gesture configs, callbacks and the interaction gate
//! of one visual object.

use super::callbacks::{
    CallbackId, EdgePanEvent, GestureCallbackRegistry, GestureEvent, LongPressEvent, PanEvent,
    PinchEvent, RotationEvent, SwipeEvent, TapEvent,
};
use super::gestures::{EdgePan, GestureConfig, LongPress, Pan, Pinch, Rotation, Swipe, Tap};
use super::kinds::GestureKind;
use super::recognizer::SlotStatus;
use super::GestureError;
use crate::storage::config::{
    EdgePanSettings, GestureSettings, LongPressSettings, PanSettings, SwipeSettings, TapSettings,
    ToggleSettings,
};

/// Gesture state owned by a visual object.
#[derive(Debug)]
pub struct TouchableFacade {
    interaction_enabled: bool,
    tap: Tap,
    pan: Pan,
    pinch: Pinch,
    rotation: Rotation,
    long_press: LongPress,
    swipe: Swipe,
    edge_pan: EdgePan,
    callbacks: GestureCallbackRegistry,
}

impl Default for TouchableFacade {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchableFacade {
    /// Create a facade with default configs and no recognizers attached.
    pub fn new() -> Self {
        Self {
            interaction_enabled: true,
            tap: Tap::default(),
            pan: Pan::default(),
            pinch: Pinch::default(),
            rotation: Rotation::default(),
            long_press: LongPress::default(),
            swipe: Swipe::default(),
            edge_pan: EdgePan::default(),
            callbacks: GestureCallbackRegistry::new(),
        }
    }

    /// Create a facade configured from persisted settings.
    pub fn from_settings(settings: &GestureSettings) -> Self {
        let mut facade = Self::new();
        facade.apply_settings(settings);
        facade
    }

    /// Write every setting through the configs, forwarding to attached
    /// recognizers.
    pub fn apply_settings(&mut self, settings: &GestureSettings) {
        let TapSettings {
            enabled,
            number_of_taps_required,
            number_of_touches_required,
        } = settings.tap;
        self.tap.set_number_of_taps_required(number_of_taps_required);
        self.tap.set_number_of_touches_required(number_of_touches_required);
        self.tap.set_enabled(enabled);

        let PanSettings {
            enabled,
            minimum_number_of_touches,
            maximum_number_of_touches,
        } = settings.pan;
        self.pan.set_minimum_number_of_touches(minimum_number_of_touches);
        self.pan.set_maximum_number_of_touches(maximum_number_of_touches);
        self.pan.set_enabled(enabled);

        self.pinch.set_enabled(settings.pinch.enabled);
        self.rotation.set_enabled(settings.rotation.enabled);

        let LongPressSettings {
            enabled,
            minimum_press_duration,
            number_of_taps_required,
            number_of_touches_required,
            allowable_movement,
        } = settings.long_press;
        self.long_press.set_minimum_press_duration(minimum_press_duration);
        self.long_press.set_number_of_taps_required(number_of_taps_required);
        self.long_press.set_number_of_touches_required(number_of_touches_required);
        self.long_press.set_allowable_movement(allowable_movement);
        self.long_press.set_enabled(enabled);

        let SwipeSettings {
            enabled,
            direction,
            number_of_touches_required,
        } = settings.swipe;
        self.swipe.set_direction(direction);
        self.swipe.set_number_of_touches_required(number_of_touches_required);
        self.swipe.set_enabled(enabled);

        self.edge_pan.set_edges(settings.edge_pan.edges);
        self.edge_pan.set_enabled(settings.edge_pan.enabled);

        self.set_interaction_enabled(settings.interaction_enabled);
    }

    /// Snapshot of the current configuration.
    pub fn settings(&self) -> GestureSettings {
        GestureSettings {
            interaction_enabled: self.interaction_enabled,
            tap: TapSettings {
                enabled: self.tap.enabled(),
                number_of_taps_required: self.tap.number_of_taps_required(),
                number_of_touches_required: self.tap.number_of_touches_required(),
            },
            pan: PanSettings {
                enabled: self.pan.enabled(),
                minimum_number_of_touches: self.pan.minimum_number_of_touches(),
                maximum_number_of_touches: self.pan.maximum_number_of_touches(),
            },
            pinch: ToggleSettings {
                enabled: self.pinch.enabled(),
            },
            rotation: ToggleSettings {
                enabled: self.rotation.enabled(),
            },
            long_press: LongPressSettings {
                enabled: self.long_press.enabled(),
                minimum_press_duration: self.long_press.minimum_press_duration(),
                number_of_taps_required: self.long_press.number_of_taps_required(),
                number_of_touches_required: self.long_press.number_of_touches_required(),
                allowable_movement: self.long_press.allowable_movement(),
            },
            swipe: SwipeSettings {
                enabled: self.swipe.enabled(),
                direction: self.swipe.direction(),
                number_of_touches_required: self.swipe.number_of_touches_required(),
            },
            edge_pan: EdgePanSettings {
                enabled: self.edge_pan.enabled(),
                edges: self.edge_pan.edges(),
            },
        }
    }

    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Gate recognition for every kind. Disabling forwards `false` to all
    /// attached recognizers; enabling restores each kind's own flag.
    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        if self.interaction_enabled != enabled {
            tracing::info!(enabled, "interaction toggled");
        }
        self.interaction_enabled = enabled;
        self.tap.slot_mut().set_interaction_enabled(enabled);
        self.pan.slot_mut().set_interaction_enabled(enabled);
        self.pinch.slot_mut().set_interaction_enabled(enabled);
        self.rotation.slot_mut().set_interaction_enabled(enabled);
        self.long_press.slot_mut().set_interaction_enabled(enabled);
        self.swipe.slot_mut().set_interaction_enabled(enabled);
        self.edge_pan.slot_mut().set_interaction_enabled(enabled);
    }

    /// Whether events of `kind` are currently delivered to callbacks.
    pub fn is_recognizing(&self, kind: GestureKind) -> bool {
        self.interaction_enabled
            && match kind {
                GestureKind::Tap => self.tap.enabled(),
                GestureKind::Pan => self.pan.enabled(),
                GestureKind::Pinch => self.pinch.enabled(),
                GestureKind::Rotation => self.rotation.enabled(),
                GestureKind::LongPress => self.long_press.enabled(),
                GestureKind::Swipe => self.swipe.enabled(),
                GestureKind::EdgePan => self.edge_pan.enabled(),
            }
    }

    /// Recognizer slot state for `kind`.
    pub fn status(&self, kind: GestureKind) -> SlotStatus {
        match kind {
            GestureKind::Tap => self.tap.status(),
            GestureKind::Pan => self.pan.status(),
            GestureKind::Pinch => self.pinch.status(),
            GestureKind::Rotation => self.rotation.status(),
            GestureKind::LongPress => self.long_press.status(),
            GestureKind::Swipe => self.swipe.status(),
            GestureKind::EdgePan => self.edge_pan.status(),
        }
    }

    /// The owning object left its hierarchy; forget every recognizer.
    pub fn detach_all(&mut self) {
        self.tap.detach();
        self.pan.detach();
        self.pinch.detach();
        self.rotation.detach();
        self.long_press.detach();
        self.swipe.detach();
        self.edge_pan.detach();
    }

    pub fn tap(&self) -> &Tap {
        &self.tap
    }

    pub fn tap_mut(&mut self) -> &mut Tap {
        &mut self.tap
    }

    pub fn pan(&self) -> &Pan {
        &self.pan
    }

    pub fn pan_mut(&mut self) -> &mut Pan {
        &mut self.pan
    }

    pub fn pinch(&self) -> &Pinch {
        &self.pinch
    }

    pub fn pinch_mut(&mut self) -> &mut Pinch {
        &mut self.pinch
    }

    pub fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    pub fn long_press(&self) -> &LongPress {
        &self.long_press
    }

    pub fn long_press_mut(&mut self) -> &mut LongPress {
        &mut self.long_press
    }

    pub fn swipe(&self) -> &Swipe {
        &self.swipe
    }

    pub fn swipe_mut(&mut self) -> &mut Swipe {
        &mut self.swipe
    }

    pub fn edge_pan(&self) -> &EdgePan {
        &self.edge_pan
    }

    pub fn edge_pan_mut(&mut self) -> &mut EdgePan {
        &mut self.edge_pan
    }

    pub fn callbacks(&self) -> &GestureCallbackRegistry {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut GestureCallbackRegistry {
        &mut self.callbacks
    }

    pub fn on_tap<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(TapEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_tap(f)
    }

    pub fn on_pan<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(PanEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_pan(f)
    }

    pub fn on_pinch<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(PinchEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_pinch(f)
    }

    pub fn on_rotate<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(RotationEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_rotate(f)
    }

    pub fn on_long_press<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(LongPressEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_long_press(f)
    }

    pub fn on_swipe<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(SwipeEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_swipe(f)
    }

    pub fn on_edge_pan<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(EdgePanEvent) -> anyhow::Result<()> + 'static,
    {
        self.callbacks.on_edge_pan(f)
    }

    /// Deliver a recognized gesture. Events for kinds that are not
    /// recognizing are dropped and report zero callbacks run.
    pub fn handle_event(&mut self, event: GestureEvent) -> Result<usize, GestureError> {
        let kind = event.kind();
        if !self.is_recognizing(kind) {
            tracing::debug!(%kind, "gesture dropped, recognition disabled");
            return Ok(0);
        }
        self.callbacks.dispatch(event)
    }
}

/// Gesture capability of a visual object.
///
/// Implementors compose a [`TouchableFacade`] and expose it; every other
/// method is provided.
pub trait Touchable {
    fn touchable(&self) -> &TouchableFacade;

    fn touchable_mut(&mut self) -> &mut TouchableFacade;

    fn interaction_enabled(&self) -> bool {
        self.touchable().interaction_enabled()
    }

    fn set_interaction_enabled(&mut self, enabled: bool) {
        self.touchable_mut().set_interaction_enabled(enabled);
    }

    fn tap(&mut self) -> &mut Tap {
        self.touchable_mut().tap_mut()
    }

    fn pan(&mut self) -> &mut Pan {
        self.touchable_mut().pan_mut()
    }

    fn swipe(&mut self) -> &mut Swipe {
        self.touchable_mut().swipe_mut()
    }

    fn long_press(&mut self) -> &mut LongPress {
        self.touchable_mut().long_press_mut()
    }

    fn edge_pan(&mut self) -> &mut EdgePan {
        self.touchable_mut().edge_pan_mut()
    }

    fn on_tap(&mut self, f: impl FnMut(TapEvent) -> anyhow::Result<()> + 'static) -> CallbackId {
        self.touchable_mut().on_tap(f)
    }

    fn on_pan(&mut self, f: impl FnMut(PanEvent) -> anyhow::Result<()> + 'static) -> CallbackId {
        self.touchable_mut().on_pan(f)
    }

    fn on_pinch(
        &mut self,
        f: impl FnMut(PinchEvent) -> anyhow::Result<()> + 'static,
    ) -> CallbackId {
        self.touchable_mut().on_pinch(f)
    }

    fn on_rotate(
        &mut self,
        f: impl FnMut(RotationEvent) -> anyhow::Result<()> + 'static,
    ) -> CallbackId {
        self.touchable_mut().on_rotate(f)
    }

    fn on_long_press(
        &mut self,
        f: impl FnMut(LongPressEvent) -> anyhow::Result<()> + 'static,
    ) -> CallbackId {
        self.touchable_mut().on_long_press(f)
    }

    fn on_swipe(
        &mut self,
        f: impl FnMut(SwipeEvent) -> anyhow::Result<()> + 'static,
    ) -> CallbackId {
        self.touchable_mut().on_swipe(f)
    }

    fn on_edge_pan(
        &mut self,
        f: impl FnMut(EdgePanEvent) -> anyhow::Result<()> + 'static,
    ) -> CallbackId {
        self.touchable_mut().on_edge_pan(f)
    }

    fn handle_event(&mut self, event: GestureEvent) -> Result<usize, GestureError> {
        self.touchable_mut().handle_event(event)
    }
}

impl Touchable for TouchableFacade {
    fn touchable(&self) -> &TouchableFacade {
        self
    }

    fn touchable_mut(&mut self) -> &mut TouchableFacade {
        self
    }
}
