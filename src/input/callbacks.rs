//! Gesture event payloads and the per-kind callback registry.
//!
//! Callbacks run synchronously in registration order. The first callback
//! that returns an error stops the dispatch; later callbacks for that
//! event do not run.

use super::kinds::{GestureKind, SwipeDirection};
use super::GestureError;
use egui::{Pos2, Vec2};
use uuid::Uuid;

/// Tap recognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapEvent {
    pub location: Pos2,
}

/// Pan update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanEvent {
    pub location: Pos2,
    /// Offset since the pan began
    pub translation: Vec2,
    /// Points per second
    pub velocity: Vec2,
}

/// Pinch update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchEvent {
    pub location: Pos2,
    /// Scale relative to the start of the pinch
    pub scale: f64,
    /// Scale factor per second
    pub velocity: f64,
}

/// Rotation update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationEvent {
    pub location: Pos2,
    /// Radians since the rotation began
    pub rotation: f64,
    /// Radians per second
    pub velocity: f64,
}

/// Long press recognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongPressEvent {
    pub location: Pos2,
}

/// Swipe recognized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeEvent {
    pub location: Pos2,
    pub direction: SwipeDirection,
}

/// Edge pan update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgePanEvent {
    pub location: Pos2,
}

/// A recognized gesture, as delivered by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Tap(TapEvent),
    Pan(PanEvent),
    Pinch(PinchEvent),
    Rotation(RotationEvent),
    LongPress(LongPressEvent),
    Swipe(SwipeEvent),
    EdgePan(EdgePanEvent),
}

impl GestureEvent {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureEvent::Tap(_) => GestureKind::Tap,
            GestureEvent::Pan(_) => GestureKind::Pan,
            GestureEvent::Pinch(_) => GestureKind::Pinch,
            GestureEvent::Rotation(_) => GestureKind::Rotation,
            GestureEvent::LongPress(_) => GestureKind::LongPress,
            GestureEvent::Swipe(_) => GestureKind::Swipe,
            GestureEvent::EdgePan(_) => GestureKind::EdgePan,
        }
    }

    /// Location of the gesture in the owning object's coordinates.
    pub fn location(&self) -> Pos2 {
        match self {
            GestureEvent::Tap(e) => e.location,
            GestureEvent::Pan(e) => e.location,
            GestureEvent::Pinch(e) => e.location,
            GestureEvent::Rotation(e) => e.location,
            GestureEvent::LongPress(e) => e.location,
            GestureEvent::Swipe(e) => e.location,
            GestureEvent::EdgePan(e) => e.location,
        }
    }
}

pub type TapAction = Box<dyn FnMut(TapEvent) -> anyhow::Result<()>>;
pub type PanAction = Box<dyn FnMut(PanEvent) -> anyhow::Result<()>>;
pub type PinchAction = Box<dyn FnMut(PinchEvent) -> anyhow::Result<()>>;
pub type RotationAction = Box<dyn FnMut(RotationEvent) -> anyhow::Result<()>>;
pub type LongPressAction = Box<dyn FnMut(LongPressEvent) -> anyhow::Result<()>>;
pub type SwipeAction = Box<dyn FnMut(SwipeEvent) -> anyhow::Result<()>>;
pub type EdgePanAction = Box<dyn FnMut(EdgePanEvent) -> anyhow::Result<()>>;

/// A callback tagged with the gesture kind it listens to.
pub enum GestureCallback {
    Tap(TapAction),
    Pan(PanAction),
    Pinch(PinchAction),
    Rotation(RotationAction),
    LongPress(LongPressAction),
    Swipe(SwipeAction),
    EdgePan(EdgePanAction),
}

impl GestureCallback {
    pub fn kind(&self) -> GestureKind {
        match self {
            GestureCallback::Tap(_) => GestureKind::Tap,
            GestureCallback::Pan(_) => GestureKind::Pan,
            GestureCallback::Pinch(_) => GestureKind::Pinch,
            GestureCallback::Rotation(_) => GestureKind::Rotation,
            GestureCallback::LongPress(_) => GestureKind::LongPress,
            GestureCallback::Swipe(_) => GestureKind::Swipe,
            GestureCallback::EdgePan(_) => GestureKind::EdgePan,
        }
    }
}

impl std::fmt::Debug for GestureCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GestureCallback::{}", self.kind())
    }
}

/// Handle returned by registration, used to remove a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallbackId(Uuid);

impl CallbackId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for CallbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct CallbackList<E> {
    kind: GestureKind,
    entries: Vec<(CallbackId, Box<dyn FnMut(E) -> anyhow::Result<()>>)>,
}

impl<E: Copy> CallbackList<E> {
    fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    fn push(&mut self, callback: Box<dyn FnMut(E) -> anyhow::Result<()>>) -> CallbackId {
        let id = CallbackId::new();
        self.entries.push((id, callback));
        tracing::debug!(kind = %self.kind, %id, count = self.entries.len(), "callback registered");
        id
    }

    fn remove(&mut self, id: CallbackId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        before != self.entries.len()
    }

    fn dispatch(&mut self, event: E) -> Result<usize, GestureError> {
        let kind = self.kind;
        for (position, (_, callback)) in self.entries.iter_mut().enumerate() {
            callback(event).map_err(|source| GestureError::CallbackFailed {
                kind,
                position,
                source,
            })?;
        }
        Ok(self.entries.len())
    }
}

/// Ordered callbacks for every gesture kind.
pub struct GestureCallbackRegistry {
    tap: CallbackList<TapEvent>,
    pan: CallbackList<PanEvent>,
    pinch: CallbackList<PinchEvent>,
    rotation: CallbackList<RotationEvent>,
    long_press: CallbackList<LongPressEvent>,
    swipe: CallbackList<SwipeEvent>,
    edge_pan: CallbackList<EdgePanEvent>,
}

impl Default for GestureCallbackRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureCallbackRegistry {
    pub fn new() -> Self {
        Self {
            tap: CallbackList::new(GestureKind::Tap),
            pan: CallbackList::new(GestureKind::Pan),
            pinch: CallbackList::new(GestureKind::Pinch),
            rotation: CallbackList::new(GestureKind::Rotation),
            long_press: CallbackList::new(GestureKind::LongPress),
            swipe: CallbackList::new(GestureKind::Swipe),
            edge_pan: CallbackList::new(GestureKind::EdgePan),
        }
    }

    /// Append a callback after those already registered for its kind.
    pub fn register(&mut self, callback: GestureCallback) -> CallbackId {
        match callback {
            GestureCallback::Tap(f) => self.tap.push(f),
            GestureCallback::Pan(f) => self.pan.push(f),
            GestureCallback::Pinch(f) => self.pinch.push(f),
            GestureCallback::Rotation(f) => self.rotation.push(f),
            GestureCallback::LongPress(f) => self.long_press.push(f),
            GestureCallback::Swipe(f) => self.swipe.push(f),
            GestureCallback::EdgePan(f) => self.edge_pan.push(f),
        }
    }

    pub fn on_tap<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(TapEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::Tap(Box::new(f)))
    }

    pub fn on_pan<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(PanEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::Pan(Box::new(f)))
    }

    pub fn on_pinch<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(PinchEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::Pinch(Box::new(f)))
    }

    pub fn on_rotate<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(RotationEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::Rotation(Box::new(f)))
    }

    pub fn on_long_press<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(LongPressEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::LongPress(Box::new(f)))
    }

    pub fn on_swipe<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(SwipeEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::Swipe(Box::new(f)))
    }

    pub fn on_edge_pan<F>(&mut self, f: F) -> CallbackId
    where
        F: FnMut(EdgePanEvent) -> anyhow::Result<()> + 'static,
    {
        self.register(GestureCallback::EdgePan(Box::new(f)))
    }

    /// Remove a callback. Remaining callbacks keep their order.
    pub fn remove(&mut self, id: CallbackId) -> bool {
        let removed = self.tap.remove(id)
            || self.pan.remove(id)
            || self.pinch.remove(id)
            || self.rotation.remove(id)
            || self.long_press.remove(id)
            || self.swipe.remove(id)
            || self.edge_pan.remove(id);
        if removed {
            tracing::debug!(%id, "callback removed");
        }
        removed
    }

    /// Invoke every callback registered for the event's kind. Returns the
    /// number of callbacks run.
    pub fn dispatch(&mut self, event: GestureEvent) -> Result<usize, GestureError> {
        tracing::trace!(kind = %event.kind(), "dispatching gesture");
        match event {
            GestureEvent::Tap(e) => self.tap.dispatch(e),
            GestureEvent::Pan(e) => self.pan.dispatch(e),
            GestureEvent::Pinch(e) => self.pinch.dispatch(e),
            GestureEvent::Rotation(e) => self.rotation.dispatch(e),
            GestureEvent::LongPress(e) => self.long_press.dispatch(e),
            GestureEvent::Swipe(e) => self.swipe.dispatch(e),
            GestureEvent::EdgePan(e) => self.edge_pan.dispatch(e),
        }
    }

    /// Number of callbacks registered for `kind`.
    pub fn len(&self, kind: GestureKind) -> usize {
        match kind {
            GestureKind::Tap => self.tap.entries.len(),
            GestureKind::Pan => self.pan.entries.len(),
            GestureKind::Pinch => self.pinch.entries.len(),
            GestureKind::Rotation => self.rotation.entries.len(),
            GestureKind::LongPress => self.long_press.entries.len(),
            GestureKind::Swipe => self.swipe.entries.len(),
            GestureKind::EdgePan => self.edge_pan.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        GestureKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    /// Drop every callback registered for `kind`.
    pub fn clear(&mut self, kind: GestureKind) {
        match kind {
            GestureKind::Tap => self.tap.entries.clear(),
            GestureKind::Pan => self.pan.entries.clear(),
            GestureKind::Pinch => self.pinch.entries.clear(),
            GestureKind::Rotation => self.rotation.entries.clear(),
            GestureKind::LongPress => self.long_press.entries.clear(),
            GestureKind::Swipe => self.swipe.entries.clear(),
            GestureKind::EdgePan => self.edge_pan.entries.clear(),
        }
    }
}

impl std::fmt::Debug for GestureCallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in GestureKind::ALL {
            map.entry(&kind, &self.len(kind));
        }
        map.finish()
    }
}
