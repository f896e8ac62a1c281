//! Recognizer interfaces consumed by gesture configs, and the non-owning
//! slot configs forward through.
//!
//! Recognizers belong to the platform layer. A config only keeps a
//! [`Weak`] reference; every forward upgrades it first and silently skips
//! when the recognizer is gone.

use super::kinds::{GestureKind, RectEdge, SwipeDirection};
use std::cell::RefCell;
use std::rc::Weak;

/// Behaviour shared by every platform recognizer.
pub trait GestureRecognizer {
    /// Enable or disable recognition.
    fn set_enabled(&mut self, enabled: bool);
}

/// Tap recognizer fields.
pub trait TapRecognizer: GestureRecognizer {
    fn set_number_of_taps_required(&mut self, taps: i64);
    fn set_number_of_touches_required(&mut self, touches: i64);
}

/// Pan recognizer fields.
pub trait PanRecognizer: GestureRecognizer {
    fn set_minimum_number_of_touches(&mut self, touches: i64);
    fn set_maximum_number_of_touches(&mut self, touches: i64);
}

/// Pinch recognizer. Only the enabled flag is configurable.
pub trait PinchRecognizer: GestureRecognizer {}

/// Rotation recognizer. Only the enabled flag is configurable.
pub trait RotationRecognizer: GestureRecognizer {}

/// Long-press recognizer fields.
pub trait LongPressRecognizer: GestureRecognizer {
    /// Press duration in seconds.
    fn set_minimum_press_duration(&mut self, seconds: f64);
    fn set_number_of_taps_required(&mut self, taps: i64);
    fn set_number_of_touches_required(&mut self, touches: i64);
    /// Movement in points tolerated before the press fails.
    fn set_allowable_movement(&mut self, points: f64);
}

/// Swipe recognizer fields.
pub trait SwipeRecognizer: GestureRecognizer {
    fn set_direction(&mut self, direction: SwipeDirection);
    fn set_number_of_touches_required(&mut self, touches: i64);
}

/// Screen-edge pan recognizer fields.
pub trait EdgePanRecognizer: GestureRecognizer {
    fn set_edges(&mut self, edges: RectEdge);
}

/// Observable state of a recognizer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No recognizer was ever attached
    Unattached,
    /// A live recognizer receives forwarded writes
    Attached,
    /// The recognizer was detached or destroyed
    Detached,
}

enum Link<R: ?Sized> {
    Unattached,
    Attached(Weak<RefCell<R>>),
    Detached,
}

/// Non-owning link from a gesture config to its recognizer.
///
/// Also tracks the per-kind enabled flag and the facade-wide interaction
/// gate; the recognizer sees `enabled && interaction_enabled`.
pub struct RecognizerSlot<R: ?Sized> {
    kind: GestureKind,
    link: Link<R>,
    enabled: bool,
    interaction_enabled: bool,
}

impl<R: ?Sized> RecognizerSlot<R> {
    /// Create an unattached slot.
    pub fn new(kind: GestureKind) -> Self {
        Self {
            kind,
            link: Link::Unattached,
            enabled: true,
            interaction_enabled: true,
        }
    }

    /// Gesture kind this slot serves.
    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    /// Current state. An attached recognizer that has been dropped reports
    /// [`SlotStatus::Detached`].
    pub fn status(&self) -> SlotStatus {
        match &self.link {
            Link::Unattached => SlotStatus::Unattached,
            Link::Attached(weak) if weak.strong_count() > 0 => SlotStatus::Attached,
            Link::Attached(_) | Link::Detached => SlotStatus::Detached,
        }
    }

    /// Whether writes are currently forwarded.
    pub fn is_attached(&self) -> bool {
        self.status() == SlotStatus::Attached
    }

    pub(crate) fn link(&mut self, recognizer: Weak<RefCell<R>>) {
        tracing::info!(kind = %self.kind, "recognizer attached");
        self.link = Link::Attached(recognizer);
    }

    /// Drop the recognizer reference. An unattached slot stays unattached.
    pub fn detach(&mut self) {
        if matches!(self.link, Link::Attached(_)) {
            tracing::info!(kind = %self.kind, "recognizer detached");
            self.link = Link::Detached;
        }
    }

    /// Run `apply` against the live recognizer, if any. Returns whether the
    /// write reached a recognizer.
    pub(crate) fn forward<F>(&self, field: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut R),
    {
        let recognizer = match &self.link {
            Link::Attached(weak) => weak.upgrade(),
            Link::Unattached | Link::Detached => None,
        };

        let Some(recognizer) = recognizer else {
            tracing::debug!(kind = %self.kind, field, "no recognizer, value retained");
            return false;
        };

        let Ok(mut recognizer) = recognizer.try_borrow_mut() else {
            tracing::warn!(kind = %self.kind, field, "recognizer busy, write not forwarded");
            return false;
        };

        tracing::trace!(kind = %self.kind, field, "forwarding");
        apply(&mut *recognizer);
        true
    }
}

impl<R: ?Sized + GestureRecognizer> RecognizerSlot<R> {
    /// Per-kind enabled flag, independent of the interaction gate.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enabled state the recognizer actually sees.
    pub fn effective_enabled(&self) -> bool {
        self.enabled && self.interaction_enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.push_enabled();
    }

    pub(crate) fn set_interaction_enabled(&mut self, enabled: bool) {
        self.interaction_enabled = enabled;
        self.push_enabled();
    }

    pub(crate) fn push_enabled(&self) {
        let enabled = self.effective_enabled();
        self.forward("enabled", |r| r.set_enabled(enabled));
    }
}

impl<R: ?Sized> std::fmt::Debug for RecognizerSlot<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecognizerSlot")
            .field("kind", &self.kind)
            .field("status", &self.status())
            .field("enabled", &self.enabled)
            .field("interaction_enabled", &self.interaction_enabled)
            .finish()
    }
}
