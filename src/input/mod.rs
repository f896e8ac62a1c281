//! Gesture input module.
//!
//! Provides per-kind gesture configuration forwarded to platform
//! recognizers, callback registration, and the touchable facade that ties
//! them to a visual object.

pub mod callbacks;
pub mod gestures;
pub mod kinds;
pub mod platform;
pub mod recognizer;
pub mod touchable;

use thiserror::Error;

// Re-export types
pub use callbacks::{
    CallbackId, EdgePanEvent, GestureCallback, GestureCallbackRegistry, GestureEvent,
    LongPressEvent, PanEvent, PinchEvent, RotationEvent, SwipeEvent, TapEvent,
};
pub use gestures::{EdgePan, GestureConfig, LongPress, Pan, Pinch, Rotation, Swipe, Tap};
pub use kinds::{GestureKind, RectEdge, SwipeDirection};
pub use recognizer::{
    EdgePanRecognizer, GestureRecognizer, LongPressRecognizer, PanRecognizer, PinchRecognizer,
    RecognizerSlot, RotationRecognizer, SlotStatus, SwipeRecognizer, TapRecognizer,
};
pub use touchable::{Touchable, TouchableFacade};

/// Gesture dispatch errors
#[derive(Debug, Error)]
pub enum GestureError {
    #[error("{kind} callback #{position} failed: {source}")]
    CallbackFailed {
        kind: GestureKind,
        position: usize,
        #[source]
        source: anyhow::Error,
    },
}
