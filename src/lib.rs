//! Touchable - gesture configuration for visual objects
//!
//! A toolkit-agnostic layer between visual objects and platform gesture
//! recognizers. Each object owns a [`TouchableFacade`] holding one config per
//! gesture kind, forwards configuration writes to live recognizers, and
//! dispatches recognized gestures to registered callbacks.

pub mod input;
pub mod storage;

// Re-export commonly used types
pub use input::gestures::{EdgePan, GestureConfig, LongPress, Pan, Pinch, Rotation, Swipe, Tap};
pub use input::touchable::{Touchable, TouchableFacade};
pub use input::{GestureError, GestureEvent, GestureKind, RectEdge, SwipeDirection};
pub use storage::config::GestureSettings;
