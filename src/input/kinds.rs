//! Gesture kinds and the small enums carried by gesture configs and events.

use serde::{Deserialize, Serialize};

/// Gesture kinds a touchable object can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureKind {
    /// Single or multi tap
    Tap,
    /// Drag with one or more fingers
    Pan,
    /// Two-finger pinch
    Pinch,
    /// Two-finger rotation
    Rotation,
    /// Press and hold
    LongPress,
    /// Discrete swipe in one direction
    Swipe,
    /// Pan starting at a screen edge
    EdgePan,
}

impl GestureKind {
    /// Every kind, in declaration order.
    pub const ALL: [GestureKind; 7] = [
        GestureKind::Tap,
        GestureKind::Pan,
        GestureKind::Pinch,
        GestureKind::Rotation,
        GestureKind::LongPress,
        GestureKind::Swipe,
        GestureKind::EdgePan,
    ];
}

impl std::fmt::Display for GestureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GestureKind::Tap => write!(f, "Tap"),
            GestureKind::Pan => write!(f, "Pan"),
            GestureKind::Pinch => write!(f, "Pinch"),
            GestureKind::Rotation => write!(f, "Rotation"),
            GestureKind::LongPress => write!(f, "LongPress"),
            GestureKind::Swipe => write!(f, "Swipe"),
            GestureKind::EdgePan => write!(f, "EdgePan"),
        }
    }
}

/// Direction of a swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    #[default]
    Left,
    Right,
    Up,
    Down,
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwipeDirection::Up => write!(f, "Up"),
            SwipeDirection::Down => write!(f, "Down"),
            SwipeDirection::Left => write!(f, "Left"),
            SwipeDirection::Right => write!(f, "Right"),
        }
    }
}

/// Screen edges an edge-pan gesture listens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RectEdge {
    None,
    Top,
    #[default]
    Left,
    Bottom,
    Right,
    All,
}

impl std::fmt::Display for RectEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RectEdge::None => write!(f, "None"),
            RectEdge::Top => write!(f, "Top"),
            RectEdge::Left => write!(f, "Left"),
            RectEdge::Bottom => write!(f, "Bottom"),
            RectEdge::Right => write!(f, "Right"),
            RectEdge::All => write!(f, "All"),
        }
    }
}
