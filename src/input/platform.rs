//! Lookup tables between raw platform constants and gesture enums.
//!
//! Platform adapters receive edge masks and swipe directions as bit flags.
//! Conversion happens here so the rest of the crate only sees
//! [`RectEdge`] and [`SwipeDirection`].

use super::kinds::{RectEdge, SwipeDirection};

/// Raw edge-mask bits.
pub mod edge_mask {
    pub const NONE: u32 = 0;
    pub const TOP: u32 = 1 << 0;
    pub const LEFT: u32 = 1 << 1;
    pub const BOTTOM: u32 = 1 << 2;
    pub const RIGHT: u32 = 1 << 3;
    pub const ALL: u32 = TOP | LEFT | BOTTOM | RIGHT;
}

/// Raw swipe-direction bits.
pub mod direction_mask {
    pub const RIGHT: u32 = 1 << 0;
    pub const LEFT: u32 = 1 << 1;
    pub const UP: u32 = 1 << 2;
    pub const DOWN: u32 = 1 << 3;
}

const EDGE_TABLE: &[(u32, RectEdge)] = &[
    (edge_mask::TOP, RectEdge::Top),
    (edge_mask::LEFT, RectEdge::Left),
    (edge_mask::RIGHT, RectEdge::Right),
    (edge_mask::BOTTOM, RectEdge::Bottom),
    (edge_mask::ALL, RectEdge::All),
];

const DIRECTION_TABLE: &[(u32, SwipeDirection)] = &[
    (direction_mask::LEFT, SwipeDirection::Left),
    (direction_mask::RIGHT, SwipeDirection::Right),
    (direction_mask::UP, SwipeDirection::Up),
];

impl RectEdge {
    /// Map a platform edge mask. Combinations other than a single edge or
    /// all four map to [`RectEdge::None`].
    pub fn from_mask(mask: u32) -> Self {
        match EDGE_TABLE.iter().find(|(bits, _)| *bits == mask) {
            Some((_, edge)) => *edge,
            None => {
                tracing::trace!(mask, "unmapped edge mask");
                RectEdge::None
            }
        }
    }

    /// Platform edge mask for this edge.
    pub fn to_mask(self) -> u32 {
        match self {
            RectEdge::None => edge_mask::NONE,
            RectEdge::Top => edge_mask::TOP,
            RectEdge::Left => edge_mask::LEFT,
            RectEdge::Bottom => edge_mask::BOTTOM,
            RectEdge::Right => edge_mask::RIGHT,
            RectEdge::All => edge_mask::ALL,
        }
    }
}

impl SwipeDirection {
    /// Map a platform direction value. Anything that is not exactly
    /// left, right or up is treated as down.
    pub fn from_bits(bits: u32) -> Self {
        match DIRECTION_TABLE.iter().find(|(b, _)| *b == bits) {
            Some((_, direction)) => *direction,
            None => {
                if bits != direction_mask::DOWN {
                    tracing::trace!(bits, "unmapped swipe direction");
                }
                SwipeDirection::Down
            }
        }
    }

    /// Platform direction value for this direction.
    pub fn to_bits(self) -> u32 {
        match self {
            SwipeDirection::Right => direction_mask::RIGHT,
            SwipeDirection::Left => direction_mask::LEFT,
            SwipeDirection::Up => direction_mask::UP,
            SwipeDirection::Down => direction_mask::DOWN,
        }
    }
}
