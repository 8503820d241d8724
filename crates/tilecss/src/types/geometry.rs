//! Sides and corners of a tile.
//!
//! Per-side border attributes and the blend resolver both reason about the
//! four edges of a tile and the corner radii that sit between them:
//!
//! ```text
//! TopLeft ── Top ── TopRight
//!    │                 │
//!   Left             Right
//!    │                 │
//! BottomLeft ─ Bottom ─ BottomRight
//! ```

use bitflags::bitflags;

bitflags! {
    /// A set of tile edges.
    ///
    /// # Example
    ///
    /// ```
    /// use tilecss::types::Sides;
    ///
    /// let sides = Sides::TOP | Sides::LEFT;
    /// assert!(sides.contains(Sides::TOP));
    /// assert!(!sides.contains(Sides::RIGHT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sides: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
    }
}

/// One edge of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in CSS shorthand order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The camelCase border property for this side (e.g. `borderTop`).
    pub fn border_property(self) -> &'static str {
        match self {
            Side::Top => "borderTop",
            Side::Right => "borderRight",
            Side::Bottom => "borderBottom",
            Side::Left => "borderLeft",
        }
    }

    /// The two corners bounding this side, in clockwise order.
    pub fn corners(self) -> [Corner; 2] {
        match self {
            Side::Top => [Corner::TopLeft, Corner::TopRight],
            Side::Right => [Corner::TopRight, Corner::BottomRight],
            Side::Bottom => [Corner::BottomLeft, Corner::BottomRight],
            Side::Left => [Corner::TopLeft, Corner::BottomLeft],
        }
    }

    pub fn flag(self) -> Sides {
        match self {
            Side::Top => Sides::TOP,
            Side::Right => Sides::RIGHT,
            Side::Bottom => Sides::BOTTOM,
            Side::Left => Sides::LEFT,
        }
    }

    /// Row/column offset of the neighbouring cell across this edge.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Side::Top => (-1, 0),
            Side::Right => (0, 1),
            Side::Bottom => (1, 0),
            Side::Left => (0, -1),
        }
    }
}

/// One rounded corner of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    /// The camelCase radius property for this corner.
    pub fn radius_property(self) -> &'static str {
        match self {
            Corner::TopLeft => "borderTopLeftRadius",
            Corner::TopRight => "borderTopRightRadius",
            Corner::BottomRight => "borderBottomRightRadius",
            Corner::BottomLeft => "borderBottomLeftRadius",
        }
    }

    /// The two sides that meet at this corner.
    pub fn sides(self) -> Sides {
        match self {
            Corner::TopLeft => Sides::TOP | Sides::LEFT,
            Corner::TopRight => Sides::TOP | Sides::RIGHT,
            Corner::BottomRight => Sides::BOTTOM | Sides::RIGHT,
            Corner::BottomLeft => Sides::BOTTOM | Sides::LEFT,
        }
    }
}
