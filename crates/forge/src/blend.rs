//! Seamless joins between neighbouring tiles of the same style.
//!
//! When a style has `blend` set, every edge shared with a neighbour holding
//! the same palette index loses its border, the style loses its box-shadow
//! (a shadow cannot be clipped per edge), and each corner bounded by a
//! blended edge loses its radius. Edges on the grid boundary never blend.
//!
//! Suppressions are written at the end of the property list so they win over
//! any longhand or shorthand set earlier in the style.

use std::borrow::Cow;

use tilecss::types::PropertyMap;
use tilecss::{Corner, ResolvedStyle, Side, Sides};

use crate::grid::Grid;

/// Edges of `(row, col)` whose neighbour holds the same palette index.
pub fn blend_sides(grid: &Grid, row: usize, col: usize) -> Sides {
    let Some(index) = grid.get(row, col) else {
        return Sides::empty();
    };
    Side::ALL
        .into_iter()
        .filter(|&side| grid.neighbor(row, col, side) == Some(index))
        .fold(Sides::empty(), |sides, side| sides | side.flag())
}

/// The style as rendered at `(row, col)`.
///
/// Borrows `style` unchanged when it does not blend or nothing adjacent
/// matches.
pub fn apply_blend<'a>(
    style: &'a ResolvedStyle,
    grid: &Grid,
    row: usize,
    col: usize,
) -> Cow<'a, ResolvedStyle> {
    if !style.blend {
        return Cow::Borrowed(style);
    }
    let sides = blend_sides(grid, row, col);
    if sides.is_empty() {
        return Cow::Borrowed(style);
    }

    let mut blended = style.clone();
    let properties = &mut blended.properties;
    for side in Side::ALL {
        if sides.contains(side.flag()) {
            suppress(properties, side.border_property(), "none");
        }
    }
    suppress(properties, "boxShadow", "none");
    for corner in Corner::ALL {
        if sides.intersects(corner.sides()) {
            suppress(properties, corner.radius_property(), "0");
        }
    }
    Cow::Owned(blended)
}

fn suppress(properties: &mut PropertyMap, key: &str, value: &str) {
    properties.remove(key);
    properties.set(key, value);
}
