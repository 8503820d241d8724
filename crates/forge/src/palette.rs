//! The palette: saved tile styles addressed by index.
//!
//! Grid cells refer to palette entries by index, so removal goes through
//! [`Board::delete_styles`](crate::board::Board::delete_styles), which
//! rewrites the grid with the [`IndexRemap`] produced here.

use serde::{Deserialize, Serialize};
use tilecss::ResolvedStyle;

use crate::error::{ForgeError, Result};
use crate::random::RandomSource;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    styles: Vec<ResolvedStyle>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedStyle> {
        self.styles.get(index)
    }

    pub fn styles(&self) -> &[ResolvedStyle] {
        &self.styles
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedStyle> {
        self.styles.iter()
    }

    /// Adds `style` at the end and returns its index.
    pub fn append(&mut self, style: ResolvedStyle) -> usize {
        self.styles.push(style);
        self.styles.len() - 1
    }

    /// Replaces the style at `index`.
    pub fn update(&mut self, index: usize, style: ResolvedStyle) -> Result<()> {
        let len = self.styles.len();
        let slot = self
            .styles
            .get_mut(index)
            .ok_or(ForgeError::IndexOutOfRange { index, len })?;
        *slot = style;
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        if index < self.styles.len() {
            Ok(())
        } else {
            Err(ForgeError::IndexOutOfRange {
                index,
                len: self.styles.len(),
            })
        }
    }

    /// Removes every style in `indices` and returns the old-to-new index map.
    ///
    /// Nothing is removed if any index is out of range. Duplicates are fine.
    pub(crate) fn remove_indices(&mut self, indices: &[usize]) -> Result<IndexRemap> {
        for &index in indices {
            self.check_index(index)?;
        }

        let mut removed = vec![false; self.styles.len()];
        for &index in indices {
            removed[index] = true;
        }

        let mut shift = 0;
        let map = removed
            .iter()
            .enumerate()
            .map(|(old, &gone)| {
                if gone {
                    shift += 1;
                    None
                } else {
                    Some(old - shift)
                }
            })
            .collect();

        let mut flags = removed.iter();
        self.styles.retain(|_| !flags.next().copied().unwrap_or(false));

        Ok(IndexRemap { map })
    }

    /// Breeds the styles at `a` and `b` (see [`crossover`]) and appends the
    /// child. Returns the child's index.
    pub fn evolve(&mut self, a: usize, b: usize, rng: &mut impl RandomSource) -> Result<usize> {
        self.check_index(a)?;
        self.check_index(b)?;
        let child = crossover(&self.styles[a], &self.styles[b], rng);
        Ok(self.append(child))
    }
}

impl From<Vec<ResolvedStyle>> for Palette {
    fn from(styles: Vec<ResolvedStyle>) -> Self {
        Self { styles }
    }
}

/// Old palette index to new index, or `None` for removed entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRemap {
    map: Vec<Option<usize>>,
}

impl IndexRemap {
    pub fn get(&self, old: usize) -> Option<usize> {
        self.map.get(old).copied().flatten()
    }

    /// Number of entries that survived.
    pub fn surviving(&self) -> usize {
        self.map.iter().flatten().count()
    }
}

/// Per-property crossover of two parent styles.
///
/// Keys (including `transform`) held by both parents are picked from either
/// with equal odds, each key independently. Keys held by one parent are
/// inherited as-is. `blend` is never inherited.
pub fn crossover(a: &ResolvedStyle, b: &ResolvedStyle, rng: &mut impl RandomSource) -> ResolvedStyle {
    let mut child = ResolvedStyle::default();
    let keys = a.keys().chain(b.keys().filter(|key| a.get(key).is_none()));

    for key in keys {
        let value = match (a.get(key), b.get(key)) {
            (Some(x), Some(y)) => {
                if rng.chance(0.5) {
                    x
                } else {
                    y
                }
            }
            (Some(x), None) | (None, Some(x)) => x,
            (None, None) => continue,
        };
        child.set(key, value);
    }
    child
}
