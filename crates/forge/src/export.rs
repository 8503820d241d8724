//! CSS/HTML export and JSON snapshots.
//!
//! Export is a pure function of the palette and the grid:
//!
//! - CSS: one `.tile-style-{i}` rule per palette entry (kebab-case
//!   properties in insertion order, `transform` last), then the grid
//!   container and cell rules sized by the cell size
//! - HTML: a `grid-container` wrapper with one `grid-cell` div per cell in
//!   row-major order, classed `tile-style-{i}` when painted
//!
//! A [`Snapshot`] carries both stores as JSON for clipboard round trips.

use std::fmt;

use serde::{Deserialize, Serialize};
use tilecss::ResolvedStyle;
use tilecss::parser::stylesheet::TILE_CLASS_PREFIX;

use crate::config::ForgeConfig;
use crate::error::{ForgeError, Result};
use crate::grid::Grid;
use crate::palette::Palette;

/// Exported stylesheet and markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub css: String,
    pub html: String,
}

pub fn export(palette: &Palette, grid: &Grid, config: &ForgeConfig) -> Export {
    Export {
        css: StyleSheet {
            palette,
            grid,
            cell_size: config.cell_size,
        }
        .to_string(),
        html: Markup { grid }.to_string(),
    }
}

struct StyleSheet<'a> {
    palette: &'a Palette,
    grid: &'a Grid,
    cell_size: u32,
}

impl fmt::Display for StyleSheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "/* Palette Styles */")?;
        for (index, style) in self.palette.iter().enumerate() {
            write_rule(f, index, style)?;
            writeln!(f)?;
        }
        if self.palette.is_empty() {
            writeln!(f)?;
        }

        let (rows, cols) = self.grid.dimensions();
        let cell = self.cell_size as usize;
        writeln!(f, "/* Grid Styles */")?;
        writeln!(f, ".grid-container {{")?;
        writeln!(f, "  display: grid;")?;
        writeln!(f, "  grid-template-columns: repeat({cols}, {cell}px);")?;
        writeln!(f, "  grid-template-rows: repeat({rows}, {cell}px);")?;
        writeln!(f, "  width: {}px;", cols * cell)?;
        writeln!(f, "  height: {}px;", rows * cell)?;
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, ".grid-cell {{")?;
        writeln!(f, "  width: {cell}px;")?;
        writeln!(f, "  height: {cell}px;")?;
        writeln!(f, "}}")
    }
}

fn write_rule(f: &mut fmt::Formatter<'_>, index: usize, style: &ResolvedStyle) -> fmt::Result {
    writeln!(f, ".{TILE_CLASS_PREFIX}{index} {{")?;
    for (name, value) in style.declarations() {
        writeln!(f, "  {name}: {value};")?;
    }
    writeln!(f, "}}")
}

struct Markup<'a> {
    grid: &'a Grid,
}

impl fmt::Display for Markup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<div class=\"grid-container\">")?;
        for cell in self.grid.cells() {
            match cell {
                Some(index) => writeln!(
                    f,
                    "  <div class=\"grid-cell {TILE_CLASS_PREFIX}{index}\"></div>"
                )?,
                None => writeln!(f, "  <div class=\"grid-cell\"></div>")?,
            }
        }
        writeln!(f, "</div>")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
}

/// Both stores in serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub palette: Vec<ResolvedStyle>,
    pub grid: Vec<Vec<Option<usize>>>,
    pub grid_dimensions: GridDimensions,
}

impl Snapshot {
    pub fn capture(palette: &Palette, grid: &Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            palette: palette.styles().to_vec(),
            grid: grid.to_nested(),
            grid_dimensions: GridDimensions { rows, cols },
        }
    }

    /// Checks the grid against its declared dimensions and the palette.
    pub fn validate(&self) -> Result<()> {
        let GridDimensions { rows, cols } = self.grid_dimensions;
        if self.grid.len() != rows || self.grid.iter().any(|row| row.len() != cols) {
            return Err(ForgeError::InvalidSnapshot(format!(
                "grid does not match its {rows}x{cols} dimensions"
            )));
        }
        let len = self.palette.len();
        if let Some(index) = self.grid.iter().flatten().flatten().find(|&&i| i >= len) {
            return Err(ForgeError::InvalidSnapshot(format!(
                "cell references style {index} but the palette has {len}"
            )));
        }
        Ok(())
    }

    /// Validates and splits into stores.
    pub fn into_parts(self) -> Result<(Palette, Grid)> {
        self.validate()?;
        let GridDimensions { rows, cols } = self.grid_dimensions;
        let grid = if rows == 0 || cols == 0 {
            Grid::new(rows, cols)
        } else {
            Grid::from_nested(self.grid)?
        };
        Ok((Palette::from(self.palette), grid))
    }
}
