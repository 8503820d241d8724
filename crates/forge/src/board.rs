//! The board owns the palette and the grid together.
//!
//! Operations that touch both stores (deleting styles, painting,
//! randomizing) are single `&mut self` calls, so no caller can observe a
//! grid cell pointing past the end of the palette. Accessors only hand out
//! shared references.

use std::borrow::Cow;

use tilecss::ResolvedStyle;

use crate::blend::apply_blend;
use crate::config::ForgeConfig;
use crate::error::{ForgeError, Result};
use crate::export::{self, Export, Snapshot};
use crate::grid::Grid;
use crate::palette::{IndexRemap, Palette};
use crate::random::RandomSource;

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    palette: Palette,
    grid: Grid,
    config: ForgeConfig,
}

impl Board {
    /// An empty palette and an empty grid of the configured size.
    pub fn new(config: ForgeConfig) -> Self {
        Self {
            palette: Palette::new(),
            grid: Grid::new(config.rows, config.cols),
            config,
        }
    }

    /// Assembles a board, rejecting grids that reference missing styles.
    pub fn from_parts(palette: Palette, grid: Grid, config: ForgeConfig) -> Result<Self> {
        if let Some(index) = grid.cells().iter().flatten().find(|&&i| i >= palette.len()) {
            return Err(ForgeError::IndexOutOfRange {
                index: *index,
                len: palette.len(),
            });
        }
        Ok(Self {
            palette,
            grid,
            config,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &ForgeConfig {
        &self.config
    }

    pub fn save_style(&mut self, style: ResolvedStyle) -> usize {
        let index = self.palette.append(style);
        log::info!("saved tile style {index}");
        index
    }

    pub fn update_style(&mut self, index: usize, style: ResolvedStyle) -> Result<()> {
        self.palette.update(index, style)?;
        log::info!("updated tile style {index}");
        Ok(())
    }

    /// Removes styles and rewrites the grid in one step: references to
    /// removed styles are emptied, the rest are shifted down.
    pub fn delete_styles(&mut self, indices: &[usize]) -> Result<IndexRemap> {
        let remap = self.palette.remove_indices(indices)?;
        self.grid.remap(&remap);
        log::info!(
            "deleted {} tile style(s), {} remain",
            indices.len(),
            remap.surviving()
        );
        Ok(remap)
    }

    /// Breeds two saved styles and appends the child.
    pub fn evolve(&mut self, a: usize, b: usize, rng: &mut impl RandomSource) -> Result<usize> {
        let index = self.palette.evolve(a, b, rng)?;
        log::info!("evolved tile style {index} from {a} and {b}");
        Ok(index)
    }

    /// Paints one cell. Returns `false` for coordinates outside the grid.
    pub fn paint(&mut self, row: usize, col: usize, index: usize) -> Result<bool> {
        if self.palette.is_empty() {
            return Err(ForgeError::EmptyPalette);
        }
        self.palette.check_index(index)?;
        let painted = self.grid.set(row, col, Some(index));
        if painted {
            log::debug!("painted ({row}, {col}) with style {index}");
        }
        Ok(painted)
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        log::debug!("cleared grid");
    }

    pub fn randomize_grid(&mut self, rng: &mut impl RandomSource) -> Result<()> {
        if self.palette.is_empty() {
            return Err(ForgeError::EmptyPalette);
        }
        self.grid
            .randomize(self.palette.len(), self.config.empty_cell_probability, rng);
        log::debug!("randomized grid with {} styles", self.palette.len());
        Ok(())
    }

    /// Resizes the grid within the configured range. Returns the applied size.
    pub fn resize_grid(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        let rows = self.config.clamp_dimension(rows);
        let cols = self.config.clamp_dimension(cols);
        if (rows, cols) != self.grid.dimensions() {
            self.grid.resize(rows, cols);
            log::debug!("resized grid to {rows}x{cols}");
        }
        (rows, cols)
    }

    /// The style rendered at a cell, with blending applied.
    pub fn cell_style(&self, row: usize, col: usize) -> Option<Cow<'_, ResolvedStyle>> {
        let index = self.grid.get(row, col)?;
        let style = self.palette.get(index)?;
        Some(apply_blend(style, &self.grid, row, col))
    }

    pub fn export(&self) -> Export {
        export::export(&self.palette, &self.grid, &self.config)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.palette, &self.grid)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Restores a board from [`Board::to_json`] output.
    pub fn from_json(json: &str, config: ForgeConfig) -> Result<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)?;
        let (palette, grid) = snapshot.into_parts()?;
        Self::from_parts(palette, grid, config)
    }
}
