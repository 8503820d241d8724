//! The editing session.
//!
//! An [`EditorSession`] is the UI-independent state behind the editor: the
//! attributes being edited, the palette selection, the paint gesture and the
//! board. Hosts forward user events to it and render from its accessors.
//!
//! Operations the user can trigger with the wrong selection or a stale index
//! return an error and leave every store untouched; hosts may show the error
//! or ignore it.

use smallvec::SmallVec;
use tilecss::{ActiveAttribute, ResolvedStyle, Value, catalog, compose, derive_attributes};

use crate::board::Board;
use crate::config::ForgeConfig;
use crate::error::{ForgeError, Result};
use crate::export::Export;
use crate::random::{RandomSource, XorShiftRng, random_value};
use crate::resize::dimensions_for_container;

/// Mints `attr-0`, `attr-1`, ... for active attributes.
#[derive(Debug, Clone, Default)]
pub struct InstanceIdGenerator {
    next: u64,
}

impl InstanceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("attr-{}", self.next);
        self.next += 1;
        id
    }
}

pub struct EditorSession<R = XorShiftRng> {
    board: Board,
    attributes: Vec<ActiveAttribute>,
    ids: InstanceIdGenerator,
    /// Selected palette indices, oldest first.
    selection: SmallVec<[usize; 2]>,
    painting: bool,
    rng: R,
}

impl EditorSession<XorShiftRng> {
    /// A session seeded from OS entropy.
    pub fn new(config: ForgeConfig) -> Self {
        Self::with_rng(config, XorShiftRng::from_entropy())
    }
}

impl<R: RandomSource> EditorSession<R> {
    pub fn with_rng(config: ForgeConfig, rng: R) -> Self {
        Self::with_board(Board::new(config), rng)
    }

    pub fn with_board(board: Board, rng: R) -> Self {
        Self {
            board,
            attributes: Vec::new(),
            ids: InstanceIdGenerator::new(),
            selection: SmallVec::new(),
            painting: false,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn attributes(&self) -> &[ActiveAttribute] {
        &self.attributes
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    // ------------------------------------------------------------------
    // Attribute editing
    // ------------------------------------------------------------------

    /// Adds an instance of `definition_id` holding its default value.
    ///
    /// Only borders, shadows and gradients may be added more than once.
    pub fn add_attribute(&mut self, definition_id: &str) -> Result<&ActiveAttribute> {
        let definition = catalog::lookup(definition_id)?;
        if !definition.repeatable() && self.is_active(definition.id) {
            return Err(ForgeError::DuplicateAttribute(definition.id.to_string()));
        }
        let attribute = ActiveAttribute::new(self.ids.next_id(), definition);
        log::debug!("added {} as {}", definition.id, attribute.instance_id);
        Ok(self.push(attribute))
    }

    /// Adds a random attribute that is still allowed, with a random value.
    /// Returns `None` when every unique attribute is already active.
    pub fn add_random_attribute(&mut self) -> Option<&ActiveAttribute> {
        let available: Vec<_> = catalog::all()
            .iter()
            .filter(|def| def.repeatable() || !self.is_active(def.id))
            .collect();
        let definition = *available.get(self.rng.below(available.len()))?;
        let value = random_value(definition, &mut self.rng);
        let attribute = ActiveAttribute::new(self.ids.next_id(), definition).with_value(value);
        Some(self.push(attribute))
    }

    pub fn remove_attribute(&mut self, instance_id: &str) -> Result<ActiveAttribute> {
        let position = self.position(instance_id)?;
        Ok(self.attributes.remove(position))
    }

    /// Sets an attribute's value after checking it against its definition.
    pub fn update_value(&mut self, instance_id: &str, value: Value) -> Result<()> {
        let position = self.position(instance_id)?;
        let attribute = &mut self.attributes[position];
        attribute.definition.validate(&value)?;
        attribute.value = value;
        Ok(())
    }

    pub fn randomize_value(&mut self, instance_id: &str) -> Result<()> {
        let position = self.position(instance_id)?;
        let attribute = &mut self.attributes[position];
        attribute.value = random_value(attribute.definition, &mut self.rng);
        Ok(())
    }

    pub fn randomize_all(&mut self) {
        for attribute in &mut self.attributes {
            attribute.value = random_value(attribute.definition, &mut self.rng);
        }
    }

    pub fn clear_attributes(&mut self) {
        self.attributes.clear();
    }

    /// The style the current attributes compose to.
    pub fn preview(&self) -> ResolvedStyle {
        compose(&self.attributes)
    }

    fn is_active(&self, definition_id: &str) -> bool {
        self.attributes
            .iter()
            .any(|attribute| attribute.definition.id == definition_id)
    }

    fn position(&self, instance_id: &str) -> Result<usize> {
        self.attributes
            .iter()
            .position(|attribute| attribute.instance_id == instance_id)
            .ok_or_else(|| ForgeError::UnknownInstance(instance_id.to_string()))
    }

    fn push(&mut self, attribute: ActiveAttribute) -> &ActiveAttribute {
        self.attributes.push(attribute);
        &self.attributes[self.attributes.len() - 1]
    }

    // ------------------------------------------------------------------
    // Palette
    // ------------------------------------------------------------------

    /// Saves the preview as a new palette entry and selects it.
    pub fn save_to_palette(&mut self) -> usize {
        let style = self.preview();
        let index = self.board.save_style(style);
        self.selection.clear();
        self.selection.push(index);
        index
    }

    /// Replaces the attribute list with one derived from a saved style.
    ///
    /// A `border` shorthand is reopened as four side attributes, so saving
    /// it again writes per-side border properties instead.
    pub fn load_from_palette(&mut self, index: usize) -> Result<()> {
        let palette = self.board.palette();
        let style = palette.get(index).ok_or(ForgeError::IndexOutOfRange {
            index,
            len: palette.len(),
        })?;
        let derived = derive_attributes(style);
        self.attributes = derived
            .into_iter()
            .map(|(definition, value)| {
                ActiveAttribute::new(self.ids.next_id(), definition).with_value(value)
            })
            .collect();
        Ok(())
    }

    /// Overwrites the single selected style with the preview.
    pub fn update_selected(&mut self) -> Result<()> {
        let [index] = self.require_selection::<1>()?;
        let style = self.preview();
        self.board.update_style(index, style)
    }

    /// Breeds the two selected styles, appends the child and selects it.
    pub fn evolve_selected(&mut self) -> Result<usize> {
        let [a, b] = self.require_selection::<2>()?;
        let child = self.board.evolve(a, b, &mut self.rng)?;
        self.selection.clear();
        self.selection.push(child);
        Ok(child)
    }

    /// Deletes every selected style and clears the selection.
    pub fn delete_selected(&mut self) -> Result<()> {
        if self.selection.is_empty() {
            return Err(ForgeError::NoStyleSelected);
        }
        self.board.delete_styles(&self.selection)?;
        self.selection.clear();
        Ok(())
    }

    fn require_selection<const N: usize>(&self) -> Result<[usize; N]> {
        <[usize; N]>::try_from(self.selection.as_slice()).map_err(|_| {
            log::warn!(
                "ignoring operation: needs {N} selected style(s), have {}",
                self.selection.len()
            );
            ForgeError::InvalidSelection {
                expected: N,
                actual: self.selection.len(),
            }
        })
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Makes `index` the only selected style.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.selection.clear();
        self.selection.push(index);
        Ok(())
    }

    /// Adds `index` to the selection, or removes it if already selected.
    pub fn toggle_selection(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        match self.selection.iter().position(|&i| i == index) {
            Some(position) => {
                self.selection.remove(position);
            }
            None => self.selection.push(index),
        }
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.board.palette().len();
        if index < len {
            Ok(())
        } else {
            Err(ForgeError::IndexOutOfRange { index, len })
        }
    }

    // ------------------------------------------------------------------
    // Grid
    // ------------------------------------------------------------------

    /// Starts a paint gesture and paints the cell under the pointer.
    pub fn pointer_down(&mut self, row: usize, col: usize) -> Result<bool> {
        self.painting = true;
        self.paint_at(row, col)
    }

    /// Paints while a gesture is active; otherwise does nothing.
    pub fn pointer_enter(&mut self, row: usize, col: usize) -> Result<bool> {
        if !self.painting {
            return Ok(false);
        }
        self.paint_at(row, col)
    }

    pub fn pointer_up(&mut self) {
        self.painting = false;
    }

    pub fn pointer_leave(&mut self) {
        self.painting = false;
    }

    /// Paints with the most recently selected style.
    fn paint_at(&mut self, row: usize, col: usize) -> Result<bool> {
        if self.board.palette().is_empty() {
            return Err(ForgeError::EmptyPalette);
        }
        let index = *self.selection.last().ok_or(ForgeError::NoStyleSelected)?;
        self.board.paint(row, col, index)
    }

    pub fn clear_grid(&mut self) {
        self.board.clear_grid();
    }

    pub fn randomize_grid(&mut self) -> Result<()> {
        self.board.randomize_grid(&mut self.rng)
    }

    pub fn resize_grid(&mut self, rows: usize, cols: usize) -> (usize, usize) {
        self.board.resize_grid(rows, cols)
    }

    /// Resizes the grid to fill a container of the given pixel size.
    pub fn fit_to_container(&mut self, width_px: f64, height_px: f64) -> (usize, usize) {
        let (rows, cols) = dimensions_for_container(width_px, height_px, self.board.config());
        self.board.resize_grid(rows, cols)
    }

    /// The blended style rendered at a cell, if painted.
    pub fn cell_style(&self, row: usize, col: usize) -> Option<ResolvedStyle> {
        self.board.cell_style(row, col).map(|style| style.into_owned())
    }

    pub fn export(&self) -> Export {
        self.board.export()
    }
}
