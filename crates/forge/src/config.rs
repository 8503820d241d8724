//! Editor configuration.
//!
//! Every field has a default, so a host only needs to override what it
//! changes:
//!
//! ```rust
//! use forge::ForgeConfig;
//!
//! let config = ForgeConfig::from_json(r#"{ "rows": 20, "cellSize": 24 }"#).unwrap();
//! assert_eq!(config.rows, 20);
//! assert_eq!(config.cols, 32);
//! assert_eq!(config.cell_size, 24);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForgeConfig {
    /// Initial grid rows.
    pub rows: usize,
    /// Initial grid columns.
    pub cols: usize,
    /// Smallest dimension a clamped resize may produce.
    pub min_dimension: usize,
    /// Largest dimension a clamped resize may produce.
    pub max_dimension: usize,
    /// Cell edge in pixels, for export and container fitting.
    pub cell_size: u32,
    /// Chance that a randomized cell is left empty.
    pub empty_cell_probability: f64,
    /// Quiet period before a container resize is applied.
    pub resize_debounce_ms: u64,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            rows: 32,
            cols: 32,
            min_dimension: 16,
            max_dimension: 64,
            cell_size: 20,
            empty_cell_probability: 0.3,
            resize_debounce_ms: 150,
        }
    }
}

impl ForgeConfig {
    /// Parses a (possibly partial) JSON configuration and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ForgeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ForgeError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.min_dimension == 0 || self.min_dimension > self.max_dimension {
            return Err(ForgeError::InvalidConfig(format!(
                "dimension range {}..={} is empty",
                self.min_dimension, self.max_dimension
            )));
        }
        if self.cell_size == 0 {
            return Err(ForgeError::InvalidConfig("cell size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.empty_cell_probability) {
            return Err(ForgeError::InvalidConfig(format!(
                "empty cell probability {} is not within 0..=1",
                self.empty_cell_probability
            )));
        }
        Ok(())
    }

    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_dimension_range(mut self, min: usize, max: usize) -> Self {
        self.min_dimension = min;
        self.max_dimension = max;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_empty_cell_probability(mut self, probability: f64) -> Self {
        self.empty_cell_probability = probability;
        self
    }

    pub fn with_resize_debounce(mut self, quiet: Duration) -> Self {
        self.resize_debounce_ms = quiet.as_millis() as u64;
        self
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    /// Clamps a requested grid dimension into the configured range.
    pub fn clamp_dimension(&self, n: usize) -> usize {
        n.clamp(self.min_dimension, self.max_dimension)
    }
}
