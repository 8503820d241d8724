//! # tile-forge
//!
//! Compose CSS tile styles from editable attributes, paint them onto a grid
//! and export the result as CSS and HTML.
//!
//! This crate re-exports the two halves of the editor:
//!
//! - [`tilecss`]: the attribute catalog, the style compositor and CSS parsing
//! - [`forge`]: palette, grid, blending, export and the editing session
//!
//! ```rust
//! use tile_forge::prelude::*;
//!
//! let mut session = EditorSession::with_rng(ForgeConfig::default(), XorShiftRng::seeded(1));
//! session.add_attribute("backgroundColor").unwrap();
//! session.save_to_palette();
//! session.pointer_down(0, 0).unwrap();
//! session.pointer_up();
//!
//! let export = session.export();
//! assert!(export.css.contains(".tile-style-0 {"));
//! assert!(export.html.contains("grid-cell tile-style-0"));
//! ```

pub use forge;
pub use tilecss;

pub mod prelude {
    pub use forge::{
        Board, EditorSession, Export, ForgeConfig, ForgeError, Grid, Palette, RandomSource,
        Snapshot, XorShiftRng,
    };
    pub use tilecss::{ActiveAttribute, ResolvedStyle, StyleError, Value, catalog, compose};
}
