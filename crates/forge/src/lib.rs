//! # forge - Tile Board Editing
//!
//! Editor state for composing tile styles and painting them on a grid:
//!
//! - **Palette**: saved [`ResolvedStyle`](tilecss::ResolvedStyle)s addressed by index
//! - **Grid**: cells referencing palette entries, resized and randomized in place
//! - **Board**: the palette and grid together, changed only through atomic
//!   operations so no cell ever points at a missing style
//! - **Blend**: per-cell suppression of borders, shadows and radii between
//!   same-style neighbours
//! - **Export**: CSS and HTML text plus JSON snapshots
//! - **Session**: attribute editing, selection and the paint gesture
//!
//! ## Quick Start
//!
//! ```rust
//! use forge::{EditorSession, ForgeConfig, XorShiftRng};
//!
//! let mut session = EditorSession::with_rng(ForgeConfig::default(), XorShiftRng::seeded(7));
//! session.add_attribute("backgroundColor").unwrap();
//! session.add_attribute("blend").unwrap();
//! let index = session.save_to_palette();
//!
//! session.pointer_down(0, 0).unwrap();
//! session.pointer_enter(0, 1).unwrap();
//! session.pointer_up();
//!
//! assert_eq!(session.board().grid().get(0, 1), Some(index));
//! let style = session.cell_style(0, 0).unwrap();
//! assert_eq!(style.get("borderRight"), Some("none"));
//! ```
//!
//! ## Modules
//!
//! - [`board`]: Palette and grid ownership
//! - [`palette`], [`grid`]: The two stores
//! - [`blend`]: Blend resolution
//! - [`export`]: CSS/HTML export and snapshots
//! - [`session`]: The editing session
//! - [`random`]: Random sources and random attribute values
//! - [`resize`]: Container fitting and resize debouncing
//! - [`config`], [`error`], [`log_init`]: Configuration, errors and logging

pub mod blend;
pub mod board;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod log_init;
pub mod palette;
pub mod random;
pub mod resize;
pub mod session;

pub use log;

pub use blend::{apply_blend, blend_sides};
pub use board::Board;
pub use config::ForgeConfig;
pub use error::{ForgeError, Result};
pub use export::{Export, GridDimensions, Snapshot, export};
pub use grid::Grid;
pub use log_init::{init_logger, init_logger_with_level};
pub use palette::{IndexRemap, Palette, crossover};
pub use random::{RandomSource, XorShiftRng, random_value};
pub use resize::{ResizeDebouncer, dimensions_for_container};
pub use session::{EditorSession, InstanceIdGenerator};
