//! # tilecss - Tile Style Engine
//!
//! The styling half of the tile editor: a catalog of editable CSS attributes
//! and the compositor that folds a list of them into one tile style.
//!
//! - **Catalog**: Every attribute the editor offers, with its control,
//!   bounds and default value
//! - **Composition**: Turn an ordered list of [`ActiveAttribute`]s into a
//!   [`ResolvedStyle`] (a camelCase property map, a transform string and a
//!   blend flag)
//! - **Derivation**: Recover editable attributes from a resolved style
//! - **Parsing**: Read exported palette CSS back into resolved styles
//!
//! ## Quick Start
//!
//! ```rust
//! use tilecss::{ActiveAttribute, Value, catalog, compose};
//!
//! let color = ActiveAttribute::new("attr-1", catalog::lookup("backgroundColor").unwrap())
//!     .with_value(Value::color("#ff0000"));
//! let opacity = ActiveAttribute::new("attr-2", catalog::lookup("opacity").unwrap())
//!     .with_value(Value::Number(0.5));
//!
//! let style = compose(&[color, opacity]);
//! assert_eq!(style.get("backgroundColor"), Some("#ff0000"));
//! assert_eq!(style.get("opacity"), Some("0.5"));
//! assert!(!style.blend);
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: Attribute definitions and lookup
//! - [`compose`]: The compositor
//! - [`derive`]: Resolved style back to attributes
//! - [`parser`]: CSS value and stylesheet parsers
//! - [`types`]: Values, resolved styles, colors and tile geometry
//! - [`error`]: Error types

pub mod catalog;
pub mod compose;
pub mod derive;
pub mod error;
pub mod parser;
pub mod types;

pub use catalog::{AttributeDefinition, AttributeKind, ControlKind};
pub use compose::{ActiveAttribute, compose};
pub use derive::derive_attributes;
pub use error::StyleError;
pub use parser::parse_palette_css;
pub use types::{CompositeValue, Corner, GradientValue, PropertyMap, ResolvedStyle, Side, Sides, Value};
