//! Parsing of CSS text produced by the compositor and the exporter.
//!
//! The compositor only ever writes CSS; these parsers read it back so that
//! saved styles can be reopened for editing and exported palettes re-imported:
//!
//! - [`units`]: Numbers, lengths and angles
//! - [`values`]: Gradients, shadows and function lists (`filter`, `transform`)
//! - [`stylesheet`]: Palette rules (`.tile-style-N { ... }`)
//!
//! ## Example
//!
//! ```rust
//! use tilecss::parser::values::parse_function_list;
//!
//! let (_, functions) = parse_function_list("blur(2px) sepia(0.4)").unwrap();
//! assert_eq!(functions[0].name, "blur");
//! assert_eq!(functions[1].value, 0.4);
//! ```

pub mod stylesheet;
pub mod units;
pub mod values;

pub use crate::parser::stylesheet::{CssRule, parse_palette_css, parse_rules};
