//! Error types for attribute validation and CSS parsing.
//!
//! The compositor itself never fails; errors surface when a value is checked
//! against its definition, when an attribute id is looked up, or when CSS text
//! is read back into resolved styles.

use thiserror::Error;

/// Errors produced by the style engine.
///
/// # Examples
///
/// ```rust
/// use tilecss::catalog;
/// use tilecss::StyleError;
///
/// let result = catalog::lookup("letterSpacing");
/// assert!(matches!(result, Err(StyleError::UnknownAttribute(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    /// No catalog entry exists for the given attribute id.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The value's constructor does not match the definition's control kind,
    /// or a composite value is missing one of its sub-values.
    #[error("Value for `{id}` does not match its control (expected {expected})")]
    ValueMismatch { id: String, expected: &'static str },

    /// A slider value fell outside the definition's bounds.
    #[error("Value {value} for `{id}` is outside {min}..={max}")]
    OutOfBounds {
        id: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A color control received text that is not a recognised color.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Invalid CSS syntax was encountered while importing a palette.
    #[error("CSS syntax error: {0}")]
    InvalidSyntax(String),
}
