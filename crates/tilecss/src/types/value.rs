//! Attribute values.
//!
//! Every control kind has exactly one [`Value`] constructor, so the
//! compositor matches on the value shape instead of guessing it.

use std::fmt;

/// The value held by an attribute instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A color control (`#rrggbb`, `rgba(...)`, ...).
    Color(String),
    /// A slider control.
    Number(f64),
    /// A select control; always one of the definition's option values.
    Choice(String),
    /// A free text control.
    Text(String),
    /// A checkbox control.
    Flag(bool),
    /// A two-stop gradient control.
    Gradient(GradientValue),
    /// A composite control: one value per sub-attribute.
    Composite(CompositeValue),
}

impl Value {
    pub fn color(text: impl Into<String>) -> Self {
        Value::Color(text.into())
    }

    pub fn choice(text: impl Into<String>) -> Self {
        Value::Choice(text.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Value::Text(text.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text of a color, choice or text value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Color(s) | Value::Choice(s) | Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&CompositeValue> {
        match self {
            Value::Composite(c) => Some(c),
            _ => None,
        }
    }
}

/// Shape of a gradient layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// A two-stop gradient.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientValue {
    pub kind: GradientKind,
    /// Direction in degrees; ignored for radial gradients.
    pub angle: f64,
    pub colors: [String; 2],
}

impl GradientValue {
    pub fn linear(angle: f64, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind: GradientKind::Linear,
            angle,
            colors: [from.into(), to.into()],
        }
    }

    pub fn radial(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind: GradientKind::Radial,
            angle: 0.0,
            colors: [from.into(), to.into()],
        }
    }
}

impl fmt::Display for GradientValue {
    /// Formats the gradient as a `background-image` layer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [from, to] = &self.colors;
        match self.kind {
            GradientKind::Linear => write!(
                f,
                "linear-gradient({}deg, {from}, {to})",
                format_number(self.angle)
            ),
            GradientKind::Radial => write!(f, "radial-gradient(circle, {from}, {to})"),
        }
    }
}

/// Sub-attribute values of a composite control, in definition order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeValue {
    entries: Vec<(&'static str, Value)>,
}

impl CompositeValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, sub_id: &'static str, value: Value) -> Self {
        self.set(sub_id, value);
        self
    }

    /// Sets a sub-value, keeping the position of an existing entry.
    pub fn set(&mut self, sub_id: &'static str, value: Value) {
        match self.entries.iter_mut().find(|(id, _)| *id == sub_id) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((sub_id, value)),
        }
    }

    pub fn get(&self, sub_id: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(id, _)| *id == sub_id)
            .map(|(_, value)| value)
    }

    pub fn number(&self, sub_id: &str) -> Option<f64> {
        self.get(sub_id).and_then(Value::as_number)
    }

    pub fn str(&self, sub_id: &str) -> Option<&str> {
        self.get(sub_id).and_then(Value::as_str)
    }

    pub fn flag(&self, sub_id: &str) -> Option<bool> {
        self.get(sub_id).and_then(Value::as_flag)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(&'static str, Value)> for CompositeValue {
    fn from_iter<I: IntoIterator<Item = (&'static str, Value)>>(iter: I) -> Self {
        let mut composite = CompositeValue::new();
        for (id, value) in iter {
            composite.set(id, value);
        }
        composite
    }
}

/// Formats a number the way CSS text expects it: no trailing `.0`, no `-0`.
///
/// ```
/// use tilecss::types::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    format!("{n}")
}
