//! Style composition.
//!
//! This module folds an ordered list of active attributes into a single
//! [`ResolvedStyle`]:
//!
//! - [`compose`]: Main entry point for computing a tile's style
//! - [`ActiveAttribute`]: One edited instance of a catalog definition
//!
//! ## Composition Algorithm
//!
//! 1. Start from an empty style and empty gradient/shadow/filter/transform lists
//! 2. Dispatch each attribute through [`AttributeKind`] in insertion order
//!    (later singular properties overwrite earlier ones)
//! 3. Flush the lists into `background-image`, `box-shadow`, `filter` and
//!    `transform`
//!
//! An empty attribute list yields [`ResolvedStyle::canvas_default`].

use smallvec::SmallVec;

use crate::catalog::{AttributeDefinition, AttributeKind, Unit};
use crate::types::{CompositeValue, ResolvedStyle, Side, Value, format_number, kebab_case};

/// An attribute the user has added to the style being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveAttribute {
    /// Unique per addition, not per definition.
    pub instance_id: String,
    pub definition: &'static AttributeDefinition,
    pub value: Value,
}

impl ActiveAttribute {
    /// A fresh instance holding the definition's default value.
    pub fn new(instance_id: impl Into<String>, definition: &'static AttributeDefinition) -> Self {
        Self {
            instance_id: instance_id.into(),
            definition,
            value: definition.default_value.clone(),
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }
}

/// Fragments collected while walking the attribute list.
#[derive(Debug, Default)]
struct Accumulators {
    gradients: SmallVec<[String; 2]>,
    shadows: SmallVec<[String; 2]>,
    filters: Vec<String>,
    transforms: Vec<String>,
    has_transform: bool,
}

/// The core composition function.
pub fn compose(attributes: &[ActiveAttribute]) -> ResolvedStyle {
    if attributes.is_empty() {
        return ResolvedStyle::canvas_default();
    }

    let mut style = ResolvedStyle::default();
    let mut acc = Accumulators::default();
    for attribute in attributes {
        apply_attribute(&mut style, &mut acc, attribute);
    }

    if !acc.gradients.is_empty() {
        style.set("backgroundImage", acc.gradients.join(", "));
    }
    if !acc.shadows.is_empty() {
        style.set("boxShadow", acc.shadows.join(", "));
    }
    if !acc.filters.is_empty() {
        style.set("filter", acc.filters.join(" "));
    }
    if acc.has_transform {
        style.transform = Some(if acc.transforms.is_empty() {
            "none".to_string()
        } else {
            acc.transforms.join(" ")
        });
    }

    style
}

fn apply_attribute(style: &mut ResolvedStyle, acc: &mut Accumulators, attribute: &ActiveAttribute) {
    let definition = attribute.definition;
    let Some(kind) = definition.kind() else {
        log::warn!("no resolver for attribute `{}`", definition.id);
        return;
    };

    match (kind, &attribute.value) {
        (AttributeKind::Property { key, unit }, value) => {
            if let Some(text) = scalar_text(value, unit) {
                style.set(key, text);
            }
        }
        (AttributeKind::Gradient, Value::Gradient(gradient)) => {
            acc.gradients.push(gradient.to_string());
        }
        (AttributeKind::BoxShadow, Value::Composite(parts)) => {
            acc.shadows.push(shadow_text(parts));
        }
        (AttributeKind::Filter, Value::Composite(parts)) => {
            acc.filters
                .extend(changed_functions(definition, parts, filter_function));
        }
        (AttributeKind::Transform, Value::Composite(parts)) => {
            acc.has_transform = true;
            acc.transforms
                .extend(changed_functions(definition, parts, transform_function));
        }
        (AttributeKind::Border(side), Value::Composite(parts)) => {
            apply_border_side(style, side, parts);
        }
        (AttributeKind::Blend, Value::Flag(blend)) => style.blend = *blend,
        (kind, value) => {
            log::debug!(
                "skipping `{}`: {:?} cannot take {:?}",
                attribute.instance_id,
                kind,
                value
            );
        }
    }
}

fn scalar_text(value: &Value, unit: Unit) -> Option<String> {
    match value {
        Value::Number(n) => Some(format!("{}{}", format_number(*n), unit.suffix())),
        Value::Color(s) | Value::Choice(s) | Value::Text(s) => Some(s.clone()),
        _ => None,
    }
}

/// `[inset ]Xpx Ypx Bpx Spx color`
fn shadow_text(parts: &CompositeValue) -> String {
    let px = |id: &str| format!("{}px", format_number(parts.number(id).unwrap_or(0.0)));
    let inset = if parts.flag("inset").unwrap_or(false) {
        "inset "
    } else {
        ""
    };
    format!(
        "{inset}{} {} {} {} {}",
        px("offsetX"),
        px("offsetY"),
        px("blur"),
        px("spread"),
        parts.str("color").unwrap_or("#000000"),
    )
}

/// Name and unit of a filter function for a sub-attribute id.
pub(crate) fn filter_function(sub_id: &str) -> (String, Unit) {
    let unit = match sub_id {
        "hueRotate" => Unit::Deg,
        "blur" => Unit::Px,
        _ => Unit::None,
    };
    (kebab_case(sub_id), unit)
}

/// Name and unit of a transform function for a sub-attribute id.
pub(crate) fn transform_function(sub_id: &str) -> (String, Unit) {
    let name = if sub_id.starts_with("scale") {
        sub_id.to_string()
    } else {
        kebab_case(sub_id)
    };
    let unit = if sub_id.starts_with("translate") {
        Unit::Px
    } else if sub_id.starts_with("rotate") {
        Unit::Deg
    } else {
        Unit::None
    };
    (name, unit)
}

/// `name(value+unit)` for every sub-value that differs from its default, in
/// sub-attribute order.
fn changed_functions(
    definition: &AttributeDefinition,
    parts: &CompositeValue,
    function: fn(&str) -> (String, Unit),
) -> Vec<String> {
    definition
        .sub_attributes()
        .iter()
        .filter_map(|sub| {
            let value = parts.number(sub.id)?;
            if Some(value) == sub.default_value.as_number() {
                return None;
            }
            let (name, unit) = function(sub.id);
            Some(format!("{name}({}{})", format_number(value), unit.suffix()))
        })
        .collect()
}

fn apply_border_side(style: &mut ResolvedStyle, side: Side, parts: &CompositeValue) {
    let prefix = side.border_property();
    let part = |suffix: &str| format!("{prefix}{suffix}");

    let width = parts.number(&part("Width")).unwrap_or(0.0);
    if width > 0.0 {
        style.set(part("Width"), format!("{}px", format_number(width)));
        if let Some(line) = parts.str(&part("Style")) {
            style.set(part("Style"), line);
        }
        if let Some(color) = parts.str(&part("Color")) {
            style.set(part("Color"), color);
        }
    } else {
        style.set(part("Width"), "0px");
    }

    let radius = parts.number(&part("Radius")).unwrap_or(0.0);
    if radius > 0.0 {
        let text = format!("{}px", format_number(radius));
        for corner in side.corners() {
            style.set(corner.radius_property(), text.clone());
        }
    }
}
