//! Re-deriving editable attributes from a resolved style.
//!
//! This is the best-effort inverse of [`compose`](crate::compose::compose):
//! it lets a saved (or evolved) palette entry be reopened in the editor.
//! Properties the catalog cannot express, or whose text does not parse, are
//! skipped. For the styles the compositor produces, composing the derived
//! attributes gives back the same style. The canvas default is the exception:
//! its `border` shorthand comes back as the four per-side properties.

use crate::catalog::{self, AttributeDefinition, AttributeKind, ControlKind, Unit};
use crate::compose::{filter_function, transform_function};
use crate::parser::units::{parse_angle, parse_exact, parse_length, parse_number};
use crate::parser::values::{parse_function_list, parse_gradient, parse_shadow, split_top_level};
use crate::types::{CompositeValue, ResolvedStyle, Side, Sides, Value, camel_case, is_valid_color};

type Derived = Vec<(&'static AttributeDefinition, Value)>;

/// Rebuilds an attribute list for `style`, in the order its properties appear.
///
/// A `border` shorthand is spread over the four side attributes, so the
/// canvas default reopens as four sides rather than one `border` property.
pub fn derive_attributes(style: &ResolvedStyle) -> Derived {
    let mut derived = Derived::new();
    let mut seen_sides = Sides::empty();
    let shorthand = style.get("border").and_then(parse_border_shorthand);

    for (key, text) in style.properties.iter() {
        match key {
            "border" => {
                for side in Side::ALL {
                    if seen_sides.contains(side.flag()) {
                        continue;
                    }
                    seen_sides |= side.flag();
                    if let Some(value) = derive_border_side(style, side, shorthand.as_ref()) {
                        push(&mut derived, side.border_property(), value);
                    }
                }
            }
            "backgroundImage" => {
                for layer in split_top_level(text, ',') {
                    if let Some(gradient) = parse_exact(parse_gradient, layer) {
                        push(&mut derived, "backgroundGradient", Value::Gradient(gradient));
                    }
                }
            }
            "boxShadow" => {
                for layer in split_top_level(text, ',') {
                    if let Some(value) = derive_shadow(layer) {
                        push(&mut derived, "boxShadow", value);
                    }
                }
            }
            "filter" => {
                if let Some(value) = derive_functions("filter", text) {
                    push(&mut derived, "filter", value);
                }
            }
            _ => {
                if let Some(side) = border_side_of(key) {
                    if !seen_sides.contains(side.flag()) {
                        seen_sides |= side.flag();
                        if let Some(value) = derive_border_side(style, side, shorthand.as_ref()) {
                            push(&mut derived, side.border_property(), value);
                        }
                    }
                } else if let Some((def, value)) = derive_scalar(key, text) {
                    derived.push((def, value));
                } else {
                    log::debug!("no attribute for `{key}: {text}`");
                }
            }
        }
    }

    if let Some(transform) = &style.transform {
        let value = if transform == "none" {
            catalog::lookup("transform")
                .ok()
                .map(|def| def.default_value.clone())
        } else {
            derive_functions("transform", transform)
        };
        if let Some(value) = value {
            push(&mut derived, "transform", value);
        }
    }

    if style.blend {
        push(&mut derived, "blend", Value::Flag(true));
    }

    derived
}

fn push(derived: &mut Derived, id: &str, value: Value) {
    match catalog::lookup(id) {
        Ok(def) if def.validate(&value).is_ok() => derived.push((def, value)),
        _ => log::debug!("derived value for `{id}` rejected: {value:?}"),
    }
}

/// Clamps numbers into the sub-attribute's bounds and checks the result.
fn fit(sub: &AttributeDefinition, value: Value) -> Option<Value> {
    let value = match (value, sub.bounds()) {
        (Value::Number(n), Some(bounds)) => Value::Number(bounds.clamp(n)),
        (value, _) => value,
    };
    sub.validate(&value).ok().map(|_| value)
}

fn default_parts(def: &AttributeDefinition) -> CompositeValue {
    def.default_value.as_composite().cloned().unwrap_or_default()
}

/// Single-property attributes whose kind writes `key`.
fn derive_scalar(key: &str, text: &str) -> Option<(&'static AttributeDefinition, Value)> {
    catalog::all().iter().find_map(|def| {
        let Some(AttributeKind::Property { key: target, unit }) = def.kind() else {
            return None;
        };
        if target != key {
            return None;
        }
        let value = match def.control_kind() {
            ControlKind::Color => Value::color(text),
            ControlKind::Select => Value::choice(text),
            ControlKind::Text => Value::text(text),
            ControlKind::Slider => {
                let n = match unit {
                    Unit::Px => parse_exact(parse_length, text),
                    Unit::Deg => parse_exact(parse_angle, text),
                    Unit::None => parse_exact(parse_number, text),
                }?;
                Value::Number(n)
            }
            _ => return None,
        };
        fit(def, value).map(|value| (def, value))
    })
}

fn derive_shadow(layer: &str) -> Option<Value> {
    let shadow = parse_exact(parse_shadow, layer)?;
    let def = catalog::lookup("boxShadow").ok()?;
    let mut parts = default_parts(def);
    let values = [
        ("offsetX", Value::Number(shadow.offset_x)),
        ("offsetY", Value::Number(shadow.offset_y)),
        ("blur", Value::Number(shadow.blur)),
        ("spread", Value::Number(shadow.spread)),
        ("color", Value::Color(shadow.color)),
        ("inset", Value::Flag(shadow.inset)),
    ];
    for (sub_id, value) in values {
        let sub = def.sub_attribute(sub_id)?;
        parts.set(sub.id, fit(sub, value)?);
    }
    Some(Value::Composite(parts))
}

/// Filter and transform stacks: start from defaults, then apply each function.
///
/// A function is kept only when written with the unit the compositor uses for
/// it; a bare `0` is accepted for any unit.
fn derive_functions(id: &str, text: &str) -> Option<Value> {
    let def = catalog::lookup(id).ok()?;
    let unit_of: fn(&str) -> (String, Unit) = match id {
        "filter" => filter_function,
        _ => transform_function,
    };
    let functions = parse_exact(parse_function_list, text)?;
    let mut parts = default_parts(def);
    for function in functions {
        let sub_id = camel_case(function.name);
        let Some(sub) = def.sub_attribute(&sub_id) else {
            log::debug!("`{id}` has no `{}` function", function.name);
            continue;
        };
        let (_, unit) = unit_of(sub.id);
        let unit_matches = function.unit == unit.suffix()
            || (function.value == 0.0 && function.unit.is_empty());
        if !unit_matches {
            log::debug!("skipping `{}`: expected unit `{}`", function.name, unit.suffix());
            continue;
        }
        if let Some(value) = fit(sub, Value::Number(function.value)) {
            parts.set(sub.id, value);
        }
    }
    Some(Value::Composite(parts))
}

/// `borderTopWidth` / `borderTopStyle` / `borderTopColor` belong to `Top`.
fn border_side_of(key: &str) -> Option<Side> {
    Side::ALL.into_iter().find(|side| {
        key.strip_prefix(side.border_property())
            .is_some_and(|rest| matches!(rest, "Width" | "Style" | "Color"))
    })
}

/// A side's radius is recoverable when both of its corners agree.
fn side_radius(style: &ResolvedStyle, side: Side) -> Option<f64> {
    let [a, b] = side
        .corners()
        .map(|corner| style.get(corner.radius_property()).and_then(|t| parse_exact(parse_length, t)));
    match (a, b) {
        (Some(a), Some(b)) if a == b => Some(a),
        _ => None,
    }
}

/// Width, style and color of a `border: 1px solid #ccc` shorthand.
#[derive(Debug, Default, PartialEq)]
struct BorderShorthand {
    width: Option<f64>,
    style: Option<String>,
    color: Option<String>,
}

fn parse_border_shorthand(text: &str) -> Option<BorderShorthand> {
    let mut shorthand = BorderShorthand::default();
    for token in text.split_whitespace() {
        if let Some(width) = parse_exact(parse_length, token) {
            shorthand.width = Some(width);
        } else if is_valid_color(token) {
            shorthand.color = Some(token.to_string());
        } else {
            shorthand.style = Some(token.to_string());
        }
    }
    (shorthand != BorderShorthand::default()).then_some(shorthand)
}

/// Side-specific properties win over the shorthand.
fn derive_border_side(
    style: &ResolvedStyle,
    side: Side,
    shorthand: Option<&BorderShorthand>,
) -> Option<Value> {
    let prefix = side.border_property();
    let def = catalog::lookup(prefix).ok()?;
    let mut parts = default_parts(def);

    for sub in def.sub_attributes() {
        let text = style.get(sub.id);
        let value = match sub.id.strip_prefix(prefix) {
            Some("Width") => text
                .and_then(|t| parse_exact(parse_length, t))
                .or_else(|| shorthand.and_then(|s| s.width))
                .map(Value::Number),
            Some("Style") => text
                .or_else(|| shorthand.and_then(|s| s.style.as_deref()))
                .map(Value::choice),
            Some("Color") => text
                .or_else(|| shorthand.and_then(|s| s.color.as_deref()))
                .map(Value::color),
            Some("Radius") => Some(Value::Number(side_radius(style, side).unwrap_or(0.0))),
            _ => None,
        };
        if let Some(value) = value.and_then(|v| fit(sub, v)) {
            parts.set(sub.id, value);
        }
    }
    Some(Value::Composite(parts))
}
