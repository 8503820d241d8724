//! The attribute catalog.
//!
//! Every stylable property the editor offers is described here once: its
//! label and category for pickers, the control used to edit it, and the
//! default value a freshly added instance starts with.
//!
//! Two lookup structures sit on top of the ordered definition list:
//!
//! - [`lookup`]: id to [`AttributeDefinition`], built lazily on first use
//! - [`ATTRIBUTE_KINDS`]: id to [`AttributeKind`], a static table the
//!   compositor dispatches through
//!
//! Adding an attribute means adding its definition to [`all`] and its kind
//! to [`ATTRIBUTE_KINDS`]; the compositor needs no change unless the kind is
//! new.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use phf::phf_map;

use crate::StyleError;
use crate::types::{CompositeValue, GradientValue, Side, Value, is_valid_color};

/// The control used to edit an attribute, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Color,
    Slider,
    Select,
    Text,
    Checkbox,
    Gradient,
    Composite,
}

impl ControlKind {
    pub fn name(self) -> &'static str {
        match self {
            ControlKind::Color => "color",
            ControlKind::Slider => "slider",
            ControlKind::Select => "select",
            ControlKind::Text => "text",
            ControlKind::Checkbox => "checkbox",
            ControlKind::Gradient => "gradient",
            ControlKind::Composite => "composite",
        }
    }
}

/// Slider range and step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Bounds {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

/// One entry of a select control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A control together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Color,
    Slider(Bounds),
    Select(Vec<SelectOption>),
    Text,
    Checkbox,
    Gradient,
    /// Sub-attributes in display order. Sub-attributes are never composite.
    Composite(Vec<AttributeDefinition>),
}

/// How the compositor folds an attribute into a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Writes one property directly, with an optional unit suffix.
    Property { key: &'static str, unit: Unit },
    /// Adds a layer to `background-image`.
    Gradient,
    /// Adds a shadow to `box-shadow`.
    BoxShadow,
    /// Adds non-default functions to `filter`.
    Filter,
    /// Adds non-default functions to `transform`.
    Transform,
    /// Width, style, color and corner radii of one side.
    Border(Side),
    /// Sets the blend flag.
    Blend,
}

/// Unit suffix applied to numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    None,
    Px,
    Deg,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Px => "px",
            Unit::Deg => "deg",
        }
    }
}

/// Dispatch table from attribute id to the resolver kind.
pub static ATTRIBUTE_KINDS: phf::Map<&'static str, AttributeKind> = phf_map! {
    "backgroundColor" => AttributeKind::Property { key: "backgroundColor", unit: Unit::None },
    "backgroundGradient" => AttributeKind::Gradient,
    "backgroundPosition" => AttributeKind::Property { key: "backgroundPosition", unit: Unit::None },
    "backgroundSize" => AttributeKind::Property { key: "backgroundSize", unit: Unit::None },
    "backgroundRepeat" => AttributeKind::Property { key: "backgroundRepeat", unit: Unit::None },
    "clipPath" => AttributeKind::Property { key: "clipPath", unit: Unit::None },
    "customClipPath" => AttributeKind::Property { key: "clipPath", unit: Unit::None },
    "opacity" => AttributeKind::Property { key: "opacity", unit: Unit::None },
    "borderRadius" => AttributeKind::Property { key: "borderRadius", unit: Unit::Px },
    "rotate" => AttributeKind::Property { key: "rotate", unit: Unit::Deg },
    "borderTop" => AttributeKind::Border(Side::Top),
    "borderRight" => AttributeKind::Border(Side::Right),
    "borderBottom" => AttributeKind::Border(Side::Bottom),
    "borderLeft" => AttributeKind::Border(Side::Left),
    "boxShadow" => AttributeKind::BoxShadow,
    "filter" => AttributeKind::Filter,
    "transform" => AttributeKind::Transform,
    "blend" => AttributeKind::Blend,
};

/// A stylable property and how it is edited.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    /// Unique key; also the key into [`ATTRIBUTE_KINDS`].
    pub id: &'static str,
    pub label: &'static str,
    /// Picker group. Empty for sub-attributes.
    pub category: &'static str,
    pub control: Control,
    pub default_value: Value,
}

impl AttributeDefinition {
    pub fn control_kind(&self) -> ControlKind {
        match self.control {
            Control::Color => ControlKind::Color,
            Control::Slider(_) => ControlKind::Slider,
            Control::Select(_) => ControlKind::Select,
            Control::Text => ControlKind::Text,
            Control::Checkbox => ControlKind::Checkbox,
            Control::Gradient => ControlKind::Gradient,
            Control::Composite(_) => ControlKind::Composite,
        }
    }

    /// The resolver kind, or `None` for sub-attributes.
    pub fn kind(&self) -> Option<AttributeKind> {
        ATTRIBUTE_KINDS.get(self.id).copied()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        match self.control {
            Control::Slider(bounds) => Some(bounds),
            _ => None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match &self.control {
            Control::Select(options) => options,
            _ => &[],
        }
    }

    pub fn sub_attributes(&self) -> &[AttributeDefinition] {
        match &self.control {
            Control::Composite(subs) => subs,
            _ => &[],
        }
    }

    pub fn sub_attribute(&self, sub_id: &str) -> Option<&AttributeDefinition> {
        self.sub_attributes().iter().find(|sub| sub.id == sub_id)
    }

    /// Whether more than one instance may be active at once.
    ///
    /// Per-side borders stack by side; shadows and gradients accumulate into
    /// comma-separated lists. Everything else is a single property.
    pub fn repeatable(&self) -> bool {
        matches!(
            self.kind(),
            Some(AttributeKind::Border(_) | AttributeKind::BoxShadow | AttributeKind::Gradient)
        )
    }

    /// Checks that `value` has the shape this definition's control expects.
    pub fn validate(&self, value: &Value) -> Result<(), StyleError> {
        match (&self.control, value) {
            (Control::Color, Value::Color(color)) => check_color(color),
            (Control::Slider(bounds), Value::Number(n)) => {
                if n.is_finite() && bounds.contains(*n) {
                    Ok(())
                } else {
                    Err(StyleError::OutOfBounds {
                        id: self.id.to_string(),
                        value: *n,
                        min: bounds.min,
                        max: bounds.max,
                    })
                }
            }
            (Control::Select(options), Value::Choice(choice)) => {
                if options.iter().any(|o| o.value == choice) {
                    Ok(())
                } else {
                    Err(self.mismatch())
                }
            }
            (Control::Text, Value::Text(_)) | (Control::Checkbox, Value::Flag(_)) => Ok(()),
            (Control::Gradient, Value::Gradient(gradient)) => {
                gradient.colors.iter().try_for_each(|c| check_color(c))
            }
            (Control::Composite(subs), Value::Composite(composite)) => {
                for sub in subs {
                    let sub_value = composite.get(sub.id).ok_or_else(|| sub.mismatch())?;
                    sub.validate(sub_value)?;
                }
                Ok(())
            }
            _ => Err(self.mismatch()),
        }
    }

    fn mismatch(&self) -> StyleError {
        StyleError::ValueMismatch {
            id: self.id.to_string(),
            expected: self.control_kind().name(),
        }
    }
}

fn check_color(color: &str) -> Result<(), StyleError> {
    if is_valid_color(color) {
        Ok(())
    } else {
        Err(StyleError::InvalidColor(color.to_string()))
    }
}

static CATALOG: Lazy<Vec<AttributeDefinition>> = Lazy::new(build_catalog);

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(idx, def)| (def.id, idx))
        .collect()
});

/// Every definition, in picker order.
pub fn all() -> &'static [AttributeDefinition] {
    &CATALOG
}

/// Finds a definition by id.
pub fn lookup(id: &str) -> Result<&'static AttributeDefinition, StyleError> {
    INDEX
        .get(id)
        .map(|&idx| &CATALOG[idx])
        .ok_or_else(|| StyleError::UnknownAttribute(id.to_string()))
}

/// Definitions grouped by category, categories in first-seen order.
pub fn by_category() -> Vec<(&'static str, Vec<&'static AttributeDefinition>)> {
    let mut groups: Vec<(&'static str, Vec<&'static AttributeDefinition>)> = Vec::new();
    for def in all() {
        match groups.iter_mut().find(|(category, _)| *category == def.category) {
            Some((_, defs)) => defs.push(def),
            None => groups.push((def.category, vec![def])),
        }
    }
    groups
}

// ============================================================================
// Definition helpers
// ============================================================================

fn color(id: &'static str, label: &'static str, default: &str) -> AttributeDefinition {
    AttributeDefinition {
        id,
        label,
        category: "",
        control: Control::Color,
        default_value: Value::color(default),
    }
}

fn slider(
    id: &'static str,
    label: &'static str,
    (min, max, step): (f64, f64, f64),
    default: f64,
) -> AttributeDefinition {
    AttributeDefinition {
        id,
        label,
        category: "",
        control: Control::Slider(Bounds { min, max, step }),
        default_value: Value::Number(default),
    }
}

fn select(
    id: &'static str,
    label: &'static str,
    options: &[(&'static str, &'static str)],
    default: &str,
) -> AttributeDefinition {
    AttributeDefinition {
        id,
        label,
        category: "",
        control: Control::Select(
            options
                .iter()
                .map(|&(value, label)| SelectOption { value, label })
                .collect(),
        ),
        default_value: Value::choice(default),
    }
}

fn checkbox(id: &'static str, label: &'static str, default: bool) -> AttributeDefinition {
    AttributeDefinition {
        id,
        label,
        category: "",
        control: Control::Checkbox,
        default_value: Value::Flag(default),
    }
}

/// Builds a composite whose default is assembled from its sub-defaults.
fn composite(
    id: &'static str,
    label: &'static str,
    subs: Vec<AttributeDefinition>,
) -> AttributeDefinition {
    let default_value = Value::Composite(
        subs.iter()
            .map(|sub| (sub.id, sub.default_value.clone()))
            .collect::<CompositeValue>(),
    );
    AttributeDefinition {
        id,
        label,
        category: "",
        control: Control::Composite(subs),
        default_value,
    }
}

fn in_category(category: &'static str, mut def: AttributeDefinition) -> AttributeDefinition {
    def.category = category;
    def
}

const BORDER_STYLES: &[(&str, &str)] = &[
    ("none", "None"),
    ("solid", "Solid"),
    ("dashed", "Dashed"),
    ("dotted", "Dotted"),
    ("double", "Double"),
];

fn border_side(
    id: &'static str,
    label: &'static str,
    [width, style, color_id, radius]: [&'static str; 4],
) -> AttributeDefinition {
    composite(
        id,
        label,
        vec![
            slider(width, "Width", (0.0, 10.0, 1.0), 1.0),
            select(style, "Style", BORDER_STYLES, "solid"),
            color(color_id, "Color", "#000000"),
            slider(radius, "Radius", (0.0, 50.0, 1.0), 0.0),
        ],
    )
}

fn build_catalog() -> Vec<AttributeDefinition> {
    vec![
        // Background
        in_category(
            "Background",
            color("backgroundColor", "Background Color", "#FFFFFF"),
        ),
        AttributeDefinition {
            id: "backgroundGradient",
            label: "Background Gradient",
            category: "Background",
            control: Control::Gradient,
            default_value: Value::Gradient(GradientValue::linear(90.0, "#FFFFFF", "#000000")),
        },
        in_category(
            "Background",
            select(
                "backgroundPosition",
                "Background Position",
                &[
                    ("center", "Center"),
                    ("top", "Top"),
                    ("bottom", "Bottom"),
                    ("left", "Left"),
                    ("right", "Right"),
                    ("top left", "Top Left"),
                    ("bottom right", "Bottom Right"),
                ],
                "center",
            ),
        ),
        in_category(
            "Background",
            select(
                "backgroundSize",
                "Background Size",
                &[
                    ("auto", "Auto"),
                    ("cover", "Cover"),
                    ("contain", "Contain"),
                    ("50%", "Half"),
                    ("25%", "Quarter"),
                ],
                "auto",
            ),
        ),
        in_category(
            "Background",
            select(
                "backgroundRepeat",
                "Background Repeat",
                &[
                    ("repeat", "Repeat"),
                    ("no-repeat", "No Repeat"),
                    ("repeat-x", "Repeat X"),
                    ("repeat-y", "Repeat Y"),
                    ("space", "Space"),
                    ("round", "Round"),
                ],
                "repeat",
            ),
        ),
        // Shape
        in_category(
            "Shape",
            select(
                "clipPath",
                "Clip Path",
                &[
                    ("none", "None"),
                    ("circle(50%)", "Circle"),
                    ("ellipse(50% 35%)", "Ellipse"),
                    ("polygon(50% 0%, 100% 100%, 0% 100%)", "Triangle"),
                    ("polygon(50% 0%, 100% 50%, 50% 100%, 0% 50%)", "Diamond"),
                    (
                        "polygon(25% 0%, 75% 0%, 100% 50%, 75% 100%, 25% 100%, 0% 50%)",
                        "Hexagon",
                    ),
                ],
                "none",
            ),
        ),
        AttributeDefinition {
            id: "customClipPath",
            label: "Custom Clip Path",
            category: "Shape",
            control: Control::Text,
            default_value: Value::text("inset(0 0 0 0)"),
        },
        in_category(
            "Shape",
            slider("borderRadius", "Border Radius", (0.0, 50.0, 1.0), 8.0),
        ),
        in_category("Shape", slider("rotate", "Rotate", (0.0, 360.0, 1.0), 0.0)),
        in_category("Shape", slider("opacity", "Opacity", (0.0, 1.0, 0.01), 1.0)),
        // Border
        in_category(
            "Border",
            border_side(
                "borderTop",
                "Border Top",
                ["borderTopWidth", "borderTopStyle", "borderTopColor", "borderTopRadius"],
            ),
        ),
        in_category(
            "Border",
            border_side(
                "borderRight",
                "Border Right",
                [
                    "borderRightWidth",
                    "borderRightStyle",
                    "borderRightColor",
                    "borderRightRadius",
                ],
            ),
        ),
        in_category(
            "Border",
            border_side(
                "borderBottom",
                "Border Bottom",
                [
                    "borderBottomWidth",
                    "borderBottomStyle",
                    "borderBottomColor",
                    "borderBottomRadius",
                ],
            ),
        ),
        in_category(
            "Border",
            border_side(
                "borderLeft",
                "Border Left",
                [
                    "borderLeftWidth",
                    "borderLeftStyle",
                    "borderLeftColor",
                    "borderLeftRadius",
                ],
            ),
        ),
        // Effects
        in_category(
            "Effects",
            composite(
                "boxShadow",
                "Box Shadow",
                vec![
                    slider("offsetX", "Offset X (px)", (-20.0, 20.0, 1.0), 2.0),
                    slider("offsetY", "Offset Y (px)", (-20.0, 20.0, 1.0), 2.0),
                    slider("blur", "Blur (px)", (0.0, 40.0, 1.0), 4.0),
                    slider("spread", "Spread (px)", (-10.0, 10.0, 1.0), 0.0),
                    color("color", "Color", "#00000080"),
                    checkbox("inset", "Inset", false),
                ],
            ),
        ),
        in_category(
            "Filter",
            composite(
                "filter",
                "Filter Effects",
                vec![
                    slider("blur", "Blur (px)", (0.0, 20.0, 0.1), 0.0),
                    slider("brightness", "Brightness", (0.0, 2.0, 0.01), 1.0),
                    slider("contrast", "Contrast", (0.0, 2.0, 0.01), 1.0),
                    slider("grayscale", "Grayscale", (0.0, 1.0, 0.01), 0.0),
                    slider("hueRotate", "Hue Rotate (deg)", (0.0, 360.0, 1.0), 0.0),
                    slider("invert", "Invert", (0.0, 1.0, 0.01), 0.0),
                    slider("opacity", "Opacity", (0.0, 1.0, 0.01), 1.0),
                    slider("saturate", "Saturate", (0.0, 3.0, 0.01), 1.0),
                    slider("sepia", "Sepia", (0.0, 1.0, 0.01), 0.0),
                ],
            ),
        ),
        in_category(
            "Transform",
            composite(
                "transform",
                "Transform",
                vec![
                    slider("translateX", "Translate X (px)", (-100.0, 100.0, 1.0), 0.0),
                    slider("translateY", "Translate Y (px)", (-100.0, 100.0, 1.0), 0.0),
                    slider("rotate", "Rotate (deg)", (0.0, 360.0, 1.0), 0.0),
                    slider("scaleX", "Scale X", (0.0, 5.0, 0.01), 1.0),
                    slider("scaleY", "Scale Y", (0.0, 5.0, 0.01), 1.0),
                ],
            ),
        ),
        // Tiling
        in_category("Tiling", checkbox("blend", "Blend With Neighbours", true)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_default_matches_its_control() {
        for def in all() {
            def.validate(&def.default_value)
                .unwrap_or_else(|e| panic!("{}: {e}", def.id));
        }
    }

    #[test]
    fn test_every_definition_has_a_kind() {
        for def in all() {
            assert!(def.kind().is_some(), "{} missing from ATTRIBUTE_KINDS", def.id);
        }
        assert_eq!(ATTRIBUTE_KINDS.len(), all().len());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_eq!(INDEX.len(), all().len());
    }

    #[test]
    fn test_sub_attributes_are_not_composite() {
        for def in all() {
            for sub in def.sub_attributes() {
                assert_ne!(sub.control_kind(), ControlKind::Composite, "{}.{}", def.id, sub.id);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let def = lookup("borderTop").unwrap();
        assert_eq!(def.control_kind(), ControlKind::Composite);
        assert_eq!(def.kind(), Some(AttributeKind::Border(Side::Top)));
        assert_eq!(def.sub_attributes().len(), 4);

        assert_eq!(
            lookup("nope"),
            Err(StyleError::UnknownAttribute("nope".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_wrong_shape() {
        let opacity = lookup("opacity").unwrap();
        assert!(matches!(
            opacity.validate(&Value::text("0.5")),
            Err(StyleError::ValueMismatch { expected: "slider", .. })
        ));
        assert!(matches!(
            opacity.validate(&Value::Number(1.5)),
            Err(StyleError::OutOfBounds { .. })
        ));

        let repeat = lookup("backgroundRepeat").unwrap();
        assert!(repeat.validate(&Value::choice("tile")).is_err());
        assert!(repeat.validate(&Value::choice("no-repeat")).is_ok());
    }

    #[test]
    fn test_validate_composite_requires_every_sub_value() {
        let filter = lookup("filter").unwrap();
        let partial = Value::Composite(CompositeValue::new().with("blur", Value::Number(2.0)));
        assert!(matches!(
            filter.validate(&partial),
            Err(StyleError::ValueMismatch { .. })
        ));
    }

    #[test]
    fn test_repeatable() {
        assert!(lookup("borderLeft").unwrap().repeatable());
        assert!(lookup("boxShadow").unwrap().repeatable());
        assert!(lookup("backgroundGradient").unwrap().repeatable());
        assert!(!lookup("backgroundColor").unwrap().repeatable());
        assert!(!lookup("filter").unwrap().repeatable());
    }

    #[test]
    fn test_categories_in_first_seen_order() {
        let categories: Vec<_> = by_category().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec!["Background", "Shape", "Border", "Effects", "Filter", "Transform", "Tiling"]
        );
    }
}
