pub mod color;
pub mod geometry;
pub mod value;

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use color::{hex_from_rgb, is_valid_color};
pub use geometry::{Corner, Side, Sides};
pub use value::{CompositeValue, GradientKind, GradientValue, Value, format_number};

/// Insertion-ordered map from camelCase CSS property name to its final text.
///
/// Overwriting a key keeps its original position, so the exported rule lists
/// properties in the order they were first produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = PropertyMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

/// A render-ready tile style.
///
/// Every property is final CSS text (units applied, composites flattened).
/// `blend` and `transform` sit beside the property map: `blend` is an editor
/// flag that never reaches CSS, and `transform` is emitted last on export.
///
/// In JSON a style is one flat object: the properties in order, then
/// `transform` when set, then `blend`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub properties: PropertyMap,
    pub blend: bool,
    pub transform: Option<String>,
}

impl ResolvedStyle {
    pub const TRANSFORM: &'static str = "transform";

    /// The style used when no attributes are active: a light gray tile with a
    /// thin solid border and 8px rounded corners.
    pub fn canvas_default() -> Self {
        Self {
            properties: [
                ("backgroundColor", "#e0e0e0"),
                ("border", "1px solid #cccccc"),
                ("borderRadius", "8px"),
            ]
            .into_iter()
            .collect(),
            blend: false,
            transform: None,
        }
    }

    /// Looks up a property; `"transform"` reads the transform slot.
    pub fn get(&self, key: &str) -> Option<&str> {
        if key == Self::TRANSFORM {
            return self.transform.as_deref();
        }
        self.properties.get(key)
    }

    /// Sets a property; `"transform"` writes the transform slot.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key == Self::TRANSFORM {
            self.transform = Some(value.into());
        } else {
            self.properties.set(key, value);
        }
    }

    /// Property keys followed by `transform` when present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let transform: Option<&str> = self.transform.as_ref().map(|_| Self::TRANSFORM);
        self.properties.keys().chain(transform)
    }

    /// `(kebab-case-name, value)` pairs in export order.
    pub fn declarations(&self) -> impl Iterator<Item = (String, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (kebab_case(k), v))
            .chain(
                self.transform
                    .as_deref()
                    .map(|t| (Self::TRANSFORM.to_string(), t)),
            )
    }
}

const BLEND: &str = "blend";

impl Serialize for ResolvedStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.properties.len() + 1 + usize::from(self.transform.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for (k, v) in self.properties.iter() {
            map.serialize_entry(k, v)?;
        }
        if let Some(transform) = &self.transform {
            map.serialize_entry(Self::TRANSFORM, transform)?;
        }
        map.serialize_entry(BLEND, &self.blend)?;
        map.end()
    }
}

/// A property value read from JSON. Numbers are accepted and kept as text.
struct CssText(String);

impl<'de> Deserialize<'de> for CssText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CssTextVisitor;

        impl Visitor<'_> for CssTextVisitor {
            type Value = CssText;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a CSS value as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CssText, E> {
                Ok(CssText(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<CssText, E> {
                Ok(CssText(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<CssText, E> {
                Ok(CssText(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<CssText, E> {
                Ok(CssText(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<CssText, E> {
                Ok(CssText(format_number(v)))
            }
        }

        deserializer.deserialize_any(CssTextVisitor)
    }
}

impl<'de> Deserialize<'de> for ResolvedStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResolvedStyleVisitor;

        impl<'de> Visitor<'de> for ResolvedStyleVisitor {
            type Value = ResolvedStyle;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of CSS property names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ResolvedStyle, A::Error> {
                let mut style = ResolvedStyle::default();
                while let Some(key) = access.next_key::<String>()? {
                    if key == BLEND {
                        style.blend = access.next_value()?;
                    } else if let Some(CssText(value)) = access.next_value::<Option<CssText>>()? {
                        style.set(key, value);
                    }
                }
                Ok(style)
            }
        }

        deserializer.deserialize_map(ResolvedStyleVisitor)
    }
}

/// Converts a camelCase identifier to kebab-case (`borderTopWidth` ->
/// `border-top-width`).
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts a kebab-case identifier to camelCase (`hue-rotate` -> `hueRotate`).
pub fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '-' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
