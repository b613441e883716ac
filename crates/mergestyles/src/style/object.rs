//! Style objects: ordered CSS properties plus selector-scoped bodies.

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value::StyleValue;

/// The reserved key under which selector-scoped bodies are nested.
pub const SELECTORS_KEY: &str = "selectors";

/// A mapping of CSS property names to values, with optional nested selectors.
///
/// Property names are kept in insertion order. Selector bodies live in a
/// separate map so they can be merged per selector and always emitted after
/// the direct properties, whatever order they were added in.
///
/// # Example
///
/// ```rust
/// use mergestyles::StyleObject;
///
/// let style = StyleObject::new()
///     .with("lineHeight", "1")
///     .selector("&:before", StyleObject::new().with("background", "Window"))
///     .with("color", "red");
///
/// let keys: Vec<&str> = style.keys().collect();
/// assert_eq!(keys, vec!["lineHeight", "color", "selectors"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleObject {
    properties: IndexMap<String, StyleValue>,
    selectors: IndexMap<String, StyleObject>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated object for chaining.
    pub fn with<V: Into<StyleValue>>(mut self, property: &str, value: V) -> Self {
        self.set(property, value);
        self
    }

    /// Sets a property in place.
    ///
    /// Setting an existing property replaces its value and keeps its position.
    pub fn set<V: Into<StyleValue>>(&mut self, property: &str, value: V) {
        self.properties.insert(property.to_string(), value.into());
    }

    /// Adds a selector body, returning the updated object for chaining.
    ///
    /// A body added under an existing selector is merged into it.
    pub fn selector(mut self, selector: &str, body: StyleObject) -> Self {
        self.merge_selector(selector, &body);
        self
    }

    /// Returns the value of a direct property.
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    /// Returns the body registered for a selector.
    pub fn selector_body(&self, selector: &str) -> Option<&StyleObject> {
        self.selectors.get(selector)
    }

    /// Direct properties in order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Selector bodies in order.
    pub fn selectors(&self) -> impl Iterator<Item = (&str, &StyleObject)> {
        self.selectors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Emitted key order: direct properties, then `selectors` if present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let selectors = (!self.selectors.is_empty()).then_some(SELECTORS_KEY);
        self.properties.keys().map(String::as_str).chain(selectors)
    }

    /// Returns true if there are no properties and no selectors.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.selectors.is_empty()
    }

    /// Returns true if any selector bodies are present.
    pub fn has_selectors(&self) -> bool {
        !self.selectors.is_empty()
    }

    /// Merges `other` into `self`.
    ///
    /// Colliding direct properties take the value from `other`. Selector
    /// bodies merge per selector key, recursively, so a later body only
    /// overrides the properties it names.
    pub fn merge(&mut self, other: &StyleObject) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
        for (selector, body) in &other.selectors {
            self.merge_selector(selector, body);
        }
    }

    /// Rewrites text values in place, including those inside selector bodies.
    ///
    /// `f` receives each text value; returning `Some` replaces it.
    pub fn map_text_values<F: FnMut(&str) -> Option<String>>(&mut self, f: &mut F) {
        for value in self.properties.values_mut() {
            if let StyleValue::Text(text) = value {
                if let Some(replacement) = f(text) {
                    *text = replacement;
                }
            }
        }
        for body in self.selectors.values_mut() {
            body.map_text_values(f);
        }
    }

    fn merge_selector(&mut self, selector: &str, body: &StyleObject) {
        match self.selectors.get_mut(selector) {
            Some(existing) => existing.merge(body),
            None => {
                self.selectors.insert(selector.to_string(), body.clone());
            }
        }
    }
}

impl Serialize for StyleObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = self.properties.len() + usize::from(self.has_selectors());
        let mut map = serializer.serialize_map(Some(len))?;
        for (property, value) in &self.properties {
            map.serialize_entry(property, value)?;
        }
        if self.has_selectors() {
            map.serialize_entry(SELECTORS_KEY, &self.selectors)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StyleObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StyleObjectVisitor)
    }
}

struct StyleObjectVisitor;

impl<'de> Visitor<'de> for StyleObjectVisitor {
    type Value = StyleObject;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a map of CSS properties")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<StyleObject, A::Error> {
        let mut style = StyleObject::new();
        while let Some(key) = access.next_key::<String>()? {
            if key == SELECTORS_KEY {
                let selectors: IndexMap<String, StyleObject> = access.next_value()?;
                for (selector, body) in &selectors {
                    style.merge_selector(selector, body);
                }
            } else {
                let value: StyleValue = access.next_value().map_err(|_: A::Error| {
                    <A::Error as de::Error>::custom(format!(
                        "property '{}' must be a string or a number",
                        key
                    ))
                })?;
                style.properties.insert(key, value);
            }
        }
        Ok(style)
    }
}
