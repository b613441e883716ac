//! Rule registration and CSS serialization.
//!
//! A [`Stylesheet`] turns merged style objects into generated class names
//! and the CSS rules behind them. Identical style objects share one class.
//!
//! # Selector expansion
//!
//! Selector keys are expanded against the generated class `.c`:
//!
//! | Key | Expands to |
//! |-----|------------|
//! | `&:before` | `.c:before` |
//! | `:hover` | `.c:hover` |
//! | `.child` | `.c .child` |
//! | `& + &` | `.c + .c` |
//! | `:hover, :focus` | `.c:hover, .c:focus` |
//! | `@media (max-width: 600px)` | the body, under `.c`, wrapped in the at-rule |

use std::collections::HashMap;

use cssparser::serialize_identifier;
use serde::{Deserialize, Serialize};

use crate::resolve::ResolvedStyle;
use crate::style::{StyleObject, StyleValue};

/// Properties whose numeric values are emitted without a unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "column-count",
    "fill-opacity",
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "opacity",
    "order",
    "orphans",
    "stroke-opacity",
    "widows",
    "z-index",
    "zoom",
];

const VENDOR_PREFIXES: &[&str] = &["ms", "moz", "webkit"];

/// Settings for class generation and value serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StylesheetConfig {
    /// Prefix for generated class names (`<prefix>-<n>`).
    pub class_prefix: String,
    /// Unit appended to non-zero numbers on unit-bearing properties.
    pub unit: String,
}

impl Default for StylesheetConfig {
    fn default() -> Self {
        Self {
            class_prefix: "css".to_string(),
            unit: "px".to_string(),
        }
    }
}

/// A registry of generated classes and their CSS rules.
///
/// # Example
///
/// ```rust
/// use mergestyles::{merge_styles, StyleObject, Stylesheet};
///
/// let mut sheet = Stylesheet::new();
/// let resolved = merge_styles(&[
///     "ms-Check".into(),
///     StyleObject::new()
///         .with("lineHeight", 1)
///         .selector(":hover", StyleObject::new().with("color", "red"))
///         .into(),
/// ]);
///
/// assert_eq!(sheet.class_names(&resolved), "ms-Check css-0");
/// assert_eq!(sheet.to_css(), ".css-0{line-height:1;}\n.css-0:hover{color:red;}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    config: StylesheetConfig,
    rules: Vec<String>,
    classes: HashMap<String, String>,
    counter: usize,
}

impl Stylesheet {
    /// Creates a stylesheet with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a stylesheet with the given configuration.
    pub fn with_config(config: StylesheetConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &StylesheetConfig {
        &self.config
    }

    /// Registers a style object and returns its generated class name.
    ///
    /// Registering an equal style object again returns the same class and
    /// adds no rules.
    pub fn register(&mut self, style: &StyleObject) -> String {
        let key = cache_key(style);
        if let Some(existing) = self.classes.get(&key) {
            log::trace!("reusing class {} for cached style", existing);
            return existing.clone();
        }

        let class_name = format!("{}-{}", self.config.class_prefix, self.counter);
        self.counter += 1;

        let mut rules = Vec::new();
        self.emit(&class_selector(&class_name), style, &[], &mut rules);
        log::debug!("registered class {} with {} rule(s)", class_name, rules.len());

        self.rules.extend(rules);
        self.classes.insert(key, class_name.clone());
        class_name
    }

    /// Returns the final class string for a resolved style.
    ///
    /// Authored class names come first (deduplicated), followed by the
    /// generated class when the style is non-empty.
    pub fn class_names(&mut self, resolved: &ResolvedStyle) -> String {
        let mut names: Vec<String> = resolved
            .unique_class_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        if let Some(style) = resolved.style.as_ref().filter(|s| !s.is_empty()) {
            names.push(self.register(style));
        }
        names.join(" ")
    }

    /// Registered rules in registration order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// All registered rules, one per line.
    pub fn to_css(&self) -> String {
        self.rules.join("\n")
    }

    /// Drops all rules and generated classes.
    pub fn reset(&mut self) {
        self.rules.clear();
        self.classes.clear();
        self.counter = 0;
    }

    fn emit(
        &self,
        selector: &str,
        style: &StyleObject,
        at_rules: &[&str],
        out: &mut Vec<String>,
    ) {
        let declarations: String = style
            .properties()
            .map(|(property, value)| {
                let name = property_name(property);
                let value = self.property_value(&name, value);
                format!("{}:{};", name, value)
            })
            .collect();

        if !declarations.is_empty() {
            let rule = format!("{}{{{}}}", selector, declarations);
            // Innermost at-rule wraps the rule first.
            let wrapped = at_rules
                .iter()
                .rev()
                .fold(rule, |inner, at| format!("{}{{{}}}", at, inner));
            out.push(wrapped);
        }

        for (key, body) in style.selectors() {
            if key.starts_with('@') {
                let mut nested = at_rules.to_vec();
                nested.push(key);
                self.emit(selector, body, &nested, out);
            } else {
                self.emit(&expand_selector(selector, key), body, at_rules, out);
            }
        }
    }

    /// Formats a value for an already kebab-cased property name.
    fn property_value(&self, name: &str, value: &StyleValue) -> String {
        match value {
            StyleValue::Integer(_) | StyleValue::Number(_)
                if !value.is_zero() && !UNITLESS_PROPERTIES.contains(&name) =>
            {
                format!("{}{}", value, self.config.unit)
            }
            other => other.to_string(),
        }
    }
}

fn cache_key(style: &StyleObject) -> String {
    // Serialization preserves key order, so equal objects produce equal keys.
    serde_json::to_string(style).unwrap_or_else(|_| format!("{:?}", style))
}

fn class_selector(class_name: &str) -> String {
    let mut selector = String::from(".");
    let _ = serialize_identifier(class_name, &mut selector);
    selector
}

/// Converts a camelCase property name to CSS kebab-case.
///
/// Names that already contain no uppercase letters pass through, so
/// `line-height` and custom properties like `--accent` are kept as written.
pub(crate) fn property_name(property: &str) -> String {
    if property.starts_with("--") {
        return property.to_string();
    }

    let mut name = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            name.push('-');
            name.push(c.to_ascii_lowercase());
        } else {
            name.push(c);
        }
    }

    let is_lower_vendor = VENDOR_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix) && name[prefix.len()..].starts_with('-'));
    if is_lower_vendor {
        name.insert(0, '-');
    }
    name
}

/// Expands a selector key against its parent selector.
///
/// Both sides may be comma lists; the result is their cross product.
pub(crate) fn expand_selector(parent: &str, key: &str) -> String {
    let parents = split_selector_list(parent);
    let mut expanded = Vec::new();
    for part in split_selector_list(key) {
        for p in &parents {
            expanded.push(if part.contains('&') {
                part.replace('&', p)
            } else if part.starts_with(':') {
                format!("{}{}", p, part)
            } else {
                format!("{} {}", p, part)
            });
        }
    }
    expanded.join(", ")
}

fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}
