//! Theme color tokens.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Marks a token value as an alias of another token.
pub const ALIAS_PREFIX: char = '@';

/// The two token layers of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenLayer {
    /// Raw colors. Palette aliases stay in the palette.
    Palette,
    /// Role names. Semantic aliases look here first, then in the palette.
    Semantic,
}

impl std::fmt::Display for TokenLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TokenLayer::Palette => "palette",
            TokenLayer::Semantic => "semantic",
        })
    }
}

/// A theme token value: either a concrete color or an alias.
///
/// Strings starting with `@` are aliases, so `"@neutralPrimary"` refers to
/// the token named `neutralPrimary`. Anything else is a concrete CSS color.
///
/// # Example
///
/// ```rust
/// use mergestyles::ColorValue;
///
/// assert_eq!(ColorValue::from("#0078d4"), ColorValue::Concrete("#0078d4".into()));
/// assert_eq!(ColorValue::from("@themePrimary"), ColorValue::Alias("themePrimary".into()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorValue {
    /// A concrete CSS color.
    Concrete(String),
    /// The name of another token.
    Alias(String),
}

impl ColorValue {
    /// Creates an alias to `name`.
    pub fn alias(name: impl Into<String>) -> Self {
        ColorValue::Alias(name.into())
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        match s.strip_prefix(ALIAS_PREFIX) {
            Some(name) => ColorValue::Alias(name.to_string()),
            None => ColorValue::Concrete(s.to_string()),
        }
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        ColorValue::from(s.as_str())
    }
}

impl Serialize for ColorValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorValue::Concrete(color) => serializer.serialize_str(color),
            ColorValue::Alias(name) => serializer.collect_str(&format_args!("{}{}", ALIAS_PREFIX, name)),
        }
    }
}

impl<'de> Deserialize<'de> for ColorValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ColorValue::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_alias_keeps_prefix() {
        let json = serde_json::to_string(&ColorValue::alias("white")).unwrap();
        assert_eq!(json, r#""@white""#);
    }

    #[test]
    fn test_deserialize() {
        let value: ColorValue = serde_json::from_str(r#""@white""#).unwrap();
        assert_eq!(value, ColorValue::alias("white"));
    }
}
