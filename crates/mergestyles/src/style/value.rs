//! CSS property values.

use serde::{Deserialize, Serialize};

/// A single CSS property value.
///
/// Values are either text (`"1"`, `"Window"`, `"1px solid red"`) or bare
/// numbers. Numbers are kept distinct so a stylesheet can append a unit
/// where CSS requires one. Integers and fractional numbers are separate
/// variants so an integer written as `600` serializes back as `600`.
///
/// # Example
///
/// ```rust
/// use mergestyles::StyleValue;
///
/// let text: StyleValue = "Window".into();
/// let number: StyleValue = 600.into();
///
/// assert_eq!(text.to_string(), "Window");
/// assert_eq!(number.to_string(), "600");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A textual value, emitted verbatim.
    Text(String),
    /// An integral numeric value.
    Integer(i64),
    /// A fractional numeric value.
    Number(f64),
}

impl StyleValue {
    /// Returns the numeric value, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Integer(n) => Some(*n as f64),
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
        }
    }

    /// Returns true for a numeric zero.
    pub fn is_zero(&self) -> bool {
        match self {
            StyleValue::Integer(n) => *n == 0,
            StyleValue::Number(n) => *n == 0.0,
            StyleValue::Text(_) => false,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            StyleValue::Integer(_) | StyleValue::Number(_) => None,
        }
    }
}

impl std::fmt::Display for StyleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StyleValue::Text(s) => f.write_str(s),
            StyleValue::Integer(n) => write!(f, "{}", n),
            StyleValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<&String> for StyleValue {
    fn from(s: &String) -> Self {
        StyleValue::Text(s.clone())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Integer(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Integer(i64::from(n))
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Integer(i64::from(n))
    }
}
