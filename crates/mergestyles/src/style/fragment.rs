//! Style fragments: the units a style set is built from.

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::object::StyleObject;

/// One unit of a style set.
///
/// Conditional inclusion is expressed with [`StyleFragment::Omitted`],
/// usually produced from an `Option` or from [`when`].
///
/// # Example
///
/// ```rust
/// use mergestyles::{merge_styles, when, StyleFragment, StyleObject};
///
/// let checked = true;
/// let fragments = vec![
///     StyleFragment::from("ms-Check"),
///     StyleObject::new().with("lineHeight", "1").into(),
///     when(checked, vec![StyleFragment::from("is-checked")]),
/// ];
///
/// let resolved = merge_styles(&fragments);
/// assert_eq!(resolved.class_names, vec!["ms-Check", "is-checked"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StyleFragment {
    /// A literal class-name token.
    ClassName(String),
    /// A style object merged into the result.
    Style(StyleObject),
    /// An ordered group of fragments, usually included conditionally.
    Sequence(Vec<StyleFragment>),
    /// A fragment that contributes nothing.
    #[default]
    Omitted,
}

impl StyleFragment {
    /// Returns true for [`StyleFragment::Omitted`].
    pub fn is_omitted(&self) -> bool {
        matches!(self, StyleFragment::Omitted)
    }

    /// Visits every style object in this fragment, depth first.
    pub fn map_styles<F: FnMut(&mut StyleObject)>(&mut self, f: &mut F) {
        match self {
            StyleFragment::Style(style) => f(style),
            StyleFragment::Sequence(fragments) => {
                for fragment in fragments {
                    fragment.map_styles(f);
                }
            }
            StyleFragment::ClassName(_) | StyleFragment::Omitted => {}
        }
    }
}

/// Includes `fragment` only when `condition` holds.
pub fn when<F: Into<StyleFragment>>(condition: bool, fragment: F) -> StyleFragment {
    if condition {
        fragment.into()
    } else {
        StyleFragment::Omitted
    }
}

impl From<&str> for StyleFragment {
    fn from(class_name: &str) -> Self {
        StyleFragment::ClassName(class_name.to_string())
    }
}

impl From<String> for StyleFragment {
    fn from(class_name: String) -> Self {
        StyleFragment::ClassName(class_name)
    }
}

impl From<StyleObject> for StyleFragment {
    fn from(style: StyleObject) -> Self {
        StyleFragment::Style(style)
    }
}

impl From<Vec<StyleFragment>> for StyleFragment {
    fn from(fragments: Vec<StyleFragment>) -> Self {
        StyleFragment::Sequence(fragments)
    }
}

impl<T: Into<StyleFragment>> From<Option<T>> for StyleFragment {
    fn from(fragment: Option<T>) -> Self {
        fragment.map_or(StyleFragment::Omitted, Into::into)
    }
}

impl Serialize for StyleFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleFragment::ClassName(name) => serializer.serialize_str(name),
            StyleFragment::Style(style) => style.serialize(serializer),
            StyleFragment::Sequence(fragments) => fragments.serialize(serializer),
            StyleFragment::Omitted => serializer.serialize_bool(false),
        }
    }
}

impl<'de> Deserialize<'de> for StyleFragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FragmentVisitor)
    }
}

struct FragmentVisitor;

impl<'de> Visitor<'de> for FragmentVisitor {
    type Value = StyleFragment;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str("a class name, a style map, a list of fragments, false or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StyleFragment, E> {
        if v.is_empty() {
            Ok(StyleFragment::Omitted)
        } else {
            Ok(StyleFragment::from(v))
        }
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<StyleFragment, E> {
        if v.is_empty() {
            Ok(StyleFragment::Omitted)
        } else {
            Ok(StyleFragment::ClassName(v))
        }
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<StyleFragment, E> {
        if v {
            Err(E::invalid_value(de::Unexpected::Bool(true), &self))
        } else {
            Ok(StyleFragment::Omitted)
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<StyleFragment, E> {
        Ok(StyleFragment::Omitted)
    }

    fn visit_none<E: de::Error>(self) -> Result<StyleFragment, E> {
        Ok(StyleFragment::Omitted)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<StyleFragment, D::Error> {
        deserializer.deserialize_any(FragmentVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StyleFragment, A::Error> {
        let mut fragments = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(fragment) = seq.next_element::<StyleFragment>()? {
            fragments.push(fragment);
        }
        Ok(StyleFragment::Sequence(fragments))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, map: A) -> Result<StyleFragment, A::Error> {
        StyleObject::deserialize(de::value::MapAccessDeserializer::new(map)).map(StyleFragment::Style)
    }
}
