//! Slot-keyed style sets.
//!
//! A component describes each of its semantic slots ("root", "icon", ...)
//! as its own list of fragments. [`merge_style_sets`] concatenates any number
//! of such sets slot by slot and resolves every slot with
//! [`merge_styles`].

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::resolve::{merge_styles, ResolvedStyle};
use crate::style::{StyleFragment, StyleObject};

/// Fragment lists keyed by slot name, in insertion order.
///
/// # Example
///
/// ```rust
/// use mergestyles::{merge_style_sets, StyleObject, StyleSet};
///
/// let base = StyleSet::new()
///     .slot("root", vec!["ms-Button".into(), StyleObject::new().with("color", "black").into()])
///     .slot("icon", vec!["ms-Button-icon".into()]);
/// let custom = StyleSet::new().slot("root", vec![StyleObject::new().with("color", "red").into()]);
///
/// let resolved = merge_style_sets(&[base, custom]);
/// let root = resolved.get("root").unwrap();
/// assert_eq!(root.class_names, vec!["ms-Button"]);
/// assert_eq!(root.style.as_ref().unwrap().get("color").unwrap().to_string(), "red");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSet {
    slots: IndexMap<String, Vec<StyleFragment>>,
}

impl StyleSet {
    /// Creates an empty style set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends fragments to a slot, returning the updated set for chaining.
    pub fn slot(mut self, name: &str, fragments: Vec<StyleFragment>) -> Self {
        self.push(name, fragments);
        self
    }

    /// Appends fragments to a slot in place.
    pub fn push(&mut self, name: &str, fragments: Vec<StyleFragment>) {
        self.slots
            .entry(name.to_string())
            .or_default()
            .extend(fragments);
    }

    /// Returns the fragments registered for a slot.
    pub fn get(&self, name: &str) -> Option<&[StyleFragment]> {
        self.slots.get(name).map(Vec::as_slice)
    }

    /// Slot names in insertion order.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Visits every style object in every slot.
    pub fn map_styles<F: FnMut(&mut StyleObject)>(&mut self, mut f: F) {
        for fragments in self.slots.values_mut() {
            for fragment in fragments {
                fragment.map_styles(&mut f);
            }
        }
    }

    /// Rewrites text values of every style object in every slot.
    pub fn map_text_values<F: FnMut(&str) -> Option<String>>(&mut self, mut f: F) {
        self.map_styles(|style| style.map_text_values(&mut f));
    }

    /// Resolves every slot independently.
    pub fn resolve(&self) -> ResolvedStyleSet {
        let slots = self
            .slots
            .iter()
            .map(|(name, fragments)| (name.clone(), merge_styles(fragments)))
            .collect();
        ResolvedStyleSet { slots }
    }
}

/// Resolved styles keyed by slot name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResolvedStyleSet {
    slots: IndexMap<String, ResolvedStyle>,
}

impl ResolvedStyleSet {
    /// Returns the resolved style for a slot.
    pub fn get(&self, name: &str) -> Option<&ResolvedStyle> {
        self.slots.get(name)
    }

    /// Slots in insertion order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &ResolvedStyle)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Concatenates style sets slot by slot, in argument order.
///
/// Slots first seen in a later set are appended after the existing ones.
pub fn concat_style_sets(sets: &[StyleSet]) -> StyleSet {
    let mut merged = StyleSet::new();
    for set in sets {
        for (name, fragments) in &set.slots {
            merged.push(name, fragments.clone());
        }
    }
    merged
}

/// Concatenates style sets and resolves each slot.
pub fn merge_style_sets(sets: &[StyleSet]) -> ResolvedStyleSet {
    concat_style_sets(sets).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn test_push_appends_to_existing_slot() {
        let set = StyleSet::new()
            .slot("root", vec!["a".into()])
            .slot("root", vec!["b".into()]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("root").unwrap().len(), 2);
    }

    #[test]
    fn test_concat_preserves_slot_order() {
        let a = StyleSet::new().slot("root", vec![]).slot("icon", vec![]);
        let b = StyleSet::new().slot("label", vec![]).slot("root", vec![]);
        let merged = concat_style_sets(&[a, b]);

        let names: Vec<&str> = merged.slot_names().collect();
        assert_eq!(names, vec!["root", "icon", "label"]);
    }

    #[test]
    fn test_merge_later_set_wins() {
        let a = StyleSet::new().slot("root", vec![StyleObject::new().with("margin", 0).into()]);
        let b = StyleSet::new().slot("root", vec![StyleObject::new().with("margin", 4).into()]);

        let resolved = merge_style_sets(&[a, b]);
        let style = resolved.get("root").unwrap().style.as_ref().unwrap();
        assert_eq!(style.get("margin"), Some(&StyleValue::from(4)));
    }

    #[test]
    fn test_slots_resolve_independently() {
        let set = StyleSet::new()
            .slot("root", vec!["r".into()])
            .slot("icon", vec![StyleObject::new().with("color", "red").into()]);
        let resolved = set.resolve();

        assert!(resolved.get("root").unwrap().style.is_none());
        assert!(resolved.get("icon").unwrap().class_names.is_empty());
        assert!(resolved.get("missing").is_none());
    }

    #[test]
    fn test_map_styles_reaches_nested_fragments() {
        let mut set = StyleSet::new().slot(
            "root",
            vec![
                "ms-Check".into(),
                StyleFragment::Sequence(vec![StyleObject::new().with("color", "@accent").into()]),
                StyleObject::new().with("color", "@accent").into(),
            ],
        );
        let mut visited = 0;
        set.map_styles(|style| {
            visited += 1;
            style.set("margin", 0);
        });
        assert_eq!(visited, 2);

        set.map_text_values(|text| (text == "@accent").then(|| "red".to_string()));
        let style = set.resolve().get("root").unwrap().style.clone().unwrap();
        assert_eq!(style.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(style.get("margin"), Some(&StyleValue::from(0)));
    }

    #[test]
    fn test_deserialize_transparent() {
        let set: StyleSet =
            serde_json::from_str(r#"{"root": ["ms-Check", {"lineHeight": "1"}]}"#).unwrap();
        assert_eq!(set.get("root").unwrap().len(), 2);
    }
}
