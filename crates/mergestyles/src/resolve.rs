//! The style-set resolver.
//!
//! [`merge_styles`] flattens an ordered, possibly nested list of
//! [`StyleFragment`]s into a single [`ResolvedStyle`]:
//!
//! - Omitted fragments are skipped
//! - Class names are appended in input order (duplicates are kept)
//! - Style objects are merged, later fragments winning on property collision
//! - `selectors` bodies are merged per selector key, not replaced wholesale
//!
//! Nested sequences resolve exactly as if their contents were spliced into
//! the parent, so grouping never changes the result.

use serde::Serialize;

use crate::style::{StyleFragment, StyleObject};

/// The flattened result of resolving a list of fragments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    /// Class-name tokens in fragment order.
    pub class_names: Vec<String>,
    /// The merged style, or `None` when no style object was present.
    pub style: Option<StyleObject>,
}

impl ResolvedStyle {
    /// Class names with duplicates removed, keeping the first occurrence.
    pub fn unique_class_names(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.class_names.len());
        for name in &self.class_names {
            if !seen.contains(&name.as_str()) {
                seen.push(name);
            }
        }
        seen
    }

    /// The deduplicated class names joined with spaces.
    pub fn class_string(&self) -> String {
        self.unique_class_names().join(" ")
    }

    /// Returns true if nothing was contributed.
    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty() && self.style.is_none()
    }

    fn absorb(&mut self, fragment: &StyleFragment) {
        match fragment {
            StyleFragment::Omitted => {}
            StyleFragment::ClassName(name) => self.class_names.push(name.clone()),
            StyleFragment::Sequence(fragments) => {
                for inner in fragments {
                    self.absorb(inner);
                }
            }
            StyleFragment::Style(style) => match &mut self.style {
                Some(merged) => merged.merge(style),
                None => self.style = Some(style.clone()),
            },
        }
    }
}

/// Resolves `fragments` into one class-name list and one merged style.
///
/// This is a pure function of its input.
///
/// # Example
///
/// ```rust
/// use mergestyles::{merge_styles, StyleFragment, StyleObject};
///
/// let resolved = merge_styles(&[
///     "ms-Check".into(),
///     StyleObject::new().with("lineHeight", "1").into(),
///     StyleFragment::Omitted,
///     vec![
///         StyleFragment::from("is-checked"),
///         StyleObject::new()
///             .selector("&:before", StyleObject::new().with("background", "Window"))
///             .into(),
///     ]
///     .into(),
/// ]);
///
/// assert_eq!(resolved.class_names, vec!["ms-Check", "is-checked"]);
/// assert_eq!(
///     serde_json::to_string(&resolved.style).unwrap(),
///     r#"{"lineHeight":"1","selectors":{"&:before":{"background":"Window"}}}"#
/// );
/// ```
pub fn merge_styles(fragments: &[StyleFragment]) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::default();
    for fragment in fragments {
        resolved.absorb(fragment);
    }
    resolved
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn style_object() -> impl Strategy<Value = StyleObject> {
        let props = prop::collection::vec(
            (prop::sample::select(vec!["color", "margin", "padding"]), "[a-z]{1,4}"),
            0..3,
        );
        let selector = prop::collection::vec(
            (
                prop::sample::select(vec![":hover", "&:before", "& .icon"]),
                prop::collection::vec(
                    (prop::sample::select(vec!["color", "background"]), "[a-z]{1,4}"),
                    0..3,
                ),
            ),
            0..2,
        );
        (props, selector).prop_map(|(props, selectors)| {
            let mut style = StyleObject::new();
            for (k, v) in props {
                style.set(k, v);
            }
            for (sel, body_props) in selectors {
                let mut body = StyleObject::new();
                for (k, v) in body_props {
                    body.set(k, v);
                }
                style = style.selector(sel, body);
            }
            style
        })
    }

    fn fragment() -> impl Strategy<Value = StyleFragment> {
        let leaf = prop_oneof![
            "[a-z]{1,6}".prop_map(StyleFragment::ClassName),
            style_object().prop_map(StyleFragment::Style),
            Just(StyleFragment::Omitted),
        ];
        leaf.prop_recursive(3, 16, 4, |inner| {
            prop::collection::vec(inner, 0..4).prop_map(StyleFragment::Sequence)
        })
    }

    fn flatten(fragments: &[StyleFragment], out: &mut Vec<StyleFragment>) {
        for f in fragments {
            match f {
                StyleFragment::Sequence(inner) => flatten(inner, out),
                other => out.push(other.clone()),
            }
        }
    }

    proptest! {
        #[test]
        fn class_only_sets_concatenate_in_order(
            names in prop::collection::vec("[a-z]{1,6}", 0..8),
        ) {
            let fragments: Vec<StyleFragment> =
                names.iter().cloned().map(StyleFragment::ClassName).collect();
            let resolved = merge_styles(&fragments);
            prop_assert_eq!(resolved.class_names, names);
            prop_assert!(resolved.style.is_none());
        }

        #[test]
        fn omitted_fragments_are_transparent(
            fragments in prop::collection::vec(fragment(), 0..6),
            positions in prop::collection::vec(0usize..7, 0..4),
        ) {
            let mut with_omitted = fragments.clone();
            for p in positions {
                let at = p.min(with_omitted.len());
                with_omitted.insert(at, StyleFragment::Omitted);
            }
            prop_assert_eq!(merge_styles(&with_omitted), merge_styles(&fragments));
        }

        #[test]
        fn nesting_flattens_associatively(
            fragments in prop::collection::vec(fragment(), 0..6),
        ) {
            let mut flat = Vec::new();
            flatten(&fragments, &mut flat);
            prop_assert_eq!(merge_styles(&fragments), merge_styles(&flat));
        }

        #[test]
        fn selectors_key_is_always_last(
            fragments in prop::collection::vec(fragment(), 0..6),
        ) {
            if let Some(style) = merge_styles(&fragments).style {
                let keys: Vec<&str> = style.keys().collect();
                if let Some(pos) = keys.iter().position(|k| *k == "selectors") {
                    prop_assert_eq!(pos, keys.len() - 1);
                }
            }
        }

        #[test]
        fn later_style_wins(first in "[a-z]{1,4}", second in "[a-z]{1,4}") {
            let a = StyleObject::new().with("color", first.as_str());
            let b = StyleObject::new().with("color", second.as_str());
            let style = merge_styles(&[a.into(), b.into()]).style.unwrap();
            prop_assert_eq!(style.get("color").and_then(|v| v.as_text()), Some(second.as_str()));
        }
    }
}
