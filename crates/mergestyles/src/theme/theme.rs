//! Theme struct for building color token collections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::ThemeValidationError;
use super::token::{ColorValue, TokenLayer, ALIAS_PREFIX};
use crate::style::StyleObject;
use crate::style_set::StyleSet;

/// Palette and semantic color tokens used when building style sets.
///
/// Palette tokens name raw colors. Semantic tokens name roles
/// ("bodyText", "inputBackgroundChecked") and usually alias palette tokens.
///
/// # Example
///
/// ```rust
/// use mergestyles::Theme;
///
/// let theme = Theme::new()
///     // Palette layer - concrete colors
///     .add_palette("themePrimary", "#0078d4")
///     .add_palette("white", "#ffffff")
///     // Semantic layer - aliases to the palette
///     .add_semantic("inputBackgroundChecked", "@themePrimary")
///     .add_semantic("inputForegroundChecked", "@white");
///
/// assert_eq!(theme.color("inputBackgroundChecked"), Some("#0078d4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    palette: IndexMap<String, ColorValue>,
    semantic_colors: IndexMap<String, ColorValue>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a palette token, returning an updated theme for chaining.
    ///
    /// Palette aliases may only refer to other palette tokens.
    pub fn add_palette<V: Into<ColorValue>>(mut self, name: &str, value: V) -> Self {
        self.palette.insert(name.to_string(), value.into());
        self
    }

    /// Adds a semantic token, returning an updated theme for chaining.
    ///
    /// Semantic aliases look in the semantic layer first, then the palette.
    /// A semantic token aliasing its own name refers to the palette token.
    pub fn add_semantic<V: Into<ColorValue>>(mut self, name: &str, value: V) -> Self {
        self.semantic_colors.insert(name.to_string(), value.into());
        self
    }

    /// Overlays `other` on this theme; tokens in `other` win.
    pub fn extend(mut self, other: &Theme) -> Self {
        for (name, value) in &other.palette {
            self.palette.insert(name.clone(), value.clone());
        }
        for (name, value) in &other.semantic_colors {
            self.semantic_colors.insert(name.clone(), value.clone());
        }
        self
    }

    /// Resolves a token to a concrete color.
    ///
    /// Semantic tokens shadow palette tokens of the same name. Returns `None`
    /// if the token is missing or its aliases do not resolve.
    pub fn color(&self, name: &str) -> Option<&str> {
        self.follow(name, TokenLayer::Semantic).ok().flatten()
    }

    /// Resolves a palette token, ignoring semantic tokens.
    pub fn palette_color(&self, name: &str) -> Option<&str> {
        self.follow(name, TokenLayer::Palette).ok().flatten()
    }

    /// Resolves a `@token` text value; other text yields `None`.
    pub fn token_color(&self, text: &str) -> Option<&str> {
        self.color(text.strip_prefix(ALIAS_PREFIX)?)
    }

    /// Returns true if a token exists in either layer.
    pub fn has(&self, name: &str) -> bool {
        self.palette.contains_key(name) || self.semantic_colors.contains_key(name)
    }

    /// Returns true if the theme has no tokens.
    pub fn is_empty(&self) -> bool {
        self.palette.is_empty() && self.semantic_colors.is_empty()
    }

    /// Palette tokens in insertion order.
    pub fn palette(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.palette.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Semantic tokens in insertion order.
    pub fn semantic_colors(&self) -> impl Iterator<Item = (&str, &ColorValue)> {
        self.semantic_colors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Validates that every alias resolves without cycles.
    pub fn validate(&self) -> Result<(), ThemeValidationError> {
        for name in self.palette.keys() {
            self.follow(name, TokenLayer::Palette)?;
        }
        for name in self.semantic_colors.keys() {
            self.follow(name, TokenLayer::Semantic)?;
        }
        Ok(())
    }

    /// Replaces `@token` text values in a style set with resolved colors.
    ///
    /// Tokens that do not resolve are left as written.
    pub fn apply_tokens(&self, set: &StyleSet) -> StyleSet {
        let mut themed = set.clone();
        themed.map_styles(|style| self.apply_to_style(style));
        themed
    }

    pub(crate) fn apply_to_style(&self, style: &mut StyleObject) {
        style.map_text_values(&mut |text| {
            if !text.starts_with(ALIAS_PREFIX) {
                return None;
            }
            match self.token_color(text) {
                Some(color) => Some(color.to_string()),
                None => {
                    log::warn!("unresolved theme token '{}'", text);
                    None
                }
            }
        });
    }

    /// Finds `name` starting at `layer`, returning the layer it was found in.
    fn lookup(&self, name: &str, layer: TokenLayer) -> Option<(&ColorValue, TokenLayer)> {
        let palette = || self.palette.get(name).map(|v| (v, TokenLayer::Palette));
        match layer {
            TokenLayer::Palette => palette(),
            TokenLayer::Semantic => self
                .semantic_colors
                .get(name)
                .map(|v| (v, TokenLayer::Semantic))
                .or_else(palette),
        }
    }

    /// Follows aliases from `name`.
    ///
    /// `Ok(None)` means `name` itself is not a token; a dangling alias
    /// further down the chain is an error. Once a hop lands in the palette
    /// the rest of the chain stays there.
    fn follow(&self, name: &str, layer: TokenLayer) -> Result<Option<&str>, ThemeValidationError> {
        let (mut current, mut layer) = match self.lookup(name, layer) {
            Some(found) => found,
            None => return Ok(None),
        };
        let mut path = vec![(layer, name)];

        loop {
            match current {
                ColorValue::Concrete(color) => return Ok(Some(color)),
                ColorValue::Alias(target) => {
                    let (from_layer, from) = path[path.len() - 1];
                    let search = if from_layer == TokenLayer::Semantic && target == from {
                        TokenLayer::Palette
                    } else {
                        layer
                    };
                    let (next, found) = self.lookup(target, search).ok_or_else(|| {
                        ThemeValidationError::DanglingAlias {
                            token: from.to_string(),
                            target: target.clone(),
                            layer: from_layer,
                        }
                    })?;
                    if path.contains(&(found, target.as_str())) {
                        let mut names: Vec<String> =
                            path.iter().map(|(_, n)| n.to_string()).collect();
                        names.push(target.clone());
                        return Err(ThemeValidationError::AliasCycle { path: names });
                    }
                    path.push((found, target.as_str()));
                    current = next;
                    layer = found;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fabric() -> Theme {
        Theme::new()
            .add_palette("themePrimary", "#0078d4")
            .add_palette("white", "#ffffff")
            .add_palette("accent", "@themePrimary")
            .add_semantic("bodyBackground", "@white")
            .add_semantic("inputBackgroundChecked", "@accent")
            .add_semantic("link", "@inputBackgroundChecked")
    }

    #[test]
    fn test_color_concrete() {
        assert_eq!(fabric().color("white"), Some("#ffffff"));
    }

    #[test]
    fn test_color_alias_chain() {
        let theme = fabric();
        assert_eq!(theme.color("accent"), Some("#0078d4"));
        assert_eq!(theme.color("inputBackgroundChecked"), Some("#0078d4"));
        assert_eq!(theme.color("link"), Some("#0078d4"));
    }

    #[test]
    fn test_color_missing() {
        assert_eq!(fabric().color("nope"), None);
    }

    #[test]
    fn test_semantic_shadows_palette() {
        let theme = Theme::new()
            .add_palette("white", "#ffffff")
            .add_semantic("white", "#fafafa");
        assert_eq!(theme.color("white"), Some("#fafafa"));
        assert_eq!(theme.palette_color("white"), Some("#ffffff"));
    }

    #[test]
    fn test_palette_alias_cannot_reach_semantic() {
        let theme = Theme::new()
            .add_semantic("bodyText", "#333333")
            .add_palette("text", "@bodyText");
        assert!(theme.validate().is_err());
        assert_eq!(theme.palette_color("text"), None);
    }

    #[test]
    fn test_validate_valid() {
        assert!(fabric().validate().is_ok());
    }

    #[test]
    fn test_validate_unresolved() {
        let theme = Theme::new().add_semantic("orphan", "@missing");
        assert_eq!(
            theme.validate(),
            Err(ThemeValidationError::DanglingAlias {
                token: "orphan".into(),
                target: "missing".into(),
                layer: TokenLayer::Semantic,
            })
        );
    }

    #[test]
    fn test_validate_cycle() {
        let theme = Theme::new()
            .add_palette("a", "@b")
            .add_palette("b", "@a");
        match theme.validate() {
            Err(ThemeValidationError::AliasCycle { path }) => {
                assert_eq!(path, vec!["a", "b", "a"]);
            }
            other => panic!("expected cycle, got {:?}", other),
        }
    }

    #[test]
    fn test_semantic_self_alias_reads_palette() {
        let theme = Theme::new()
            .add_palette("white", "#ffffff")
            .add_semantic("white", "@white");
        assert_eq!(theme.color("white"), Some("#ffffff"));
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_chain_stays_in_palette_after_palette_hop() {
        let theme = Theme::new()
            .add_palette("accent", "@brand")
            .add_palette("brand", "#0078d4")
            .add_semantic("brand", "#ff0000")
            .add_semantic("link", "@accent");
        assert_eq!(theme.color("link"), Some("#0078d4"));
        assert_eq!(theme.color("brand"), Some("#ff0000"));
        assert!(theme.validate().is_ok());
    }

    #[test]
    fn test_semantic_cycle_through_layers() {
        let theme = Theme::new()
            .add_semantic("a", "@b")
            .add_semantic("b", "@a");
        assert!(matches!(
            theme.validate(),
            Err(ThemeValidationError::AliasCycle { .. })
        ));
        assert_eq!(theme.color("a"), None);
    }

    #[test]
    fn test_token_color() {
        let theme = fabric();
        assert_eq!(theme.token_color("@link"), Some("#0078d4"));
        assert_eq!(theme.token_color("link"), None);
        assert_eq!(theme.token_color("@nope"), None);
    }

    #[test]
    fn test_extend_overrides() {
        let theme = fabric().extend(&Theme::new().add_palette("themePrimary", "#106ebe"));
        assert_eq!(theme.color("link"), Some("#106ebe"));
    }

    #[test]
    fn test_apply_tokens() {
        use crate::style::StyleValue;

        let set = StyleSet::new().slot(
            "root",
            vec![StyleObject::new()
                .with("color", "@link")
                .with("borderColor", "@unknown")
                .selector(":hover", StyleObject::new().with("background", "@white"))
                .into()],
        );
        let themed = fabric().apply_tokens(&set).resolve();
        let style = themed.get("root").unwrap().style.as_ref().unwrap();

        assert_eq!(style.get("color"), Some(&StyleValue::from("#0078d4")));
        assert_eq!(style.get("borderColor"), Some(&StyleValue::from("@unknown")));
        let hover = style.selector_body(":hover").unwrap();
        assert_eq!(hover.get("background"), Some(&StyleValue::from("#ffffff")));
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Theme::default().is_empty());
        assert!(fabric().has("bodyBackground"));
    }
}
