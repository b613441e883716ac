//! Light/dark theme pairs rendered as a `prefers-color-scheme` media body.

use super::theme::Theme;
use super::token::ALIAS_PREFIX;
use crate::style::{StyleObject, StyleValue};
use crate::style_set::StyleSet;

/// The at-rule under which dark-mode overrides are emitted.
pub const DARK_MODE_QUERY: &str = "@media (prefers-color-scheme: dark)";

/// A color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// A pair of themes: one for light mode, one for dark mode.
///
/// Nothing is detected at runtime. [`AdaptiveTheme::apply_tokens`] resolves
/// `@token` values against the light theme and, for every value whose dark
/// color differs, adds an override under [`DARK_MODE_QUERY`]. The browser
/// picks between them.
///
/// # Example
///
/// ```rust
/// use mergestyles::{AdaptiveTheme, StyleObject, StyleSet, Stylesheet, Theme};
///
/// let light = Theme::new().add_semantic("bodyBackground", "#ffffff");
/// let dark = Theme::new().add_semantic("bodyBackground", "#1b1a19");
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// let set = StyleSet::new().slot(
///     "root",
///     vec![StyleObject::new().with("background", "@bodyBackground").into()],
/// );
/// let resolved = adaptive.apply_tokens(&set).resolve();
///
/// let mut sheet = Stylesheet::new();
/// sheet.class_names(resolved.get("root").unwrap());
/// assert_eq!(
///     sheet.to_css(),
///     ".css-0{background:#ffffff;}\n\
///      @media (prefers-color-scheme: dark){.css-0{background:#1b1a19;}}"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// Returns the variant for an explicit color mode.
    pub fn variant(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Replaces `@token` values with light colors and adds dark overrides.
    ///
    /// Each style object that references a token whose dark color differs
    /// gains a [`DARK_MODE_QUERY`] selector body holding just those
    /// properties, nested the same way as the originals.
    pub fn apply_tokens(&self, set: &StyleSet) -> StyleSet {
        let mut themed = set.clone();
        let mut overridden = 0usize;
        themed.map_styles(|style| {
            let dark = self.dark_overrides(style);
            self.light.apply_to_style(style);
            if !dark.is_empty() {
                overridden += 1;
                style.merge(&StyleObject::new().selector(DARK_MODE_QUERY, dark));
            }
        });
        log::debug!("added dark-mode overrides to {} style object(s)", overridden);
        themed
    }

    /// Collects the dark-mode values of token properties that change color.
    fn dark_overrides(&self, style: &StyleObject) -> StyleObject {
        let mut overrides = StyleObject::new();
        for (property, value) in style.properties() {
            let Some(text) = value.as_text().filter(|t| t.starts_with(ALIAS_PREFIX)) else {
                continue;
            };
            let Some(dark) = self.dark.token_color(text) else {
                continue;
            };
            if self.light.token_color(text) != Some(dark) {
                overrides.set(property, StyleValue::from(dark));
            }
        }
        for (selector, body) in style.selectors() {
            if selector == DARK_MODE_QUERY {
                continue;
            }
            let nested = self.dark_overrides(body);
            if !nested.is_empty() {
                overrides = overrides.selector(selector, nested);
            }
        }
        overrides
    }
}
