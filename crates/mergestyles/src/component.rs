//! Component styling by explicit composition.
//!
//! A component's styles are a plain record holding one or more style
//! functions. Customizing a component returns a new record with another
//! function appended; nothing wraps or subclasses the component itself.

use std::fmt;
use std::sync::Arc;

use crate::style_set::{concat_style_sets, ResolvedStyleSet, StyleSet};
use crate::theme::{AdaptiveTheme, ColorMode, Theme};

/// Inputs available to a style function.
pub struct StyleProps<'a, P> {
    /// The resolved theme.
    pub theme: &'a Theme,
    /// Component props such as `checked` or `disabled`.
    pub props: &'a P,
    /// Pass-through class name supplied by the component's user.
    pub class_name: Option<&'a str>,
}

type StyleFunction<P> = Arc<dyn Fn(&StyleProps<'_, P>) -> StyleSet + Send + Sync>;

/// The style description of one component.
///
/// # Example
///
/// ```rust
/// use mergestyles::{when, ComponentStyles, StyleFragment, StyleObject, StyleSet, Theme};
///
/// struct CheckProps {
///     checked: bool,
/// }
///
/// let check = ComponentStyles::new("Check", |p: &mergestyles::StyleProps<'_, CheckProps>| {
///     StyleSet::new().slot(
///         "root",
///         vec![
///             "ms-Check".into(),
///             StyleObject::new().with("lineHeight", "1").into(),
///             when(p.props.checked, "is-checked"),
///             p.class_name.into(),
///         ],
///     )
/// });
///
/// let theme = Theme::new();
/// let resolved = check.resolve(&theme, &CheckProps { checked: true }, Some("my-check"));
/// assert_eq!(
///     resolved.get("root").unwrap().class_names,
///     vec!["ms-Check", "is-checked", "my-check"]
/// );
/// ```
pub struct ComponentStyles<P> {
    name: String,
    styles: Vec<StyleFunction<P>>,
}

impl<P> ComponentStyles<P> {
    /// Creates a component description from its base style function.
    pub fn new<F>(name: &str, styles: F) -> Self
    where
        F: Fn(&StyleProps<'_, P>) -> StyleSet + Send + Sync + 'static,
    {
        let base: StyleFunction<P> = Arc::new(styles);
        Self {
            name: name.to_string(),
            styles: vec![base],
        }
    }

    /// Returns a new description whose styles are followed by `customize`.
    ///
    /// Customization slots are concatenated after the base slots, so their
    /// properties win on collision.
    pub fn with_customizations<F>(&self, customize: F) -> Self
    where
        F: Fn(&StyleProps<'_, P>) -> StyleSet + Send + Sync + 'static,
    {
        let mut styles = self.styles.clone();
        styles.push(Arc::new(customize));
        Self {
            name: self.name.clone(),
            styles,
        }
    }

    /// The component name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of style layers, including the base.
    pub fn layers(&self) -> usize {
        self.styles.len()
    }

    /// Builds the concatenated style set without resolving it.
    pub fn style_set(&self, props: &StyleProps<'_, P>) -> StyleSet {
        let sets: Vec<StyleSet> = self.styles.iter().map(|f| f(props)).collect();
        concat_style_sets(&sets)
    }

    /// Builds and resolves the style set for the given theme and props.
    pub fn resolve(&self, theme: &Theme, props: &P, class_name: Option<&str>) -> ResolvedStyleSet {
        log::debug!(
            "resolving {} styles across {} layer(s)",
            self.name,
            self.styles.len()
        );
        self.build(theme, props, class_name).resolve()
    }

    /// Resolves against the light variant with dark-mode overrides.
    ///
    /// Style functions see the light theme. `@token` values they leave in
    /// the set are resolved by [`AdaptiveTheme::apply_tokens`].
    pub fn resolve_adaptive(
        &self,
        theme: &AdaptiveTheme,
        props: &P,
        class_name: Option<&str>,
    ) -> ResolvedStyleSet {
        log::debug!(
            "resolving {} adaptive styles across {} layer(s)",
            self.name,
            self.styles.len()
        );
        let set = self.build(theme.variant(ColorMode::Light), props, class_name);
        theme.apply_tokens(&set).resolve()
    }

    fn build(&self, theme: &Theme, props: &P, class_name: Option<&str>) -> StyleSet {
        self.style_set(&StyleProps {
            theme,
            props,
            class_name,
        })
    }
}

impl<P> Clone for ComponentStyles<P> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            styles: self.styles.clone(),
        }
    }
}

impl<P> fmt::Debug for ComponentStyles<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentStyles")
            .field("name", &self.name)
            .field("layers", &self.styles.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{StyleObject, StyleValue};

    struct ButtonProps {
        primary: bool,
    }

    fn button() -> ComponentStyles<ButtonProps> {
        ComponentStyles::new("Button", |p: &StyleProps<'_, ButtonProps>| {
            let background = if p.props.primary {
                p.theme.color("themePrimary").unwrap_or("blue")
            } else {
                "white"
            };
            StyleSet::new()
                .slot(
                    "root",
                    vec![
                        "ms-Button".into(),
                        StyleObject::new()
                            .with("background", background)
                            .with("padding", 4)
                            .into(),
                    ],
                )
                .slot("icon", vec!["ms-Button-icon".into()])
        })
    }

    #[test]
    fn test_base_styles_use_theme() {
        let theme = Theme::new().add_palette("themePrimary", "#0078d4");
        let resolved = button().resolve(&theme, &ButtonProps { primary: true }, None);

        let style = resolved.get("root").unwrap().style.as_ref().unwrap();
        assert_eq!(style.get("background"), Some(&StyleValue::from("#0078d4")));
    }

    #[test]
    fn test_customizations_override_base() {
        let custom = button().with_customizations(|_p| {
            StyleSet::new().slot(
                "root",
                vec![StyleObject::new().with("padding", 8).into()],
            )
        });
        assert_eq!(custom.layers(), 2);

        let theme = Theme::new();
        let resolved = custom.resolve(&theme, &ButtonProps { primary: false }, None);
        let style = resolved.get("root").unwrap().style.as_ref().unwrap();
        assert_eq!(style.get("padding"), Some(&StyleValue::from(8)));
        assert_eq!(style.get("background"), Some(&StyleValue::from("white")));
        assert!(resolved.get("icon").is_some());
    }

    #[test]
    fn test_resolve_adaptive_adds_dark_overrides() {
        let themed = button().with_customizations(|_p| {
            StyleSet::new().slot(
                "icon",
                vec![StyleObject::new().with("color", "@bodyText").into()],
            )
        });
        let adaptive = AdaptiveTheme::new(
            Theme::new().add_semantic("bodyText", "#323130"),
            Theme::new().add_semantic("bodyText", "#f3f2f1"),
        );
        let resolved = themed.resolve_adaptive(&adaptive, &ButtonProps { primary: false }, None);

        let icon = resolved.get("icon").unwrap().style.as_ref().unwrap();
        assert_eq!(icon.get("color"), Some(&StyleValue::from("#323130")));
        let dark = icon.selector_body(crate::theme::DARK_MODE_QUERY).unwrap();
        assert_eq!(dark.get("color"), Some(&StyleValue::from("#f3f2f1")));

        let root = resolved.get("root").unwrap().style.as_ref().unwrap();
        assert!(!root.has_selectors());
    }

    #[test]
    fn test_customization_leaves_original_untouched() {
        let base = button();
        let _custom = base.with_customizations(|_p| StyleSet::new());
        assert_eq!(base.layers(), 1);
        assert_eq!(base.name(), "Button");
    }
}
