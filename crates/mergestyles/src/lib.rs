//! # mergestyles - ordered, conditional style merging
//!
//! `mergestyles` composes class names and style objects for UI components.
//! Each semantic slot of a component ("root", "icon", ...) is described as an
//! ordered list of [`StyleFragment`]s, which [`merge_styles`] flattens into one
//! class-name list and one merged [`StyleObject`].
//!
//! ## Quick start
//!
//! ```rust
//! use mergestyles::{merge_styles, when, StyleFragment, StyleObject, Stylesheet};
//!
//! let checked = true;
//! let resolved = merge_styles(&[
//!     "ms-Check".into(),
//!     StyleObject::new().with("lineHeight", "1").into(),
//!     when(
//!         checked,
//!         vec![
//!             StyleFragment::from("is-checked"),
//!             StyleObject::new()
//!                 .selector("&:before", StyleObject::new().with("background", "Window"))
//!                 .into(),
//!         ],
//!     ),
//! ]);
//!
//! let mut sheet = Stylesheet::new();
//! assert_eq!(sheet.class_names(&resolved), "ms-Check is-checked css-0");
//! ```
//!
//! ## Merge rules
//!
//! - Fragments apply in order; later style objects win on property collision
//! - `selectors` bodies merge per selector and per property
//! - [`StyleFragment::Omitted`] contributes nothing, wherever it appears
//! - Nested groups resolve as if spliced into their parent
//! - `selectors` is always the last key of a merged style object
//!
//! ## Layers
//!
//! - [`StyleSet`] / [`merge_style_sets`]: per-slot fragment lists
//! - [`Stylesheet`]: generated classes and CSS rules
//! - [`Theme`] / [`AdaptiveTheme`]: palette and semantic color tokens
//! - [`ComponentStyles`]: per-component style functions with customization layers
//! - [`StyleSet::from_path`] / [`Theme::from_path`]: YAML and JSON documents

mod component;
mod document;
mod resolve;
pub mod style;
mod style_set;
mod stylesheet;
pub mod theme;

pub use component::{ComponentStyles, StyleProps};
pub use document::{DocumentFormat, LoadError};
pub use resolve::{merge_styles, ResolvedStyle};
pub use style::{when, StyleFragment, StyleObject, StyleValue, SELECTORS_KEY};
pub use style_set::{concat_style_sets, merge_style_sets, ResolvedStyleSet, StyleSet};
pub use stylesheet::{Stylesheet, StylesheetConfig};
pub use theme::{
    AdaptiveTheme, ColorMode, ColorValue, Theme, ThemeValidationError, TokenLayer,
    DARK_MODE_QUERY,
};
