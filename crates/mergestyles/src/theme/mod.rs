//! Theme system for palette and semantic color tokens.
//!
//! This module provides:
//!
//! - [`Theme`]: Palette and semantic tokens with a fluent builder API
//! - [`ColorValue`]: A concrete color or an alias to another token
//! - [`AdaptiveTheme`]: Light/dark theme pairs emitted as a
//!   `prefers-color-scheme` media body
//! - [`ColorMode`]: Light or dark color mode enum
//!
//! Component style functions read token values from a theme when building
//! their style sets; [`Theme::apply_tokens`] rewrites `@token` values in
//! sets that were authored without one.

mod adaptive;
mod error;
#[allow(clippy::module_inception)]
mod theme;
mod token;

pub use adaptive::{AdaptiveTheme, ColorMode, DARK_MODE_QUERY};
pub use error::ThemeValidationError;
pub use theme::Theme;
pub use token::{ColorValue, TokenLayer, ALIAS_PREFIX};
