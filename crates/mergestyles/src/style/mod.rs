//! Style data model.
//!
//! This module provides the primitives a style set is built from:
//!
//! - [`StyleValue`]: A CSS property value, text or number
//! - [`StyleObject`]: Ordered properties plus nested `selectors` bodies
//! - [`StyleFragment`]: A class name, a style object, a nested group, or nothing
//!
//! Fragments are combined by [`merge_styles`](crate::merge_styles).

mod fragment;
mod object;
mod value;

pub use fragment::{when, StyleFragment};
pub use object::{StyleObject, SELECTORS_KEY};
pub use value::StyleValue;
