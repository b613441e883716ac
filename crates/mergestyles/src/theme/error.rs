//! Alias resolution failures.

use thiserror::Error;

use super::token::TokenLayer;

/// Why a theme's aliases do not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeValidationError {
    /// `token` aliases `target`, which no reachable layer defines.
    #[error("{layer} token '{token}' aliases missing token '{target}'")]
    DanglingAlias {
        token: String,
        target: String,
        layer: TokenLayer,
    },
    /// Following aliases returned to a token already on the path.
    #[error("alias cycle: {}", .path.join(" -> "))]
    AliasCycle { path: Vec<String> },
}
