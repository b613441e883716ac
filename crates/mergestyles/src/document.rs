//! Loading style sets and themes from YAML or JSON documents.
//!
//! A style-set document maps slot names to fragment lists:
//!
//! ```yaml
//! root:
//!   - ms-Check
//!   - lineHeight: "1"
//!   - false
//!   - - is-checked
//!     - selectors:
//!         "&:before":
//!           background: Window
//! ```
//!
//! A theme document has `palette` and `semanticColors` maps. Values
//! starting with `@` alias another token:
//!
//! ```yaml
//! palette:
//!   themePrimary: "#0078d4"
//! semanticColors:
//!   inputBackgroundChecked: "@themePrimary"
//! ```

use std::path::Path;

use thiserror::Error;

use crate::style_set::StyleSet;
use crate::theme::{Theme, ThemeValidationError};

/// Error returned when a document cannot be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid YAML or does not match the expected shape.
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The theme's aliases do not resolve.
    #[error("invalid theme: {0}")]
    InvalidTheme(#[from] ThemeValidationError),

    /// The file extension does not name a supported format.
    #[error("unsupported document extension for {path} (expected .yaml, .yml or .json)")]
    UnsupportedExtension { path: String },
}

/// Document formats understood by the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Picks a format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Ok(DocumentFormat::Yaml),
            Some("json") => Ok(DocumentFormat::Json),
            _ => Err(LoadError::UnsupportedExtension {
                path: path.display().to_string(),
            }),
        }
    }
}

fn read(path: &Path) -> Result<(String, DocumentFormat), LoadError> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::debug!("loaded {} ({:?}, {} bytes)", path.display(), format, content.len());
    Ok((content, format))
}

impl StyleSet {
    /// Parses a style set from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parses a style set from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Reads a style set file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let (content, format) = read(path.as_ref())?;
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(&content),
            DocumentFormat::Json => Self::from_json_str(&content),
        }
    }
}

impl Theme {
    /// Parses and validates a theme from YAML.
    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        let theme: Theme = serde_yaml::from_str(content)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parses and validates a theme from JSON.
    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        let theme: Theme = serde_json::from_str(content)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Reads a theme file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let (content, format) = read(path.as_ref())?;
        match format {
            DocumentFormat::Yaml => Self::from_yaml_str(&content),
            DocumentFormat::Json => Self::from_json_str(&content),
        }
    }
}
