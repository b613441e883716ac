//! Command-line front end for resolving style-set documents.
//!
//! Reads a style-set document, optionally applies a theme's tokens, resolves
//! every slot and prints either the generated stylesheet or the resolved
//! styles as JSON.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mergestyles::{AdaptiveTheme, StyleSet, Stylesheet, StylesheetConfig, Theme};

/// Output formats for resolved styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Generated CSS rules, preceded by each slot's class string
    Css,
    /// Resolved class names and merged style objects per slot
    Json,
}

/// Resolve style-set documents into generated CSS.
#[derive(Debug, Parser)]
#[command(name = "mergestyles", version, about)]
pub struct Cli {
    /// Style-set document (.yaml, .yml or .json)
    pub styles: PathBuf,

    /// Theme document whose tokens replace `@name` values
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Dark-mode theme; its colors are emitted under `prefers-color-scheme: dark`
    #[arg(long, requires = "theme")]
    pub dark_theme: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Prefix for generated class names
    #[arg(long)]
    pub prefix: Option<String>,

    /// Unit appended to numeric values
    #[arg(long)]
    pub unit: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The log level implied by `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    fn stylesheet_config(&self) -> StylesheetConfig {
        let mut config = StylesheetConfig::default();
        if let Some(prefix) = &self.prefix {
            config.class_prefix = prefix.clone();
        }
        if let Some(unit) = &self.unit {
            config.unit = unit.clone();
        }
        config
    }
}

/// Runs the command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    let mut set = StyleSet::from_path(&cli.styles)
        .with_context(|| format!("loading styles from {}", cli.styles.display()))?;

    if let Some(theme_path) = &cli.theme {
        let theme = load_theme(theme_path)?;
        set = match &cli.dark_theme {
            Some(dark_path) => AdaptiveTheme::new(theme, load_theme(dark_path)?).apply_tokens(&set),
            None => theme.apply_tokens(&set),
        };
    }

    let resolved = set.resolve();
    log::info!("resolved {} slot(s)", resolved.len());

    match cli.format {
        Format::Json => {
            serde_json::to_string_pretty(&resolved).context("serializing resolved styles")
        }
        Format::Css => {
            let mut sheet = Stylesheet::with_config(cli.stylesheet_config());
            let mut out = String::new();
            for (slot, style) in resolved.slots() {
                let classes = sheet.class_names(style);
                writeln!(out, "/* {}: {} */", slot, classes)?;
            }
            out.push_str(&sheet.to_css());
            Ok(out)
        }
    }
}

fn load_theme(path: &Path) -> Result<Theme> {
    Theme::from_path(path).with_context(|| format!("loading theme from {}", path.display()))
}
