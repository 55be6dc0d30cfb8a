//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fieldtree/fieldtree.toml`
//! 3. Environment variables: `FIELDTREE_*` prefix

use std::fs;
use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot determine config directory")]
    NoConfigDir,

    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("cannot render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("cannot write config template: {0}")]
    Write(#[from] std::io::Error),

    #[error("config already exists: {0}")]
    AlreadyExists(PathBuf),
}

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// User-facing settings, merged from all layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sort output alphabetically unless a command overrides it
    pub sorted: bool,
    /// Colorize terminal output
    pub color: ColorMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sorted: false,
            color: ColorMode::Auto,
        }
    }
}

/// Template written by `config init`.
pub const CONFIG_TEMPLATE: &str = r#"# fieldtree configuration
#
# Settings here can be overridden with FIELDTREE_* environment variables,
# e.g. FIELDTREE_SORTED=true.

# Sort output alphabetically at every level by default.
# sorted = false

# Colorize terminal output: "auto", "always", or "never".
# color = "auto"
"#;

impl Settings {
    /// Load settings from all layers.
    pub fn load() -> Result<Self, SettingsError> {
        let mut builder = Config::builder();

        if let Some(path) = Self::global_config_path() {
            builder = builder.add_source(File::from(path).required(false));
        }

        let merged = builder
            .add_source(Environment::with_prefix("FIELDTREE").try_parsing(true))
            .build()?;

        Ok(merged.try_deserialize()?)
    }

    /// Path of the global config file, if a config dir can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "fieldtree")
            .map(|dirs| dirs.config_dir().join("fieldtree.toml"))
    }

    /// Write a commented template to the global path. Fails if the file
    /// already exists.
    pub fn init_global() -> Result<PathBuf, SettingsError> {
        let path = Self::global_config_path().ok_or(SettingsError::NoConfigDir)?;
        if path.exists() {
            return Err(SettingsError::AlreadyExists(path));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, CONFIG_TEMPLATE)?;
        Ok(path)
    }

    /// Apply the color mode to the global `colored` override.
    pub fn apply_color(&self) {
        match self.color {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}
