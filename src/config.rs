//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/algokit/algokit.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `ALGOKIT_*` prefix, `__` between sections

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::Traversal;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {message}")]
    Config { message: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Palindrome script settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PalindromeSettings {
    /// Number checked when none is given on the command line
    pub sample: i64,
}

impl Default for PalindromeSettings {
    fn default() -> Self {
        Self { sample: 12321 }
    }
}

/// Tree command settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TreeSettings {
    /// Traversal used when `--order` is not given
    pub order: Traversal,
    /// Use the explicit-stack iterators instead of recursion
    pub iterative: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub palindrome: PalindromeSettings,
    pub tree: TreeSettings,
}

/// Get the XDG config directory for algokit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "algokit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("algokit.toml"))
}

impl Settings {
    /// Load settings with layered precedence, using the XDG global config.
    pub fn load(explicit: Option<&Path>) -> SettingsResult<Self> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit config files.
    ///
    /// A missing global file is skipped, a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> SettingsResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("palindrome.sample", defaults.palindrome.sample)
            .map_err(config_err)?
            .set_default("tree.order", defaults.tree.order.to_string())
            .map_err(config_err)?
            .set_default("tree.iterative", defaults.tree.iterative)
            .map_err(config_err)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(explicit_path) = explicit {
            debug!("explicit config: {}", explicit_path.display());
            builder = builder.add_source(File::from(explicit_path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("ALGOKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> SettingsResult<String> {
        toml::to_string_pretty(self).map_err(|e| SettingsError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# algokit configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/algokit/algokit.toml
#   Explicit: algokit --config <path>
#   Env:      ALGOKIT_* environment variables, e.g. ALGOKIT_TREE__ORDER=in

[palindrome]
# Number checked when `algokit palindrome` gets no argument
# sample = 12321

[tree]
# Default traversal: pre, in, post or level
# order = "pre"

# Use explicit-stack iterators instead of recursion
# iterative = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> SettingsError {
    SettingsError::Config {
        message: e.to_string(),
    }
}
