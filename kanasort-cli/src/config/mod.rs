//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use kanasort_core::{Field, MatchStrategy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Sorting configuration
    #[serde(default)]
    pub sorting: SortingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sorting-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SortingConfig {
    /// Field sorted on when `--by` is absent
    #[serde(default)]
    pub default_field: Field,

    /// Substring match strategy
    #[serde(default)]
    pub strategy: MatchStrategy,

    /// Custom dictionary file
    #[serde(default)]
    pub dictionary: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

fn default_pretty_json() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            pretty_json: default_pretty_json(),
        }
    }
}

impl CliConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| CliError::ConfigError(e.message().to_string()).into())
    }

    /// Load from a file
    ///
    /// A relative dictionary path is resolved against the config file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        if let (Some(dictionary), Some(base)) = (&config.sorting.dictionary, path.parent()) {
            if dictionary.is_relative() {
                config.sorting.dictionary = Some(base.join(dictionary));
            }
        }

        log::debug!("Loaded CLI config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
