//! High-level configuration API

use crate::error::{ApiError, Result};
use kanasort_core::{Field, MatchStrategy, ReadingDictionary};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the reading dictionary comes from
#[derive(Debug, Clone, Default)]
pub enum DictionarySource {
    /// Dictionary compiled into the binary
    #[default]
    Embedded,
    /// TOML file on disk
    File(PathBuf),
    /// TOML document held in memory
    Toml(String),
    /// Already loaded dictionary
    Custom(Arc<ReadingDictionary>),
}

impl DictionarySource {
    /// Load the dictionary this source points at
    pub fn load(&self) -> Result<Arc<ReadingDictionary>> {
        match self {
            DictionarySource::Embedded => Ok(ReadingDictionary::embedded()),
            DictionarySource::File(path) => {
                log::debug!("loading dictionary from {}", path.display());
                Ok(Arc::new(ReadingDictionary::from_file(path)?))
            }
            DictionarySource::Toml(toml) => Ok(Arc::new(ReadingDictionary::from_toml_str(toml)?)),
            DictionarySource::Custom(dictionary) => Ok(Arc::clone(dictionary)),
        }
    }
}

/// High-level configuration for card sorting
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub(crate) dictionary: DictionarySource,
    pub(crate) strategy: MatchStrategy,
    pub(crate) default_field: Field,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Dictionary source
    pub fn dictionary(&self) -> &DictionarySource {
        &self.dictionary
    }

    /// Substring match strategy
    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Field used when the caller does not name one
    pub fn default_field(&self) -> Field {
        self.default_field
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Use the dictionary compiled into the binary
    pub fn embedded_dictionary(mut self) -> Self {
        self.config.dictionary = DictionarySource::Embedded;
        self
    }

    /// Load the dictionary from a TOML file
    pub fn dictionary_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.dictionary = DictionarySource::File(path.into());
        self
    }

    /// Parse the dictionary from a TOML string
    pub fn dictionary_toml(mut self, toml: impl Into<String>) -> Self {
        self.config.dictionary = DictionarySource::Toml(toml.into());
        self
    }

    /// Use an already loaded dictionary
    pub fn dictionary(mut self, dictionary: Arc<ReadingDictionary>) -> Self {
        self.config.dictionary = DictionarySource::Custom(dictionary);
        self
    }

    /// Set the dictionary source directly
    pub fn dictionary_source(mut self, source: DictionarySource) -> Self {
        self.config.dictionary = source;
        self
    }

    /// Set the substring match strategy
    pub fn strategy(mut self, strategy: MatchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the default field
    pub fn default_field(mut self, field: Field) -> Self {
        self.config.default_field = field;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        match &self.config.dictionary {
            DictionarySource::File(path) if !path.is_file() => {
                return Err(ApiError::Config(format!(
                    "dictionary file not found: {}",
                    path.display()
                )));
            }
            DictionarySource::Toml(toml) if toml.trim().is_empty() => {
                return Err(ApiError::Config("dictionary TOML is empty".to_string()));
            }
            _ => {}
        }

        Ok(self.config)
    }
}
