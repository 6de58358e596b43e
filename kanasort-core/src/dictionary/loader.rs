//! Embedded dictionary loader
//!
//! The default dictionary ships as TOML inside the binary and is parsed once
//! on first access.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{DictionaryConfig, ReadingDictionary};
use crate::error::{CoreError, Result};

/// Source of the embedded default dictionary
pub const EMBEDDED_TOML: &str = include_str!("../../configs/dictionary/readings.toml");

static EMBEDDED: OnceLock<Arc<ReadingDictionary>> = OnceLock::new();

/// Shared handle to the embedded dictionary
///
/// A broken embedded document degrades to an empty dictionary so collation
/// keeps working on raw text.
pub fn embedded() -> Arc<ReadingDictionary> {
    EMBEDDED
        .get_or_init(|| match load_toml(EMBEDDED_TOML) {
            Ok(dictionary) => Arc::new(dictionary),
            Err(e) => {
                log::warn!("Failed to load embedded dictionary: {e}");
                Arc::new(ReadingDictionary::empty())
            }
        })
        .clone()
}

/// Parse and validate a dictionary from a TOML string
pub fn load_toml(toml_str: &str) -> Result<ReadingDictionary> {
    let config = DictionaryConfig::from_toml_str(toml_str)?;
    ReadingDictionary::from_config(&config)
}

/// Parse and validate a dictionary file
pub fn load_file(path: &Path) -> Result<ReadingDictionary> {
    let content = std::fs::read_to_string(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_toml(&content)
}
