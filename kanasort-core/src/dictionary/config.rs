//! Configuration structures and validation
//!
//! This module defines the TOML schema for reading dictionaries.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, Result};
use crate::kana;

/// Root dictionary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    pub metadata: Metadata,
    /// Categories in match priority order
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Dictionary metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// A named list of entries (surnames, given names, companies, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub text: String,
    pub reading: String,
}

impl DictionaryConfig {
    /// Parse from a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::MissingCode);
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            for entry in &category.entries {
                let text = entry.text.trim();
                if text.is_empty() {
                    return Err(CoreError::EmptyText {
                        category: category.name.clone(),
                    });
                }

                let reading = entry.reading.trim();
                if reading.is_empty() {
                    return Err(CoreError::EmptyReading {
                        text: text.to_string(),
                    });
                }
                if !kana::is_kana(reading) {
                    return Err(CoreError::InvalidReading {
                        text: text.to_string(),
                        reading: reading.to_string(),
                    });
                }

                if !seen.insert(text) {
                    return Err(CoreError::DuplicateEntry {
                        text: text.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Total number of entries over all categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(entries: &[(&str, &str)]) -> DictionaryConfig {
        DictionaryConfig {
            metadata: Metadata {
                code: "test".to_string(),
                name: "Test".to_string(),
            },
            categories: vec![Category {
                name: "names".to_string(),
                entries: entries
                    .iter()
                    .map(|(text, reading)| EntryConfig {
                        text: text.to_string(),
                        reading: reading.to_string(),
                    })
                    .collect(),
            }],
        }
    }

    #[test]
    fn test_parse_minimal() {
        let parsed = DictionaryConfig::from_toml_str(
            r#"
[metadata]
code = "test"
name = "Test"

[[categories]]
name = "surnames"
entries = [{ text = "田中", reading = "たなか" }]
"#,
        )
        .unwrap();

        assert_eq!(parsed.metadata.code, "test");
        assert_eq!(parsed.entry_count(), 1);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_categories_are_optional() {
        let parsed = DictionaryConfig::from_toml_str(
            r#"
[metadata]
code = "empty"
name = "Empty"
"#,
        )
        .unwrap();
        assert_eq!(parsed.entry_count(), 0);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_missing_metadata_is_parse_error() {
        let result = DictionaryConfig::from_toml_str("[[categories]]\nname = \"x\"\n");
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let mut cfg = config(&[]);
        cfg.metadata.code = "  ".to_string();
        assert!(matches!(cfg.validate(), Err(CoreError::MissingCode)));
    }

    #[test]
    fn test_validate_rejects_empty_reading() {
        let cfg = config(&[("田中", " ")]);
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::EmptyReading { text }) if text == "田中"
        ));
    }

    #[test]
    fn test_validate_rejects_empty_text() {
        let cfg = config(&[("", "たなか")]);
        assert!(matches!(cfg.validate(), Err(CoreError::EmptyText { .. })));
    }

    #[test]
    fn test_validate_rejects_non_kana_reading() {
        let cfg = config(&[("田中", "tanaka")]);
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::InvalidReading { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let cfg = config(&[("森", "もり"), ("森", "しん")]);
        assert!(matches!(
            cfg.validate(),
            Err(CoreError::DuplicateEntry { text }) if text == "森"
        ));
    }
}
