//! Core error types
//!
//! Collation itself is total. These errors only describe dictionary data
//! that cannot be loaded.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`ReadingDictionary`](crate::ReadingDictionary)
#[derive(Error, Debug)]
pub enum CoreError {
    /// The TOML document does not match the dictionary schema
    #[error("failed to parse dictionary: {0}")]
    Parse(#[from] toml::de::Error),

    /// `metadata.code` is empty
    #[error("dictionary code is required")]
    MissingCode,

    /// An entry has a blank `text`
    #[error("entry in category '{category}' has an empty text")]
    EmptyText {
        /// Category holding the offending entry
        category: String,
    },

    /// An entry has a blank `reading`
    #[error("entry '{text}' has an empty reading")]
    EmptyReading {
        /// Text of the offending entry
        text: String,
    },

    /// A reading contains something other than kana
    #[error("entry '{text}' has a non-kana reading '{reading}'")]
    InvalidReading {
        /// Text of the offending entry
        text: String,
        /// The rejected reading
        reading: String,
    },

    /// The same text is defined twice
    #[error("duplicate entry '{text}'")]
    DuplicateEntry {
        /// The repeated text
        text: String,
    },

    /// Reading a dictionary file failed
    #[error("failed to read dictionary {}: {source}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CoreError::MissingCode.to_string(),
            "dictionary code is required"
        );
        assert_eq!(
            CoreError::EmptyReading {
                text: "田中".to_string()
            }
            .to_string(),
            "entry '田中' has an empty reading"
        );
        assert_eq!(
            CoreError::DuplicateEntry {
                text: "森".to_string()
            }
            .to_string(),
            "duplicate entry '森'"
        );
    }

    #[test]
    fn test_io_error_includes_path() {
        let error = CoreError::Io {
            path: PathBuf::from("/missing/readings.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/missing/readings.toml"));
        assert!(message.contains("not found"));
    }
}
