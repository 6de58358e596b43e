//! Dictionary source management for CLI

use kanasort_api::DictionarySource;
use std::path::{Path, PathBuf};

/// Where the CLI takes its reading dictionary from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryChoice {
    /// Dictionary compiled into the binary
    Embedded,
    /// External TOML file
    External(PathBuf),
}

impl DictionaryChoice {
    /// Pick the command-line flag over the config file entry
    pub fn resolve(flag: Option<&Path>, configured: Option<&Path>) -> Self {
        match flag.or(configured) {
            Some(path) => DictionaryChoice::External(path.to_path_buf()),
            None => DictionaryChoice::Embedded,
        }
    }

    /// Get the display name for the dictionary source
    pub fn display_name(&self) -> String {
        match self {
            DictionaryChoice::Embedded => "Built-in".to_string(),
            DictionaryChoice::External(path) => format!("External: {}", path.display()),
        }
    }

    /// API-level source
    pub fn to_source(&self) -> DictionarySource {
        match self {
            DictionaryChoice::Embedded => DictionarySource::Embedded,
            DictionaryChoice::External(path) => DictionarySource::File(path.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins_over_config() {
        let choice = DictionaryChoice::resolve(
            Some(Path::new("flag.toml")),
            Some(Path::new("config.toml")),
        );
        assert_eq!(choice, DictionaryChoice::External(PathBuf::from("flag.toml")));
    }

    #[test]
    fn test_config_used_without_flag() {
        let choice = DictionaryChoice::resolve(None, Some(Path::new("config.toml")));
        assert_eq!(choice.display_name(), "External: config.toml");
    }

    #[test]
    fn test_embedded_by_default() {
        let choice = DictionaryChoice::resolve(None, None);
        assert_eq!(choice, DictionaryChoice::Embedded);
        assert!(matches!(choice.to_source(), DictionarySource::Embedded));
    }
}
