//! Static reading dictionary
//!
//! Maps literal tokens (surnames, given names, company name fragments) to a
//! hiragana reading. Entries keep their insertion order, which the substring
//! fallback uses as its priority.

mod config;
mod loader;
mod trie;

pub use config::{Category, DictionaryConfig, EntryConfig, Metadata};
pub use loader::{embedded, load_file, load_toml, EMBEDDED_TOML};

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::kana;
use crate::resolver::MatchStrategy;
use trie::KeyTrie;

/// One dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub text: String,
    /// Hiragana reading, never empty
    pub reading: String,
    pub category: String,
}

/// Immutable token → reading table
#[derive(Debug, Clone)]
pub struct ReadingDictionary {
    code: String,
    name: String,
    /// Entries in insertion order
    entries: Vec<DictionaryEntry>,
    /// text -> position in `entries`
    index: HashMap<String, usize>,
    trie: KeyTrie,
}

impl ReadingDictionary {
    /// Dictionary without entries; every lookup misses
    pub fn empty() -> Self {
        Self {
            code: "empty".to_string(),
            name: "Empty dictionary".to_string(),
            entries: Vec::new(),
            index: HashMap::new(),
            trie: KeyTrie::new(),
        }
    }

    /// Shared handle to the embedded default dictionary
    pub fn embedded() -> Arc<Self> {
        loader::embedded()
    }

    /// Build from a validated configuration
    pub fn from_config(config: &DictionaryConfig) -> Result<Self> {
        config.validate()?;

        let mut dictionary = Self {
            code: config.metadata.code.trim().to_string(),
            name: config.metadata.name.clone(),
            entries: Vec::with_capacity(config.entry_count()),
            index: HashMap::with_capacity(config.entry_count()),
            trie: KeyTrie::new(),
        };

        for category in &config.categories {
            for entry in &category.entries {
                dictionary.push(DictionaryEntry {
                    text: entry.text.trim().to_string(),
                    reading: kana::normalize(entry.reading.trim()),
                    category: category.name.clone(),
                });
            }
        }

        Ok(dictionary)
    }

    /// Build from `(text, reading)` pairs under a single category
    pub fn from_entries<I, K, V>(code: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let config = DictionaryConfig {
            metadata: Metadata {
                code: code.to_string(),
                name: code.to_string(),
            },
            categories: vec![Category {
                name: "entries".to_string(),
                entries: entries
                    .into_iter()
                    .map(|(text, reading)| EntryConfig {
                        text: text.into(),
                        reading: reading.into(),
                    })
                    .collect(),
            }],
        };
        Self::from_config(&config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        load_toml(toml_str)
    }

    /// Parse and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }

    fn push(&mut self, entry: DictionaryEntry) {
        let position = self.entries.len();
        self.trie.insert(&entry.text, position as u32);
        self.index.insert(entry.text.clone(), position);
        self.entries.push(entry);
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &DictionaryEntry> {
        self.entries.iter()
    }

    /// Exact lookup
    #[inline]
    pub fn get(&self, text: &str) -> Option<&str> {
        self.index
            .get(text)
            .map(|&position| self.entries[position].reading.as_str())
    }

    /// Reading of a key occurring anywhere inside `text`
    ///
    /// With [`MatchStrategy::FirstInserted`] the winner is the matching key
    /// defined first; with [`MatchStrategy::Longest`] it is the longest
    /// matching key, ties going to the one defined first.
    pub fn find_within(&self, text: &str, strategy: MatchStrategy) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let chars: Vec<char> = text.chars().collect();
        // (entry position, key length in chars)
        let mut best: Option<(usize, usize)> = None;

        for start in 0..chars.len() {
            self.trie.for_each_prefix(&chars[start..], |entry, len| {
                let candidate = (entry as usize, len);
                best = Some(match best {
                    None => candidate,
                    Some(current) => strategy.prefer(current, candidate),
                });
            });
        }

        best.map(|(position, _)| self.entries[position].reading.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReadingDictionary {
        ReadingDictionary::from_entries(
            "sample",
            [
                ("伊藤", "いとう"),
                ("田中", "たなか"),
                ("伊藤忠", "イトウチュウ"),
                ("商事", "しょうじ"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_exact_lookup() {
        let dictionary = sample();
        assert_eq!(dictionary.get("田中"), Some("たなか"));
        assert_eq!(dictionary.get("田"), None);
        assert_eq!(dictionary.len(), 4);
        assert!(!dictionary.is_empty());
    }

    #[test]
    fn test_readings_are_folded_to_hiragana() {
        let dictionary = sample();
        assert_eq!(dictionary.get("伊藤忠"), Some("いとうちゅう"));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let dictionary = sample();
        let texts: Vec<&str> = dictionary.entries().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["伊藤", "田中", "伊藤忠", "商事"]);
    }

    #[test]
    fn test_find_within_first_inserted() {
        let dictionary = sample();
        assert_eq!(
            dictionary.find_within("伊藤忠商事", MatchStrategy::FirstInserted),
            Some("いとう")
        );
        // 商事 occurs first in the text but 伊藤 was defined first
        assert_eq!(
            dictionary.find_within("商事伊藤", MatchStrategy::FirstInserted),
            Some("いとう")
        );
    }

    #[test]
    fn test_find_within_longest() {
        let dictionary = sample();
        assert_eq!(
            dictionary.find_within("伊藤忠商事", MatchStrategy::Longest),
            Some("いとうちゅう")
        );
        // Equal lengths: earlier definition wins
        assert_eq!(
            dictionary.find_within("商事田中", MatchStrategy::Longest),
            Some("たなか")
        );
    }

    #[test]
    fn test_find_within_no_match() {
        let dictionary = sample();
        assert_eq!(
            dictionary.find_within("山田", MatchStrategy::FirstInserted),
            None
        );
        assert_eq!(dictionary.find_within("", MatchStrategy::Longest), None);
        assert_eq!(
            ReadingDictionary::empty().find_within("田中", MatchStrategy::FirstInserted),
            None
        );
    }

    #[test]
    fn test_entries_are_trimmed() {
        let dictionary =
            ReadingDictionary::from_entries("trim", [(" 森 ", " もり ")]).unwrap();
        assert_eq!(dictionary.get("森"), Some("もり"));
    }
}
