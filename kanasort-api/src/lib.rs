//! Public API for kanasort card sorting
//!
//! This crate wraps the collation engine behind a small, stable surface
//! built around [`BusinessCard`]s, while staying generic over any
//! [`SortableRecord`].

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod search;

use kanasort_core::Collator;

// Re-export key types
pub use config::{Config, ConfigBuilder, DictionarySource};
pub use dto::{BusinessCard, CardLanguage, Input};
pub use error::{ApiError, Result};
pub use kanasort_core::{Field, Group, GroupLabel, MatchStrategy, SortText, SortableRecord};

/// Main entry point for ordering and sectioning cards
#[derive(Debug, Clone)]
pub struct CardSorter {
    collator: Collator,
    config: Config,
}

impl CardSorter {
    /// Create a sorter over the embedded dictionary
    pub fn new() -> Self {
        Self {
            collator: Collator::default(),
            config: Config::default(),
        }
    }

    /// Create a sorter from a configuration, loading its dictionary
    pub fn with_config(config: Config) -> Result<Self> {
        let dictionary = config.dictionary.load()?;
        log::debug!(
            "using dictionary '{}' ({} entries, strategy {})",
            dictionary.code(),
            dictionary.len(),
            config.strategy
        );
        Ok(Self {
            collator: Collator::with_dictionary(dictionary, config.strategy),
            config,
        })
    }

    /// Stable sort on `field`, returning a new vector
    pub fn sort_by_primary_field<T: SortableRecord>(
        &self,
        mut records: Vec<T>,
        field: Field,
    ) -> Vec<T> {
        self.collator.sort(&mut records, field);
        records
    }

    /// Sort on `field`, then split into labeled sections
    pub fn group_by_primary_field<T: SortableRecord>(
        &self,
        records: Vec<T>,
        field: Field,
    ) -> Vec<Group<T>> {
        self.collator.sort_and_group(records, field)
    }

    /// Split into labeled sections, keeping the caller's order inside each
    pub fn group<T: SortableRecord>(&self, records: Vec<T>, field: Field) -> Vec<Group<T>> {
        self.collator.group(records, field)
    }

    /// Sort on the configured default field
    pub fn sort<T: SortableRecord>(&self, records: Vec<T>) -> Vec<T> {
        self.sort_by_primary_field(records, self.config.default_field)
    }

    /// Canonical sort key of a display string and optional reading
    pub fn canonical_key(&self, display: &str, reading: Option<&str>) -> String {
        self.collator.canonical_key(SortText::with_reading(display, reading))
    }

    /// Section label of a display string and optional reading
    pub fn group_label(&self, display: &str, reading: Option<&str>) -> GroupLabel {
        self.collator.group_label(SortText::with_reading(display, reading))
    }

    /// Cards matching a free-text query
    pub fn search<'a>(&self, cards: &'a [BusinessCard], query: &str) -> Vec<&'a BusinessCard> {
        search::search(cards, query)
    }

    /// Parse cards from `input` and sort them on `field`
    pub fn sort_input(&self, input: Input, field: Field) -> Result<Vec<BusinessCard>> {
        let cards = input.read_cards()?;
        log::info!("sorting {} cards by {}", cards.len(), field);
        Ok(self.sort_by_primary_field(cards, field))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for CardSorter {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Sort records on `field` with the embedded dictionary
pub fn sort_by_primary_field<T: SortableRecord>(records: Vec<T>, field: Field) -> Vec<T> {
    CardSorter::new().sort_by_primary_field(records, field)
}

/// Sort then group records on `field` with the embedded dictionary
pub fn group_by_primary_field<T: SortableRecord>(records: Vec<T>, field: Field) -> Vec<Group<T>> {
    CardSorter::new().group_by_primary_field(records, field)
}
