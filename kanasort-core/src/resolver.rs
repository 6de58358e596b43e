//! Kanji reading resolution
//!
//! Produces the canonical key of a display string: an explicit reading when
//! one is given, otherwise kana text as is, otherwise a dictionary guess,
//! otherwise the lowercased text itself.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dictionary::ReadingDictionary;
use crate::kana;

/// How the substring fallback picks among several matching keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// The key defined first in the dictionary
    #[default]
    #[serde(rename = "first")]
    FirstInserted,
    /// The longest key, ties going to the one defined first
    Longest,
}

impl MatchStrategy {
    /// Pick between two `(entry position, key length)` matches
    #[inline]
    pub(crate) fn prefer(self, current: (usize, usize), candidate: (usize, usize)) -> (usize, usize) {
        let better = match self {
            MatchStrategy::FirstInserted => candidate.0 < current.0,
            MatchStrategy::Longest => {
                candidate.1 > current.1 || (candidate.1 == current.1 && candidate.0 < current.0)
            }
        };
        if better {
            candidate
        } else {
            current
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrategy::FirstInserted => "first",
            MatchStrategy::Longest => "longest",
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves display strings to canonical kana keys
#[derive(Debug, Clone)]
pub struct ReadingResolver {
    dictionary: Arc<ReadingDictionary>,
    strategy: MatchStrategy,
}

impl Default for ReadingResolver {
    fn default() -> Self {
        Self::new(ReadingDictionary::embedded())
    }
}

impl ReadingResolver {
    pub fn new(dictionary: Arc<ReadingDictionary>) -> Self {
        Self {
            dictionary,
            strategy: MatchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn dictionary(&self) -> &ReadingDictionary {
        &self.dictionary
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Canonical key for `text`
    ///
    /// A non-blank `explicit_reading` always wins. Never fails; `""` maps
    /// to `""`.
    pub fn resolve(&self, text: &str, explicit_reading: Option<&str>) -> String {
        if let Some(reading) = non_blank(explicit_reading) {
            return kana::normalize(reading);
        }

        let text = text.trim();
        if text.is_empty() {
            return String::new();
        }
        if kana::is_kana(text) {
            return kana::normalize(text);
        }

        match self.lookup(text) {
            Some(reading) => reading,
            None => text.to_lowercase(),
        }
    }

    /// Dictionary guess for an already trimmed, non-kana `text`
    ///
    /// Order: exact match, then a "surname given-name" pair, then the
    /// substring scan.
    pub fn lookup(&self, text: &str) -> Option<String> {
        if let Some(reading) = self.dictionary.get(text) {
            return Some(reading.to_string());
        }

        if let Some((surname, given)) = split_name_pair(text) {
            match (self.dictionary.get(surname), self.dictionary.get(given)) {
                (Some(s), Some(g)) => return Some(format!("{s} {g}")),
                (Some(reading), None) | (None, Some(reading)) => {
                    return Some(reading.to_string())
                }
                (None, None) => {}
            }
        }

        self.dictionary
            .find_within(text, self.strategy)
            .map(str::to_string)
    }

    /// Reading of the surname when `text` is a "surname given-name" pair
    /// whose surname is a dictionary key
    pub fn surname_reading(&self, text: &str) -> Option<&str> {
        let (surname, _) = split_name_pair(text.trim())?;
        self.dictionary.get(surname)
    }
}

/// Trimmed value when it has any content
#[inline]
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Split into exactly two whitespace-separated tokens
fn split_name_pair(text: &str) -> Option<(&str, &str)> {
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(first), Some(second), None) => Some((first, second)),
        _ => None,
    }
}
