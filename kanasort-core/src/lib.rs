//! Gojūon collation and syllable grouping for Japanese text
//!
//! This crate orders mixed kanji/kana/romaji strings the way a Japanese
//! address book does and buckets them into syllable sections. It is built
//! from four small pieces:
//!
//! - **Kana normalizer** ([`kana`]): script detection and katakana folding
//! - **Reading resolver** ([`resolver`]): approximates a kana reading from a
//!   static [`ReadingDictionary`] when no explicit reading is supplied
//! - **Collation** ([`collation`]): syllable weights and key comparison
//! - **Grouping** ([`grouping`]): maps a key to its gojūon section label
//!
//! The [`Collator`] ties them together for slices of [`SortableRecord`]s.
//!
//! # Example
//!
//! ```rust
//! use kanasort_core::{Collator, Field, GroupLabel};
//!
//! let collator = Collator::default();
//!
//! let mut names = vec!["Smith", "鈴木 一郎", "たなか"];
//! collator.sort(&mut names, Field::Name);
//! assert_eq!(names, vec!["鈴木 一郎", "たなか", "Smith"]);
//!
//! let groups = collator.group(names, Field::Name);
//! assert_eq!(groups[0].label, GroupLabel::Kana('す'));
//! assert_eq!(groups[2].label, GroupLabel::Latin('S'));
//! ```
//!
//! Readings are best-effort: unknown kanji fall through to plain text
//! comparison and the `#` section. Nothing here returns an error for any
//! string input; errors only come from loading dictionary data.

pub mod collation;
pub mod collator;
pub mod dictionary;
pub mod error;
pub mod grouping;
pub mod kana;
pub mod record;
pub mod resolver;

pub use collation::{compare_keys, CollationKey};
pub use collator::Collator;
pub use dictionary::{DictionaryConfig, DictionaryEntry, ReadingDictionary};
pub use error::{CoreError, Result};
pub use grouping::{Group, GroupLabel};
pub use kana::{is_kana, normalize, Script};
pub use record::{Field, SortText, SortableRecord};
pub use resolver::{MatchStrategy, ReadingResolver};
