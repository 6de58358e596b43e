//! Record abstraction
//!
//! Collation only needs a display string and an optional reading. Records
//! expose one such pair per [`Field`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which display/reading pair of a record to sort on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// Person name and its reading
    #[default]
    Name,
    /// Company name and its reading
    Company,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Company => "company",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Field::Name),
            "company" => Ok(Field::Company),
            other => Err(format!("Unknown field: {other}")),
        }
    }
}

/// Display string plus optional explicit reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortText<'a> {
    pub display: &'a str,
    pub reading: Option<&'a str>,
}

impl<'a> SortText<'a> {
    pub fn new(display: &'a str) -> Self {
        Self {
            display,
            reading: None,
        }
    }

    pub fn with_reading(display: &'a str, reading: Option<&'a str>) -> Self {
        Self { display, reading }
    }
}

impl<'a> From<&'a str> for SortText<'a> {
    fn from(display: &'a str) -> Self {
        Self::new(display)
    }
}

/// Anything that can be ordered and grouped by the collator
pub trait SortableRecord {
    fn sort_text(&self, field: Field) -> SortText<'_>;
}

/// Bare strings sort on themselves, whatever the field
impl SortableRecord for str {
    fn sort_text(&self, _field: Field) -> SortText<'_> {
        SortText::new(self)
    }
}

impl SortableRecord for String {
    fn sort_text(&self, _field: Field) -> SortText<'_> {
        SortText::new(self)
    }
}

impl<R: SortableRecord + ?Sized> SortableRecord for &R {
    fn sort_text(&self, field: Field) -> SortText<'_> {
        (**self).sort_text(field)
    }
}
