//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use kanasort_core::{Field, SortText, SortableRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Language a card is printed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardLanguage {
    /// Japanese
    Ja,
    /// English
    En,
    /// Chinese
    Zh,
}

/// A scanned business card
///
/// Field names follow the JSON layout of the card store (camelCase).
/// Timestamps are kept as the strings they were stored with.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessCard {
    /// Card identifier
    pub id: String,
    /// Person name as printed
    pub name: String,
    /// Kana reading of the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_reading: Option<String>,
    /// Company name as printed
    #[serde(default)]
    pub company: String,
    /// Kana reading of the company name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_reading: Option<String>,
    /// Department
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Job title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Office phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Mobile phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Fax number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    /// Primary email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Secondary email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_email: Option<String>,
    /// Company website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Company registration identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// LINE account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_account: Option<String>,
    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    /// Scanned image location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    /// Thumbnail location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_uri: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: String,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: String,
    /// Highlighted card
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_red_carpet: Option<bool>,
    /// Print language
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<CardLanguage>,
    /// User tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BusinessCard {
    /// Create a card with a name and company
    pub fn new(id: impl Into<String>, name: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            company: company.into(),
            ..Default::default()
        }
    }

    /// Set the name reading
    pub fn with_name_reading(mut self, reading: impl Into<String>) -> Self {
        self.name_reading = Some(reading.into());
        self
    }

    /// Set the company reading
    pub fn with_company_reading(mut self, reading: impl Into<String>) -> Self {
        self.company_reading = Some(reading.into());
        self
    }

    /// Display value of `field`
    pub fn display(&self, field: Field) -> &str {
        self.sort_text(field).display
    }
}

impl SortableRecord for BusinessCard {
    fn sort_text(&self, field: Field) -> SortText<'_> {
        match field {
            Field::Name => SortText::with_reading(&self.name, self.name_reading.as_deref()),
            Field::Company => {
                SortText::with_reading(&self.company, self.company_reading.as_deref())
            }
        }
    }
}

/// Input source of a JSON card array
pub enum Input {
    /// Raw JSON string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }

    /// Parse the content as a JSON array of cards
    pub fn read_cards(self) -> Result<Vec<BusinessCard>> {
        let text = self.read_text()?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_json_layout() {
        let card = BusinessCard::new("1", "田中 太郎", "株式会社テスト")
            .with_name_reading("たなか たろう");
        let json = serde_json::to_value(&card).unwrap();

        assert_eq!(json["nameReading"], "たなか たろう");
        assert_eq!(json["company"], "株式会社テスト");
        assert!(json.get("companyReading").is_none());
    }

    #[test]
    fn test_card_deserialize_minimal() {
        let card: BusinessCard =
            serde_json::from_str(r#"{"id":"7","name":"佐藤","isRedCarpet":true,"language":"ja"}"#)
                .unwrap();

        assert_eq!(card.name, "佐藤");
        assert_eq!(card.company, "");
        assert_eq!(card.is_red_carpet, Some(true));
        assert_eq!(card.language, Some(CardLanguage::Ja));
    }

    #[test]
    fn test_card_sort_text() {
        let card = BusinessCard::new("1", "王", "任天堂").with_company_reading("ニンテンドウ");
        assert_eq!(card.sort_text(Field::Name), SortText::new("王"));
        assert_eq!(card.sort_text(Field::Company).reading, Some("ニンテンドウ"));
        assert_eq!(card.display(Field::Company), "任天堂");
    }

    #[test]
    fn test_read_cards_from_bytes() {
        let input = Input::from_bytes(br#"[{"id":"1","name":"Smith"}]"#.to_vec());
        let cards = input.read_cards().unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Smith");
    }

    #[test]
    fn test_read_cards_empty_input() {
        assert!(Input::from_text("  \n").read_cards().unwrap().is_empty());
    }

    #[test]
    fn test_read_cards_invalid_json() {
        let result = Input::from_text("{not json").read_cards();
        assert!(matches!(result, Err(ApiError::Serde(_))));
    }

    #[test]
    fn test_input_debug_hides_reader() {
        let input = Input::from_reader(std::io::empty());
        assert_eq!(format!("{input:?}"), r#"Reader("<dyn Read>")"#);
    }
}
