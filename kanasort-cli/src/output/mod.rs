//! Output formatting module

use anyhow::Result;
use kanasort_api::{BusinessCard, Field, GroupLabel};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
///
/// Sorted output is a run of `format_card` calls. Grouped output opens
/// each section with `begin_group` first.
pub trait OutputFormatter: Send + Sync {
    /// Start a new labeled section
    fn begin_group(&mut self, label: GroupLabel, size: usize) -> Result<()>;

    /// Format and output a single card
    fn format_card(&mut self, card: &BusinessCard) -> Result<()>;

    /// Finalize output (e.g., write the JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One card per line
    #[default]
    Text,
    /// JSON array of cards, or of labeled sections
    Json,
    /// Markdown headings per section with card lists
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

/// Build the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    field: Field,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, field)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, field)),
    }
}

/// The field shown next to the sort field, when the card has it
fn secondary(card: &BusinessCard, field: Field) -> Option<&str> {
    let other = match field {
        Field::Name => Field::Company,
        Field::Company => Field::Name,
    };
    Some(card.display(other)).filter(|value| !value.trim().is_empty())
}
