//! Sort and group command implementation

use anyhow::{Context, Result};
use clap::Args;
use kanasort_api::{BusinessCard, CardSorter, Field};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use super::{DictionaryArgs, FieldArg};
use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};

/// Whether to emit a flat sorted list or labeled sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Flat sorted list
    Sort,
    /// Sorted, then split into sections
    Group,
}

/// Arguments for the sort and group commands
#[derive(Debug, Args)]
pub struct SortArgs {
    /// Input card files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Field to sort on [default: name]
    #[arg(long, value_enum)]
    pub by: Option<FieldArg>,

    /// Keep only cards matching this text
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

impl SortArgs {
    /// Execute the sort or group command
    pub fn execute(&self, mode: Mode) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let sorter = self.dictionary.build_sorter(&config)?;

        let field = self
            .by
            .map(Field::from)
            .unwrap_or(config.sorting.default_field);
        let format = self.format.unwrap_or(config.output.default_format);

        let files = resolve_patterns(&self.input)?;
        let mut cards = FileReader::read_all(&files)?;
        if let Some(query) = &self.search {
            cards = sorter.search(&cards, query).into_iter().cloned().collect();
            log::info!("{} cards match '{}'", cards.len(), query);
        }

        log::info!(
            "{} {} cards by {field} as {}",
            if mode == Mode::Group { "Grouping" } else { "Sorting" },
            cards.len(),
            format.as_str()
        );

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };
        let mut formatter = create_formatter(format, writer, field, config.output.pretty_json);

        write_cards(&sorter, cards, field, mode, formatter.as_mut())?;
        formatter.finish()
    }
}

/// Order `cards` and feed them to `formatter`
pub fn write_cards(
    sorter: &CardSorter,
    cards: Vec<BusinessCard>,
    field: Field,
    mode: Mode,
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    match mode {
        Mode::Sort => {
            for card in sorter.sort_by_primary_field(cards, field) {
                formatter.format_card(&card)?;
            }
        }
        Mode::Group => {
            for group in sorter.group_by_primary_field(cards, field) {
                formatter.begin_group(group.label, group.records.len())?;
                for card in &group.records {
                    formatter.format_card(card)?;
                }
            }
        }
    }
    Ok(())
}
