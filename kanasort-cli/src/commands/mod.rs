//! CLI command implementations

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use kanasort_api::{CardSorter, Config, Field, MatchStrategy};
use std::path::PathBuf;

use crate::config::CliConfig;
use crate::dictionary_source::DictionaryChoice;

pub mod generate_dictionary;
pub mod inspect;
pub mod sort;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort card files in gojūon order
    Sort(sort::SortArgs),

    /// Sort card files and split them into syllable sections
    Group(sort::SortArgs),

    /// Show the sort key and section label of a single string
    Inspect(inspect::InspectArgs),

    /// Validate a reading dictionary file
    Validate(validate::ValidateArgs),

    /// Generate a reading dictionary template
    GenerateDictionary(generate_dictionary::GenerateDictionaryArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Sort(args) => args.execute(sort::Mode::Sort),
            Commands::Group(args) => args.execute(sort::Mode::Group),
            Commands::Inspect(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateDictionary(args) => args.execute(),
            Commands::List { subcommand } => {
                for (name, description) in subcommand.entries() {
                    println!("  {name:<10}{description}");
                }
                Ok(())
            }
        }
    }
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List sortable fields
    Fields,

    /// List available output formats
    Formats,

    /// List substring match strategies
    Strategies,
}

impl ListCommands {
    /// `(name, description)` pairs to print
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            ListCommands::Fields => vec![
                ("name", "Person name, using nameReading when present"),
                ("company", "Company name, using companyReading when present"),
            ],
            ListCommands::Formats => vec![
                ("text", "One card per line"),
                ("json", "JSON array of cards or sections"),
                ("markdown", "Markdown headings per section"),
            ],
            ListCommands::Strategies => vec![
                ("first", "Earliest dictionary entry found in the text (default)"),
                ("longest", "Longest dictionary entry found in the text"),
            ],
        }
    }
}

/// Sortable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Person name
    Name,
    /// Company name
    Company,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Field::Name,
            FieldArg::Company => Field::Company,
        }
    }
}

/// Substring match strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Earliest dictionary entry wins
    First,
    /// Longest dictionary entry wins
    Longest,
}

impl From<StrategyArg> for MatchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::First => MatchStrategy::FirstInserted,
            StrategyArg::Longest => MatchStrategy::Longest,
        }
    }
}

/// Dictionary options shared by the commands that resolve readings
#[derive(Debug, Clone, Default, Args)]
pub struct DictionaryArgs {
    /// Custom reading dictionary (TOML)
    #[arg(long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,

    /// Substring match strategy for unknown names
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,
}

impl DictionaryArgs {
    /// Build a sorter, letting flags override `config`
    pub fn build_sorter(&self, config: &CliConfig) -> Result<CardSorter> {
        let choice = DictionaryChoice::resolve(
            self.dictionary.as_deref(),
            config.sorting.dictionary.as_deref(),
        );
        let strategy = self
            .strategy
            .map(MatchStrategy::from)
            .unwrap_or(config.sorting.strategy);

        log::info!("Dictionary: {}", choice.display_name());
        log::info!("Strategy: {strategy}");

        let api_config = Config::builder()
            .dictionary_source(choice.to_source())
            .strategy(strategy)
            .default_field(config.sorting.default_field)
            .build()?;

        CardSorter::with_config(api_config)
            .with_context(|| format!("Failed to load dictionary ({})", choice.display_name()))
    }
}
