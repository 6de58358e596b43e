//! Validate command implementation

use anyhow::{Context, Result};
use clap::Args;
use kanasort_core::{DictionaryConfig, ReadingDictionary};
use std::fs;
use std::path::PathBuf;

use crate::error::CliError;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the dictionary file to validate
    #[arg(short = 'd', long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        let content = fs::read_to_string(&self.dictionary)
            .with_context(|| format!("Failed to read {}", self.dictionary.display()))?;

        match DictionaryConfig::from_toml_str(&content)
            .and_then(|config| ReadingDictionary::from_config(&config).map(|dict| (config, dict)))
        {
            Ok((config, dictionary)) => {
                println!("✓ Dictionary is valid!");
                println!("  Code: {}", dictionary.code());
                println!("  Name: {}", dictionary.name());
                println!("  Entries: {}", dictionary.len());
                for category in &config.categories {
                    println!("    {}: {}", category.name, category.entries.len());
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidDictionary(e.to_string()).into())
            }
        }
    }
}
