//! Inspect command implementation

use anyhow::Result;
use clap::Args;
use kanasort_api::CardSorter;
use std::path::PathBuf;

use super::DictionaryArgs;
use crate::config::CliConfig;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Display text to resolve
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Explicit kana reading
    #[arg(short, long, value_name = "READING")]
    pub reading: Option<String>,

    /// CLI configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let sorter = self.dictionary.build_sorter(&config)?;
        println!("{}", self.describe(&sorter));
        Ok(())
    }

    fn describe(&self, sorter: &CardSorter) -> String {
        let reading = self.reading.as_deref();
        let key = sorter.canonical_key(&self.text, reading);
        let label = sorter.group_label(&self.text, reading);
        format!("text:  {}\nkey:   {key}\nlabel: {label}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(text: &str, reading: Option<&str>) -> InspectArgs {
        InspectArgs {
            text: text.to_string(),
            reading: reading.map(str::to_string),
            config: None,
            dictionary: DictionaryArgs::default(),
        }
    }

    #[test]
    fn test_describe_dictionary_name() {
        let output = args("田中 太郎", None).describe(&CardSorter::new());
        assert_eq!(output, "text:  田中 太郎\nkey:   たなか たろう\nlabel: た");
    }

    #[test]
    fn test_describe_with_reading() {
        let output = args("王", Some("ワン")).describe(&CardSorter::new());
        assert!(output.contains("key:   わん"));
        assert!(output.ends_with("label: わ"));
    }
}
