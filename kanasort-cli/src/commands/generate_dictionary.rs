//! Generate dictionary command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-dictionary command
#[derive(Debug, Args)]
pub struct GenerateDictionaryArgs {
    /// Code for the new dictionary
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateDictionaryArgs {
    /// Execute the generate-dictionary command
    pub fn execute(&self) -> Result<()> {
        println!("Generating dictionary template...");
        println!("  Code: {}", self.code);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, self.generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Dictionary template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Add the names and companies your cards use");
        println!("2. Validate your dictionary:");
        println!("   kanasort validate -d {}", self.output.display());
        println!("3. Use it for sorting:");
        println!(
            "   kanasort sort -i cards.json --dictionary {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template dictionary content
    fn generate_template(&self) -> String {
        format!(
            r#"# Reading dictionary: {code}
#
# Each entry maps display text to its kana reading. Readings may be
# written in hiragana or katakana; katakana is folded to hiragana on load.
# A text may appear only once across all categories.

[metadata]
code = "{code}"
name = "Custom readings"

# Categories are scanned in file order when a name is only found
# inside a longer string, so list the most specific ones first.
[[categories]]
name = "surnames"
entries = [
    {{ text = "田中", reading = "たなか" }},
    {{ text = "佐藤", reading = "さとう" }},
]

[[categories]]
name = "given_names"
entries = [
    {{ text = "太郎", reading = "たろう" }},
]

[[categories]]
name = "companies"
entries = [
    {{ text = "株式会社", reading = "かぶしきがいしゃ" }},
    # Katakana readings are accepted
    {{ text = "日本電気", reading = "ニッポンデンキ" }},
]
"#,
            code = self.code
        )
    }
}
