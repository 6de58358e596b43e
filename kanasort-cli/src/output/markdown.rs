//! Markdown output formatter

use super::{secondary, OutputFormatter};
use anyhow::Result;
use kanasort_api::{BusinessCard, Field, GroupLabel};
use std::io::Write;

/// Markdown formatter - sections become headings, cards a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    field: Field,
    card_count: usize,
    group_count: usize,
    position: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, field: Field) -> Self {
        Self {
            writer,
            field,
            card_count: 0,
            group_count: 0,
            position: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_group(&mut self, label: GroupLabel, size: usize) -> Result<()> {
        if self.group_count > 0 {
            writeln!(self.writer)?;
        }
        self.group_count += 1;
        self.position = 0;
        writeln!(self.writer, "## {label} ({size})")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_card(&mut self, card: &BusinessCard) -> Result<()> {
        self.card_count += 1;
        self.position += 1;
        let primary = card.display(self.field);
        match secondary(card, self.field) {
            Some(other) => writeln!(self.writer, "{}. **{primary}** ({other})", self.position)?,
            None => writeln!(self.writer, "{}. **{primary}**", self.position)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total cards: {}*", self.card_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_restarts_per_section() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, Field::Name);
            formatter.begin_group(GroupLabel::Kana('か'), 2).unwrap();
            formatter
                .format_card(&BusinessCard::new("1", "加藤", "三菱商事"))
                .unwrap();
            formatter
                .format_card(&BusinessCard::new("2", "がっこう", ""))
                .unwrap();
            formatter.begin_group(GroupLabel::Latin('S'), 1).unwrap();
            formatter
                .format_card(&BusinessCard::new("3", "Smith", ""))
                .unwrap();
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("## か (2)\n\n1. **加藤** (三菱商事)\n2. **がっこう**\n"));
        assert!(output.contains("## S (1)\n\n1. **Smith**\n"));
        assert!(output.ends_with("---\n*Total cards: 3*\n"));
    }
}
