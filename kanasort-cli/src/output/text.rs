//! Text output formatter

use super::{secondary, OutputFormatter};
use anyhow::Result;
use kanasort_api::{BusinessCard, Field, GroupLabel};
use std::io::Write;

/// Text formatter - outputs one card per line, sections as `[label]`
pub struct TextFormatter<W: Write> {
    writer: W,
    field: Field,
    groups_written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter sorting on `field`
    pub fn new(writer: W, field: Field) -> Self {
        Self {
            writer,
            field,
            groups_written: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_group(&mut self, label: GroupLabel, _size: usize) -> Result<()> {
        if self.groups_written > 0 {
            writeln!(self.writer)?;
        }
        self.groups_written += 1;
        writeln!(self.writer, "[{label}]")?;
        Ok(())
    }

    fn format_card(&mut self, card: &BusinessCard) -> Result<()> {
        let primary = card.display(self.field);
        match secondary(card, self.field) {
            Some(other) => writeln!(self.writer, "{primary}\t{other}")?,
            None => writeln!(self.writer, "{primary}")?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_lines() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, Field::Name);
            formatter
                .format_card(&BusinessCard::new("1", "田中 太郎", "テスト"))
                .unwrap();
            formatter
                .format_card(&BusinessCard::new("2", "Smith", ""))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(String::from_utf8(buffer).unwrap(), "田中 太郎\tテスト\nSmith\n");
    }

    #[test]
    fn test_grouped_sections() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, Field::Company);
            formatter.begin_group(GroupLabel::Kana('そ'), 1).unwrap();
            formatter
                .format_card(&BusinessCard::new("1", "佐藤", "ソニー"))
                .unwrap();
            formatter.begin_group(GroupLabel::Other, 1).unwrap();
            formatter
                .format_card(&BusinessCard::new("2", "王", "謎"))
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[そ]\nソニー\t佐藤\n\n[#]\n謎\t王\n"
        );
    }
}
