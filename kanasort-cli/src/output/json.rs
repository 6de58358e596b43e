//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kanasort_api::{BusinessCard, GroupLabel};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers cards and writes one document on finish
///
/// Sorted output is an array of cards; grouped output is an array of
/// `{ "label", "records" }` sections.
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    cards: Vec<BusinessCard>,
    groups: Vec<GroupData>,
}

/// One section of grouped JSON output
#[derive(Debug, Serialize)]
pub struct GroupData {
    /// Section label
    pub label: GroupLabel,
    /// Cards in the section
    pub records: Vec<BusinessCard>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            cards: Vec::new(),
            groups: Vec::new(),
        }
    }

    fn write_document<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_group(&mut self, label: GroupLabel, size: usize) -> Result<()> {
        self.groups.push(GroupData {
            label,
            records: Vec::with_capacity(size),
        });
        Ok(())
    }

    fn format_card(&mut self, card: &BusinessCard) -> Result<()> {
        match self.groups.last_mut() {
            Some(group) => group.records.push(card.clone()),
            None => self.cards.push(card.clone()),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.groups.is_empty() {
            let cards = std::mem::take(&mut self.cards);
            self.write_document(&cards)?;
        } else {
            let groups = std::mem::take(&mut self.groups);
            self.write_document(&groups)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
