//! Card file reading

use anyhow::{Context, Result};
use kanasort_api::{BusinessCard, Input};
use std::path::{Path, PathBuf};

/// Reads JSON arrays of business cards
pub struct FileReader;

impl FileReader {
    /// Read the cards stored in one file
    pub fn read_cards(path: &Path) -> Result<Vec<BusinessCard>> {
        let cards = Input::from_file(path)
            .read_cards()
            .with_context(|| format!("Failed to read cards from: {}", path.display()))?;
        log::debug!("{}: {} cards", path.display(), cards.len());
        Ok(cards)
    }

    /// Read and concatenate the cards of every file, in file order
    pub fn read_all(paths: &[PathBuf]) -> Result<Vec<BusinessCard>> {
        let mut cards = Vec::new();
        for path in paths {
            cards.extend(Self::read_cards(path)?);
        }
        Ok(cards)
    }
}
