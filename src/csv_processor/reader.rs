use crate::translation::SourceWord;
use crate::utils::{FlashcardError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const BOM: char = '\u{feff}';

/// Reads the word list: one word per line. Each non-blank line is taken
/// whole, so quotes and commas are part of the word.
pub struct WordReader {
    path: PathBuf,
}

impl WordReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn read_words(&self) -> Result<Vec<SourceWord>> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => FlashcardError::FileNotFound(self.path.clone()),
            _ => FlashcardError::Format {
                path: self.path.clone(),
                reason: e.to_string(),
            },
        })?;

        let mut words = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| FlashcardError::Format {
                path: self.path.clone(),
                reason: format!("line {}: {}", index + 1, e),
            })?;
            let word = line.trim_start_matches(BOM).trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        tracing::info!(path = %self.path.display(), count = words.len(), "Read source words");
        Ok(words)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
