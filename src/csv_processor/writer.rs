use crate::translation::{FlashCard, TranslationResult};
use crate::utils::{FlashcardError, Result};
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Writes flashcard rows. The target file is truncated when the writer is
/// initialized, so re-runs never append duplicate cards.
pub struct CardWriter {
    path: PathBuf,
    header: bool,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl CardWriter {
    pub fn new(path: impl Into<PathBuf>, header: bool) -> Self {
        Self {
            path: path.into(),
            header,
            writer: None,
            rows_written: 0,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        let file = File::create(&self.path).map_err(|e| self.output_error(e))?;
        let mut writer = Writer::from_writer(file);
        if self.header {
            writer
                .write_record(FlashCard::HEADERS)
                .map_err(|e| self.csv_error(e))?;
        }
        self.writer = Some(writer);
        Ok(())
    }

    pub fn write_card(&mut self, card: &FlashCard) -> Result<()> {
        let path = self.path.clone();
        let writer = self.writer.as_mut().ok_or_else(|| FlashcardError::Output {
            path: path.clone(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "Writer not initialized",
            ),
        })?;

        writer.write_record(card.to_row()).map_err(|e| FlashcardError::Output {
            path,
            source: e.into(),
        })?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn write_results(&mut self, results: &[TranslationResult]) -> Result<()> {
        for result in results {
            self.write_card(&FlashCard::from(result))?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush().map_err(|e| self.output_error(e))?;
        }
        Ok(self.rows_written)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn output_error(&self, source: std::io::Error) -> FlashcardError {
        FlashcardError::Output {
            path: self.path.clone(),
            source,
        }
    }

    fn csv_error(&self, e: csv::Error) -> FlashcardError {
        self.output_error(e.into())
    }
}

/// Writes all results to `path` in one go and returns the number of rows.
pub fn write_cards(path: &Path, results: &[TranslationResult], header: bool) -> Result<usize> {
    let mut writer = CardWriter::new(path, header);
    writer.initialize()?;
    writer.write_results(results)?;
    writer.finish()
}
