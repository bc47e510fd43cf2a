use crate::translation::SourceWord;
use crate::utils::{FlashcardError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

const QUOTE_CHARS: [char; 7] = ['"', '\'', '`', '„', '“', '”', '‚'];

/// First whitespace-delimited token of `line` with quote characters removed.
pub fn first_token(line: &str) -> Option<SourceWord> {
    let token = line.split_whitespace().next()?;
    let cleaned: String = token.chars().filter(|c| !QUOTE_CHARS.contains(c)).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Pulls the leading word out of every non-blank line of a deck export.
pub fn extract_first_words(input: &Path) -> Result<Vec<SourceWord>> {
    let file = File::open(input).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => FlashcardError::FileNotFound(input.to_path_buf()),
        _ => FlashcardError::Io(e),
    })?;

    let mut words = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| FlashcardError::Format {
            path: input.to_path_buf(),
            reason: format!("line {}: {}", index + 1, e),
        })?;
        if let Some(word) = first_token(&line) {
            words.push(word);
        }
    }
    Ok(words)
}

/// Writes one word per line, ready to be used as the translator's input file.
pub fn write_word_list(output: &Path, words: &[SourceWord]) -> Result<()> {
    let output_error = |source: std::io::Error| FlashcardError::Output {
        path: output.to_path_buf(),
        source,
    };

    let file = File::create(output).map_err(output_error)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word).map_err(output_error)?;
    }
    writer.flush().map_err(output_error)?;
    Ok(())
}
