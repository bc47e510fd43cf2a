use crate::csv_processor::{write_cards, WordReader};
use crate::translation::{
    Dispatcher, RetryingTranslator, TranslationClient, Translator, WordFailure,
};
use crate::utils::errors::{EXIT_ALL_FAILED, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS};
use crate::utils::{FlashcardError, Result, RunSettings};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

#[derive(Debug)]
pub struct RunSummary {
    pub total: usize,
    pub written: usize,
    pub failures: Vec<WordFailure>,
    /// `None` when nothing was written because every word failed.
    pub output: Option<PathBuf>,
}

impl RunSummary {
    pub fn exit_code(&self) -> u8 {
        if self.failures.is_empty() {
            EXIT_SUCCESS
        } else if self.written == 0 {
            EXIT_ALL_FAILED
        } else {
            EXIT_PARTIAL_FAILURE
        }
    }
}

/// The console report: a count line, then the words to retry by hand.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.output {
            Some(path) => writeln!(
                f,
                "Translated {}/{} words -> {}",
                self.written,
                self.total,
                path.display()
            )?,
            None => writeln!(f, "Translated 0/{} words, no output written", self.total)?,
        }

        if !self.failures.is_empty() {
            writeln!(f, "Failed words ({}):", self.failures.len())?;
            for failure in &self.failures {
                writeln!(f, "- {}: {}", failure.word, failure.reason)?;
            }
        }
        Ok(())
    }
}

/// The production translator: HTTP client wrapped in the configured retry policy.
pub fn build_translator(settings: &RunSettings) -> Result<Arc<dyn Translator>> {
    let client = TranslationClient::new(settings.endpoint.clone(), settings.timeout)?;
    Ok(Arc::new(RetryingTranslator::new(client, settings.retry)))
}

/// Reads the word list, translates every word and writes the flashcard file.
pub async fn run(settings: &RunSettings, translator: Arc<dyn Translator>) -> Result<RunSummary> {
    let span = info_span!("run", run_id = %Uuid::new_v4());
    run_inner(settings, translator).instrument(span).await
}

async fn run_inner(settings: &RunSettings, translator: Arc<dyn Translator>) -> Result<RunSummary> {
    if settings.api_key.trim().is_empty() {
        return Err(FlashcardError::Config("API key is empty".to_string()));
    }
    if settings.workers == 0 {
        return Err(FlashcardError::Config(
            "worker count must be at least 1".to_string(),
        ));
    }

    info!(path = %settings.input.display(), "Reading Czech words");
    let words = WordReader::new(&settings.input).read_words()?;
    let total = words.len();
    info!(
        total,
        workers = settings.workers,
        model = %settings.model,
        "Translating words"
    );

    let dispatcher = Dispatcher::new(
        translator,
        settings.workers,
        &settings.model,
        &settings.api_key,
    );
    let report = dispatcher.dispatch(words).await?;

    if total > 0 && report.results.is_empty() {
        info!(failed = report.failure_count(), "Every word failed, no output written");
        return Ok(RunSummary {
            total,
            written: 0,
            failures: report.failures,
            output: None,
        });
    }

    let written = write_cards(&settings.output, &report.results, settings.header)?;
    info!(
        path = %settings.output.display(),
        written,
        failed = report.failure_count(),
        "Results written"
    );

    Ok(RunSummary {
        total,
        written,
        failures: report.failures,
        output: Some(settings.output.clone()),
    })
}
