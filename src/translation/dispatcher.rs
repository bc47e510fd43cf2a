use crate::translation::{SourceWord, TranslationRequest, TranslationResult, Translator};
use crate::utils::{FlashcardError, Result, TranslateError};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// A word that could not be translated. It is left out of the output and
/// reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFailure {
    pub word: SourceWord,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct DispatchReport {
    pub results: Vec<TranslationResult>,
    pub failures: Vec<WordFailure>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.results.len() + self.failures.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Fans words out to a [`Translator`] with at most `workers` calls in flight.
pub struct Dispatcher {
    translator: Arc<dyn Translator>,
    workers: usize,
    model: Arc<str>,
    api_key: Arc<str>,
}

impl Dispatcher {
    pub fn new(
        translator: Arc<dyn Translator>,
        workers: usize,
        model: &str,
        api_key: &str,
    ) -> Self {
        Self {
            translator,
            workers: workers.max(1),
            model: Arc::from(model),
            api_key: Arc::from(api_key),
        }
    }

    /// Attempts every word exactly once. Per-word failures are collected in
    /// the report; an authentication failure cancels all outstanding work and
    /// is returned as an error.
    pub async fn dispatch(&self, words: Vec<SourceWord>) -> Result<DispatchReport> {
        let total = words.len();
        let mut report = DispatchReport::default();
        if total == 0 {
            return Ok(report);
        }

        let semaphore = Arc::new(Semaphore::new(self.workers));
        let mut tasks = JoinSet::new();
        let mut pending: HashMap<usize, SourceWord> = HashMap::with_capacity(total);

        for (index, word) in words.into_iter().enumerate() {
            let request =
                TranslationRequest::new(word.clone(), self.model.clone(), self.api_key.clone());
            let translator = Arc::clone(&self.translator);
            let semaphore = Arc::clone(&semaphore);

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await;
                (index, translator.translate(&request).await)
            });
            pending.insert(index, word);
        }

        let mut completed = 0;
        while let Some(joined) = tasks.join_next().await {
            completed += 1;
            match joined {
                Ok((index, Ok(result))) => {
                    pending.remove(&index);
                    info!(word = %result.source, completed, total, "Completed");
                    report.results.push(result);
                }
                Ok((index, Err(e))) => {
                    let word = pending.remove(&index).unwrap_or_default();
                    if let TranslateError::Authentication { message, .. } = &e {
                        warn!(word = %word, error = %e, "Credential rejected, cancelling run");
                        tasks.abort_all();
                        return Err(FlashcardError::Authentication(message.clone()));
                    }
                    warn!(word = %word, completed, total, error = %e, "Translation failed");
                    report.failures.push(WordFailure {
                        word,
                        reason: e.to_string(),
                    });
                }
                Err(join_err) => {
                    warn!(error = %join_err, "Translation task did not finish");
                }
            }
        }

        // Whatever is still pending belongs to a task that panicked.
        let mut orphaned: Vec<_> = pending.into_iter().collect();
        orphaned.sort_by_key(|(index, _)| *index);
        for (_, word) in orphaned {
            report.failures.push(WordFailure {
                word,
                reason: "worker task panicked".to_string(),
            });
        }

        info!(
            translated = report.results.len(),
            failed = report.failure_count(),
            total,
            "Dispatch finished"
        );

        Ok(report)
    }
}
