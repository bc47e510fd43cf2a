#![allow(dead_code)]

use async_trait::async_trait;
use czech_flashcards::translation::{Gender, WordType};
use czech_flashcards::{
    RetryPolicy, RunSettings, TranslateError, TranslationRequest, TranslationResult, Translator,
};
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub enum Reply {
    Ok {
        translation: &'static str,
        word_type: WordType,
        gender: Option<Gender>,
        example: &'static str,
    },
    Err(TranslateError),
    /// Fails with the given errors first, then answers like an unscripted word.
    FlakyThenOk(Vec<TranslateError>),
}

/// Deterministic stand-in for the chat-completions client.
pub struct MockTranslator {
    replies: HashMap<&'static str, Reply>,
    flaky: Mutex<HashMap<String, Vec<TranslateError>>>,
    reject_all: Option<TranslateError>,
    latency: Duration,
    calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            flaky: Mutex::new(HashMap::new()),
            reject_all: None,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every call fails with `error`, e.g. a rejected credential.
    pub fn reject_all(mut self, error: TranslateError) -> Self {
        self.reject_all = Some(error);
        self
    }

    pub fn reply(mut self, word: &'static str, reply: Reply) -> Self {
        if let Reply::FlakyThenOk(errors) = &reply {
            let mut errors = errors.clone();
            errors.reverse();
            self.flaky.lock().unwrap().insert(word.to_string(), errors);
        }
        self.replies.insert(word, reply);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if let Some(e) = &self.reject_all {
            return Err(e.clone());
        }

        let word = request.word.as_str();
        match self.replies.get(word) {
            Some(Reply::Ok {
                translation,
                word_type,
                gender,
                example,
            }) => Ok(TranslationResult {
                source: word.to_string(),
                word: word.to_string(),
                translation: translation.to_string(),
                word_type: *word_type,
                gender: *gender,
                example: example.to_string(),
            }),
            Some(Reply::Err(e)) => Err(e.clone()),
            Some(Reply::FlakyThenOk(_)) => {
                if let Some(e) = self
                    .flaky
                    .lock()
                    .unwrap()
                    .get_mut(word)
                    .and_then(|errors| errors.pop())
                {
                    return Err(e);
                }
                Ok(generated(word))
            }
            None => Ok(generated(word)),
        }
    }
}

pub fn generated(word: &str) -> TranslationResult {
    TranslationResult {
        source: word.to_string(),
        word: word.to_string(),
        translation: format!("{} (en)", word),
        word_type: WordType::Other,
        gender: None,
        example: format!("Tady je {}.", word),
    }
}

pub fn settings(dir: &Path, workers: usize) -> RunSettings {
    RunSettings {
        input: dir.join("czech_words.csv"),
        output: dir.join("czech_translations.csv"),
        workers,
        model: "gpt-4o-mini".to_string(),
        api_key: "sk-test".to_string(),
        endpoint: "http://127.0.0.1:9/unused".to_string(),
        timeout: Duration::from_secs(5),
        retry: RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_millis(100),
            multiplier: 2.0,
            max_delay: Duration::from_secs(1),
        },
        header: true,
    }
}

pub fn write_input(settings: &RunSettings, words: &[&str]) {
    let mut content = words.join("\n");
    content.push('\n');
    std::fs::write(&settings.input, content).unwrap();
}

/// Output rows without the header, sorted so completion order does not matter.
pub fn sorted_rows(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let mut rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();
    rows.sort();
    rows
}
