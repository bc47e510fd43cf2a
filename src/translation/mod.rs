pub mod client;
pub mod dispatcher;
pub mod model;
pub mod prompt;
pub mod retry;

pub use client::TranslationClient;
pub use dispatcher::{DispatchReport, Dispatcher, WordFailure};
pub use model::{FlashCard, Gender, SourceWord, TranslationResult, WordType};
pub use prompt::{build_system_prompt, build_word_prompt};
pub use retry::{RetryPolicy, RetryingTranslator};

use crate::utils::TranslateError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// One word to translate, plus the model and credential to use for it.
#[derive(Clone)]
pub struct TranslationRequest {
    pub word: SourceWord,
    pub model: Arc<str>,
    pub api_key: Arc<str>,
}

impl TranslationRequest {
    pub fn new(word: impl Into<SourceWord>, model: Arc<str>, api_key: Arc<str>) -> Self {
        Self {
            word: word.into(),
            model,
            api_key,
        }
    }
}

impl fmt::Debug for TranslationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslationRequest")
            .field("word", &self.word)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

/// Translates a single word. Implementations must be safe to share across
/// worker tasks.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for Arc<T> {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        (**self).translate(request).await
    }
}
