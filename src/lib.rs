pub mod cli;
pub mod csv_processor;
pub mod pipeline;
pub mod translation;
pub mod utils;

pub use cli::CliArgs;
pub use csv_processor::{CardWriter, WordReader};
pub use pipeline::{build_translator, run, RunSummary};
pub use translation::{
    Dispatcher, FlashCard, RetryPolicy, RetryingTranslator, TranslationClient,
    TranslationRequest, TranslationResult, Translator,
};
pub use utils::{AppConfig, FlashcardError, Result, RunSettings, TranslateError};
