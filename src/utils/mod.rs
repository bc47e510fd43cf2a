pub mod config;
pub mod errors;

pub use config::{AppConfig, RunSettings, API_KEY_ENV};
pub use errors::{FlashcardError, Result, TranslateError};
