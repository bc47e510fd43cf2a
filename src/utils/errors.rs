use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_CONFIG: u8 = 2;
pub const EXIT_INPUT: u8 = 3;
pub const EXIT_AUTH: u8 = 4;
pub const EXIT_OUTPUT: u8 = 5;
pub const EXIT_PARTIAL_FAILURE: u8 = 10;
pub const EXIT_ALL_FAILED: u8 = 11;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed input file {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    #[error("Authentication rejected by the translation service: {0}")]
    Authentication(String),

    #[error("Cannot write output file {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FlashcardError {
    pub fn exit_code(&self) -> u8 {
        match self {
            FlashcardError::Config(_) | FlashcardError::Toml(_) | FlashcardError::Http(_) => {
                EXIT_CONFIG
            }
            FlashcardError::FileNotFound(_)
            | FlashcardError::Format { .. }
            | FlashcardError::Io(_) => EXIT_INPUT,
            FlashcardError::Authentication(_) => EXIT_AUTH,
            FlashcardError::Output { .. } => EXIT_OUTPUT,
        }
    }
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Outcome of a single call to the translation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("authentication failed ({status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("rate limited by the translation service")]
    RateLimited { retry_after: Option<Duration> },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out")]
    Timeout,

    #[error("server error {status}: {message}")]
    Server { status: u16, message: String },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed model response: {0}")]
    Malformed(String),
}

impl TranslateError {
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            TranslateError::RateLimited { .. }
                | TranslateError::Network(_)
                | TranslateError::Timeout
                | TranslateError::Server { .. }
        )
    }

    pub fn is_authentication(&self) -> bool {
        matches!(self, TranslateError::Authentication { .. })
    }

    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            TranslateError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::Timeout
        } else if e.is_decode() {
            TranslateError::Malformed(e.to_string())
        } else {
            TranslateError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(TranslateError::Timeout.is_transient());
        assert!(TranslateError::Network("reset".into()).is_transient());
        assert!(TranslateError::RateLimited { retry_after: None }.is_transient());
        assert!(TranslateError::Server {
            status: 503,
            message: String::new()
        }
        .is_transient());

        assert!(!TranslateError::Malformed("x".into()).is_transient());
        assert!(!TranslateError::Api {
            status: 400,
            message: String::new()
        }
        .is_transient());
        assert!(!TranslateError::Authentication {
            status: 401,
            message: String::new()
        }
        .is_transient());
    }

    #[test]
    fn exit_codes_are_distinct_per_category() {
        let codes = [
            FlashcardError::Config("x".into()).exit_code(),
            FlashcardError::FileNotFound("a.csv".into()).exit_code(),
            FlashcardError::Authentication("x".into()).exit_code(),
            FlashcardError::Output {
                path: "out.csv".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [EXIT_CONFIG, EXIT_INPUT, EXIT_AUTH, EXIT_OUTPUT]);
    }
}
