use crate::cli::CliArgs;
use crate::translation::RetryPolicy;
use crate::utils::errors::{FlashcardError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub translation: TranslationDefaults,
    pub retry: RetryConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationDefaults {
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay_ms: u64,
    pub multiplier: f64,
    pub max_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub header: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// `text` is the plain fmt formatter, `json` one object per event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl Default for TranslationDefaults {
    fn default() -> Self {
        Self { workers: 5 }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 500,
            multiplier: 2.0,
            max_delay_ms: 10_000,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { header: true }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            FlashcardError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// A missing file yields the defaults; a file that exists but does not
    /// parse is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}

impl RetryConfig {
    pub fn to_policy(&self) -> Result<RetryPolicy> {
        if self.max_attempts == 0 {
            return Err(FlashcardError::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        if !self.multiplier.is_finite() || self.multiplier < 1.0 {
            return Err(FlashcardError::Config(format!(
                "retry.multiplier must be >= 1.0, got {}",
                self.multiplier
            )));
        }
        Ok(RetryPolicy {
            max_attempts: self.max_attempts,
            base_delay: Duration::from_millis(self.base_delay_ms),
            multiplier: self.multiplier,
            max_delay: Duration::from_millis(self.max_delay_ms),
        })
    }
}

/// Fully resolved settings for one run. Built once at startup.
#[derive(Clone)]
pub struct RunSettings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub workers: usize,
    pub model: String,
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
    pub retry: RetryPolicy,
    pub header: bool,
}

impl fmt::Debug for RunSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunSettings")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("workers", &self.workers)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("retry", &self.retry)
            .field("header", &self.header)
            .finish()
    }
}

impl RunSettings {
    /// Flags win over the config file, `--key` wins over the environment.
    pub fn resolve(args: &CliArgs, env_key: Option<String>, file: &AppConfig) -> Result<Self> {
        let api_key = args
            .key
            .clone()
            .or(env_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                FlashcardError::Config(format!(
                    "no API key given: pass --key or set {}",
                    API_KEY_ENV
                ))
            })?;

        let workers = args.workers.unwrap_or(file.translation.workers);
        if workers == 0 {
            return Err(FlashcardError::Config(
                "worker count must be at least 1".to_string(),
            ));
        }

        let model = args.model.clone().unwrap_or_else(|| file.api.model.clone());
        if model.trim().is_empty() {
            return Err(FlashcardError::Config("model name is empty".to_string()));
        }

        if file.api.timeout_seconds == 0 {
            return Err(FlashcardError::Config(
                "api.timeout_seconds must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            input: args.input.clone(),
            output: args.output.clone(),
            workers,
            model,
            api_key: api_key.trim().to_string(),
            endpoint: file.api.endpoint.clone(),
            timeout: Duration::from_secs(file.api.timeout_seconds),
            retry: file.retry.to_policy()?,
            header: file.output.header && !args.no_header,
        })
    }
}
