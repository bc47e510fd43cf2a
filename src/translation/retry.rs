use crate::translation::{TranslationRequest, TranslationResult, Translator};
use crate::utils::TranslateError;
use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Bounded exponential backoff for transient failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            multiplier: 2.0,
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Delay before retry number `retry` (1-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1) as i32;
        let nanos = self.base_delay.as_nanos() as f64 * self.multiplier.powi(exponent);
        if !nanos.is_finite() || nanos >= self.max_delay.as_nanos() as f64 {
            self.max_delay
        } else {
            Duration::from_nanos(nanos.round() as u64)
        }
    }

    /// Delay before retry number `retry`, raised to the server's hint. The
    /// hint never pushes the wait past `max_delay`.
    pub fn backoff(&self, retry: u32, hint: Option<Duration>) -> Duration {
        let hint = hint.unwrap_or_default().min(self.max_delay);
        self.delay_for(retry).max(hint)
    }

    pub fn should_retry(&self, attempt: u32, error: &TranslateError) -> bool {
        error.is_transient() && attempt < self.max_attempts
    }
}

/// Wraps a [`Translator`] and retries transient errors per [`RetryPolicy`].
pub struct RetryingTranslator<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Translator> RetryingTranslator<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

#[async_trait]
impl<T: Translator> Translator for RetryingTranslator<T> {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslateError> {
        let mut attempt = 1;
        loop {
            match self.inner.translate(request).await {
                Ok(result) => return Ok(result),
                Err(e) if self.policy.should_retry(attempt, &e) => {
                    let delay = self.policy.backoff(attempt, e.retry_after());
                    warn!(
                        word = %request.word,
                        attempt = attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Translation call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
