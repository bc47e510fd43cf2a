use crate::translation::model::TranslationResult;
use crate::translation::prompt::{build_system_prompt, build_word_prompt};
use crate::translation::{TranslationRequest, Translator};
use crate::utils::{Result, TranslateError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Single-attempt client for an OpenAI-compatible chat-completions endpoint.
/// Wrap it in a [`RetryingTranslator`](crate::translation::RetryingTranslator)
/// for backoff on transient failures.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl TranslationClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            temperature: 0.3,
        })
    }

    fn build_request<'a>(&self, request: &'a TranslationRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_system_prompt(),
                },
                Message {
                    role: "user".to_string(),
                    content: build_word_prompt(&request.word),
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: self.temperature,
        }
    }

    async fn call_api(&self, request: &TranslationRequest) -> std::result::Result<String, TranslateError> {
        let body = self.build_request(request);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&*request.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let retry_after = parse_retry_after(response.headers());
            let text = response.text().await.unwrap_or_default();
            return Err(classify_status(status, retry_after, &text));
        }

        let text = response.text().await?;
        extract_content(&text)
    }
}

#[async_trait]
impl Translator for TranslationClient {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> std::result::Result<TranslationResult, TranslateError> {
        let content = self.call_api(request).await?;
        debug!(word = %request.word, content = %content, "Model response received");
        TranslationResult::from_model_json(&request.word, &content)
    }
}

fn extract_content(body: &str) -> std::result::Result<String, TranslateError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| TranslateError::Malformed(format!("unexpected response body: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or_else(|| TranslateError::Malformed("no message content in response".to_string()))
}

pub(crate) fn classify_status(
    status: StatusCode,
    retry_after: Option<Duration>,
    body: &str,
) -> TranslateError {
    let message = extract_error_message(body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranslateError::Authentication {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => TranslateError::RateLimited { retry_after },
        s if s == StatusCode::REQUEST_TIMEOUT || s.is_server_error() => TranslateError::Server {
            status: s.as_u16(),
            message,
        },
        s => TranslateError::Api {
            status: s.as_u16(),
            message,
        },
    }
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return msg.to_string();
        }
    }
    body.chars().take(200).collect()
}
