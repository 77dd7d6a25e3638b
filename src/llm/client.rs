// src/llm/client.rs

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::config::Config;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

/// One chat-completion round-trip: system prompt, user prompt, sampling
/// temperature.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
}

/// Failure of the external generation service.
///
/// The gateway branches on this explicitly to pick fallback content;
/// none of these variants ever surfaces through the HTTP layer.
#[derive(Debug)]
pub enum LlmError {
    /// No credential configured; the call was never attempted.
    MissingApiKey,
    /// Transport failure (connect, timeout, body read).
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Api { status: u16, body: String },
    /// The response arrived but could not be decoded into the expected shape.
    Decode(String),
}

impl fmt::Display for LlmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmError::MissingApiKey => write!(f, "no API credential configured"),
            LlmError::Http(err) => write!(f, "request failed: {}", err),
            LlmError::Api { status, body } => {
                write!(f, "service returned status {}: {}", status, body)
            }
            LlmError::Decode(reason) => write!(f, "unusable response: {}", reason),
        }
    }
}

impl std::error::Error for LlmError {}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Http(err)
    }
}

/// Transport seam for chat completions. The production implementation is
/// [`OpenAiClient`]; tests script responses through this trait.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Returns the assistant message text for the given request.
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError>;
}

/// Chat-completions client for the OpenAI API.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            timeout: Duration::from_secs(config.llm_timeout_secs),
        }
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let payload = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": request.system},
                {"role": "user", "content": request.user}
            ],
            "temperature": request.temperature,
        });

        let response = self
            .http
            .post(OPENAI_CHAT_URL)
            .bearer_auth(api_key)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api { status, body });
        }

        let body: Value = response.json().await?;

        body.get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| LlmError::Decode("missing choices[0].message.content".to_string()))
    }
}
