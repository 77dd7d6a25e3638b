// src/config.rs

use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// Credential for the external generation service. Absence never
    /// blocks startup; every generation/evaluation call then resolves to
    /// the static fallback content.
    pub openai_api_key: Option<String>,

    /// Model name sent with each completion request.
    pub openai_model: String,

    /// Per-request timeout for completion calls, in seconds.
    pub llm_timeout_secs: u64,

    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|key| !key.is_empty());

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4".to_string());

        let llm_timeout_secs = env::var("LLM_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8000);

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            openai_api_key,
            openai_model,
            llm_timeout_secs,
            port,
            rust_log,
        }
    }
}
