use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::config::{Config, ConfigError};

const DEFAULT_BASE_URL: &str = "https://openrouter.ai";

/// Chat-completions endpoint path under the provider base URL.
const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

/// Number of models offered as fallback candidates in one request.
const MAX_MODELS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    pub fn prompt_template(&self) -> &'static str {
        match self {
            SummaryLength::Short => {
                "Summarize the following transcript in three bullet points highlighting the main takeaways:\n\n"
            }
            SummaryLength::Medium => "Provide a short paragraph summary of the following transcript:\n\n",
            SummaryLength::Long => "Write a detailed multi-paragraph report based on the following transcript:\n\n",
        }
    }
}

impl FromStr for SummaryLength {
    type Err = SummarizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short" => Ok(SummaryLength::Short),
            "medium" => Ok(SummaryLength::Medium),
            "long" => Ok(SummaryLength::Long),
            other => Err(SummarizeError::InvalidLength(other.to_string())),
        }
    }
}

impl std::fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SummaryLength::Short => write!(f, "short"),
            SummaryLength::Medium => write!(f, "medium"),
            SummaryLength::Long => write!(f, "long"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summary length must be 'short', 'medium', or 'long', not {0:?}")]
    InvalidLength(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("no models configured in {path}")]
    NoModels { path: PathBuf },
    #[error("summarization API returned {status}: {body}")]
    Provider {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected summarization API response format")]
    ResponseShape,
    #[error("summarization request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Client for the OpenRouter chat-completions API. The API key is injected
/// at construction; nothing here reads the environment.
pub struct Summarizer {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl Summarizer {
    pub fn new(client: reqwest::Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the summarizer at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Summarize a transcript at the requested length.
    ///
    /// The model list is re-read from `config_path` on every call.
    pub async fn summarize(
        &self,
        transcript: &str,
        length: SummaryLength,
        config_path: &Path,
    ) -> Result<String, SummarizeError> {
        let prompt = build_prompt(length, transcript);

        let config = Config::load(config_path)?;
        if config.models.is_empty() {
            return Err(SummarizeError::NoModels {
                path: config_path.to_path_buf(),
            });
        }
        let models: Vec<&str> = config.models.iter().take(MAX_MODELS).map(String::as_str).collect();

        debug!("Summarizing ({length}) with models {models:?}");

        let body = serde_json::json!({
            "models": models,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let resp = self
            .client
            .post(format!("{}{COMPLETIONS_PATH}", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(SummarizeError::Provider { status, body });
        }

        let json: serde_json::Value = resp.json().await?;
        extract_completion_text(&json)
    }
}

/// The prompt is the length template with the transcript appended verbatim.
fn build_prompt(length: SummaryLength, transcript: &str) -> String {
    format!("{}{transcript}", length.prompt_template())
}

fn extract_completion_text(json: &serde_json::Value) -> Result<String, SummarizeError> {
    json.get("choices")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|t| t.as_str())
        .map(|t| t.to_string())
        .ok_or(SummarizeError::ResponseShape)
}
