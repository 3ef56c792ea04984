//! OpenAI-compatible chat completions summarizer

use super::traits::{Summarizer, SummaryError};
use crate::config::SummarizerSettings;
use crate::network::{HttpClient, HttpRequest};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

/// Upstream error bodies are cut to this many characters before logging
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Summarizer that calls `<api_url>/chat/completions`
pub struct OpenAiSummarizer {
    client: HttpClient,
    settings: SummarizerSettings,
}

impl OpenAiSummarizer {
    pub fn new(client: HttpClient, settings: SummarizerSettings) -> Self {
        Self { client, settings }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.settings.api_url.trim_end_matches('/'))
    }

    /// Build the chat completions request body
    fn request_body(&self, title: &str, abstract_text: &str) -> Value {
        json!({
            "model": self.settings.model,
            "messages": [
                {
                    "role": "system",
                    "content": self.settings.system_prompt,
                },
                {
                    "role": "user",
                    "content": format!(
                        "Please summarize this academic paper:\n\nTitle: {}\n\nAbstract: {}",
                        title, abstract_text
                    ),
                },
            ],
            "max_tokens": self.settings.max_tokens,
            "temperature": self.settings.temperature,
        })
    }

    /// Pull `choices[0].message.content` out of a response body
    fn parse_response(body: &Value) -> Result<String, SummaryError> {
        let choice = body
            .get("choices")
            .and_then(|c| c.get(0))
            .ok_or_else(|| SummaryError::Response("No choices in response".to_string()))?;

        let content = choice
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(str::trim)
            .unwrap_or_default();

        if content.is_empty() {
            return Err(SummaryError::EmptyContent);
        }

        Ok(content.to_string())
    }
}

/// First [`MAX_ERROR_BODY_CHARS`] characters of an error body, with an ellipsis
/// when something was cut
fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    fn name(&self) -> &str {
        "openai"
    }

    async fn summarize(&self, title: &str, abstract_text: &str) -> Result<String, SummaryError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(SummaryError::MissingApiKey)?;

        debug!(model = %self.settings.model, title = %title, "Requesting AI summary");

        let request = HttpRequest::post(self.endpoint())
            .bearer(api_key)
            .json(self.request_body(title, abstract_text));

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| SummaryError::Request(e.to_string()))?;

        if !response.is_success() {
            return Err(SummaryError::Status {
                status: response.status,
                body: truncate_body(&response.text),
            });
        }

        let body: Value = response
            .json()
            .map_err(|e| SummaryError::Response(format!("Invalid JSON: {}", e)))?;

        Self::parse_response(&body)
    }
}
