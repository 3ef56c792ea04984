//! Summarizer trait and error types

use async_trait::async_trait;
use thiserror::Error;

/// Text substituted for a summary that could not be generated
pub const SUMMARY_UNAVAILABLE: &str = "AI summary unavailable.";

/// Errors from a single summarization call
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("no summarization API key configured")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Response(String),

    #[error("response contained no summary text")]
    EmptyContent,
}

/// Generates a short plain-language summary of a paper
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarizer name, for logs
    fn name(&self) -> &str;

    /// Summarize one paper from its title and original abstract
    async fn summarize(&self, title: &str, abstract_text: &str) -> Result<String, SummaryError>;
}
