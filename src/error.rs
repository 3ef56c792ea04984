//! Search error taxonomy and its HTTP mapping

use crate::feed::FeedError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors that abort a whole search request.
///
/// Summarization failures never appear here; they degrade a single paper.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Query parameter 'q' is required")]
    MissingQuery,

    #[error("failed to reach feed API: {0}")]
    Fetch(#[source] anyhow::Error),

    #[error("feed API returned HTTP {0}")]
    UpstreamStatus(u16),

    #[error("failed to parse feed: {0}")]
    Parse(#[from] FeedError),
}

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingQuery => StatusCode::BAD_REQUEST,
            Self::Fetch(_) | Self::UpstreamStatus(_) | Self::Parse(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the caller. Upstream details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingQuery => self.to_string(),
            _ => "Failed to fetch papers".to_string(),
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Search failed: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.public_message() }))).into_response()
    }
}
