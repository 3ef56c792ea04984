//! Search query model

use crate::error::SearchError;
use serde::Serialize;

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// The search query string, never blank
    query: String,
    /// Generate an AI summary for every paper
    pub ai_summary: bool,
}

impl SearchQuery {
    /// Validate a raw query. Missing, empty and whitespace-only queries are
    /// rejected before any outbound call is made.
    pub fn new(raw: Option<&str>, ai_summary: bool) -> Result<Self, SearchError> {
        match raw {
            Some(q) if !q.trim().is_empty() => Ok(Self {
                query: q.to_string(),
                ai_summary,
            }),
            _ => Err(SearchError::MissingQuery),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}
