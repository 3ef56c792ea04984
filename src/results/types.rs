//! Result type definitions

use serde::{Deserialize, Serialize};

/// Title used when a feed entry has none
pub const UNTITLED: &str = "Untitled";

/// Abstract used when a feed entry has none
pub const NO_SUMMARY: &str = "No summary available.";

/// One search result, normalized from a feed entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Entry URI from the feed
    pub id: String,
    pub title: String,
    /// Original abstract
    pub summary: String,
    pub authors: Vec<String>,
    /// Publication timestamp as given by the feed
    pub published: String,
    /// Empty when the entry has no pdf link
    pub pdf_link: String,
    /// Empty when the entry has no tex link
    pub tex_link: String,
    /// Generated summary. Empty when not requested, the fallback sentinel when
    /// generation failed.
    pub ai_summary: String,
}

impl Default for Paper {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: UNTITLED.to_string(),
            summary: NO_SUMMARY.to_string(),
            authors: Vec::new(),
            published: String::new(),
            pdf_link: String::new(),
            tex_link: String::new(),
            ai_summary: String::new(),
        }
    }
}
