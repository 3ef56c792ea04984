//! PaperSearch-RS: a minimal arXiv paper search service written in Rust
//!
//! Queries the arXiv Atom API, normalizes entries into [`Paper`] records and
//! optionally enriches each one with a short AI-generated summary.

pub mod config;
pub mod error;
pub mod feed;
pub mod network;
pub mod results;
pub mod search;
pub mod summarize;
pub mod web;

pub use config::Settings;
pub use error::SearchError;
pub use results::Paper;
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
