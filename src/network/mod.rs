//! HTTP networking module
//!
//! Provides the outbound HTTP client shared by the feed and summarization calls.

mod client;
mod request;

pub use client::HttpClient;
pub use request::{HttpMethod, HttpRequest, HttpResponse};
