//! AI summarization module
//!
//! Defines the Summarizer trait used to enrich papers and an implementation
//! backed by an OpenAI-compatible chat completions API.

mod openai;
mod traits;

pub use openai::OpenAiSummarizer;
pub use traits::*;
