//! Search execution: fetch the feed, parse it, optionally enrich each paper

use super::models::SearchQuery;
use crate::error::SearchError;
use crate::feed::ArxivFeed;
use crate::network::HttpClient;
use crate::results::Paper;
use crate::summarize::{Summarizer, SUMMARY_UNAVAILABLE};
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Search aggregator over the arXiv feed
pub struct Search {
    /// HTTP client for the feed request
    client: HttpClient,
    feed: ArxivFeed,
    summarizer: Arc<dyn Summarizer>,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, feed: ArxivFeed, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            client,
            feed,
            summarizer,
        }
    }

    /// Execute a search query.
    ///
    /// A fetch or parse failure aborts the whole search. Summarization
    /// failures only affect the paper they belong to.
    pub async fn execute(&self, query: &SearchQuery) -> Result<Vec<Paper>, SearchError> {
        let start = Instant::now();

        let request = self.feed.request(query);
        let response = self
            .client
            .execute(request)
            .await
            .map_err(SearchError::Fetch)?;
        let papers = self.feed.response(response)?;

        info!(
            "Search '{}' on {} returned {} papers in {:?}",
            query.query(),
            self.feed.name(),
            papers.len(),
            start.elapsed()
        );

        if !query.ai_summary {
            return Ok(papers);
        }

        Ok(enrich(self.summarizer.as_ref(), papers).await)
    }
}

/// Summarize every paper concurrently, preserving order.
///
/// Each call has its own fallback: an error is logged and replaced with
/// [`SUMMARY_UNAVAILABLE`].
pub async fn enrich(summarizer: &dyn Summarizer, papers: Vec<Paper>) -> Vec<Paper> {
    let summaries = join_all(papers.iter().map(|paper| async move {
        match summarizer.summarize(&paper.title, &paper.summary).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(
                    "{} summary failed for '{}': {}",
                    summarizer.name(),
                    paper.id,
                    e
                );
                SUMMARY_UNAVAILABLE.to_string()
            }
        }
    }))
    .await;

    papers
        .into_iter()
        .zip(summaries)
        .map(|(paper, ai_summary)| Paper { ai_summary, ..paper })
        .collect()
}
