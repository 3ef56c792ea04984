//! arXiv feed engine
//!
//! Builds the query request for the arXiv API and turns its Atom response
//! into [`Paper`] records. Both halves are pure; the HTTP round trip happens in
//! the search executor.

use super::extract::papers_from_feed;
use super::xml;
use crate::config::ArxivSettings;
use crate::error::SearchError;
use crate::network::{HttpRequest, HttpResponse};
use crate::results::Paper;
use crate::search::SearchQuery;

/// arXiv search feed
#[derive(Debug, Clone)]
pub struct ArxivFeed {
    api_url: String,
    max_results: u32,
    sort_by: String,
    sort_order: String,
}

impl ArxivFeed {
    pub fn new(settings: &ArxivSettings) -> Self {
        Self {
            api_url: settings.api_url.clone(),
            max_results: settings.max_results,
            sort_by: settings.sort_by.clone(),
            sort_order: settings.sort_order.clone(),
        }
    }

    pub fn name(&self) -> &str {
        "arxiv"
    }

    /// Build the HTTP request for a search.
    ///
    /// The query string is assembled by hand so the `all:` field prefix stays
    /// literal while the user's text is percent-encoded.
    pub fn request(&self, query: &SearchQuery) -> HttpRequest {
        let url = format!(
            "{}?search_query=all:{}&max_results={}&sortBy={}&sortOrder={}",
            self.api_url,
            urlencoding::encode(query.query()),
            self.max_results,
            self.sort_by,
            self.sort_order
        );

        HttpRequest::get(url).header("Accept", "application/atom+xml")
    }

    /// Parse the HTTP response into papers, in feed order
    pub fn response(&self, response: HttpResponse) -> Result<Vec<Paper>, SearchError> {
        if !response.is_success() {
            return Err(SearchError::UpstreamStatus(response.status));
        }

        let root = xml::parse(&response.text)?;

        Ok(papers_from_feed(&root)
            .into_iter()
            .take(self.max_results as usize)
            .collect())
    }
}

impl Default for ArxivFeed {
    fn default() -> Self {
        Self::new(&ArxivSettings::default())
    }
}
