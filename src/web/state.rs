//! Application state shared across handlers

use crate::config::Settings;
use crate::feed::ArxivFeed;
use crate::network::HttpClient;
use crate::search::Search;
use crate::summarize::{OpenAiSummarizer, Summarizer};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor
    pub search: Arc<Search>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state with the configured OpenAI summarizer
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let summarizer = Arc::new(OpenAiSummarizer::new(
            client.clone(),
            settings.summarizer.clone(),
        ));
        Self::with_summarizer(settings, client, summarizer)
    }

    /// Create new application state with a custom summarizer
    pub fn with_summarizer(
        settings: Settings,
        client: HttpClient,
        summarizer: Arc<dyn Summarizer>,
    ) -> anyhow::Result<Self> {
        let feed = ArxivFeed::new(&settings.arxiv);
        let search = Arc::new(Search::new(client, feed, summarizer));
        let templates = Arc::new(super::Templates::new()?);

        Ok(Self {
            settings: Arc::new(settings),
            search,
            templates,
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Check if instance is public
    pub fn is_public(&self) -> bool {
        self.settings.server.public_instance
    }
}
