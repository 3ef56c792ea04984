//! Settings structures for PaperSearch-RS configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching `settings.yml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub arxiv: ArxivSettings,
    pub summarizer: SummarizerSettings,
    pub ui: UiSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (PAPERSEARCH_* prefix plus the OpenAI key)
    pub fn merge_env(&mut self) {
        self.merge_vars(|name| std::env::var(name).ok());
    }

    fn merge_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("PAPERSEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = var("PAPERSEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("PAPERSEARCH_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Some(val) = var("PAPERSEARCH_ARXIV_URL") {
            self.arxiv.api_url = val;
        }
        if let Some(val) = var("PAPERSEARCH_OPENAI_URL") {
            self.summarizer.api_url = val;
        }
        if let Some(val) = var("PAPERSEARCH_OPENAI_MODEL") {
            self.summarizer.model = val;
        }
        if let Some(key) = var("OPENAI_KEY").or_else(|| var("OPENAI_API_KEY")) {
            if !key.trim().is_empty() {
                self.summarizer.api_key = Some(key);
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "Paper Search".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Public instance mode (controls robots.txt)
    pub public_instance: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            public_instance: false,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds; none leaves the client default in place
    pub request_timeout: Option<f64>,
    /// User agent string (none = papersearch-rs/<version>)
    pub user_agent: Option<String>,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: None,
            user_agent: None,
            pool_maxsize: 20,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// arXiv feed API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArxivSettings {
    /// Query endpoint
    pub api_url: String,
    /// Page size requested from the feed
    pub max_results: u32,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for ArxivSettings {
    fn default() -> Self {
        Self {
            api_url: "https://export.arxiv.org/api/query".to_string(),
            max_results: 20,
            sort_by: "submittedDate".to_string(),
            sort_order: "descending".to_string(),
        }
    }
}

/// Summarization collaborator settings (OpenAI-compatible chat completions)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerSettings {
    /// Base URL; `/chat/completions` is appended
    pub api_url: String,
    /// Bearer token. Without one every summary falls back.
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    /// System instruction sent with every request
    pub system_prompt: String,
}

impl Default for SummarizerSettings {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            max_tokens: 150,
            temperature: 0.3,
            system_prompt: "You are a helpful assistant that creates concise, easy-to-understand \
                summaries of academic papers. Create a 2-3 sentence summary that explains the \
                main idea and key findings in plain language."
                .to_string(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Theme used before the visitor toggles it ("light" or "dark")
    pub default_theme: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_theme: "light".to_string(),
        }
    }
}
