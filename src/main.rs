//! PaperSearch-RS: a minimal arXiv paper search service
//!
//! This is the main entry point for the application.

use anyhow::Result;
use papersearch_rs::{
    config::Settings,
    network::HttpClient,
    web::{create_router, AppState},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            "-V" | "--version" => {
                println!("papersearch-rs {}", papersearch_rs::VERSION);
                return Ok(());
            }
            _ => {}
        }
    }

    // Load configuration before logging so debug mode can raise the level
    let (settings, source) = load_settings()?;

    let default_level = if settings.general.debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting PaperSearch-RS v{}", papersearch_rs::VERSION);
    match source {
        Some(path) => info!("Loaded settings from: {}", path.display()),
        None => info!("No settings file found, using defaults"),
    }
    info!("Loaded configuration for instance: {}", settings.general.instance_name);

    if settings.summarizer.api_key.is_none() {
        info!("No summarization API key configured; AI summaries will fall back");
    }

    // Initialize HTTP client
    let client = HttpClient::with_settings(&settings.outgoing)?;
    info!("HTTP client initialized");

    // Create application state
    let state = AppState::new(settings.clone(), client)?;
    info!("Application state initialized");

    let app = create_router(state);

    let addr = SocketAddr::new(settings.server.bind_address.parse()?, settings.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load settings from file or use defaults, returning the file used if any
fn load_settings() -> Result<(Settings, Option<PathBuf>)> {
    // Explicit path wins over the default locations
    if let Ok(path) = std::env::var("PAPERSEARCH_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok((settings, Some(path)));
        }
    }

    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/papersearch/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("papersearch-rs/settings.yml"));
    }

    for path in paths.iter() {
        if path.exists() {
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok((settings, Some(path.clone())));
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok((settings, None))
}

/// Print usage information
fn print_usage() {
    println!(
        r#"
PaperSearch-RS v{}
A minimal arXiv paper search service with optional AI summaries

USAGE:
    papersearch-rs [OPTIONS]

OPTIONS:
    -h, --help             Print help information
    -V, --version          Print version information

ENVIRONMENT VARIABLES:
    PAPERSEARCH_SETTINGS_PATH  Path to settings.yml
    PAPERSEARCH_DEBUG          Enable debug mode (true/false)
    PAPERSEARCH_PORT           Server port
    PAPERSEARCH_BIND_ADDRESS   Bind address
    PAPERSEARCH_ARXIV_URL      arXiv API endpoint
    PAPERSEARCH_OPENAI_URL     Chat completions base URL
    PAPERSEARCH_OPENAI_MODEL   Summarization model
    OPENAI_KEY                 API key for AI summaries (or OPENAI_API_KEY)
    RUST_LOG                   Log filter (overrides debug mode)
"#,
        papersearch_rs::VERSION
    );
}
