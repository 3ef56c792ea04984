//! HTTP request handlers

use super::state::AppState;
use crate::error::SearchError;
use crate::results::Paper;
use crate::search::SearchQuery;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Query parameters for search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// `"true"` requests AI summaries; anything else leaves them off
    #[serde(rename = "aiSummary")]
    pub ai_summary: Option<String>,
}

impl SearchParams {
    fn wants_ai_summary(&self) -> bool {
        self.ai_summary.as_deref() == Some("true")
    }
}

/// Search results response
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub papers: Vec<Paper>,
}

fn page_context(state: &AppState) -> Context {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("default_theme", &state.settings.ui.default_theme);
    ctx
}

fn render(state: &AppState, template: &str, ctx: &Context) -> Response {
    match state.templates.render_with_context(template, ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> Response {
    let mut ctx = page_context(&state);
    ctx.insert("query", "");
    ctx.insert("ai_summary", &false);

    render(&state, "index.html", &ctx)
}

/// JSON search handler
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, SearchError> {
    let query = SearchQuery::new(params.q.as_deref(), params.wants_ai_summary())?;
    let papers = state.search.execute(&query).await?;

    Ok(Json(SearchResponse { papers }))
}

/// HTML results page handler
pub async fn results(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match SearchQuery::new(params.q.as_deref(), params.wants_ai_summary()) {
        Ok(query) => query,
        Err(_) => return Redirect::to("/").into_response(),
    };

    let mut ctx = page_context(&state);
    ctx.insert("query", query.query());
    ctx.insert("ai_summary", &query.ai_summary);

    match state.search.execute(&query).await {
        Ok(papers) => {
            ctx.insert("papers", &papers);
            ctx.insert("error", &Option::<String>::None);
        }
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            ctx.insert("papers", &Vec::<Paper>::new());
            ctx.insert("error", &Some(e.public_message()));
        }
    }

    render(&state, "results.html", &ctx)
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}

/// Robots.txt handler
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let content = if state.is_public() {
        "User-agent: *\nAllow: /\nDisallow: /search\nDisallow: /results\n"
    } else {
        "User-agent: *\nDisallow: /\n"
    };
    (
        [(axum::http::header::CONTENT_TYPE, "text/plain")],
        content,
    )
}
