//! Search aggregator tests against mocked arXiv and chat completions APIs.

mod common;

use std::sync::Arc;

use common::{completion, feed_with_titles, settings_for, EMPTY_FEED, TWO_ENTRY_FEED};
use papersearch_rs::config::Settings;
use papersearch_rs::feed::ArxivFeed;
use papersearch_rs::network::HttpClient;
use papersearch_rs::summarize::{OpenAiSummarizer, SUMMARY_UNAVAILABLE};
use papersearch_rs::{Search, SearchError, SearchQuery};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn build_search(settings: &Settings) -> Search {
    let client = HttpClient::with_settings(&settings.outgoing).unwrap();
    let summarizer = Arc::new(OpenAiSummarizer::new(
        client.clone(),
        settings.summarizer.clone(),
    ));
    Search::new(client, ArxivFeed::new(&settings.arxiv), summarizer)
}

async fn mount_feed(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

// =============================================================================
// Feed fetch and parse
// =============================================================================

#[tokio::test]
async fn test_search_sends_expected_feed_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:quantum computing"))
        .and(query_param("max_results", "20"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
        .expect(1)
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("quantum computing"), false).unwrap();

    let papers = search.execute(&query).await.unwrap();
    assert!(papers.is_empty());
}

#[tokio::test]
async fn test_two_entry_feed_round_trip() {
    let server = MockServer::start().await;
    mount_feed(&server, TWO_ENTRY_FEED.to_string()).await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("quantum"), false).unwrap();
    let papers = search.execute(&query).await.unwrap();

    assert_eq!(papers.len(), 2);

    let full = &papers[0];
    assert_eq!(full.id, "http://arxiv.org/abs/2401.00001v1");
    assert_eq!(full.title, "Quantum Error Correction at Scale");
    assert_eq!(full.summary, "We study surface codes.");
    assert_eq!(full.authors, vec!["Ada Lovelace", "Alan Turing"]);
    assert_eq!(full.published, "2024-01-03T18:59:59Z");
    assert_eq!(full.pdf_link, "http://arxiv.org/pdf/2401.00001v1");
    assert_eq!(full.tex_link, "http://arxiv.org/e-print/2401.00001v1");
    assert_eq!(full.ai_summary, "");

    let minimal = &papers[1];
    assert_eq!(minimal.id, "http://arxiv.org/abs/2401.00002v1");
    assert_eq!(minimal.title, "Untitled");
    assert_eq!(minimal.summary, "No summary available.");
    assert!(minimal.authors.is_empty());
    assert_eq!(minimal.published, "");
    assert_eq!(minimal.pdf_link, "");
    assert_eq!(minimal.tex_link, "");
}

#[tokio::test]
async fn test_upstream_503_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("quantum"), true).unwrap();

    let err = search.execute(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::UpstreamStatus(503)));
}

#[tokio::test]
async fn test_malformed_feed_is_parse_error() {
    let server = MockServer::start().await;
    mount_feed(&server, "<feed><entry><title>cut off".to_string()).await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("quantum"), false).unwrap();

    let err = search.execute(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn test_unreachable_feed_is_fetch_error() {
    let mut settings = Settings::default();
    // Port 9 (discard) on localhost is not expected to accept connections
    settings.arxiv.api_url = "http://127.0.0.1:9/api/query".to_string();
    let search = build_search(&settings);
    let query = SearchQuery::new(Some("quantum"), false).unwrap();

    let err = search.execute(&query).await.unwrap_err();
    assert!(matches!(err, SearchError::Fetch(_)));
}

// =============================================================================
// Enrichment
// =============================================================================

#[tokio::test]
async fn test_no_summaries_when_not_requested() {
    let server = MockServer::start().await;
    mount_feed(&server, feed_with_titles(&["one", "two"])).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("never")))
        .expect(0)
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("anything"), false).unwrap();
    let papers = search.execute(&query).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert!(papers.iter().all(|p| p.ai_summary.is_empty()));
}

#[tokio::test]
async fn test_summaries_are_requested_per_paper() {
    let server = MockServer::start().await;
    mount_feed(&server, feed_with_titles(&["one", "two", "three"])).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_string_contains("gpt-4o-mini"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Plain summary.")))
        .expect(3)
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("anything"), true).unwrap();
    let papers = search.execute(&query).await.unwrap();

    assert_eq!(papers.len(), 3);
    assert!(papers.iter().all(|p| p.ai_summary == "Plain summary."));
}

#[tokio::test]
async fn test_one_failed_summary_does_not_affect_others() {
    let server = MockServer::start().await;
    mount_feed(&server, feed_with_titles(&["alpha", "beta", "gamma"])).await;

    // Mounted first so it takes precedence for the beta request
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_string_contains("Title: beta"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Generated.")))
        .expect(2)
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("anything"), true).unwrap();
    let papers = search.execute(&query).await.unwrap();

    let titles: Vec<&str> = papers.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["alpha", "beta", "gamma"]);
    assert_eq!(papers[0].ai_summary, "Generated.");
    assert_eq!(papers[1].ai_summary, SUMMARY_UNAVAILABLE);
    assert_eq!(papers[2].ai_summary, "Generated.");
}

#[tokio::test]
async fn test_malformed_summary_response_falls_back() {
    let server = MockServer::start().await;
    mount_feed(&server, feed_with_titles(&["only"])).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let search = build_search(&settings_for(&server));
    let query = SearchQuery::new(Some("anything"), true).unwrap();
    let papers = search.execute(&query).await.unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].ai_summary, SUMMARY_UNAVAILABLE);
}

#[tokio::test]
async fn test_missing_api_key_falls_back_without_calls() {
    let server = MockServer::start().await;
    mount_feed(&server, feed_with_titles(&["one", "two"])).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("never")))
        .expect(0)
        .mount(&server)
        .await;

    let mut settings = settings_for(&server);
    settings.summarizer.api_key = None;
    let search = build_search(&settings);
    let query = SearchQuery::new(Some("anything"), true).unwrap();
    let papers = search.execute(&query).await.unwrap();

    assert_eq!(papers.len(), 2);
    assert!(papers.iter().all(|p| p.ai_summary == SUMMARY_UNAVAILABLE));
}
