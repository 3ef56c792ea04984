//! Shared fixtures for integration tests

#![allow(dead_code)]

use papersearch_rs::config::Settings;
use wiremock::MockServer;

/// Feed with one fully populated entry followed by a minimal one
pub const TWO_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <link href="http://arxiv.org/api/query?search_query%3Dall%3Aquantum" rel="self" type="application/atom+xml"/>
  <title type="html">ArXiv Query: search_query=all:quantum</title>
  <id>http://arxiv.org/api/abc</id>
  <updated>2024-01-04T00:00:00-05:00</updated>
  <opensearch:totalResults>2</opensearch:totalResults>
  <entry>
    <id>http://arxiv.org/abs/2401.00001v1</id>
    <updated>2024-01-03T18:59:59Z</updated>
    <published>2024-01-03T18:59:59Z</published>
    <title>Quantum Error Correction
  at Scale</title>
    <summary>  We study surface codes.
</summary>
    <author>
      <name>Ada Lovelace</name>
    </author>
    <author>
      <name>Alan Turing</name>
    </author>
    <arxiv:comment>10 pages</arxiv:comment>
    <link href="http://arxiv.org/abs/2401.00001v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/2401.00001v1" rel="related" type="application/pdf"/>
    <link title="tex" href="http://arxiv.org/e-print/2401.00001v1" rel="related"/>
    <arxiv:primary_category term="quant-ph" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2401.00002v1</id>
    <link href="http://arxiv.org/abs/2401.00002v1" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

pub const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=all:zzzz</title>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:totalResults>
</feed>"#;

/// Build a feed with one entry per title
pub fn feed_with_titles(titles: &[&str]) -> String {
    let entries: String = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            format!(
                "<entry><id>http://arxiv.org/abs/{i}</id><title>{title}</title><summary>Abstract {i}</summary></entry>"
            )
        })
        .collect();
    format!(r#"<feed xmlns="http://www.w3.org/2005/Atom">{entries}</feed>"#)
}

/// Settings pointing both external APIs at the mock server
pub fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.arxiv.api_url = format!("{}/api/query", server.uri());
    settings.summarizer.api_url = format!("{}/v1", server.uri());
    settings.summarizer.api_key = Some("test-key".to_string());
    settings
}

/// Chat completions response body carrying `content`
pub fn completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
