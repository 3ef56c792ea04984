//! Field extraction from parsed Atom entries
//!
//! Every optional part of the feed schema is handled here; each function
//! returns a fallback instead of failing when its path is absent.

use super::xml::XmlElement;
use crate::results::{Paper, NO_SUMMARY, UNTITLED};

/// Trimmed text of the first `tag` child, or `fallback` when missing or blank
pub fn text_or(entry: &XmlElement, tag: &str, fallback: &str) -> String {
    entry
        .child(tag)
        .map(|el| el.text.trim())
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Author names in document order. Authors without a name are skipped.
pub fn authors(entry: &XmlElement) -> Vec<String> {
    entry
        .children_named("author")
        .filter_map(|author| author.child("name"))
        .map(|name| name.text.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Href of the first link whose `title` or `rel` attribute equals `kind`
pub fn link_href(entry: &XmlElement, kind: &str) -> String {
    entry
        .children_named("link")
        .find(|link| link.attr("title") == Some(kind) || link.attr("rel") == Some(kind))
        .and_then(|link| link.attr("href"))
        .unwrap_or_default()
        .to_string()
}

/// Collapse runs of whitespace (arXiv wraps long titles across lines)
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert one `<entry>` into a [`Paper`] with an empty AI summary
pub fn entry_to_paper(entry: &XmlElement) -> Paper {
    Paper {
        id: text_or(entry, "id", ""),
        title: collapse_whitespace(&text_or(entry, "title", UNTITLED)),
        summary: text_or(entry, "summary", NO_SUMMARY),
        authors: authors(entry),
        published: text_or(entry, "published", ""),
        pdf_link: link_href(entry, "pdf"),
        tex_link: link_href(entry, "tex"),
        ai_summary: String::new(),
    }
}

/// All entries of a feed in source order. A root that is not a `feed` has no
/// entries.
pub fn papers_from_feed(root: &XmlElement) -> Vec<Paper> {
    if root.name != "feed" {
        return Vec::new();
    }
    root.children_named("entry").map(entry_to_paper).collect()
}
