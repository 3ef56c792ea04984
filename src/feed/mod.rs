//! Paper feed module
//!
//! Requests the arXiv Atom feed and normalizes its entries.

mod arxiv;
pub mod extract;
pub mod xml;

pub use arxiv::ArxivFeed;
pub use xml::{FeedError, XmlElement};
