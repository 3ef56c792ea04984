//! Search orchestration module
//!
//! Runs the fetch, parse and enrich pipeline for one query.

mod executor;
mod models;

pub use executor::{enrich, Search};
pub use models::*;
