//! Result types for paper searches

mod types;

pub use types::*;
