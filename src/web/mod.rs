//! Web server module
//!
//! Provides the JSON search API and the HTML interface.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
