//! Plainwiki - a minimal personal wiki
//!
//! Pages are plain-text files named after their title. They are viewed,
//! edited and saved over HTTP, and `[PageName]` tokens become links when a
//! page is viewed.

pub mod components;
pub mod config;
pub mod errors;
pub mod form;
pub mod handlers;
pub mod logger;
pub mod router;
pub mod services;
pub mod types;
pub mod utils;

use axum::{routing::{get, post}, Router};

// Re-export commonly used items
pub use config::Config;
pub use errors::WikiError;
pub use types::{AppState, Page, Title};
pub use services::{LinkRewriter, PageStore};
pub use components::{PageRenderer, TemplateName, TemplateSet};

/// Build the wiki's router around `state`
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/view/:title", get(handlers::handle_view))
        .route("/edit/:title", get(handlers::handle_edit))
        .route("/save/:title", post(handlers::handle_save))
        .fallback(handlers::handle_not_found)
        .with_state(state)
}
