//! HTTP surface of the bookmark manager: link previews and page Q&A.
pub mod config;
pub mod error;
pub mod logging;
mod routes;
mod state;

use axum::routing::{get, post};
use axum::Router;

pub use config::{AppConfig, RunMode};
pub use error::ApiError;
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/bookmarks/preview", get(routes::preview::preview))
        .route("/api/ai/analyze-url", post(routes::analyze::analyze_url))
        .route("/healthz", get(routes::health))
        .with_state(state)
}
