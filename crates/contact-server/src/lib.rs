//! Contact Form Server
//!
//! A small backend for a contact form: accepts submissions over HTTP, stores
//! them in an embedded SQLite database, and lists them newest-first.

pub mod error;
pub mod handlers;
pub mod models;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/message", get(handlers::message))
        .route("/contact", post(handlers::contacts::submit))
        .route("/contacts", get(handlers::contacts::list))
}

/// Build the full application router: API routes under `/api`, everything
/// else served from the static frontend directory (`/` resolves to its
/// `index.html`).
pub fn app(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
