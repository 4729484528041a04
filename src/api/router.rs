use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::metrics::SearchMetrics;
use crate::searcher::Searcher;

use super::handlers::*;

/// Application state shared across all handlers.
///
/// Everything in here is built once before the listener binds and is
/// immutable afterwards, so it is shared read-only with no locking.
pub struct AppState {
    pub searcher: Arc<Searcher>,
    pub metrics: Arc<SearchMetrics>,
}

/// Create the HTTP router with all endpoints.
///
/// Unmatched paths fall through to the static frontend under `static_dir`.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/search", get(search))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
