use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::FolioError;
use crate::models::SearchResult;

use super::router::AppState;
use super::types::{ErrorResponse, HealthResponse, SearchParams};

/// Error wrapper for API handlers
#[derive(Debug)]
pub enum ApiError {
    Folio(FolioError),
    BadRequest(String),
}

impl From<FolioError> for ApiError {
    fn from(e: FolioError) -> Self {
        ApiError::Folio(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::Folio(e) => {
                let error_type = match &e {
                    FolioError::InvalidPattern(_) => "invalid_pattern",
                    FolioError::CorpusLoad(_) => "corpus_load",
                    FolioError::Metrics(_) => "metrics_error",
                };
                let status = if e.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                (status, error_type, e.to_string())
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
        };

        let error_response = ErrorResponse::new(error_type, message);
        (status, Json(error_response)).into_response()
    }
}

/// Search the corpus
///
/// `GET /search?q=<pattern>` returns a JSON array of
/// `{ResultString, WorkTitle}` pairs, one per match. An absent or empty `q`
/// is rejected before the searcher is touched.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = match params.q.as_deref() {
        Some(q) if !q.is_empty() => q,
        _ => {
            state.metrics.search_errors.inc();
            return Err(ApiError::BadRequest(
                "missing or empty query parameter 'q'".to_string(),
            ));
        }
    };

    let timer = state.metrics.search_latency.start_timer();
    let results: Vec<SearchResult> = state.searcher.search(query).map_err(|e| {
        state.metrics.search_errors.inc();
        ApiError::Folio(e)
    })?;
    timer.observe_duration();
    state.metrics.searches_total.inc();

    Ok(Json(results))
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: crate::VERSION.to_string(),
    })
}

/// Prometheus metrics endpoint
pub async fn metrics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    use prometheus::Encoder;
    let encoder = prometheus::TextEncoder::new();
    let metric_families = state.metrics.registry().gather();
    let mut buffer = vec![];
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| ApiError::Folio(e.into()))?;

    Ok((
        StatusCode::OK,
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4",
        )],
        buffer,
    ))
}
