//! HTTP transport: route registration, request parsing, response encoding.
//! Thin glue over the searcher; no search logic lives here.

mod handlers;
mod router;
mod types;

pub use router::{create_router, AppState};
pub use types::{ErrorResponse, HealthResponse, SearchParams};
