pub mod api;
pub mod catalog;
pub mod config;
pub mod corpus;
pub mod error;
pub mod metrics;
pub mod models;
pub mod searcher;
pub mod works;

pub use api::{create_router, AppState};
pub use catalog::{Catalog, WorkRange, UNATTRIBUTED};
pub use config::{SearchSettings, ServerConfig};
pub use corpus::CorpusIndex;
pub use error::{FolioError, Result};
pub use metrics::SearchMetrics;
pub use models::SearchResult;
pub use searcher::Searcher;
pub use works::COMPLETE_WORKS;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
