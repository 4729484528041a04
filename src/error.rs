use thiserror::Error;

/// Main error type for Folio operations
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("failed to load corpus: {0}")]
    CorpusLoad(#[from] std::io::Error),

    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Result type alias for Folio operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Check if this error was caused by the caller's input rather than the
    /// service itself (maps to HTTP 4xx at the transport layer)
    pub fn is_client_error(&self) -> bool {
        matches!(self, FolioError::InvalidPattern(_))
    }
}
