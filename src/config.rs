use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Search pipeline settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Half-width of the context window sliced around each match, in bytes.
    /// A match at offset o yields at most `2 * context_half_width` bytes of
    /// surrounding text, clamped at the corpus edges.
    pub context_half_width: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            context_half_width: 250,
        }
    }
}

impl SearchSettings {
    pub fn with_context_half_width(mut self, half_width: usize) -> Self {
        self.context_half_width = half_width;
        self
    }
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub http_port: u16,
    pub corpus_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 3001,
            corpus_path: PathBuf::from("completeworks.txt"),
            static_dir: PathBuf::from("./static"),
        }
    }
}

impl ServerConfig {
    pub fn new(http_port: u16, corpus_path: PathBuf, static_dir: PathBuf) -> Self {
        Self {
            http_port,
            corpus_path,
            static_dir,
        }
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.http_port)
    }
}
