use prometheus::{Counter, Gauge, Histogram, HistogramOpts, Opts, Registry};
use std::sync::Arc;

use crate::error::Result;

/// Prometheus metrics for the search service
#[derive(Clone)]
pub struct SearchMetrics {
    // Counters
    pub searches_total: Counter,
    pub search_errors: Counter,

    // Gauges
    pub corpus_bytes: Gauge,
    pub works_resolved: Gauge,

    // Histograms
    pub search_latency: Histogram,

    // Registry
    registry: Arc<Registry>,
}

impl SearchMetrics {
    /// Create a new SearchMetrics instance
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        // Counters
        let searches_total = Counter::with_opts(Opts::new(
            "folio_searches_total",
            "Total number of search requests served",
        ))?;
        registry.register(Box::new(searches_total.clone()))?;

        let search_errors = Counter::with_opts(Opts::new(
            "folio_search_errors_total",
            "Total number of rejected or failed search requests",
        ))?;
        registry.register(Box::new(search_errors.clone()))?;

        // Gauges
        let corpus_bytes = Gauge::with_opts(Opts::new(
            "folio_corpus_bytes",
            "Size of the indexed corpus in bytes",
        ))?;
        registry.register(Box::new(corpus_bytes.clone()))?;

        let works_resolved = Gauge::with_opts(Opts::new(
            "folio_works_resolved",
            "Number of works whose title was located in the corpus",
        ))?;
        registry.register(Box::new(works_resolved.clone()))?;

        // Histograms
        let search_latency = Histogram::with_opts(
            HistogramOpts::new("folio_search_latency_seconds", "Search request latency")
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
        )?;
        registry.register(Box::new(search_latency.clone()))?;

        Ok(Self {
            searches_total,
            search_errors,
            corpus_bytes,
            works_resolved,
            search_latency,
            registry: Arc::new(registry),
        })
    }

    /// Get the registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
