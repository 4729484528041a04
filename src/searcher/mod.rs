//! The query pipeline: pattern → match offsets → context windows →
//! attributed results.

use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::config::SearchSettings;
use crate::corpus::CorpusIndex;
use crate::error::Result;
use crate::models::SearchResult;
use crate::works::COMPLETE_WORKS;

/// Read-only search engine over one corpus.
///
/// Built once at startup, before the listener binds, and never mutated
/// afterwards: handlers share it behind an `Arc` with no locking, because no
/// writer exists post-construction.
pub struct Searcher {
    index: CorpusIndex,
    catalog: Catalog,
    settings: SearchSettings,
}

impl Searcher {
    /// Build a searcher over `corpus`, carving work ranges from `titles`
    pub fn build(corpus: String, titles: &[&str], settings: SearchSettings) -> Self {
        let index = CorpusIndex::build(corpus);
        let catalog = Catalog::derive(titles, &index);
        Self {
            index,
            catalog,
            settings,
        }
    }

    /// Load the corpus file at `path` and index it against the shipped
    /// works list. An unreadable corpus is fatal; the service cannot serve
    /// without one.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let corpus = std::fs::read_to_string(path)?;
        Ok(Self::build(corpus, COMPLETE_WORKS, SearchSettings::default()))
    }

    /// Run a case-insensitive pattern query.
    ///
    /// Returns one result per non-overlapping match, in ascending offset
    /// order, each carrying a context window around the match and the title
    /// of the owning work. A malformed pattern surfaces as
    /// `InvalidPattern`; a match outside every known work range is
    /// attributed to the sentinel title rather than failing the query.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let offsets = self.index.find_all(query)?;
        debug!(query, matches = offsets.len(), "search completed");

        Ok(offsets
            .into_iter()
            .map(|offset| {
                SearchResult::new(self.context_window(offset), self.catalog.resolve(offset))
            })
            .collect())
    }

    /// Slice the context window around a match offset.
    ///
    /// The window `[offset - W, offset + W)` is clamped to the corpus bounds
    /// and then snapped inward to char boundaries, so a match near either
    /// edge (or beside a multi-byte character) yields a valid slice of at
    /// most 2W bytes.
    fn context_window(&self, offset: usize) -> &str {
        let text = self.index.text();
        let half_width = self.settings.context_half_width;

        let mut lo = offset.saturating_sub(half_width);
        let mut hi = (offset + half_width).min(text.len());
        while !text.is_char_boundary(lo) {
            lo += 1;
        }
        while !text.is_char_boundary(hi) {
            hi -= 1;
        }
        &text[lo..hi]
    }

    /// Corpus length in bytes
    pub fn corpus_len(&self) -> usize {
        self.index.len()
    }

    /// Number of works whose range was resolved
    pub fn works_resolved(&self) -> usize {
        self.catalog.resolved_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searcher_with_width(corpus: &str, titles: &[&str], half_width: usize) -> Searcher {
        Searcher::build(
            corpus.to_string(),
            titles,
            SearchSettings::default().with_context_half_width(half_width),
        )
    }

    #[test]
    fn test_window_clamped_at_corpus_start() {
        let searcher = searcher_with_width("hamlet enters the stage", &["hamlet"], 10);
        let results = searcher.search("hamlet").unwrap();

        // The match sits closer to the start than the half-width; the window
        // begins at offset 0 instead of underflowing.
        assert_eq!(results[0].result_string, "hamlet ent");
    }

    #[test]
    fn test_window_clamped_at_corpus_end() {
        let corpus = "the stage exits hamlet";
        let searcher = searcher_with_width(corpus, &["the stage"], 10);
        let results = searcher.search("hamlet").unwrap();

        let window = &results[0].result_string;
        assert!(window.ends_with("hamlet"));
        assert!(window.len() <= 20);
    }

    #[test]
    fn test_window_bounded_by_twice_half_width() {
        let corpus = "word ".repeat(100);
        let searcher = searcher_with_width(&corpus, &["word"], 25);
        for result in searcher.search("word").unwrap() {
            assert!(result.result_string.len() <= 50);
        }
    }

    #[test]
    fn test_window_respects_char_boundaries() {
        // Typographic apostrophes are three bytes in UTF-8; windows whose raw
        // edges split one must shrink to the nearest boundary.
        let corpus = "’’’’ hamlet ’’’’";
        let searcher = searcher_with_width(corpus, &["hamlet"], 8);
        let results = searcher.search("hamlet").unwrap();

        // Raw edges land mid-apostrophe on both sides; both snap inward.
        assert_eq!(results[0].result_string, "’’ hamlet ");
    }

    #[test]
    fn test_results_in_ascending_match_order() {
        let corpus = "PART ONE alpha beta PART TWO beta gamma";
        let searcher = searcher_with_width(corpus, &["PART ONE", "PART TWO"], 5);
        let results = searcher.search("beta").unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].work_title, "PART ONE");
        assert_eq!(results[1].work_title, "PART TWO");
    }

    #[test]
    fn test_invalid_pattern_is_propagated() {
        let searcher = searcher_with_width("some corpus", &["some"], 10);
        let err = searcher.search("(unbalanced").unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let searcher = searcher_with_width("Hamlet and HAMLET and hamlet", &["Hamlet"], 3);
        assert_eq!(searcher.search("hamlet").unwrap().len(), 3);
        assert_eq!(searcher.search("HAMLET").unwrap().len(), 3);
    }
}
