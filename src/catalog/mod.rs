//! Work boundaries within the corpus.
//!
//! The corpus is one flat buffer; the catalog carves it into contiguous,
//! ordered regions by locating each work's title text in list order. Ranges
//! are half-open `[start, end)` and derived in two passes: first resolve
//! every title offset under a monotonic watermark, then chain each `end` to
//! the next resolved `start`.

use std::ops::Range;

use crate::corpus::CorpusIndex;

/// Title attributed to offsets no resolved range covers
pub const UNATTRIBUTED: &str = "Unidentified Source Material";

/// One work's entry in the catalog.
///
/// `span` is `None` when the title text was never found in the corpus; such
/// a work contributes no range and its matches fall through to the
/// unattributed sentinel.
#[derive(Clone, Debug)]
pub struct WorkRange {
    pub title: String,
    pub span: Option<Range<usize>>,
}

/// Ordered table of work ranges.
///
/// Kept as a plain ordered array rather than a keyed map: range derivation
/// and offset resolution both depend on list order, and title strings recur
/// in the shipped works list, so titles are not usable as keys.
pub struct Catalog {
    ranges: Vec<WorkRange>,
}

impl Catalog {
    /// Derive each work's byte range from the in-order title occurrences.
    ///
    /// Pass 1 resolves title offsets front to back. The first listed work
    /// starts at offset 0 no matter where its title text sits; every later
    /// work starts at the first occurrence of its title at or after the
    /// watermark, which advances past each resolved title so a recurring
    /// title string resolves to its own, later, occurrence.
    ///
    /// Pass 2 walks back to front chaining `end = next resolved start`,
    /// seeded with the corpus length. Unresolved titles are skipped, so the
    /// resolved ranges stay contiguous and tile `[0, corpus_len)`.
    pub fn derive(titles: &[&str], index: &CorpusIndex) -> Self {
        let mut starts: Vec<Option<usize>> = Vec::with_capacity(titles.len());
        let mut watermark = 0usize;
        for (position, title) in titles.iter().enumerate() {
            if position == 0 {
                starts.push(Some(0));
                continue;
            }
            match index.lookup_literal(title, watermark, 1).first() {
                Some(&offset) => {
                    starts.push(Some(offset));
                    watermark = offset + title.len();
                }
                None => starts.push(None),
            }
        }

        let mut ranges: Vec<WorkRange> = Vec::with_capacity(titles.len());
        let mut next_start = index.len();
        for (title, start) in titles.iter().zip(starts).rev() {
            let span = start.map(|s| s..next_start);
            if let Some(s) = start {
                next_start = s;
            }
            ranges.push(WorkRange {
                title: (*title).to_string(),
                span,
            });
        }
        ranges.reverse();

        Self { ranges }
    }

    /// Resolve an offset to the title of the work owning it.
    ///
    /// Linear scan in list order, O(works) per call rather than O(1); fine
    /// while the list stays at tens of entries. Any offset outside every
    /// resolved range gets the sentinel, never an error.
    pub fn resolve(&self, offset: usize) -> &str {
        self.ranges
            .iter()
            .find(|work| {
                work.span
                    .as_ref()
                    .is_some_and(|span| span.contains(&offset))
            })
            .map(|work| work.title.as_str())
            .unwrap_or(UNATTRIBUTED)
    }

    /// All works in list order
    pub fn works(&self) -> &[WorkRange] {
        &self.ranges
    }

    /// Number of works whose title was found in the corpus
    pub fn resolved_count(&self) -> usize {
        self.ranges.iter().filter(|w| w.span.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_for(corpus: &str, titles: &[&str]) -> (CorpusIndex, Catalog) {
        let index = CorpusIndex::build(corpus.to_string());
        let catalog = Catalog::derive(titles, &index);
        (index, catalog)
    }

    #[test]
    fn test_ranges_tile_the_corpus() {
        let corpus = "prologue PART ONE some text PART TWO more text PART THREE the end";
        let (index, catalog) = catalog_for(corpus, &["PART ONE", "PART TWO", "PART THREE"]);

        let spans: Vec<_> = catalog
            .works()
            .iter()
            .map(|w| w.span.clone().unwrap())
            .collect();

        // First work owns the corpus head regardless of its title position.
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[0].end, spans[1].start);
        assert_eq!(spans[1].end, spans[2].start);
        assert_eq!(spans[2].end, index.len());
    }

    #[test]
    fn test_resolve_is_total() {
        let corpus = "prologue PART ONE some text PART TWO more text";
        let (index, catalog) = catalog_for(corpus, &["PART ONE", "PART TWO"]);

        for offset in 0..index.len() {
            let title = catalog.resolve(offset);
            assert!(title == "PART ONE" || title == "PART TWO");
        }
        assert_eq!(catalog.resolve(index.len()), UNATTRIBUTED);
    }

    #[test]
    fn test_boundary_byte_belongs_to_next_work() {
        let corpus = "prologue PART ONE some text PART TWO more text";
        let (_, catalog) = catalog_for(corpus, &["PART ONE", "PART TWO"]);

        let second_start = corpus.find("PART TWO").unwrap();
        // Half-open ranges: the first byte of the next title is owned by the
        // next work, and the byte before it by the previous one.
        assert_eq!(catalog.resolve(second_start), "PART TWO");
        assert_eq!(catalog.resolve(second_start - 1), "PART ONE");
    }

    #[test]
    fn test_missing_title_degrades_to_sentinel() {
        let corpus = "prologue PART ONE some text PART THREE the end";
        let (index, catalog) =
            catalog_for(corpus, &["PART ONE", "PART TWO", "PART THREE"]);

        assert_eq!(catalog.resolved_count(), 2);
        assert!(catalog.works()[1].span.is_none());

        // Neighbors stay contiguous across the unresolved entry.
        let first = catalog.works()[0].span.clone().unwrap();
        let third = catalog.works()[2].span.clone().unwrap();
        assert_eq!(first.end, third.start);
        assert_eq!(third.end, index.len());
    }

    #[test]
    fn test_duplicate_title_resolves_to_later_occurrence() {
        // The shipped works list repeats two titles back to back; the
        // watermark must push the second copy onto its own occurrence.
        let corpus = "PRELUDE text INTERLUDE alpha INTERLUDE beta";
        let (index, catalog) = catalog_for(corpus, &["PRELUDE", "INTERLUDE", "INTERLUDE"]);

        let spans: Vec<_> = catalog
            .works()
            .iter()
            .map(|w| w.span.clone().unwrap())
            .collect();

        let first_occurrence = corpus.find("INTERLUDE").unwrap();
        let second_occurrence = corpus.rfind("INTERLUDE").unwrap();
        assert_eq!(spans[0], 0..first_occurrence);
        assert_eq!(spans[1], first_occurrence..second_occurrence);
        assert_eq!(spans[2], second_occurrence..index.len());
        assert_eq!(catalog.resolve(second_occurrence + 1), "INTERLUDE");
    }

    #[test]
    fn test_unresolved_tail_falls_to_sentinel() {
        let corpus = "PART ONE only one part here";
        let (index, catalog) = catalog_for(corpus, &["PART ONE", "PART TWO"]);

        // The lone resolved work absorbs the whole corpus.
        assert_eq!(
            catalog.works()[0].span.clone().unwrap(),
            0..index.len()
        );
        assert_eq!(catalog.resolve(index.len() + 100), UNATTRIBUTED);
    }
}
