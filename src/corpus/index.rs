use std::cmp::Ordering;
use std::ops::Range;

use regex::RegexBuilder;

use crate::error::Result;

use super::suffix::build_suffix_array;

/// Full-text index over the corpus.
///
/// Owns the corpus text together with its suffix array. Immutable once
/// built; shared read-only across request handlers.
pub struct CorpusIndex {
    text: String,
    suffix_array: Vec<u32>,
}

impl CorpusIndex {
    /// Index the given corpus text
    pub fn build(text: String) -> Self {
        let suffix_array = build_suffix_array(text.as_bytes());
        Self { text, suffix_array }
    }

    /// The raw corpus text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Corpus length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Occurrences of the exact literal `literal`, in ascending offset
    /// order, restricted to offsets `>= min_offset` and truncated to `limit`.
    ///
    /// The `min_offset` bound lets callers skip occurrences already consumed
    /// by earlier lookups; the catalog relies on it to resolve recurring
    /// title strings to their in-order occurrences.
    pub fn lookup_literal(&self, literal: &str, min_offset: usize, limit: usize) -> Vec<usize> {
        let block = self.suffix_block(literal.as_bytes());
        let mut offsets: Vec<usize> = self.suffix_array[block]
            .iter()
            .map(|&p| p as usize)
            .filter(|&p| p >= min_offset)
            .collect();
        offsets.sort_unstable();
        offsets.truncate(limit);
        offsets
    }

    /// All non-overlapping match start offsets for `pattern`, compiled
    /// case-insensitively, in ascending order.
    ///
    /// Fails with `InvalidPattern` for a malformed pattern. The regex engine
    /// scans in linear time, so a hostile pattern costs at most O(corpus).
    pub fn find_all(&self, pattern: &str) -> Result<Vec<usize>> {
        let re = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(re.find_iter(&self.text).map(|m| m.start()).collect())
    }

    /// The contiguous suffix-array block whose suffixes start with `needle`
    fn suffix_block(&self, needle: &[u8]) -> Range<usize> {
        let text = self.text.as_bytes();
        let lo = self
            .suffix_array
            .partition_point(|&p| compare_prefix(&text[p as usize..], needle) == Ordering::Less);
        let hi = self
            .suffix_array
            .partition_point(|&p| compare_prefix(&text[p as usize..], needle) != Ordering::Greater);
        lo..hi
    }
}

/// Compare a suffix against `needle`, treating a suffix that starts with
/// `needle` as equal. Suffixes shorter than `needle` order before it.
fn compare_prefix(suffix: &[u8], needle: &[u8]) -> Ordering {
    let k = suffix.len().min(needle.len());
    match suffix[..k].cmp(&needle[..k]) {
        Ordering::Equal if suffix.len() < needle.len() => Ordering::Less,
        ordering => ordering,
    }
}
