//! Suffix array construction.
//!
//! Naive comparison sort, O(N log N) suffix comparisons. The corpus is
//! indexed exactly once at startup, so build time is paid once; for corpora
//! past the tens of megabytes an SA-IS construction would be the upgrade.

/// Build the suffix array of `text`: every suffix start position, sorted by
/// the byte order of the suffixes.
///
/// Positions are stored as `u32` to halve the table size; corpora are far
/// below the 4 GiB that would overflow.
pub fn build_suffix_array(text: &[u8]) -> Vec<u32> {
    debug_assert!(text.len() <= u32::MAX as usize);

    let mut sa: Vec<u32> = (0..text.len() as u32).collect();
    sa.sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
    sa
}
