//! Full-text index over the immutable corpus.
//!
//! A suffix array gives sublinear lookup for the literal title strings the
//! catalog needs, while arbitrary query patterns run as a single linear
//! regex scan over the corpus. Both structures are built once at startup and
//! never mutated.

mod index;
mod suffix;

pub use index::CorpusIndex;
pub use suffix::build_suffix_array;
