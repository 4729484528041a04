//! The ordered table of work titles as they appear in the corpus.
//!
//! Order matters: range derivation walks this list front to back and relies
//! on each title occurring in the corpus in the same order. Two titles
//! ("MEASURE FOR MEASURE" and "THE TWO GENTLEMEN OF VERONA") appear twice in
//! the corpus table of contents and are therefore listed twice here; each
//! entry resolves to its own occurrence.

/// Titles of the works, in corpus order. Strings must match the corpus text
/// verbatim, typographic apostrophes included.
pub const COMPLETE_WORKS: &[&str] = &[
    "THE SONNETS",
    "ALL’S WELL THAT ENDS WELL",
    "THE TRAGEDY OF ANTONY AND CLEOPATRA",
    "AS YOU LIKE IT",
    "THE COMEDY OF ERRORS",
    "THE TRAGEDY OF CORIOLANUS",
    "CYMBELINE",
    "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK",
    "THE FIRST PART OF KING HENRY THE FOURTH",
    "THE SECOND PART OF KING HENRY THE FOURTH",
    "THE LIFE OF KING HENRY THE FIFTH",
    "THE FIRST PART OF HENRY THE SIXTH",
    "THE SECOND PART OF KING HENRY THE SIXTH",
    "THE THIRD PART OF KING HENRY THE SIXTH",
    "KING HENRY THE EIGHTH",
    "KING JOHN",
    "THE TRAGEDY OF JULIUS CAESAR",
    "THE TRAGEDY OF KING LEAR",
    "LOVE’S LABOUR’S LOST",
    "THE TRAGEDY OF MACBETH",
    "MEASURE FOR MEASURE",
    "MEASURE FOR MEASURE",
    "THE MERCHANT OF VENICE",
    "THE MERRY WIVES OF WINDSOR",
    "A MIDSUMMER NIGHT’S DREAM",
    "MUCH ADO ABOUT NOTHING",
    "THE TRAGEDY OF OTHELLO, MOOR OF VENICE",
    "PERICLES, PRINCE OF TYRE",
    "KING RICHARD THE SECOND",
    "KING RICHARD THE THIRD",
    "THE TRAGEDY OF ROMEO AND JULIET",
    "THE TAMING OF THE SHREW",
    "THE TEMPEST",
    "THE LIFE OF TIMON OF ATHENS",
    "THE TRAGEDY OF TITUS ANDRONICUS",
    "THE HISTORY OF TROILUS AND CRESSIDA",
    "TWELFTH NIGHT; OR, WHAT YOU WILL",
    "THE TWO GENTLEMEN OF VERONA",
    "THE TWO GENTLEMEN OF VERONA",
    "THE TWO NOBLE KINSMEN",
    "THE WINTER’S TALE",
    "A LOVER’S COMPLAINT",
    "THE PASSIONATE PILGRIM",
    "THE PHOENIX AND THE TURTLE",
    "THE RAPE OF LUCRECE",
    "VENUS AND ADONIS",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_works_list_shape() {
        assert_eq!(COMPLETE_WORKS.len(), 46);
        assert_eq!(COMPLETE_WORKS[0], "THE SONNETS");
        assert_eq!(COMPLETE_WORKS[COMPLETE_WORKS.len() - 1], "VENUS AND ADONIS");
    }

    #[test]
    fn test_duplicate_titles_are_listed_twice() {
        let count = |t: &str| COMPLETE_WORKS.iter().filter(|w| **w == t).count();
        assert_eq!(count("MEASURE FOR MEASURE"), 2);
        assert_eq!(count("THE TWO GENTLEMEN OF VERONA"), 2);
    }
}
