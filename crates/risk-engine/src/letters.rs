//! Recommendation letter extraction
//!
//! Letters are chunked out of a text block (which may concatenate several
//! source documents) by their heading lines, using the same span-scan as
//! criterion segmentation with a different heading grammar.

use lazy_static::lazy_static;
use regex::Regex;

use crate::segment::split_at_headings;

lazy_static! {
    /// "Letter from ..." or "Recommendation Letter from ...", case-insensitive
    static ref LETTER_HEADING: Regex =
        Regex::new(r"(?i)(?:recommendation\s+)?letter\s+from\s+[^\n]+").unwrap();
}

/// A (header, body) pair for one extracted recommendation letter
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Letter {
    pub header: String,
    pub body: String,
}

/// Extract letters in document order. Unlike criterion sections, repeated
/// headers are kept: two letters from the same person are two letters.
pub fn extract_letters(text: &str) -> Vec<Letter> {
    split_at_headings(&LETTER_HEADING, text)
        .into_iter()
        .map(|(header, body)| Letter { header, body })
        .collect()
}
