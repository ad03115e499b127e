//! Criterion heading segmentation
//!
//! Splits full document text into labeled sections wherever a
//! "Criterion N: ..." heading occurs. The scan is two-pass: first every
//! heading span is located in document order, then bodies are sliced
//! between consecutive spans. Text before the first heading is dropped;
//! a document without headings yields no sections, which callers must
//! treat as a valid outcome.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Heading grammar: "Criterion <number><: - or en-dash><rest of line>",
    /// case-insensitive, bounded at the newline
    static ref CRITERION_HEADING: Regex =
        Regex::new(r"(?i)criterion\s+\d+\s*[:\-–][^\n]*").unwrap();
}

/// A (header, body) slice of the document produced by segmentation
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Section {
    pub header: String,
    pub body: String,
}

/// Split document text into criterion-labeled sections.
///
/// A verbatim repeat of a header keeps its first position but takes the
/// last body. An empty body (heading at end of document, or two adjacent
/// headings) is recorded as an empty string.
pub fn segment_by_criterion(text: &str) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for (header, body) in split_at_headings(&CRITERION_HEADING, text) {
        match sections.iter_mut().find(|s| s.header == header) {
            Some(existing) => existing.body = body,
            None => sections.push(Section { header, body }),
        }
    }
    sections
}

/// Locate every heading span, then pair each heading with the text
/// between it and the next heading (or end of input). Shared with the
/// letter extractor, which uses a different heading grammar.
pub(crate) fn split_at_headings(heading: &Regex, text: &str) -> Vec<(String, String)> {
    let spans: Vec<(usize, usize)> = heading
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();

    spans
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            let body_end = spans
                .get(i + 1)
                .map(|&(next_start, _)| next_start)
                .unwrap_or(text.len());
            let header = text[start..end].trim().to_string();
            let body = text[end..body_end].trim().to_string();
            (header, body)
        })
        .collect()
}
