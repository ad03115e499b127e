//! Recommendation-letter repetition detection
//!
//! Letters are vectorized with TF-IDF over the letter corpus itself (no
//! external vocabulary) and compared pairwise by cosine similarity.
//! Reworded boilerplate still shares most of its content words, so
//! near-duplicates score high even without verbatim overlap, while IDF
//! damps vocabulary the whole corpus shares ("recommend", "expertise").
//!
//! IDF is the smoothed variant ln((1 + n) / (1 + df)) + 1 and rows are
//! L2-normalized, so cosine reduces to a dot product, identical
//! normalized bodies score exactly 1.0, and disjoint vocabularies score
//! 0.0.

use std::collections::HashMap;

use shared_types::RepetitionFlag;

use crate::error::AnalysisError;
use crate::letters::Letter;
use crate::text::{normalize, tokenize};

/// Default similarity threshold above which a letter pair is flagged
pub const DEFAULT_REPETITION_THRESHOLD: f64 = 0.9;

/// Flag unordered letter pairs (i < j) whose cosine similarity strictly
/// exceeds `threshold`.
///
/// Fewer than two letters short-circuits to no flags. A corpus whose
/// bodies normalize to nothing at all cannot be vectorized and is a
/// fatal error for the call.
pub fn detect_repetition(
    letters: &[Letter],
    threshold: f64,
) -> Result<Vec<RepetitionFlag>, AnalysisError> {
    if letters.len() < 2 {
        return Ok(Vec::new());
    }

    let bodies: Vec<String> = letters.iter().map(|l| normalize(&l.body)).collect();
    let rows = tfidf_rows(&bodies)?;

    let mut flags = Vec::new();
    for i in 0..rows.len() {
        for j in (i + 1)..rows.len() {
            let score = dot(&rows[i], &rows[j]).min(1.0);
            if score > threshold {
                flags.push(RepetitionFlag {
                    letter_1: letters[i].header.clone(),
                    letter_2: letters[j].header.clone(),
                    similarity: score,
                });
            }
        }
    }
    Ok(flags)
}

/// L2-normalized TF-IDF rows for the given normalized documents.
/// Vocabulary indices follow first occurrence across the corpus.
fn tfidf_rows(documents: &[String]) -> Result<Vec<Vec<f64>>, AnalysisError> {
    let mut vocabulary: HashMap<&str, usize> = HashMap::new();
    let mut term_counts: Vec<HashMap<usize, usize>> = Vec::with_capacity(documents.len());

    for document in documents {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for token in tokenize(document) {
            let next_index = vocabulary.len();
            let index = *vocabulary.entry(token).or_insert(next_index);
            *counts.entry(index).or_insert(0) += 1;
        }
        term_counts.push(counts);
    }

    if vocabulary.is_empty() {
        return Err(AnalysisError::EmptyVocabulary {
            letters: documents.len(),
        });
    }

    let mut doc_freq = vec![0usize; vocabulary.len()];
    for counts in &term_counts {
        for &index in counts.keys() {
            doc_freq[index] += 1;
        }
    }

    let total = documents.len() as f64;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + total) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let rows = term_counts
        .into_iter()
        .map(|counts| {
            let mut row = vec![0.0; idf.len()];
            for (index, count) in counts {
                row[index] = count as f64 * idf[index];
            }
            l2_normalize(&mut row);
            row
        })
        .collect();

    Ok(rows)
}

/// In-place L2 normalization. An all-zero row (a letter whose body
/// normalized to nothing while the rest of the corpus did not) is left
/// untouched, so its similarity to anything is 0.
fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
