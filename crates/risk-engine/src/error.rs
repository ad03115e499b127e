//! Analysis failure modes

use thiserror::Error;

/// Errors surfaced by a single analysis pass.
///
/// Every pipeline stage is a pure text transform, so the taxonomy is
/// narrow: the one fatal condition is a degenerate similarity corpus
/// where no vocabulary survives normalization. It is reported to the
/// caller rather than swallowed; calls are idempotent, so any retry
/// policy belongs upstream.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("no vocabulary left after normalizing {letters} letter bodies")]
    EmptyVocabulary { letters: usize },
}
