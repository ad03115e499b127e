pub mod criterion;
pub mod types;

pub use criterion::Criterion;
pub use types::{
    AnalysisResult, Finding, Remediation, RepetitionFlag, RepetitionSummary, RiskLevel,
    RiskMatrixRow, RiskReport, NONE_DETECTED,
};
