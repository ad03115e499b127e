pub mod error;
pub mod letters;
pub mod report;
pub mod rules;
pub mod segment;
pub mod similarity;
pub mod text;

use shared_types::AnalysisResult;

pub use error::AnalysisError;
pub use letters::{extract_letters, Letter};
pub use report::build_report;
pub use rules::{evaluate_section, CriterionRule, RuleTable};
pub use segment::{segment_by_criterion, Section};
pub use similarity::{detect_repetition, DEFAULT_REPETITION_THRESHOLD};

/// RiskEngine entry point
///
/// Holds the rule table and repetition threshold; both are fixed at
/// construction, so the engine is read-only and safe to share across
/// concurrent callers. `analyze` is pure and deterministic: no I/O, no
/// mutation, identical input gives identical output.
pub struct RiskEngine {
    rules: RuleTable,
    repetition_threshold: f64,
}

impl RiskEngine {
    /// Engine with the standard rule table and the 0.9 repetition threshold
    pub fn new() -> Self {
        Self {
            rules: RuleTable::standard(),
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }

    /// Engine over a substitute rule table
    pub fn with_rules(rules: RuleTable) -> Self {
        Self {
            rules,
            repetition_threshold: DEFAULT_REPETITION_THRESHOLD,
        }
    }

    /// Override the repetition threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.repetition_threshold = threshold;
        self
    }

    /// Analyze one document's extracted text end to end.
    ///
    /// Sections are evaluated in discovery order against the rule table;
    /// letters are extracted and compared over the same full text, not
    /// per section. A document with no recognized headings and no
    /// letters yields an empty result, which is a valid outcome.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let mut findings = Vec::new();
        for section in segment::segment_by_criterion(text) {
            findings.extend(rules::evaluate_section(&self.rules, &section.body));
        }

        let letters = letters::extract_letters(text);
        let repetition_flags = similarity::detect_repetition(&letters, self.repetition_threshold)?;

        Ok(AnalysisResult {
            findings,
            repetition_flags,
        })
    }
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}
