use crate::criterion::Criterion;

/// Sentinel issue recorded when a matched criterion has no red flags and
/// no missing expected evidence. Lets consumers distinguish "evaluated,
/// clean" from "not evaluated".
pub const NONE_DETECTED: &str = "None detected";

/// Result of evaluating one document section against a single criterion rule
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    #[serde(rename = "matched_criterion")]
    pub criterion: Criterion,
    /// Red-flag messages in rule-declaration order, then missing-evidence
    /// messages in expectation order; [NONE_DETECTED] when both are empty
    pub issues: Vec<String>,
    /// First 300 characters of the raw section body, "..."-suffixed if truncated
    pub excerpt: String,
}

impl Finding {
    /// True unless the issue list is just the clean sentinel
    pub fn has_issues(&self) -> bool {
        !(self.issues.len() == 1 && self.issues[0] == NONE_DETECTED)
    }
}

/// Two recommendation letters whose content similarity exceeded the threshold
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepetitionFlag {
    pub letter_1: String,
    pub letter_2: String,
    /// Cosine similarity over TF-IDF vectors, in [0, 1]
    pub similarity: f64,
}

/// Aggregate output of one analysis pass over a document
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    #[serde(rename = "rule_based_findings")]
    pub findings: Vec<Finding>,
    #[serde(rename = "repetitive_letters")]
    pub repetition_flags: Vec<RepetitionFlag>,
}

/// RFE risk bucket for one finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket by the length of a finding's issue list:
    /// 0-1 Low, 2-3 Medium, >3 High
    pub fn from_issue_count(count: usize) -> Self {
        match count {
            0 | 1 => RiskLevel::Low,
            2 | 3 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// One row of the report's risk matrix
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskMatrixRow {
    pub criterion: Criterion,
    pub risk: RiskLevel,
    pub issues_detected: usize,
}

/// A repetition flag prepared for display, similarity fixed to two decimals
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepetitionSummary {
    pub letter_1: String,
    pub letter_2: String,
    pub similarity: String,
}

impl From<&RepetitionFlag> for RepetitionSummary {
    fn from(flag: &RepetitionFlag) -> Self {
        Self {
            letter_1: flag.letter_1.clone(),
            letter_2: flag.letter_2.clone(),
            similarity: format!("{:.2}", flag.similarity),
        }
    }
}

/// Boilerplate fix suggestion for a criterion with detected issues
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Remediation {
    pub criterion: Criterion,
    pub advice: String,
}

/// The full risk report handed to presentation layers
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RiskReport {
    /// Unix timestamp of report assembly
    pub generated_at: u64,
    pub risk_matrix: Vec<RiskMatrixRow>,
    #[serde(rename = "rule_based_findings")]
    pub findings: Vec<Finding>,
    #[serde(rename = "repetitive_letters")]
    pub repetitive_letters: Vec<RepetitionSummary>,
    pub remediations: Vec<Remediation>,
}
