//! Risk report assembly
//!
//! Turns an analysis result into the presentation-ready model consumed by
//! report renderers: a risk matrix bucketing each finding by issue count,
//! repetition flags with similarity fixed to two decimals, and
//! remediation boilerplate for criteria with detected issues. Rendering
//! itself (PDF, HTML, console) stays outside this workspace.

use shared_types::{
    AnalysisResult, Criterion, Remediation, RepetitionSummary, RiskLevel, RiskMatrixRow, RiskReport,
};

/// Boilerplate fix advice for a criterion whose section raised issues
pub fn remediation_for(criterion: Criterion) -> &'static str {
    match criterion {
        Criterion::Awards => {
            "Name the award, its national or international scope, the selection \
             process, and the number of recipients."
        }
        Criterion::Membership => {
            "Document the association's admission standards: review board, \
             nomination, and peer evaluation of achievements."
        }
        Criterion::PublishedMaterial => {
            "Cite the publication title, media name, author, and date, and quote \
             the passage about the applicant."
        }
        Criterion::Judging => {
            "Attach confirmation of completed reviews with the journal or \
             conference name, not just the invitation."
        }
        Criterion::OriginalContributions => {
            "Quantify impact with citation counts, patents, letters of impact, \
             or evidence of commercial use."
        }
        Criterion::ScholarlyArticles => {
            "Identify the journal, its impact factor, and the peer review behind \
             each article."
        }
        Criterion::Exhibitions => {
            "State the exhibition name, venue, city, and curator, and show the \
             venue's artistic standing."
        }
        Criterion::LeadingRole => {
            "Tie the role title to the organization's reputation and document \
             project outcomes or performance data."
        }
        Criterion::HighSalary => {
            "Provide the salary amount with currency, region, and position type, \
             next to a comparative survey."
        }
        Criterion::CommercialSuccess => {
            "Include ticket sales, album chart positions, box office figures, or \
             platform revenue records."
        }
    }
}

/// Assemble the report for one analysis result, stamped with the current
/// time. Everything except the timestamp is a pure function of the input.
pub fn build_report(result: &AnalysisResult) -> RiskReport {
    let risk_matrix = result
        .findings
        .iter()
        .map(|finding| RiskMatrixRow {
            criterion: finding.criterion,
            risk: RiskLevel::from_issue_count(finding.issues.len()),
            issues_detected: finding.issues.len(),
        })
        .collect();

    let remediations = result
        .findings
        .iter()
        .filter(|finding| finding.has_issues())
        .map(|finding| Remediation {
            criterion: finding.criterion,
            advice: remediation_for(finding.criterion).to_string(),
        })
        .collect();

    RiskReport {
        generated_at: chrono::Utc::now().timestamp() as u64,
        risk_matrix,
        findings: result.findings.clone(),
        repetitive_letters: result
            .repetition_flags
            .iter()
            .map(RepetitionSummary::from)
            .collect(),
        remediations,
    }
}
