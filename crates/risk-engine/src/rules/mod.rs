//! Rule-based risk evaluation

pub mod table;

pub use table::{CriterionRule, RuleTable};

use shared_types::{Finding, NONE_DETECTED};

use crate::text::{excerpt, normalize};

/// Evaluate one section body against every rule in the table.
///
/// Rules are independent, not mutually exclusive: a section may address
/// zero, one, or several criteria. For each criterion whose trigger
/// keywords occur in the normalized body, the issue list carries red-flag
/// messages in declaration order, then a missing-detail message per
/// absent expected-evidence keyword, falling back to the clean sentinel
/// when both lists are empty. Always succeeds.
pub fn evaluate_section(rules: &RuleTable, body: &str) -> Vec<Finding> {
    let cleaned = normalize(body);
    let mut findings = Vec::new();

    for rule in rules.rules() {
        if !rule.keywords.iter().any(|k| cleaned.contains(k)) {
            continue;
        }

        let mut issues = Vec::new();
        for &(phrase, message) in rule.red_flags {
            if cleaned.contains(phrase) {
                issues.push(message.to_string());
            }
        }
        issues.extend(missing_evidence(&cleaned, rule));

        if issues.is_empty() {
            issues.push(NONE_DETECTED.to_string());
        }

        findings.push(Finding {
            criterion: rule.criterion,
            issues,
            excerpt: excerpt(body),
        });
    }

    findings
}

/// "Missing expected detail" messages for expectation keywords absent
/// from the normalized section text, in expectation-list order
fn missing_evidence(cleaned: &str, rule: &CriterionRule) -> Vec<String> {
    rule.expected_evidence
        .iter()
        .filter(|keyword| !cleaned.contains(*keyword))
        .map(|keyword| format!("Missing expected detail: {}", keyword))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::Criterion;

    #[test]
    fn test_awards_scenario_red_flags_and_missing_evidence() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "I won a local award from my department.");

        let awards = findings
            .iter()
            .find(|f| f.criterion == Criterion::Awards)
            .expect("award keyword should trigger Criterion 1");

        assert!(awards
            .issues
            .contains(&"Award appears to be local or school-level.".to_string()));
        assert!(awards
            .issues
            .contains(&"Award is limited to a department.".to_string()));
        // Every expectation keyword is absent from this body
        for keyword in table.get(Criterion::Awards).unwrap().expected_evidence {
            assert!(awards
                .issues
                .contains(&format!("Missing expected detail: {}", keyword)));
        }
        assert!(!awards.issues.contains(&NONE_DETECTED.to_string()));
    }

    #[test]
    fn test_red_flags_precede_missing_evidence() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "I won a local award.");
        let awards = findings
            .iter()
            .find(|f| f.criterion == Criterion::Awards)
            .unwrap();

        assert_eq!(awards.issues[0], "Award appears to be local or school-level.");
        assert!(awards.issues[1..]
            .iter()
            .all(|issue| issue.starts_with("Missing expected detail: ")));
    }

    #[test]
    fn test_high_salary_missing_evidence_in_expectation_order() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "My compensation was generous.");
        let salary = findings
            .iter()
            .find(|f| f.criterion == Criterion::HighSalary)
            .expect("compensation should trigger Criterion 9");

        assert_eq!(
            salary.issues,
            vec![
                "Missing expected detail: salary amount",
                "Missing expected detail: comparative survey",
                "Missing expected detail: currency",
                "Missing expected detail: region",
                "Missing expected detail: position type",
            ]
        );
    }

    #[test]
    fn test_present_expectation_is_not_reported() {
        let table = RuleTable::standard();
        let findings = evaluate_section(
            &table,
            "My compensation was 200,000 USD currency, well above the region median.",
        );
        let salary = findings
            .iter()
            .find(|f| f.criterion == Criterion::HighSalary)
            .unwrap();

        assert!(!salary
            .issues
            .contains(&"Missing expected detail: currency".to_string()));
        assert!(!salary
            .issues
            .contains(&"Missing expected detail: region".to_string()));
        assert!(salary
            .issues
            .contains(&"Missing expected detail: comparative survey".to_string()));
    }

    #[test]
    fn test_unmatched_section_produces_no_finding() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "The weather in spring was pleasant.");
        assert!(findings.is_empty());
    }

    #[test]
    fn test_empty_body_produces_no_finding() {
        let table = RuleTable::standard();
        assert!(evaluate_section(&table, "").is_empty());
    }

    #[test]
    fn test_section_may_match_multiple_criteria() {
        let table = RuleTable::standard();
        // "article" triggers both Published Material and Scholarly Articles
        let findings = evaluate_section(&table, "The article covered the work.");
        let matched: Vec<Criterion> = findings.iter().map(|f| f.criterion).collect();
        assert!(matched.contains(&Criterion::PublishedMaterial));
        assert!(matched.contains(&Criterion::ScholarlyArticles));
    }

    #[test]
    fn test_findings_follow_table_order() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "The article covered the work.");
        let numbers: Vec<u8> = findings.iter().map(|f| f.criterion.number()).collect();
        let mut sorted = numbers.clone();
        sorted.sort_unstable();
        assert_eq!(numbers, sorted);
    }

    #[test]
    fn test_case_and_punctuation_insensitive_matching() {
        let table = RuleTable::standard();
        let findings = evaluate_section(&table, "AWARD-winning, LOCAL!");
        let awards = findings
            .iter()
            .find(|f| f.criterion == Criterion::Awards)
            .unwrap();
        assert!(awards
            .issues
            .contains(&"Award appears to be local or school-level.".to_string()));
    }

    #[test]
    fn test_sentinel_when_clean() {
        // A substitute table with no red flags or expectations: a keyword
        // match with nothing wrong must yield the sentinel, so consumers
        // can tell "evaluated, clean" from "not evaluated".
        let table = RuleTable::from_rules(vec![CriterionRule {
            criterion: Criterion::Awards,
            keywords: &["award"],
            red_flags: &[],
            expected_evidence: &[],
        }]);
        let findings = evaluate_section(&table, "I received an award.");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].issues, vec![NONE_DETECTED.to_string()]);
        assert!(!findings[0].has_issues());
    }

    #[test]
    fn test_excerpt_is_bounded_and_raw() {
        let table = RuleTable::standard();
        let body = format!("An award was granted. {}", "padding ".repeat(60));
        let findings = evaluate_section(&table, &body);
        let awards = findings
            .iter()
            .find(|f| f.criterion == Criterion::Awards)
            .unwrap();
        assert!(awards.excerpt.ends_with("..."));
        assert_eq!(awards.excerpt.chars().count(), 303);
        // Excerpt keeps the raw body, not the normalized form
        assert!(awards.excerpt.starts_with("An award was granted."));
    }
}
