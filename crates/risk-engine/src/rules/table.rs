//! The fixed EB-1A rule table
//!
//! Ten criteria, each with trigger keywords, ordered red-flag
//! (phrase, warning) pairs, and expected-evidence keywords. Every entry
//! is matched as a substring of normalized text (lowercase, ASCII
//! punctuation stripped), so entries are written in that form here.

use shared_types::Criterion;

/// Rules for one evidentiary criterion
#[derive(Debug, Clone, Copy)]
pub struct CriterionRule {
    pub criterion: Criterion,
    /// Any of these occurring in a section marks the criterion as addressed
    pub keywords: &'static [&'static str],
    /// Weakness phrases scanned in declaration order
    pub red_flags: &'static [(&'static str, &'static str)],
    /// Evidence keywords whose absence is reported as a missing detail
    pub expected_evidence: &'static [&'static str],
}

/// Immutable table of criterion rules, constructed once and shared
/// read-only across all analysis calls
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<CriterionRule>,
}

impl RuleTable {
    /// The standard ten-criterion EB-1A table in statutory order
    pub fn standard() -> Self {
        Self {
            rules: vec![
                CriterionRule {
                    criterion: Criterion::Awards,
                    keywords: &[
                        "award",
                        "prize",
                        "fellowship",
                        "recognition",
                        "honor",
                        "competition",
                        "medal",
                    ],
                    red_flags: &[
                        ("local", "Award appears to be local or school-level."),
                        ("department", "Award is limited to a department."),
                        (
                            "not well known",
                            "Award lacks recognized national or international prestige.",
                        ),
                        (
                            "team",
                            "Award may not have been given to individual specifically.",
                        ),
                    ],
                    expected_evidence: &[
                        "award name",
                        "national",
                        "international",
                        "competition",
                        "selection",
                        "number of recipients",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::Membership,
                    keywords: &[
                        "member",
                        "association",
                        "fellow",
                        "admission",
                        "committee",
                        "invitation",
                    ],
                    red_flags: &[
                        (
                            "anyone can join",
                            "Association has open or fee-based membership.",
                        ),
                        (
                            "fee",
                            "Membership appears to require payment rather than achievement.",
                        ),
                        (
                            "no review",
                            "No evidence of expert peer review in admission process.",
                        ),
                    ],
                    expected_evidence: &[
                        "review board",
                        "nomination",
                        "peer evaluation",
                        "selection process",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::PublishedMaterial,
                    keywords: &[
                        "media",
                        "featured",
                        "profile",
                        "press",
                        "interview",
                        "coverage",
                        "article",
                        "publication",
                    ],
                    red_flags: &[
                        ("employer", "Media discusses employer or team, not individual."),
                        ("marketing", "Coverage seems promotional or internal."),
                        ("no author", "No identifiable date, source, or author."),
                    ],
                    expected_evidence: &[
                        "publication title",
                        "media name",
                        "author",
                        "date",
                        "quote about applicant",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::Judging,
                    keywords: &[
                        "review",
                        "judge",
                        "committee",
                        "evaluator",
                        "dissertation",
                        "panel",
                        "abstract",
                        "referee",
                    ],
                    red_flags: &[
                        ("student", "Judging was at student or informal level."),
                        (
                            "invited",
                            "Only invitation mentioned—no proof of actual judging.",
                        ),
                        (
                            "newsletter",
                            "Judging activity lacks professional/peer-reviewed status.",
                        ),
                    ],
                    expected_evidence: &[
                        "journal name",
                        "review confirmation",
                        "conference name",
                        "dissertation",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::OriginalContributions,
                    keywords: &[
                        "contribution",
                        "innovation",
                        "impact",
                        "patent",
                        "citation",
                        "original work",
                        "discovery",
                    ],
                    red_flags: &[
                        ("internal", "Contribution recognized only within company."),
                        (
                            "no citation",
                            "No citation metrics or third-party validation.",
                        ),
                        (
                            "unpublished",
                            "Claimed contribution is unpublished or unverified.",
                        ),
                    ],
                    expected_evidence: &[
                        "citation count",
                        "h-index",
                        "patent",
                        "letter of impact",
                        "commercial use",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::ScholarlyArticles,
                    keywords: &[
                        "author",
                        "publication",
                        "journal",
                        "conference",
                        "paper",
                        "article",
                        "proceedings",
                    ],
                    red_flags: &[
                        ("blog", "Publication is a blog or non-scholarly source."),
                        (
                            "no peer review",
                            "Article lacks peer review or editorial board.",
                        ),
                        (
                            "not indexed",
                            "Journal not indexed or recognized in the field.",
                        ),
                    ],
                    expected_evidence: &[
                        "journal name",
                        "impact factor",
                        "peer-reviewed",
                        "conference name",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::Exhibitions,
                    keywords: &[
                        "exhibit",
                        "gallery",
                        "artwork",
                        "showcase",
                        "installation",
                        "display",
                    ],
                    red_flags: &[
                        ("local", "Exhibition appears to be local or informal."),
                        ("community", "Venue lacks artistic or national prestige."),
                        ("not individual", "Exhibit does not highlight individual’s work."),
                    ],
                    expected_evidence: &["exhibition name", "venue", "city", "curator", "gallery"],
                },
                CriterionRule {
                    criterion: Criterion::LeadingRole,
                    keywords: &[
                        "leader",
                        "founder",
                        "director",
                        "head",
                        "critical role",
                        "project lead",
                        "chief",
                    ],
                    red_flags: &[
                        ("no impact", "Role not demonstrated to influence organization."),
                        ("contractor", "Role appears to be limited or not senior."),
                        ("no proof", "No documentation of contributions or results."),
                    ],
                    expected_evidence: &[
                        "role title",
                        "organization name",
                        "project outcome",
                        "performance data",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::HighSalary,
                    keywords: &[
                        "salary",
                        "income",
                        "remuneration",
                        "compensation",
                        "pay",
                        "bonus",
                        "offer letter",
                    ],
                    red_flags: &[
                        ("no comparison", "No industry benchmark or comparative data."),
                        ("prospective", "Salary offer is future or conditional."),
                        ("no proof", "No pay stubs, tax returns, or official letters."),
                    ],
                    expected_evidence: &[
                        "salary amount",
                        "comparative survey",
                        "currency",
                        "region",
                        "position type",
                    ],
                },
                CriterionRule {
                    criterion: Criterion::CommercialSuccess,
                    keywords: &[
                        "box office",
                        "album sales",
                        "chart",
                        "tour",
                        "tickets",
                        "downloads",
                        "streaming",
                        "royalties",
                    ],
                    red_flags: &[
                        ("no revenue", "No data on commercial performance."),
                        (
                            "small venue",
                            "Event may not demonstrate large-scale success.",
                        ),
                        ("no proof", "No press, revenue records, or independent reviews."),
                    ],
                    expected_evidence: &[
                        "ticket sales",
                        "album chart",
                        "revenue",
                        "box office",
                        "platform",
                    ],
                },
            ],
        }
    }

    /// A table from arbitrary rules, for tests and substitute configurations
    pub fn from_rules(rules: Vec<CriterionRule>) -> Self {
        Self { rules }
    }

    /// Rules in table order
    pub fn rules(&self) -> &[CriterionRule] {
        &self.rules
    }

    /// Look up the rule for one criterion
    pub fn get(&self, criterion: Criterion) -> Option<&CriterionRule> {
        self.rules.iter().find(|r| r.criterion == criterion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_covers_all_criteria_in_order() {
        let table = RuleTable::standard();
        let criteria: Vec<Criterion> = table.rules().iter().map(|r| r.criterion).collect();
        assert_eq!(criteria, Criterion::all());
    }

    #[test]
    fn test_every_rule_has_keywords_and_red_flags() {
        for rule in RuleTable::standard().rules() {
            assert!(!rule.keywords.is_empty(), "{} has no keywords", rule.criterion);
            assert!(!rule.red_flags.is_empty(), "{} has no red flags", rule.criterion);
            assert!(
                !rule.expected_evidence.is_empty(),
                "{} has no expected evidence",
                rule.criterion
            );
        }
    }

    #[test]
    fn test_entries_are_normalized_form() {
        // Table entries must already be lowercase, or substring matching
        // against normalized text could never succeed.
        for rule in RuleTable::standard().rules() {
            for keyword in rule.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
            for (phrase, _) in rule.red_flags {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_get_by_criterion() {
        let table = RuleTable::standard();
        let rule = table.get(Criterion::HighSalary).unwrap();
        assert!(rule.keywords.contains(&"compensation"));
        assert_eq!(rule.expected_evidence.len(), 5);
    }
}
