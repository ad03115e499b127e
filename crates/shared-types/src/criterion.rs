//! Evidentiary criterion identifiers for EB-1A petitions
//!
//! The ten statutory categories of 8 C.F.R. § 204.5(h)(3). Findings are
//! always keyed by one of these; the serialized form is the identifier
//! string ("Criterion 1" .. "Criterion 10") used throughout reports.

use serde::{Deserialize, Serialize};

/// One of the ten EB-1A evidentiary criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Criterion {
    #[serde(rename = "Criterion 1")]
    Awards,
    #[serde(rename = "Criterion 2")]
    Membership,
    #[serde(rename = "Criterion 3")]
    PublishedMaterial,
    #[serde(rename = "Criterion 4")]
    Judging,
    #[serde(rename = "Criterion 5")]
    OriginalContributions,
    #[serde(rename = "Criterion 6")]
    ScholarlyArticles,
    #[serde(rename = "Criterion 7")]
    Exhibitions,
    #[serde(rename = "Criterion 8")]
    LeadingRole,
    #[serde(rename = "Criterion 9")]
    HighSalary,
    #[serde(rename = "Criterion 10")]
    CommercialSuccess,
}

impl Criterion {
    /// The identifier string used in reports and findings
    pub fn id(&self) -> &'static str {
        match self {
            Criterion::Awards => "Criterion 1",
            Criterion::Membership => "Criterion 2",
            Criterion::PublishedMaterial => "Criterion 3",
            Criterion::Judging => "Criterion 4",
            Criterion::OriginalContributions => "Criterion 5",
            Criterion::ScholarlyArticles => "Criterion 6",
            Criterion::Exhibitions => "Criterion 7",
            Criterion::LeadingRole => "Criterion 8",
            Criterion::HighSalary => "Criterion 9",
            Criterion::CommercialSuccess => "Criterion 10",
        }
    }

    /// Human-readable title of the evidentiary category
    pub fn title(&self) -> &'static str {
        match self {
            Criterion::Awards => "Prizes or Awards for Excellence",
            Criterion::Membership => "Membership in Reputable Associations",
            Criterion::PublishedMaterial => "Published Material About the Person",
            Criterion::Judging => "Judging the Work of Others",
            Criterion::OriginalContributions => "Original Contributions of Major Significance",
            Criterion::ScholarlyArticles => "Authorship of Scholarly Articles",
            Criterion::Exhibitions => "Artistic Exhibitions or Showcases",
            Criterion::LeadingRole => "Leading or Critical Role in Distinguished Organizations",
            Criterion::HighSalary => "High Salary or Remuneration",
            Criterion::CommercialSuccess => "Commercial Success in Performing Arts",
        }
    }

    /// Statutory ordinal, 1 through 10
    pub fn number(&self) -> u8 {
        match self {
            Criterion::Awards => 1,
            Criterion::Membership => 2,
            Criterion::PublishedMaterial => 3,
            Criterion::Judging => 4,
            Criterion::OriginalContributions => 5,
            Criterion::ScholarlyArticles => 6,
            Criterion::Exhibitions => 7,
            Criterion::LeadingRole => 8,
            Criterion::HighSalary => 9,
            Criterion::CommercialSuccess => 10,
        }
    }

    /// Parse from an identifier ("Criterion 9") or bare ordinal ("9")
    pub fn parse_id(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        let ordinal = trimmed
            .strip_prefix("Criterion ")
            .or_else(|| trimmed.strip_prefix("criterion "))
            .unwrap_or(trimmed);
        match ordinal.parse::<u8>().ok()? {
            1 => Some(Criterion::Awards),
            2 => Some(Criterion::Membership),
            3 => Some(Criterion::PublishedMaterial),
            4 => Some(Criterion::Judging),
            5 => Some(Criterion::OriginalContributions),
            6 => Some(Criterion::ScholarlyArticles),
            7 => Some(Criterion::Exhibitions),
            8 => Some(Criterion::LeadingRole),
            9 => Some(Criterion::HighSalary),
            10 => Some(Criterion::CommercialSuccess),
            _ => None,
        }
    }

    /// All ten criteria in statutory order
    pub fn all() -> [Criterion; 10] {
        [
            Criterion::Awards,
            Criterion::Membership,
            Criterion::PublishedMaterial,
            Criterion::Judging,
            Criterion::OriginalContributions,
            Criterion::ScholarlyArticles,
            Criterion::Exhibitions,
            Criterion::LeadingRole,
            Criterion::HighSalary,
            Criterion::CommercialSuccess,
        ]
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
