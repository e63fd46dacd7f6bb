//! Record module - the structured output of one parse

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Soft-skill classification assigned to matching sentences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetencyCategory {
    /// Leading and managing people
    Leadership,
    /// Presenting, negotiating, writing
    Communication,
    /// Working with others
    Teamwork,
    /// Spoken languages
    Languages,
    /// Analysis and problem solving
    ProblemSolving,
}

impl CompetencyCategory {
    /// Every category
    pub const ALL: [CompetencyCategory; 5] = [
        CompetencyCategory::Leadership,
        CompetencyCategory::Communication,
        CompetencyCategory::Teamwork,
        CompetencyCategory::Languages,
        CompetencyCategory::ProblemSolving,
    ];

    /// Category key as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            CompetencyCategory::Leadership => "leadership",
            CompetencyCategory::Communication => "communication",
            CompetencyCategory::Teamwork => "teamwork",
            CompetencyCategory::Languages => "languages",
            CompetencyCategory::ProblemSolving => "problem_solving",
        }
    }
}

/// Bucket for measurable results
///
/// `Achievements` is filled by sentence-level extraction, `Metrics` and
/// `ActionWords` by fragment-level keyword extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCategory {
    /// Whole sentences stating a quantified result
    Achievements,
    /// Metric keywords (percentages, currency, growth words)
    Metrics,
    /// Action verbs introducing a result
    ActionWords,
}

impl ResultCategory {
    /// Category key as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCategory::Achievements => "achievements",
            ResultCategory::Metrics => "metrics",
            ResultCategory::ActionWords => "action_words",
        }
    }
}

/// One experience entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Full sentence text
    pub description: String,

    /// First organization mentioned in the sentence
    pub organization: Option<String>,

    /// First duration mentioned in the sentence ("3 ans", "6 mois")
    pub duration: Option<String>,
}

/// Structured information extracted from one résumé
///
/// Every field defaults to empty or absent: a partial record is a valid
/// result, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    /// Candidate's full name
    pub name: Option<String>,

    /// First email address found
    pub email: Option<String>,

    /// Phone number with separators removed
    pub mobile_number: Option<String>,

    /// Capitalized, deduplicated skills
    pub skills: BTreeSet<String>,

    /// Degrees, institutions and education sentences, first occurrence wins
    pub education: Vec<String>,

    /// Experience entries in source order
    pub experience: Vec<Experience>,

    /// Sentences or keywords per competency category
    pub competencies: BTreeMap<CompetencyCategory, Vec<String>>,

    /// Sentences or keywords per result category
    pub measurable_results: BTreeMap<ResultCategory, Vec<String>>,
}

impl ResumeRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated fields, out of eight
    pub fn populated_fields(&self) -> usize {
        [
            self.name.is_some(),
            self.email.is_some(),
            self.mobile_number.is_some(),
            !self.skills.is_empty(),
            !self.education.is_empty(),
            !self.experience.is_empty(),
            self.competencies.values().any(|v| !v.is_empty()),
            self.measurable_results.values().any(|v| !v.is_empty()),
        ]
        .iter()
        .filter(|populated| **populated)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let record = ResumeRecord::new();
        assert_eq!(record.populated_fields(), 0);
        assert!(record.name.is_none());
        assert!(record.skills.is_empty());
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = ResumeRecord::new();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json["name"].is_null());
        assert!(json["email"].is_null());
        assert!(json["mobile_number"].is_null());
        assert_eq!(json["skills"], serde_json::json!([]));
    }

    #[test]
    fn test_category_keys_are_snake_case() {
        let mut record = ResumeRecord::new();
        record
            .competencies
            .insert(CompetencyCategory::ProblemSolving, vec!["analyser".to_string()]);
        record
            .measurable_results
            .insert(ResultCategory::ActionWords, Vec::new());

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["competencies"]["problem_solving"][0], "analyser");
        assert!(json["measurable_results"]["action_words"].is_array());
        assert_eq!(record.populated_fields(), 1);
    }

    #[test]
    fn test_category_names() {
        let names: Vec<_> = CompetencyCategory::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["leadership", "communication", "teamwork", "languages", "problem_solving"]
        );
        assert_eq!(ResultCategory::Achievements.as_str(), "achievements");
    }
}
