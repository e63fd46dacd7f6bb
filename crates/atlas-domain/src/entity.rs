//! Entity module - closed vocabulary of entity labels

use serde::{Deserialize, Serialize};

/// Label attached to an entity span by the annotation stage
///
/// The vocabulary is closed: adding a label is a type-level decision and
/// every consumer matches on it exhaustively.
/// - Person: candidate or referee names
/// - Org: companies, schools, universities
/// - Gpe: cities, regions, countries
/// - Degree: diplomas and academic titles
/// - PhoneNumber: telephone numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    /// Person name
    Person,

    /// Organization (employer, school, university)
    Org,

    /// Geo-political entity (city, country)
    Gpe,

    /// Non-political location
    Loc,

    /// Academic degree or diploma
    Degree,

    /// Telephone number
    PhoneNumber,

    /// Anything else the engine labels
    Misc,
}

impl EntityLabel {
    /// Every label, in declaration order
    pub const ALL: [EntityLabel; 7] = [
        EntityLabel::Person,
        EntityLabel::Org,
        EntityLabel::Gpe,
        EntityLabel::Loc,
        EntityLabel::Degree,
        EntityLabel::PhoneNumber,
        EntityLabel::Misc,
    ];

    /// Get the label as the engine-facing string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Degree => "DEGREE",
            EntityLabel::PhoneNumber => "PHONE_NUMBER",
            EntityLabel::Misc => "MISC",
        }
    }

    /// Parse a label from an engine string
    ///
    /// Accepts the common aliases emitted by general-purpose models
    /// (`PER` for persons, `LOCATION` for locations).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PERSON" | "PER" => Some(EntityLabel::Person),
            "ORG" | "ORGANIZATION" => Some(EntityLabel::Org),
            "GPE" => Some(EntityLabel::Gpe),
            "LOC" | "LOCATION" => Some(EntityLabel::Loc),
            "DEGREE" => Some(EntityLabel::Degree),
            "PHONE_NUMBER" | "PHONE" => Some(EntityLabel::PhoneNumber),
            "MISC" => Some(EntityLabel::Misc),
            _ => None,
        }
    }

    /// Whether entities with this label count as education evidence
    pub fn is_education(&self) -> bool {
        match self {
            EntityLabel::Degree | EntityLabel::Org => true,
            EntityLabel::Person
            | EntityLabel::Gpe
            | EntityLabel::Loc
            | EntityLabel::PhoneNumber
            | EntityLabel::Misc => false,
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Unknown entity label: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(EntityLabel::parse("PER"), Some(EntityLabel::Person));
        assert_eq!(EntityLabel::parse("org"), Some(EntityLabel::Org));
        assert_eq!(EntityLabel::parse("LOCATION"), Some(EntityLabel::Loc));
        assert_eq!(EntityLabel::parse("WORK_OF_ART"), None);
    }

    #[test]
    fn test_education_labels() {
        let education: Vec<_> = EntityLabel::ALL
            .iter()
            .filter(|label| label.is_education())
            .collect();
        assert_eq!(education, vec![&EntityLabel::Org, &EntityLabel::Degree]);
    }

    #[test]
    fn test_serde_uses_engine_names() {
        let json = serde_json::to_string(&EntityLabel::PhoneNumber).unwrap();
        assert_eq!(json, "\"PHONE_NUMBER\"");
    }
}
