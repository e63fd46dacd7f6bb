//! Education extraction

use crate::patterns::PatternLibrary;
use atlas_domain::AnnotatedDocument;
use std::collections::HashSet;

/// Degrees, schools and education sentences
///
/// DEGREE and ORG entity texts come first, then every sentence containing an
/// education keyword. Duplicates are dropped case-insensitively; the first
/// occurrence is kept.
pub fn extract_education(doc: &AnnotatedDocument, patterns: &PatternLibrary) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut education = Vec::new();

    let entities = doc
        .entities()
        .filter(|e| e.label.is_education())
        .map(|e| e.text.as_str());
    let sentences = doc
        .sentences()
        .iter()
        .filter(|s| patterns.education().matches(s))
        .map(|s| s.text.as_str());

    for item in entities.chain(sentences) {
        let item = item.trim();
        if !item.is_empty() && seen.insert(item.to_lowercase()) {
            education.push(item.to_string());
        }
    }

    education
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::{EntityLabel, Sentence, Token};

    fn sentence(start: usize, text: &str) -> Sentence {
        let tokens = text.split_whitespace().map(|w| Token::new(w, false, false)).collect();
        Sentence::new(start, text, tokens)
    }

    #[test]
    fn test_entities_then_sentences() {
        let first = "Licence en Informatique, Université Mohammed V";
        let second = "Ce poste est basé à Rabat";
        let doc = AnnotatedDocument::new(
            format!("{}\n{}", first, second),
            vec![
                sentence(0, first)
                    .with_entity("Licence", EntityLabel::Degree)
                    .with_entity("Université Mohammed V", EntityLabel::Org),
                sentence(first.len() + 1, second).with_entity("Rabat", EntityLabel::Gpe),
            ],
        );

        let education = extract_education(&doc, &PatternLibrary::default());
        assert_eq!(education, vec!["Licence", "Université Mohammed V", first]);
    }

    #[test]
    fn test_case_insensitive_dedup() {
        let doc = AnnotatedDocument::new(
            "Master\nMASTER",
            vec![
                sentence(0, "Master").with_entity("Master", EntityLabel::Degree),
                sentence(7, "MASTER").with_entity("MASTER", EntityLabel::Degree),
            ],
        );
        assert_eq!(extract_education(&doc, &PatternLibrary::default()), vec!["Master"]);
    }

    #[test]
    fn test_acronym_keywords_need_whole_token() {
        let doc = AnnotatedDocument::new(
            "DUT Génie Informatique, EST Fès",
            vec![sentence(0, "DUT Génie Informatique, EST Fès")],
        );
        assert_eq!(extract_education(&doc, &PatternLibrary::default()).len(), 1);

        let doc = AnnotatedDocument::new("Il est à Rabat", vec![sentence(0, "Il est à Rabat")]);
        assert!(extract_education(&doc, &PatternLibrary::default()).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = AnnotatedDocument::empty("");
        assert!(extract_education(&doc, &PatternLibrary::default()).is_empty());
    }
}
