//! Experience extraction

use crate::patterns::{PatternLibrary, DURATION_RE};
use atlas_domain::{AnnotatedDocument, EntityLabel, Experience};

/// One entry per sentence containing an experience term, in sentence order
pub fn extract_experience(doc: &AnnotatedDocument, patterns: &PatternLibrary) -> Vec<Experience> {
    doc.sentences()
        .iter()
        .filter(|sentence| patterns.experience().matches(sentence))
        .map(|sentence| Experience {
            description: sentence.text.clone(),
            organization: sentence
                .entities_with(EntityLabel::Org)
                .next()
                .map(|e| e.text.clone()),
            duration: extract_duration(&sentence.text),
        })
        .collect()
}

/// First duration ("3 ans", "6 mois") in the text
pub fn extract_duration(text: &str) -> Option<String> {
    DURATION_RE.find(text).map(|m| m.as_str().to_string())
}
