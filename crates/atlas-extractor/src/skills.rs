//! Skill extraction by token-sequence matching

use crate::patterns::PatternLibrary;
use atlas_domain::AnnotatedDocument;
use std::collections::BTreeSet;

/// Skills mentioned anywhere in the document
///
/// Each skill phrase is matched as a sequence of lowercase tokens, so
/// "java" never matches inside "javascript". Results are capitalised,
/// which also merges case variants.
pub fn extract_skills(doc: &AnnotatedDocument, patterns: &PatternLibrary) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();

    for sentence in doc.sentences() {
        let lowers: Vec<&str> = sentence.tokens.iter().map(|t| t.lower.as_str()).collect();

        for phrase in patterns.skills() {
            if phrase.len() > lowers.len() {
                continue;
            }
            for (i, window) in lowers.windows(phrase.len()).enumerate() {
                if window.iter().zip(phrase).all(|(token, word)| *token == word.as_str()) {
                    let surface: Vec<&str> = sentence.tokens[i..i + phrase.len()]
                        .iter()
                        .map(|t| t.text.as_str())
                        .collect();
                    skills.insert(capitalize(&surface.join(" ")));
                }
            }
        }
    }

    skills
}

/// First character upper-case, the rest lower-case
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}
