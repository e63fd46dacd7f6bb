//! Competency extraction
//!
//! Every category key is present in the result, possibly with no values.

use crate::patterns::PatternLibrary;
use atlas_domain::{AnnotatedDocument, CompetencyCategory};
use std::collections::BTreeMap;

/// Sentences attributed to each category (sentence mode)
///
/// A sentence can belong to several categories.
pub fn extract_competencies(
    doc: &AnnotatedDocument,
    patterns: &PatternLibrary,
) -> BTreeMap<CompetencyCategory, Vec<String>> {
    let mut competencies = empty_categories();

    for sentence in doc.sentences() {
        for (category, matcher) in patterns.competencies() {
            if matcher.matches(sentence) {
                competencies
                    .entry(*category)
                    .or_default()
                    .push(sentence.text.clone());
            }
        }
    }

    competencies
}

/// Keywords found in the joined experience fragments (fragment mode)
pub fn extract_competencies_from_fragments(
    fragments: &[String],
    patterns: &PatternLibrary,
) -> BTreeMap<CompetencyCategory, Vec<String>> {
    let joined = fragments.join(" ");
    let mut competencies = empty_categories();

    for (category, keywords) in patterns.fragment_competencies() {
        let hits = keywords
            .iter()
            .filter(|k| k.is_found(&joined))
            .map(|k| k.keyword().to_string());
        competencies.entry(*category).or_default().extend(hits);
    }

    competencies
}

fn empty_categories() -> BTreeMap<CompetencyCategory, Vec<String>> {
    CompetencyCategory::ALL
        .iter()
        .map(|&c| (c, Vec::new()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::{Sentence, Token};

    fn doc(text: &str) -> AnnotatedDocument {
        let tokens = text.split_whitespace().map(|w| Token::new(w, false, false)).collect();
        AnnotatedDocument::new(text, vec![Sentence::new(0, text, tokens)])
    }

    #[test]
    fn test_single_category() {
        let competencies = extract_competencies(&doc("Capable de diriger une équipe"), &PatternLibrary::default());
        assert_eq!(competencies[&CompetencyCategory::Leadership], vec!["Capable de diriger une équipe"]);
        assert!(competencies[&CompetencyCategory::Communication].is_empty());
    }

    #[test]
    fn test_multi_category_attribution() {
        let text = "Diriger une équipe et présenter les résultats";
        let competencies = extract_competencies(&doc(text), &PatternLibrary::default());
        assert_eq!(competencies[&CompetencyCategory::Leadership], vec![text]);
        assert_eq!(competencies[&CompetencyCategory::Communication], vec![text]);
    }

    #[test]
    fn test_all_keys_present() {
        let competencies = extract_competencies(&AnnotatedDocument::empty(""), &PatternLibrary::default());
        assert_eq!(competencies.len(), CompetencyCategory::ALL.len());
        assert!(competencies.values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_languages() {
        let competencies = extract_competencies(&doc("Langues : Arabe, Français, Anglais"), &PatternLibrary::default());
        assert_eq!(competencies[&CompetencyCategory::Languages].len(), 1);
    }

    #[test]
    fn test_fragment_keywords() {
        let fragments = vec![
            "Gérer une équipe de 5 personnes".to_string(),
            "Rédiger les spécifications et coordonner les livraisons".to_string(),
        ];
        let competencies = extract_competencies_from_fragments(&fragments, &PatternLibrary::default());
        assert_eq!(competencies[&CompetencyCategory::Leadership], vec!["gérer"]);
        assert_eq!(competencies[&CompetencyCategory::Communication], vec!["rédiger"]);
        assert_eq!(competencies[&CompetencyCategory::Teamwork], vec!["équipe", "coordonner"]);
        assert!(competencies[&CompetencyCategory::Languages].is_empty());
    }

    #[test]
    fn test_fragment_keywords_need_whole_words() {
        let fragments = vec!["Équipements industriels".to_string()];
        let competencies = extract_competencies_from_fragments(&fragments, &PatternLibrary::default());
        assert!(competencies[&CompetencyCategory::Teamwork].is_empty());
    }
}
