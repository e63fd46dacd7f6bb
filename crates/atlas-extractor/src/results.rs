//! Measurable-result extraction

use crate::patterns::PatternLibrary;
use atlas_domain::{AnnotatedDocument, ResultCategory};
use std::collections::BTreeMap;

/// Quantified sentences (sentence mode)
///
/// A sentence qualifies when it has a numeric token and a metric marker
/// token (`%`, `dh`, `MAD`, ...). All of them go under `achievements`.
pub fn extract_measurable_results(
    doc: &AnnotatedDocument,
    patterns: &PatternLibrary,
) -> BTreeMap<ResultCategory, Vec<String>> {
    let achievements = doc
        .sentences()
        .iter()
        .filter(|s| {
            s.tokens.iter().any(|t| t.like_num)
                && s.tokens.iter().any(|t| patterns.is_metric_marker(&t.lower))
        })
        .map(|s| s.text.clone())
        .collect();

    BTreeMap::from([(ResultCategory::Achievements, achievements)])
}

/// Metric and action keywords in the first half of each fragment (fragment mode)
pub fn extract_results_from_fragments(
    fragments: &[String],
    patterns: &PatternLibrary,
) -> BTreeMap<ResultCategory, Vec<String>> {
    let joined = fragments
        .iter()
        .map(|f| first_half(f))
        .collect::<Vec<_>>()
        .join(" ");

    patterns
        .fragment_results()
        .iter()
        .map(|(category, keywords)| {
            let hits = keywords
                .iter()
                .filter(|k| k.is_found(&joined))
                .map(|k| k.keyword().to_string())
                .collect();
            (*category, hits)
        })
        .collect()
}

/// The first `len / 2 - 1` characters
fn first_half(fragment: &str) -> &str {
    let keep = (fragment.chars().count() / 2).saturating_sub(1);
    match fragment.char_indices().nth(keep) {
        Some((end, _)) => &fragment[..end],
        None => fragment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_domain::{Sentence, Token};
    use atlas_nlp::tokenizer::tokenize;

    fn doc(lines: &[&str]) -> AnnotatedDocument {
        let mut sentences = Vec::new();
        let mut offset = 0;
        for line in lines {
            sentences.push(Sentence::new(offset, *line, tokenize(line)));
            offset += line.len() + 1;
        }
        AnnotatedDocument::new(lines.join("\n"), sentences)
    }

    #[test]
    fn test_percentage_is_a_result() {
        let results = extract_measurable_results(
            &doc(&["Augmenté les ventes de 20%", "Géré 3 projets"]),
            &PatternLibrary::default(),
        );
        assert_eq!(results[&ResultCategory::Achievements], vec!["Augmenté les ventes de 20%"]);
    }

    #[test]
    fn test_currency_markers_case_insensitive() {
        let results = extract_measurable_results(
            &doc(&["Budget de 2 millions MAD", "Économie de 500 Dhs par mois"]),
            &PatternLibrary::default(),
        );
        assert_eq!(results[&ResultCategory::Achievements].len(), 2);
    }

    #[test]
    fn test_marker_without_number() {
        let results = extract_measurable_results(&doc(&["Ventes en % du total"]), &PatternLibrary::default());
        assert!(results[&ResultCategory::Achievements].is_empty());
    }

    #[test]
    fn test_sentence_mode_key_present_when_empty() {
        let results = extract_measurable_results(&AnnotatedDocument::empty(""), &PatternLibrary::default());
        assert_eq!(results.keys().collect::<Vec<_>>(), vec![&ResultCategory::Achievements]);
    }

    #[test]
    fn test_first_half() {
        assert_eq!(first_half("abcdefghij"), "abcd");
        assert_eq!(first_half("éé"), "");
        assert_eq!(first_half("a"), "");
        assert_eq!(first_half(""), "");
    }

    #[test]
    fn test_fragment_results_use_first_half() {
        let fragments = vec![
            "Développé une application mobile pour la gestion des stocks, qui a réduit les coûts".to_string(),
        ];
        let results = extract_results_from_fragments(&fragments, &PatternLibrary::default());
        assert_eq!(results[&ResultCategory::ActionWords], vec!["développé"]);
        assert!(results[&ResultCategory::Metrics].is_empty());
        assert!(!results.contains_key(&ResultCategory::Achievements));
    }

    #[test]
    fn test_fragment_metric_symbols() {
        let fragments = vec!["Hausse de 30% du chiffre d'affaires en un an, ce qui est notable pour nous".to_string()];
        let results = extract_results_from_fragments(&fragments, &PatternLibrary::default());
        assert_eq!(results[&ResultCategory::Metrics], vec!["%", "chiffre d'affaires"]);
    }

    #[test]
    fn test_tokens_flags_used() {
        let sentence = Sentence::new(0, "20 %", vec![Token::new("20", false, true), Token::new("%", false, false)]);
        let doc = AnnotatedDocument::new("20 %", vec![sentence]);
        assert_eq!(extract_measurable_results(&doc, &PatternLibrary::default())[&ResultCategory::Achievements].len(), 1);
    }
}
