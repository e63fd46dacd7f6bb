//! Scenario tests for the ResumeExtractor

#[cfg(test)]
mod tests {
    use crate::{
        ExtractionMode, ExtractorConfig, ExtractorError, PatternLibrary, ResumeExtractor,
    };
    use atlas_domain::{
        AnnotatedDocument, CompetencyCategory, EntityLabel, ResultCategory, Sentence,
    };
    use atlas_nlp::tokenizer::tokenize;
    use atlas_nlp::{MockAnalyzer, RuleAnalyzer};
    use proptest::prelude::*;
    use std::sync::Arc;

    const RESUME: &str = "\
Youssef El Amrani
youssef.elamrani@gmail.com | +212 6 61 22 33 44
Rabat, Maroc

Formation
Diplôme d'ingénieur en informatique, ENSIAS, 2019
Baccalauréat Sciences Mathématiques

Expérience professionnelle
Expérience de 3 ans chez Maroc Telecom comme développeur Python
Stage PFE chez OCP Group : j'ai géré une équipe et réduit les coûts de 15%

Compétences
Python, Java, Machine Learning

Langues
Arabe, Français, Anglais";

    fn rule_extractor(mode: ExtractionMode) -> ResumeExtractor<RuleAnalyzer> {
        ResumeExtractor::new(
            RuleAnalyzer::with_default_vocabulary().unwrap(),
            Arc::new(PatternLibrary::default()),
            ExtractorConfig::default().with_mode(mode),
        )
    }

    /// Single-sentence document with real tokens and the given entities
    fn annotated(text: &str, entities: &[(&str, EntityLabel)]) -> AnnotatedDocument {
        let sentence = entities
            .iter()
            .fold(Sentence::new(0, text, tokenize(text)), |s, (surface, label)| {
                s.with_entity(surface, *label)
            });
        AnnotatedDocument::new(text, vec![sentence])
    }

    #[test]
    fn test_full_resume_sentence_mode() {
        let record = rule_extractor(ExtractionMode::Sentence).extract(RESUME).unwrap();

        assert_eq!(record.name.as_deref(), Some("Youssef El Amrani"));
        assert_eq!(record.email.as_deref(), Some("youssef.elamrani@gmail.com"));
        assert_eq!(record.mobile_number.as_deref(), Some("+212661223344"));
        assert!(record.skills.contains("Python"));
        assert!(record.skills.contains("Java"));
        assert!(record.skills.contains("Machine learning"));
        assert!(record.education.iter().any(|e| e == "ENSIAS"));
        assert!(record.education.iter().any(|e| e.starts_with("Baccalauréat")));

        let telecom = record
            .experience
            .iter()
            .find(|e| e.description.contains("Maroc Telecom"))
            .unwrap();
        assert_eq!(telecom.organization.as_deref(), Some("Maroc Telecom"));
        assert_eq!(telecom.duration.as_deref(), Some("3 ans"));

        assert_eq!(record.competencies.len(), CompetencyCategory::ALL.len());
        assert_eq!(record.competencies[&CompetencyCategory::Languages], vec!["Arabe, Français, Anglais"]);
        assert_eq!(record.measurable_results[&ResultCategory::Achievements].len(), 1);
    }

    #[test]
    fn test_full_resume_fragment_mode() {
        let record = rule_extractor(ExtractionMode::Fragment).extract(RESUME).unwrap();

        assert_eq!(record.competencies[&CompetencyCategory::Teamwork], vec!["équipe"]);
        assert!(record.competencies[&CompetencyCategory::ProblemSolving].is_empty());
        assert!(record.measurable_results.contains_key(&ResultCategory::Metrics));
        assert!(record.measurable_results.contains_key(&ResultCategory::ActionWords));
        assert!(!record.measurable_results.contains_key(&ResultCategory::Achievements));
    }

    #[test]
    fn test_experience_from_annotated_sentence() {
        let text = "J'ai travaillé chez Acme Corp pendant 3 ans sur un projet PFE";
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_document(text, annotated(text, &[("Acme Corp", EntityLabel::Org)]));

        let record = ResumeExtractor::with_defaults(analyzer).extract(text).unwrap();
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.experience[0].organization.as_deref(), Some("Acme Corp"));
        assert_eq!(record.experience[0].duration.as_deref(), Some("3 ans"));
    }

    #[test]
    fn test_measurable_result_needs_marker() {
        let text = "Augmenté les ventes de 20%";
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_document(text, annotated(text, &[]));
        let record = ResumeExtractor::with_defaults(analyzer).extract(text).unwrap();
        assert_eq!(record.measurable_results[&ResultCategory::Achievements], vec![text]);

        let text = "Géré 4 projets";
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_document(text, annotated(text, &[]));
        let record = ResumeExtractor::with_defaults(analyzer).extract(text).unwrap();
        assert!(record.measurable_results[&ResultCategory::Achievements].is_empty());
    }

    #[test]
    fn test_empty_annotation_keeps_pattern_fields() {
        let extractor = ResumeExtractor::with_defaults(MockAnalyzer::default());
        let record = extractor
            .extract("Contact: jane.doe@example.com pour plus d'infos\n0522-33-44-55")
            .unwrap();

        assert_eq!(record.name, None);
        assert_eq!(record.email.as_deref(), Some("jane.doe@example.com"));
        assert!(record.mobile_number.is_some());
        assert!(record.skills.is_empty());
        assert!(record.experience.is_empty());
        assert_eq!(record.competencies.len(), CompetencyCategory::ALL.len());
    }

    #[test]
    fn test_contact_fields_come_from_input_text() {
        let text = "Nadia Berrada\nnadia.berrada@example.ma\n06 61 22 33 44";
        let analyzer = MockAnalyzer::new(annotated("Autre texte sans contact", &[]));
        let record = ResumeExtractor::with_defaults(analyzer).extract(text).unwrap();

        assert_eq!(record.email.as_deref(), Some("nadia.berrada@example.ma"));
        assert_eq!(record.mobile_number.as_deref(), Some("0661223344"));
    }

    #[test]
    fn test_no_email_is_absent() {
        let extractor = ResumeExtractor::with_defaults(MockAnalyzer::default());
        let record = extractor.extract("Aucune adresse électronique").unwrap();
        assert_eq!(record.email, None);
    }

    #[test]
    fn test_empty_text() {
        let record = rule_extractor(ExtractionMode::Sentence).extract("").unwrap();
        assert_eq!(record.populated_fields(), 0);
    }

    #[test]
    fn test_annotation_error_aborts() {
        let mut analyzer = MockAnalyzer::default();
        analyzer.add_error("texte");
        let extractor = ResumeExtractor::with_defaults(analyzer);

        let result = extractor.extract("texte");
        assert!(matches!(result, Err(ExtractorError::Annotation(_))));
    }

    #[test]
    fn test_text_too_long() {
        let config = ExtractorConfig {
            max_text_length: 10,
            ..ExtractorConfig::default()
        };
        let analyzer = MockAnalyzer::default();
        let extractor = ResumeExtractor::new(analyzer.clone(), Arc::new(PatternLibrary::default()), config);

        let result = extractor.extract("Ceci est bien trop long");
        assert!(matches!(result, Err(ExtractorError::TextTooLong(23, 10))));
        assert_eq!(analyzer.call_count(), 0);
    }

    #[test]
    fn test_normalization_toggle() {
        let analyzer = MockAnalyzer::default();
        let config = ExtractorConfig {
            normalize: false,
            ..ExtractorConfig::default()
        };
        let extractor = ResumeExtractor::new(analyzer, Arc::new(PatternLibrary::default()), config);
        let report = extractor.extract_detailed("  a\r\n", "raw").unwrap();
        assert_eq!(report.metadata.source_id, "raw");

        let sections = extractor.sections("Projets\r\nAtlas");
        assert_eq!(sections.get("projets").unwrap(), ["Atlas"]);
    }

    #[test]
    fn test_detailed_metadata() {
        let extractor = rule_extractor(ExtractionMode::Fragment);
        let report = extractor.extract_detailed(RESUME, "cv_youssef.pdf").unwrap();

        assert_eq!(report.metadata.source_id, "cv_youssef.pdf");
        assert_eq!(report.metadata.analyzer, "rules-fr");
        assert_eq!(report.metadata.mode, ExtractionMode::Fragment);
        assert!(report.metadata.sentence_count > 10);
        assert!(report.metadata.entity_count > 0);
        assert!(report.metadata.timestamp > 0);
    }

    #[test]
    fn test_extractor_is_shareable_across_threads() {
        let extractor = rule_extractor(ExtractionMode::Sentence);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let extractor = extractor.clone();
                std::thread::spawn(move || extractor.extract(RESUME).unwrap())
            })
            .collect();

        let records: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(records.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_sections_of_resume() {
        let sections = rule_extractor(ExtractionMode::Sentence).sections(RESUME);
        let keys: Vec<_> = sections.keys().collect();
        assert_eq!(keys, vec!["formation", "expérience professionnelle", "compétences", "langues"]);
    }

    proptest! {
        #[test]
        fn education_never_contains_case_duplicates(lines in proptest::collection::vec(
            prop_oneof![
                Just("Licence en économie"),
                Just("LICENCE EN ÉCONOMIE"),
                Just("Master Finance"),
                Just("master finance"),
                Just("Bac Sciences"),
            ],
            0..8,
        )) {
            let text = lines.join("\n");
            let record = rule_extractor(ExtractionMode::Sentence).extract(&text).unwrap();
            let lowered: std::collections::HashSet<String> =
                record.education.iter().map(|e| e.to_lowercase()).collect();
            prop_assert_eq!(lowered.len(), record.education.len());
        }
    }
}
