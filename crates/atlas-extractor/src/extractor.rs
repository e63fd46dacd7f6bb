//! Core ResumeExtractor implementation

use crate::competencies::{extract_competencies, extract_competencies_from_fragments};
use crate::config::{ExtractionMode, ExtractorConfig};
use crate::contact::{extract_email, extract_name, extract_phone};
use crate::education::extract_education;
use crate::error::ExtractorError;
use crate::experience::extract_experience;
use crate::normalize::normalize;
use crate::patterns::PatternLibrary;
use crate::results::{extract_measurable_results, extract_results_from_fragments};
use crate::sections::{segment, Sections};
use crate::skills::extract_skills;
use crate::types::{ExtractionMetadata, ExtractionReport};
use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::{AnnotatedDocument, Experience, ResumeRecord};
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{debug, info};

/// Turns résumé text into a `ResumeRecord`
///
/// Holds shared handles to the annotation engine and the pattern library;
/// one extractor serves any number of documents, from any number of threads
/// when the engine is `Send + Sync`.
pub struct ResumeExtractor<A>
where
    A: LanguageAnalyzer,
{
    analyzer: Arc<A>,
    patterns: Arc<PatternLibrary>,
    config: ExtractorConfig,
}

impl<A> Clone for ResumeExtractor<A>
where
    A: LanguageAnalyzer,
{
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
            patterns: Arc::clone(&self.patterns),
            config: self.config.clone(),
        }
    }
}

impl<A> ResumeExtractor<A>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    /// Create a new ResumeExtractor
    pub fn new(analyzer: A, patterns: Arc<PatternLibrary>, config: ExtractorConfig) -> Self {
        Self::from_shared(Arc::new(analyzer), patterns, config)
    }

    /// Create a ResumeExtractor over an already shared engine
    pub fn from_shared(analyzer: Arc<A>, patterns: Arc<PatternLibrary>, config: ExtractorConfig) -> Self {
        Self {
            analyzer,
            patterns,
            config,
        }
    }

    /// Create a ResumeExtractor with the built-in patterns and default configuration
    pub fn with_defaults(analyzer: A) -> Self {
        Self::new(analyzer, Arc::new(PatternLibrary::default()), ExtractorConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The pattern library in use
    pub fn patterns(&self) -> &PatternLibrary {
        &self.patterns
    }

    /// Extract a record from raw text
    pub fn extract(&self, raw_text: &str) -> Result<ResumeRecord, ExtractorError> {
        self.extract_detailed(raw_text, "text").map(|report| report.record)
    }

    /// Extract a record plus metadata from raw text
    pub fn extract_detailed(
        &self,
        raw_text: &str,
        source_id: &str,
    ) -> Result<ExtractionReport, ExtractorError> {
        let start_time = Instant::now();

        let length = raw_text.chars().count();
        if length > self.config.max_text_length {
            return Err(ExtractorError::TextTooLong(length, self.config.max_text_length));
        }

        info!(
            "Starting extraction for source '{}', text length {}, mode {}",
            source_id, length, self.config.mode
        );

        let text = self.prepare(raw_text);
        let doc = self
            .analyzer
            .annotate(&text)
            .map_err(|e| ExtractorError::Annotation(e.to_string()))?;

        debug!(
            "Annotated {} sentences, {} entities with {}",
            doc.sentence_count(),
            doc.entity_count(),
            self.analyzer.name()
        );

        let mut record = ResumeRecord::new();
        self.extract_basic_details(&text, &doc, &mut record);
        self.extract_advanced_details(&doc, &mut record);

        let metadata = ExtractionMetadata {
            source_id: source_id.to_string(),
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
            analyzer: self.analyzer.name().to_string(),
            mode: self.config.mode,
            sentence_count: doc.sentence_count(),
            entity_count: doc.entity_count(),
            processing_time_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            "Extraction complete for '{}': {}/8 fields populated, {} experience entries",
            source_id,
            record.populated_fields(),
            record.experience.len()
        );

        Ok(ExtractionReport { record, metadata })
    }

    /// Split raw text into résumé sections
    pub fn sections(&self, raw_text: &str) -> Sections {
        segment(
            &self.prepare(raw_text),
            &self.patterns,
            self.config.section_header_max_words,
        )
    }

    fn prepare(&self, raw_text: &str) -> String {
        if self.config.normalize {
            normalize(raw_text)
        } else {
            raw_text.to_string()
        }
    }

    /// Email and phone come from the prepared text, not the engine's copy of it
    fn extract_basic_details(&self, text: &str, doc: &AnnotatedDocument, record: &mut ResumeRecord) {
        record.name = extract_name(doc);
        record.email = extract_email(text);
        record.mobile_number = extract_phone(text);
        record.skills = extract_skills(doc, &self.patterns);
        record.education = extract_education(doc, &self.patterns);

        debug!(
            "Basic details: name={}, email={}, phone={}, {} skills, {} education items",
            record.name.is_some(),
            record.email.is_some(),
            record.mobile_number.is_some(),
            record.skills.len(),
            record.education.len()
        );
    }

    fn extract_advanced_details(&self, doc: &AnnotatedDocument, record: &mut ResumeRecord) {
        record.experience = extract_experience(doc, &self.patterns);

        match self.config.mode {
            ExtractionMode::Sentence => {
                record.competencies = extract_competencies(doc, &self.patterns);
                record.measurable_results = extract_measurable_results(doc, &self.patterns);
            }
            ExtractionMode::Fragment => {
                let fragments = self.experience_fragments(doc.text(), &record.experience);
                debug!("Fragment mode over {} experience fragments", fragments.len());
                record.competencies = extract_competencies_from_fragments(&fragments, &self.patterns);
                record.measurable_results = extract_results_from_fragments(&fragments, &self.patterns);
            }
        }

        debug!(
            "Advanced details: {} experience entries, {} competency hits, {} result hits",
            record.experience.len(),
            record.competencies.values().map(Vec::len).sum::<usize>(),
            record.measurable_results.values().map(Vec::len).sum::<usize>()
        );
    }

    /// Lines of experience sections, or the experience descriptions when the
    /// text has no such section
    fn experience_fragments(&self, text: &str, experience: &[Experience]) -> Vec<String> {
        let sections = segment(text, &self.patterns, self.config.section_header_max_words);
        let fragments: Vec<String> = sections
            .iter()
            .filter(|(key, _)| self.patterns.is_experience_section(key))
            .flat_map(|(_, lines)| lines.iter().cloned())
            .collect();

        if fragments.is_empty() {
            experience.iter().map(|e| e.description.clone()).collect()
        } else {
            fragments
        }
    }
}
