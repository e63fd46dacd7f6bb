//! Atlas Extractor
//!
//! Converts résumé text into a structured `ResumeRecord`.
//!
//! # Overview
//!
//! Text goes through a normalizer and the annotation engine, then a set of
//! independent field extractors fill in the record. Every field is
//! best-effort: a missing name or an empty skill set is a valid result.
//!
//! # Architecture
//!
//! ```text
//! Text → normalize → LanguageAnalyzer → AnnotatedDocument
//!      → basic phase (name, email, phone, skills, education)
//!      → advanced phase (experience, competencies, measurable results)
//!      → ResumeRecord
//! ```
//!
//! # Key Features
//!
//! - **Pattern Library**: versioned keyword lists and contact regexes, overridable from TOML
//! - **Extraction Modes**: sentence attribution (default) or legacy fragment keywords
//! - **Section Segmentation**: line-based split of the résumé into named sections
//!
//! # Example Usage
//!
//! ```
//! use atlas_extractor::ResumeExtractor;
//! use atlas_nlp::RuleAnalyzer;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let analyzer = RuleAnalyzer::with_default_vocabulary()?;
//! let extractor = ResumeExtractor::with_defaults(analyzer);
//!
//! let record = extractor.extract("Ahmed Benali\nahmed.benali@gmail.com\nTél : 06 12 34 56 78")?;
//!
//! assert_eq!(record.email.as_deref(), Some("ahmed.benali@gmail.com"));
//! assert_eq!(record.mobile_number.as_deref(), Some("0612345678"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod competencies;
mod config;
mod contact;
mod education;
mod error;
mod experience;
mod extractor;
mod normalize;
mod patterns;
mod results;
mod sections;
mod skills;
mod types;

#[cfg(test)]
mod tests;

pub use competencies::{extract_competencies, extract_competencies_from_fragments};
pub use config::{ExtractionMode, ExtractorConfig};
pub use contact::{extract_email, extract_name, extract_phone};
pub use education::extract_education;
pub use error::ExtractorError;
pub use experience::{extract_duration, extract_experience};
pub use extractor::ResumeExtractor;
pub use normalize::normalize;
pub use patterns::{
    is_acronym, CompetencyKeywords, KeywordMatcher, PatternLibrary, PatternSet, ResultKeywords,
    SectionTitles, WordPattern, PATTERN_VERSION,
};
pub use results::{extract_measurable_results, extract_results_from_fragments};
pub use sections::{segment, Sections};
pub use skills::{capitalize, extract_skills};
pub use types::{ExtractionMetadata, ExtractionReport};
