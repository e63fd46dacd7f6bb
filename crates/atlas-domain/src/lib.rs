//! Atlas Domain Layer
//!
//! This crate contains the data model shared by every Atlas crate: the
//! annotated document produced by the language-analysis stage, the résumé
//! record produced by extraction, and the trait boundary to annotation
//! engines.
//!
//! ## Key Concepts
//!
//! - **AnnotatedDocument**: sentences, tokens and labelled entity spans
//! - **EntityLabel**: closed vocabulary of entity categories
//! - **ResumeRecord**: the best-effort structured output of one parse
//! - **Categories**: fixed competency and measurable-result buckets
//!
//! ## Architecture
//!
//! - Only `serde` as an external dependency (records are serialized by callers)
//! - No extraction logic
//! - Trait definitions for external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod entity;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use document::{AnnotatedDocument, EntitySpan, Sentence, Token};
pub use entity::EntityLabel;
pub use record::{CompetencyCategory, Experience, ResultCategory, ResumeRecord};
pub use traits::LanguageAnalyzer;
