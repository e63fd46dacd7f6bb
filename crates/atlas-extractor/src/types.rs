//! Extraction report types

use crate::config::ExtractionMode;
use atlas_domain::ResumeRecord;
use serde::Serialize;

/// Metadata about an extraction operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionMetadata {
    /// Source identifier (file name or caller-provided)
    pub source_id: String,

    /// Timestamp when extraction occurred (Unix seconds)
    pub timestamp: u64,

    /// Name of the annotation engine used
    pub analyzer: String,

    /// Competency and measurable-result strategy
    pub mode: ExtractionMode,

    /// Number of annotated sentences
    pub sentence_count: usize,

    /// Number of entity spans
    pub entity_count: usize,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,
}

/// Record plus metadata for one document
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// The extracted record
    pub record: ResumeRecord,

    /// Metadata about the extraction
    pub metadata: ExtractionMetadata,
}
