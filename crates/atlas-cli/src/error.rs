//! Error types for the CLI application.

use atlas_extractor::ExtractorError;
use atlas_nlp::AnalyzerError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
///
/// These end the whole run. Failures of a single document inside a batch
/// are reported and skipped instead.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Annotation engine could not be set up
    #[error("Engine error: {0}")]
    Engine(#[from] AnalyzerError),

    /// Extraction error
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractorError),

    /// Document could not be turned into text
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Errors raised while reading text out of a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// File could not be read
    #[error("Cannot read file: {0}")]
    Io(#[from] std::io::Error),

    /// PDF text layer could not be extracted
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    /// Word document could not be parsed
    #[error("DOCX parsing failed: {0}")]
    Docx(String),

    /// Plain-text file is not valid UTF-8
    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
