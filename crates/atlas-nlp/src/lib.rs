//! Atlas Language Analysis Layer
//!
//! Pluggable annotation engines implementing the `LanguageAnalyzer` trait
//! from `atlas-domain`.
//!
//! # Engines
//!
//! - `RuleAnalyzer`: in-process French tokenizer and entity ruler
//! - `ServiceAnalyzer`: external annotation service over HTTP
//! - `MockAnalyzer`: deterministic documents for testing
//!
//! The process-wide engine lives in [`engine`].
//!
//! # Examples
//!
//! ```
//! use atlas_nlp::RuleAnalyzer;
//! use atlas_domain::traits::LanguageAnalyzer;
//!
//! let analyzer = RuleAnalyzer::with_default_vocabulary().unwrap();
//! let doc = analyzer.annotate("Stage chez Maroc Telecom à Rabat").unwrap();
//! assert_eq!(doc.entity_count(), 2);
//! ```

#![warn(missing_docs)]

pub mod engine;
pub mod gazetteer;
pub mod rules;
pub mod service;
pub mod stopwords;
pub mod tokenizer;

use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::AnnotatedDocument;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;

pub use engine::EngineHandle;
pub use gazetteer::Gazetteer;
pub use rules::RuleAnalyzer;
pub use service::ServiceAnalyzer;

/// Errors that can occur during annotation
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The engine failed while processing the text
    #[error("Engine error: {0}")]
    Engine(String),

    /// Network or service communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Malformed response from the engine
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Text the engine cannot process
    #[error("Invalid encoding: {0}")]
    Encoding(String),

    /// No process-wide engine installed
    #[error("Annotation engine not initialized")]
    NotInitialized,

    /// Invalid engine configuration or vocabulary
    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Clone)]
enum MockResponse {
    Document(AnnotatedDocument),
    Error,
}

/// Mock annotation engine for deterministic testing
///
/// Returns pre-configured documents without any analysis.
///
/// # Examples
///
/// ```
/// use atlas_nlp::MockAnalyzer;
/// use atlas_domain::traits::LanguageAnalyzer;
/// use atlas_domain::AnnotatedDocument;
///
/// let mut analyzer = MockAnalyzer::default();
/// analyzer.add_error("bad input");
///
/// assert!(analyzer.annotate("anything").unwrap().is_empty());
/// assert!(analyzer.annotate("bad input").is_err());
/// assert_eq!(analyzer.call_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct MockAnalyzer {
    default_document: Option<AnnotatedDocument>,
    responses: HashMap<String, MockResponse>,
    call_count: Arc<AtomicUsize>,
}

impl MockAnalyzer {
    /// Create a mock returning the same document for every text
    pub fn new(document: AnnotatedDocument) -> Self {
        Self {
            default_document: Some(document),
            responses: HashMap::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Return `document` when asked to annotate exactly `text`
    pub fn add_document(&mut self, text: impl Into<String>, document: AnnotatedDocument) {
        self.responses
            .insert(text.into(), MockResponse::Document(document));
    }

    /// Fail when asked to annotate exactly `text`
    pub fn add_error(&mut self, text: impl Into<String>) {
        self.responses.insert(text.into(), MockResponse::Error);
    }

    /// Get the number of times annotate was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockAnalyzer {
    /// A mock that returns an empty document for every text
    fn default() -> Self {
        Self {
            default_document: None,
            responses: HashMap::new(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl LanguageAnalyzer for MockAnalyzer {
    type Error = AnalyzerError;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        match self.responses.get(text) {
            Some(MockResponse::Document(document)) => Ok(document.clone()),
            Some(MockResponse::Error) => Err(AnalyzerError::Engine("Mock error".to_string())),
            None => Ok(self
                .default_document
                .clone()
                .unwrap_or_else(|| AnnotatedDocument::empty(text))),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
