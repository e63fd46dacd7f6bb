//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::AnnotatedDocument;

/// Trait for language-analysis engines
///
/// Implemented by the adapter layer (atlas-nlp)
pub trait LanguageAnalyzer {
    /// Error type for annotation failures
    type Error;

    /// Annotate raw text
    ///
    /// Empty input yields a document with zero sentences, never an error.
    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error>;

    /// Human-readable engine name, recorded in extraction metadata
    fn name(&self) -> &str;
}

impl<T: LanguageAnalyzer + ?Sized> LanguageAnalyzer for Box<T> {
    type Error = T::Error;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: LanguageAnalyzer + ?Sized> LanguageAnalyzer for std::sync::Arc<T> {
    type Error = T::Error;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        (**self).annotate(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
