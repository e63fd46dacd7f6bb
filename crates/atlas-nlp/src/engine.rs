//! Process-wide annotation engine
//!
//! The engine is created once at startup, shared read-only by every parse,
//! and torn down explicitly before exit:
//!
//! ```
//! use atlas_nlp::{engine, MockAnalyzer};
//! use atlas_domain::traits::LanguageAnalyzer;
//!
//! engine::init(MockAnalyzer::default());
//! let handle = engine::handle().unwrap();
//! assert!(handle.annotate("").unwrap().is_empty());
//! engine::shutdown();
//! ```

use crate::AnalyzerError;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::AnnotatedDocument;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

type SharedAnalyzer = Arc<dyn LanguageAnalyzer<Error = AnalyzerError> + Send + Sync>;

static ENGINE: RwLock<Option<SharedAnalyzer>> = RwLock::new(None);

/// Install the process-wide engine, replacing any previous one
pub fn init<A>(analyzer: A)
where
    A: LanguageAnalyzer<Error = AnalyzerError> + Send + Sync + 'static,
{
    let mut slot = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
        Some(previous) => info!(
            "Replacing annotation engine {} with {}",
            previous.name(),
            analyzer.name()
        ),
        None => info!("Annotation engine {} initialized", analyzer.name()),
    }
    *slot = Some(Arc::new(analyzer));
}

/// Shared handle to the installed engine
pub fn handle() -> Result<EngineHandle, AnalyzerError> {
    ENGINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
        .map(|inner| EngineHandle { inner })
        .ok_or(AnalyzerError::NotInitialized)
}

/// Whether an engine is installed
pub fn is_initialized() -> bool {
    ENGINE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Remove the engine; returns whether one was installed
///
/// Outstanding handles keep working until dropped.
pub fn shutdown() -> bool {
    let previous = ENGINE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .take();
    if let Some(engine) = &previous {
        info!("Annotation engine {} shut down", engine.name());
    }
    previous.is_some()
}

/// Cloneable handle to the process-wide engine
#[derive(Clone)]
pub struct EngineHandle {
    inner: SharedAnalyzer,
}

impl std::fmt::Debug for EngineHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineHandle")
            .field("engine", &self.inner.name())
            .finish()
    }
}

impl LanguageAnalyzer for EngineHandle {
    type Error = AnalyzerError;

    fn annotate(&self, text: &str) -> Result<AnnotatedDocument, Self::Error> {
        self.inner.annotate(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockAnalyzer, RuleAnalyzer};

    // The registry is global; keep every assertion about it in one test.
    #[test]
    fn test_engine_lifecycle() {
        shutdown();
        assert!(!is_initialized());
        assert!(matches!(handle(), Err(AnalyzerError::NotInitialized)));

        init(MockAnalyzer::default());
        assert!(is_initialized());
        let first = handle().unwrap();
        assert_eq!(first.name(), "mock");

        init(RuleAnalyzer::with_default_vocabulary().unwrap());
        let second = handle().unwrap();
        assert_eq!(second.name(), "rules-fr");
        assert_eq!(second.annotate("Stage chez Inwi").unwrap().entity_count(), 1);

        assert!(shutdown());
        assert!(!shutdown());
        assert!(handle().is_err());
        // handles outlive the registry slot
        assert!(first.annotate("texte").unwrap().is_empty());
    }
}
