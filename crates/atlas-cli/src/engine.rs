//! Annotation engine and extractor setup from configuration.

use crate::config::{Config, EngineConfig, EngineKind};
use crate::error::Result;
use atlas_extractor::{PatternLibrary, ResumeExtractor};
use atlas_nlp::{engine, EngineHandle, Gazetteer, RuleAnalyzer, ServiceAnalyzer};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Install the process-wide annotation engine described by `config`.
pub fn install(config: &EngineConfig) -> Result<()> {
    match config.kind {
        EngineKind::Rules => {
            let gazetteer = match &config.gazetteer {
                Some(path) => Gazetteer::from_file(path)?,
                None => Gazetteer::default(),
            };
            let analyzer = RuleAnalyzer::new(gazetteer)?;
            info!("Rule engine with {} vocabulary phrases", analyzer.vocabulary_size());
            engine::init(analyzer);
        }
        EngineKind::Service => {
            let analyzer =
                ServiceAnalyzer::with_timeout(&config.url, Duration::from_secs(config.timeout_secs))?;
            info!("Annotation service at {}", analyzer.endpoint());
            engine::init(analyzer);
        }
    }
    Ok(())
}

/// Extractor over the installed engine, with patterns and settings from `config`.
pub fn build_extractor(config: &Config) -> Result<ResumeExtractor<EngineHandle>> {
    let patterns = match &config.patterns {
        Some(path) => PatternLibrary::from_file(path)?,
        None => PatternLibrary::default(),
    };
    info!("Pattern library version {}", patterns.version());

    Ok(ResumeExtractor::new(
        engine::handle()?,
        Arc::new(patterns),
        config.extraction.clone(),
    ))
}
