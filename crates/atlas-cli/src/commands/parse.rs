//! Parse command implementation.

use crate::cli::FileArgs;
use crate::document::read_document;
use crate::error::Result;
use crate::output::Formatter;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_extractor::ResumeExtractor;

/// Execute the parse command.
pub fn execute_parse<A>(
    args: FileArgs,
    extractor: &ResumeExtractor<A>,
    formatter: &Formatter,
) -> Result<()>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let text = read_document(&args.file)?;
    let source_id = args.file.display().to_string();
    let report = extractor.extract_detailed(&text, &source_id)?;

    println!("{}", formatter.format_record(&report.record)?);
    tracing::debug!(
        "{} sentences, {} entities, {} ms",
        report.metadata.sentence_count,
        report.metadata.entity_count,
        report.metadata.processing_time_ms
    );

    Ok(())
}
