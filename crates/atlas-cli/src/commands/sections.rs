//! Sections command implementation.

use crate::cli::FileArgs;
use crate::document::read_document;
use crate::error::Result;
use crate::output::Formatter;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_extractor::ResumeExtractor;

/// Execute the sections command.
pub fn execute_sections<A>(
    args: FileArgs,
    extractor: &ResumeExtractor<A>,
    formatter: &Formatter,
) -> Result<()>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let text = read_document(&args.file)?;
    let sections = extractor.sections(&text);
    println!("{}", formatter.format_sections(&sections)?);
    Ok(())
}
