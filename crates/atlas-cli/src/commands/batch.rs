//! Batch command implementation.

use crate::batch::run_batch;
use crate::cli::BatchArgs;
use crate::error::Result;
use crate::output::Formatter;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_extractor::ResumeExtractor;

/// Execute the batch command.
///
/// Per-file failures are reported but do not fail the command.
pub fn execute_batch<A>(
    args: BatchArgs,
    extractor: &ResumeExtractor<A>,
    formatter: &Formatter,
) -> Result<()>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let summary = run_batch(extractor, &args.dir, &args.output, formatter)?;

    if !summary.failed.is_empty() {
        eprintln!(
            "{}",
            formatter.warning(&format!("{} file(s) could not be parsed", summary.failed.len()))
        );
    }
    println!("{}", formatter.format_batch_summary(&summary));

    Ok(())
}
