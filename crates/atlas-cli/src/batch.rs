//! Directory batch driver.
//!
//! Every regular file directly inside the input directory is parsed in name
//! order. A file that cannot be read or extracted is reported and skipped;
//! the output JSON holds only the successful records.

use crate::document::read_document;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::config::OutputFormat;
use anyhow::Context;
use atlas_domain::traits::LanguageAnalyzer;
use atlas_domain::ResumeRecord;
use atlas_extractor::ResumeExtractor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// One entry of the batch output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    /// File name without directory
    pub file_name: String,

    /// Extracted record
    pub parsed_data: ResumeRecord,
}

/// Outcome of a batch run.
#[derive(Debug, Clone)]
pub struct BatchSummary {
    /// Number of files parsed
    pub parsed: usize,

    /// File name and message for each failure
    pub failed: Vec<(String, String)>,

    /// Where the records were written
    pub output: PathBuf,
}

/// Regular files directly inside `dir`, sorted by name.
pub fn list_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| {
        CliError::InvalidInput(format!("Cannot read directory '{}': {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read and extract one document.
pub fn parse_file<A>(extractor: &ResumeExtractor<A>, path: &Path) -> anyhow::Result<ResumeRecord>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let text = read_document(path).with_context(|| format!("Failed to read '{}'", path.display()))?;
    let report = extractor
        .extract_detailed(&text, &file_name(path))
        .with_context(|| format!("Failed to extract '{}'", path.display()))?;
    Ok(report.record)
}

/// Parse every document of `dir` and collect the successes.
pub fn parse_directory<A>(
    extractor: &ResumeExtractor<A>,
    dir: &Path,
    formatter: &Formatter,
) -> Result<(Vec<ParsedResume>, Vec<(String, String)>)>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let files = list_documents(dir)?;
    info!("Batch over {} files in {}", files.len(), dir.display());

    let mut parsed = Vec::new();
    let mut failed = Vec::new();

    for path in files {
        let name = file_name(&path);
        match parse_file(extractor, &path) {
            Ok(record) => {
                if formatter.format() != OutputFormat::Quiet {
                    println!("{}", formatter.success(&format!("Parsed {}", name)));
                }
                parsed.push(ParsedResume {
                    file_name: name,
                    parsed_data: record,
                });
            }
            Err(e) => {
                error!("Error parsing {}: {:#}", name, e);
                eprintln!("{}", formatter.error(&format!("Error parsing {}: {:#}", name, e)));
                failed.push((name, format!("{:#}", e)));
            }
        }
    }

    Ok((parsed, failed))
}

/// Parse `dir` and write the records to `output` as pretty JSON.
pub fn run_batch<A>(
    extractor: &ResumeExtractor<A>,
    dir: &Path,
    output: &Path,
    formatter: &Formatter,
) -> Result<BatchSummary>
where
    A: LanguageAnalyzer,
    A::Error: std::fmt::Display,
{
    let (records, failed) = parse_directory(extractor, dir, formatter)?;

    let json = serde_json::to_string_pretty(&records)?;
    fs::write(output, json).map_err(|e| {
        CliError::InvalidInput(format!("Cannot write '{}': {}", output.display(), e))
    })?;

    info!(
        "Batch complete: {} parsed, {} failed, written to {}",
        records.len(),
        failed.len(),
        output.display()
    );

    Ok(BatchSummary {
        parsed: records.len(),
        failed,
        output: output.to_path_buf(),
    })
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
