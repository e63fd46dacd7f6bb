//! Output formatting for the CLI.

use crate::batch::BatchSummary;
use crate::config::OutputFormat;
use crate::error::Result;
use atlas_domain::ResumeRecord;
use atlas_extractor::Sections;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Longest cell text shown in table mode
const MAX_CELL_CHARS: usize = 80;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// The selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format a parsed record.
    pub fn format_record(&self, record: &ResumeRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
            OutputFormat::Table => Ok(self.format_record_table(record)),
            OutputFormat::Quiet => Ok(record.name.clone().unwrap_or_else(|| "-".to_string())),
        }
    }

    fn format_record_table(&self, record: &ResumeRecord) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);

        builder.push_record(["Name", &optional(&record.name)]);
        builder.push_record(["Email", &optional(&record.email)]);
        builder.push_record(["Mobile", &optional(&record.mobile_number)]);
        builder.push_record(["Skills", &lines(record.skills.iter())]);
        builder.push_record(["Education", &lines(record.education.iter())]);

        let experience = record.experience.iter().map(|e| {
            let mut entry = truncate(&e.description);
            if let Some(org) = &e.organization {
                entry.push_str(&format!(" [{}]", org));
            }
            if let Some(duration) = &e.duration {
                entry.push_str(&format!(" ({})", duration));
            }
            entry
        });
        builder.push_record(["Experience", &lines(experience)]);

        for (category, hits) in &record.competencies {
            builder.push_record([category.as_str(), &lines(hits.iter())]);
        }
        for (category, hits) in &record.measurable_results {
            builder.push_record([category.as_str(), &lines(hits.iter())]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the sections of a document.
    pub fn format_sections(&self, sections: &Sections) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(sections)?),
            OutputFormat::Quiet => Ok(sections.keys().collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if sections.is_empty() {
                    return Ok(self.colorize("No sections found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Section", "Lines", "Content"]);
                for (key, section_lines) in sections.iter() {
                    builder.push_record([
                        key,
                        &section_lines.len().to_string(),
                        &lines(section_lines.iter()),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format the end-of-batch summary.
    pub fn format_batch_summary(&self, summary: &BatchSummary) -> String {
        match self.format {
            OutputFormat::Quiet => summary.parsed.to_string(),
            OutputFormat::Json => serde_json::json!({
                "parsed": summary.parsed,
                "failed": summary.failed.len(),
                "output": summary.output.display().to_string(),
            })
            .to_string(),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Parsed", "Failed", "Output"]);
                builder.push_record([
                    summary.parsed.to_string(),
                    summary.failed.len().to_string(),
                    summary.output.display().to_string(),
                ]);

                let mut table = builder.build();
                table.with(Style::rounded());
                table.to_string()
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn optional(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn lines<I, S>(items: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let joined: Vec<String> = items.map(|item| truncate(item.as_ref())).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join("\n")
    }
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_CELL_CHARS {
        text.to_string()
    } else {
        let cut: String = text.chars().take(MAX_CELL_CHARS - 1).collect();
        format!("{}…", cut)
    }
}
