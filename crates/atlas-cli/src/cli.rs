//! CLI command definitions and argument parsing.

use atlas_extractor::ExtractionMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Atlas CLI - Turn French and Moroccan résumés into structured records.
#[derive(Debug, Parser)]
#[command(name = "atlas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ATLAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Competency and measurable-result strategy
    #[arg(short, long, value_enum, global = true)]
    pub mode: Option<ModeArg>,

    /// Pattern overlay file (TOML)
    #[arg(short, long, global = true, env = "ATLAS_PATTERNS")]
    pub patterns: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names and keys only)
    Quiet,
}

/// Extraction mode options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ModeArg {
    /// Whole sentences attributed to categories
    Sentence,
    /// Keyword hits inside experience fragments
    Fragment,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse every file of a directory into one JSON file
    Batch(BatchArgs),

    /// Parse a single résumé
    Parse(FileArgs),

    /// Show the sections of a résumé
    Sections(FileArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// Directory holding the résumés
    #[arg(default_value = "resumes")]
    pub dir: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "parsed_resumes.json")]
    pub output: PathBuf,
}

/// Arguments for single-file commands.
#[derive(Debug, Parser)]
pub struct FileArgs {
    /// Résumé file (.pdf, .docx, .doc or text)
    pub file: PathBuf,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ModeArg> for ExtractionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Sentence => ExtractionMode::Sentence,
            ModeArg::Fragment => ExtractionMode::Fragment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_defaults() {
        let cli = Cli::parse_from(["atlas", "batch"]);
        match cli.command {
            Command::Batch(args) => {
                assert_eq!(args.dir, PathBuf::from("resumes"));
                assert_eq!(args.output, PathBuf::from("parsed_resumes.json"));
            }
            _ => panic!("Expected Batch command"),
        }
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli = Cli::parse_from(["atlas", "parse", "cv.pdf", "--mode", "fragment", "-f", "json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.mode, Some(ModeArg::Fragment)));
        match cli.command {
            Command::Parse(args) => assert_eq!(args.file, PathBuf::from("cv.pdf")),
            _ => panic!("Expected Parse command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["atlas", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs { action: ConfigAction::Init { force: true } })
        ));
    }

    #[test]
    fn test_mode_conversion() {
        let mode: ExtractionMode = ModeArg::Fragment.into();
        assert_eq!(mode, ExtractionMode::Fragment);
    }
}
