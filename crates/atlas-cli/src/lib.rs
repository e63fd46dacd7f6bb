//! Atlas CLI library.
//!
//! Document reading, the directory batch driver, configuration management
//! and output formatting behind the `atlas` binary.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod output;

pub use batch::{run_batch, BatchSummary, ParsedResume};
pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, DocumentError, Result};
pub use output::Formatter;
