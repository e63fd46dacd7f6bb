//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
///
/// `path` is the file in use; `config` the effective configuration after
/// command-line overrides.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let contents = toml::to_string_pretty(config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", contents);
        }
        ConfigAction::Init { force } => init_config(path, force, formatter)?,
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        println!(
            "{}",
            formatter.warning(&format!("{} already exists (use --force to overwrite)", path.display()))
        );
        return Ok(());
    }

    Config::default().save_to(path)?;
    println!("{}", formatter.success(&format!("Wrote default configuration to {}", path.display())));
    Ok(())
}
