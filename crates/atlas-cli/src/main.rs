//! Atlas CLI - Command-line interface for résumé extraction.

use atlas_cli::{commands, engine, Cli, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `-v` forces debug, otherwise `RUST_LOG` or warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> atlas_cli::Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)?;

    // Command-line overrides
    if let Some(mode) = cli.mode {
        config.extraction.mode = mode.into();
    }
    if let Some(patterns) = cli.patterns {
        config.patterns = Some(patterns);
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Config(args) => commands::execute_config(args, &config, &config_path, &formatter),
        cmd => {
            // Commands that need the annotation engine
            engine::install(&config.engine)?;
            let extractor = engine::build_extractor(&config)?;

            let result = match cmd {
                Command::Batch(args) => commands::execute_batch(args, &extractor, &formatter),
                Command::Parse(args) => commands::execute_parse(args, &extractor, &formatter),
                Command::Sections(args) => commands::execute_sections(args, &extractor, &formatter),
                Command::Config(_) => unreachable!(),
            };

            atlas_nlp::engine::shutdown();
            result
        }
    }
}
