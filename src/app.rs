// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;

use anyhow::Result;
use clap::Parser;

use self::cli::Cli;
use self::config::resolve_config;
use self::error::SynthError;
use self::formatter::OutputGenerator;
use self::models::{MirrorConfig, RuntimeConfig};
use self::scanner::Scanner;

/// Scans the configured root and builds the mirror document without writing it.
pub fn generate(config: &RuntimeConfig) -> Result<MirrorConfig, SynthError> {
    let scanner = Scanner::new(config.scan_root.clone(), config)?;
    let repositories = scanner.scan()?;

    if repositories.is_empty() {
        log::warn!("No repositories found under {}", scanner.root().display());
    } else {
        log::info!(
            "Found {} repositories under {}",
            repositories.len(),
            scanner.root().display()
        );
    }

    Ok(config.template.with_repositories(repositories))
}

/// Scan, build, and overwrite `config.output`. Nothing is written if the scan fails.
pub fn synthesize(config: &RuntimeConfig) -> Result<MirrorConfig, SynthError> {
    let mirror = generate(config)?;
    OutputGenerator::write(&mirror, &config.output)?;
    log::info!("Wrote {}", config.output.display());
    Ok(mirror)
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    let args = Cli::parse();
    let config = resolve_config(args)?;

    if config.to_stdout {
        let mirror = generate(&config)?;
        println!("{}", OutputGenerator::render(&mirror)?);
    } else {
        synthesize(&config)?;
    }

    Ok(())
}
