use std::fs::File;
use std::io::BufReader;

use anyhow::{Context, Result};
use clap::Parser;
use mc_core::{DisplayConfig, OutputFormat};

pub mod batch;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Validate the input source
    cli.validate_source()?;

    // 4. Load the config
    let mut config = resolve_config(&cli)?;

    // 4b. Apply CLI overrides
    if let Some(ref format) = cli.format {
        config.format = match format.as_str() {
            "text" => OutputFormat::Text,
            "html" => OutputFormat::Html,
            "json" => OutputFormat::Json,
            _ => {
                log::warn!("Unknown format '{format}', keeping the config value.");
                config.format
            }
        };
    }

    // 5. Decode
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let failures = if let Some(ref path) = cli.file {
        let file =
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        batch::run_batch(BufReader::new(file), &mut out, &config)?
    } else if cli.models.is_empty() {
        log::info!("No model numbers given, reading stdin.");
        let stdin = std::io::stdin();
        batch::run_batch(stdin.lock(), &mut out, &config)?
    } else {
        let joined = cli.models.join("\n");
        batch::run_batch(joined.as_bytes(), &mut out, &config)?
    };

    if failures > 0 {
        anyhow::bail!("{failures} model number(s) failed to decode");
    }
    Ok(())
}

/// Resolve config: a missing file is not fatal, defaults apply.
fn resolve_config(cli: &cli::Cli) -> Result<DisplayConfig> {
    if cli.config.exists() {
        mc_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config not found: {}. Using defaults.",
            cli.config.display()
        );
        Ok(DisplayConfig::default())
    }
}
