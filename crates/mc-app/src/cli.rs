use std::path::PathBuf;

use clap::Parser;

/// modelcheck — Samsung AC model-number decoder.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Model numbers to decode. Reads stdin when empty and --file is absent.
    pub models: Vec<String>,

    /// Read model numbers from a file, one per line.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format override: text, html, json. Defaults to the config value.
    #[arg(long)]
    pub format: Option<String>,

    /// TOML config file. Default: config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Validate that at most one input source is provided.
    ///
    /// # Errors
    /// Returns an error if both positional models and --file are specified.
    pub fn validate_source(&self) -> anyhow::Result<()> {
        if !self.models.is_empty() && self.file.is_some() {
            anyhow::bail!(
                "One input source at a time: pass model numbers as arguments OR use --file."
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_models_are_collected() {
        let cli = Cli::try_parse_from(["modelcheck", "AB123XSNA12", "AJ052TXJ3KG"]).unwrap();
        assert_eq!(cli.models.len(), 2);
        assert!(cli.validate_source().is_ok());
    }

    #[test]
    fn no_source_means_stdin() {
        let cli = Cli::try_parse_from(["modelcheck"]).unwrap();
        assert!(cli.models.is_empty());
        assert!(cli.file.is_none());
        assert!(cli.validate_source().is_ok());
    }

    #[test]
    fn models_and_file_conflict() {
        let cli =
            Cli::try_parse_from(["modelcheck", "AB123XSNA12", "--file", "models.txt"]).unwrap();
        assert!(cli.validate_source().is_err());
    }

    #[test]
    fn defaults_match_the_shipped_config() {
        let cli = Cli::try_parse_from(["modelcheck"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("config/default.toml"));
        assert_eq!(cli.log_level, "warn");
        assert!(cli.format.is_none());
    }
}
