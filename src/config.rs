use crate::cli::Cli;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "imobiliaria_leon.json";

/// Runtime settings resolved from the command line and environment
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub verbose: bool,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_file: cli.data_file.clone(),
            verbose: cli.verbose,
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "imobiliaria_leon=debug"
        } else {
            "imobiliaria_leon=info"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from(["imobiliaria-leon", "--verbose", "list"]).unwrap();
        let config = Config::from_cli(&cli);
        assert!(config.verbose);
        assert_eq!(config.log_filter(), "imobiliaria_leon=debug");
    }

    #[test]
    fn test_quiet_by_default() {
        let cli = Cli::try_parse_from(["imobiliaria-leon", "whoami"]).unwrap();
        let config = Config::from_cli(&cli);
        assert!(!config.verbose);
        assert_eq!(config.log_filter(), "imobiliaria_leon=info");
    }
}
