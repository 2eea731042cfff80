use std::path::PathBuf;

use clap::Parser;

use crate::calculator::Chaining;
use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "calcpad", version, about = "Keypad calculator for the terminal")]
pub struct Cli {
    /// Config file to load instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override operator chaining mode
    #[arg(long, value_enum)]
    pub chaining: Option<Chaining>,

    /// Press the given keys without a UI and print the final display
    #[arg(long, value_name = "KEYS", allow_hyphen_values = true)]
    pub keys: Option<String>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(chaining) = self.chaining {
            config.calculator.chaining = chaining;
        }
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
    }

    pub fn is_headless(&self) -> bool {
        self.keys.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::parse_from([
            "calcpad",
            "--chaining",
            "running-total",
            "--log-file",
            "/tmp/calcpad.log",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.calculator.chaining, Chaining::RunningTotal);
        assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/calcpad.log")));
        assert!(!cli.is_headless());
    }

    #[test]
    fn keys_may_start_with_minus() {
        let cli = Cli::parse_from(["calcpad", "--keys", "-5="]);
        assert_eq!(cli.keys.as_deref(), Some("-5="));
        assert!(cli.is_headless());
    }
}
