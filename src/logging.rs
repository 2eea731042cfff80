use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    Stderr,
    File(PathBuf),
}

impl LogSink {
    /// Resolve the sink for a run.
    ///
    /// A configured file always wins. Otherwise the interactive UI logs to
    /// `<cache_dir>/calcpad/calcpad.log`, since the terminal is taken, and
    /// headless runs log to stderr.
    pub fn resolve(config: &LoggingConfig, interactive: bool) -> Self {
        match &config.file {
            Some(path) => LogSink::File(path.clone()),
            None if interactive => LogSink::File(default_log_path()),
            None => LogSink::Stderr,
        }
    }
}

pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
    cache_dir.join("calcpad").join("calcpad.log")
}

/// Install the global tracing subscriber. RUST_LOG overrides `config.level`.
pub fn init_tracing(config: &LoggingConfig, sink: &LogSink) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339());

    match sink {
        LogSink::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| anyhow::anyhow!(err))?,
        LogSink::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|err| anyhow::anyhow!(err))?
        }
    }

    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory '{}'", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_wins() {
        let config = LoggingConfig {
            level: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/calc.log")),
        };
        assert_eq!(
            LogSink::resolve(&config, false),
            LogSink::File(PathBuf::from("/tmp/calc.log"))
        );
    }

    #[test]
    fn headless_defaults_to_stderr() {
        let config = LoggingConfig::default();
        assert_eq!(LogSink::resolve(&config, false), LogSink::Stderr);
        assert_eq!(
            LogSink::resolve(&config, true),
            LogSink::File(default_log_path())
        );
    }
}
