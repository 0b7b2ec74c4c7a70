//! Logging configuration and initialization
//!
//! Installs a `tracing` subscriber for the `shadow-utils` binary (library
//! users bring their own). `RUST_LOG` takes precedence over the configured
//! verbosity. Logs go to stderr, or to a daily rolling file when a log
//! directory is set.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Log file name prefix inside the log directory
const LOG_FILE_NAME: &str = "shadow-utils.log";

/// Targets the verbosity setting applies to (library and binary)
const TARGETS: &[&str] = &["shadow_agent_utils", "shadow_utils"];

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: '{}'. Use 'text' or 'json'.", s)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Log debug events instead of warnings and errors only
    pub verbose: bool,

    /// Output format
    pub format: LogFormat,

    /// Write to a daily rolling file in this directory instead of stderr
    pub log_dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    fn directives(&self) -> String {
        let level = if self.verbose { "debug" } else { "warn" };
        TARGETS
            .iter()
            .map(|target| format!("{}={}", target, level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Build the filter, preferring `RUST_LOG` when it is set
    pub fn build_filter(&self) -> EnvFilter {
        if let Ok(env_filter) = EnvFilter::try_from_default_env() {
            return env_filter;
        }
        EnvFilter::try_new(self.directives()).unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

/// Initialize the global tracing subscriber
///
/// When logging to a file, the returned guard must be kept alive for the
/// lifetime of the program so buffered lines get flushed.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = config.build_filter();

    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };
    let ansi = config.log_dir.is_none();

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(writer),
            )
            .try_init()?,
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!("yaml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_directives_follow_verbosity() {
        assert_eq!(
            LogConfig::new().directives(),
            "shadow_agent_utils=warn,shadow_utils=warn"
        );
        assert_eq!(
            LogConfig::new().with_verbose(true).directives(),
            "shadow_agent_utils=debug,shadow_utils=debug"
        );
    }

    #[test]
    fn test_builder() {
        let config = LogConfig::new()
            .with_format(LogFormat::Json)
            .with_log_dir("/tmp/logs");
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(!config.verbose);
    }
}
