use std::fmt;
use std::io;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log verbosity selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, clap::ValueEnum)]
pub enum LogLevel {
    /// Only error conditions
    Error,
    /// Errors and warnings
    #[default]
    Warn,
    /// Errors, warnings, and informational messages
    Info,
    /// All above plus debug information
    Debug,
    /// All above plus detailed tracing
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Filter directive used when `RUST_LOG` is not set.
///
/// `level` applies to `component`; every other target is capped at `warn`.
pub fn default_filter_directive(component: &str, level: LogLevel) -> String {
    let global = level.min(LogLevel::Warn);
    format!("{global},{component}={level}")
}

/// Install the global tracing subscriber.
///
/// Logs always go to stderr; stdout carries only the report. `RUST_LOG`
/// overrides `level` when present.
pub fn init_logging(component: &str, level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter_directive(component, level)));

    let layer = tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false);

    tracing_subscriber::registry().with(filter).with(layer).try_init()?;

    tracing::debug!(level = %Level::from(level), "Logging initialized");
    Ok(())
}
