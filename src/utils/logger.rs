//! Logging utilities
//!
//! Provides logging configuration and helpers.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Level {
        match self {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }

    /// Level implied by a `--verbose` flag.
    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Info
        }
    }
}

/// Initialize the logger with the specified level. `OST_LOG` overrides
/// the filter when set.
pub fn init_logger(level: LogLevel) {
    let filter = EnvFilter::try_from_env("OST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("ost_suite={}", level.to_tracing_level())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LogLevel::from_verbosity(true), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbosity(false), LogLevel::Info);
    }
}
