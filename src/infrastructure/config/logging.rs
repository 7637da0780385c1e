//! Logging configuration and initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".into()
}

fn default_format() -> String {
    "pretty".into()
}

/// Supported values of `logging.format`.
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

impl LoggingConfig {
    /// Level after applying CLI flags: `-q` wins, then `-v` (debug) and
    /// `-vv` (trace), then the configured level.
    #[must_use]
    pub fn effective_level(&self, verbose: u8, quiet: bool) -> String {
        if quiet {
            return "error".into();
        }
        match verbose {
            0 => self.level.clone(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    }

    /// Initialize the tracing subscriber. `RUST_LOG` overrides `level`.
    ///
    /// Logs go to stderr so that stdout stays parseable in JSON mode.
    pub fn init(&self, level: &str) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
