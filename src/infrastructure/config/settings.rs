//! Application configuration loading and validation.
//!
//! Configuration is read from a TOML file (`~/.chiplead/config.toml` by
//! default). The API key is never read from the file; it comes from the
//! `CHIPLEAD_API_KEY` environment variable, which may itself be set through a
//! `.env` file.
//!
//! # Example
//!
//! ```no_run
//! use chiplead::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.logging.init(&config.logging.level);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use url::Url;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::adapter::outbound::league_api::settings::{ApiConfig, API_KEY_ENV};
use crate::domain::OrganizationId;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// League API endpoint, organization and HTTP behavior.
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content, taking the API key from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::parse_toml_with_api_key(content, api_key)
    }

    /// Parse configuration from TOML content with an explicit API key.
    pub fn parse_toml_with_api_key(content: &str, api_key: Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.api.api_key = api_key;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML is malformed or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[must_use]
    pub fn organization_id(&self) -> OrganizationId {
        OrganizationId::new(self.api.organization_id.trim())
    }

    /// Check required fields and value ranges.
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.base_url",
            }
            .into());
        }
        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidValue {
            field: "api.base_url",
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: "must be an http or https URL".to_string(),
            }
            .into());
        }
        if self.api.organization_id.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.organization_id",
            }
            .into());
        }

        let http = &self.api.http;
        if http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.http.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if http.connect_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.http.connect_timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if http.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.http.retry_max_attempts",
                reason: "must be at least 1".to_string(),
            }
            .into());
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }
        if EnvFilter::try_new(&self.logging.level).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "logging.level",
                reason: format!("{:?} is not a valid filter", self.logging.level),
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const VALID: &str = r#"
        [api]
        base_url = "https://league.example/rest/v1"
        organization_id = "42"

        [api.http]
        timeout_ms = 5000
        retry_max_attempts = 2

        [logging]
        level = "info"
        format = "json"
    "#;

    fn invalid_field(result: Result<Config>) -> &'static str {
        match result {
            Err(Error::Config(ConfigError::InvalidValue { field, .. }))
            | Err(Error::Config(ConfigError::MissingField { field })) => field,
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn parses_valid_config() {
        let config = Config::parse_toml_with_api_key(VALID, Some("secret".into())).unwrap();

        assert_eq!(config.api.http.timeout_ms, 5000);
        assert_eq!(config.api.http.retry_max_attempts, 2);
        assert_eq!(config.api.http.retry_backoff_ms, 500);
        assert_eq!(config.api.api_key.as_deref(), Some("secret"));
        assert_eq!(config.organization_id(), OrganizationId::from("42"));
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn missing_base_url_is_rejected() {
        let result = Config::parse_toml_with_api_key("[api]\norganization_id = \"1\"\n", None);
        assert_eq!(invalid_field(result), "api.base_url");
    }

    #[test]
    fn missing_organization_is_rejected() {
        let result =
            Config::parse_toml_with_api_key("[api]\nbase_url = \"https://x.example\"\n", None);
        assert_eq!(invalid_field(result), "api.organization_id");
    }

    #[test]
    fn non_http_url_is_rejected() {
        let result = Config::parse_toml_with_api_key(
            "[api]\nbase_url = \"ftp://x.example\"\norganization_id = \"1\"\n",
            None,
        );
        assert_eq!(invalid_field(result), "api.base_url");
    }

    #[test]
    fn zero_retry_attempts_are_rejected() {
        let content = VALID.replace("retry_max_attempts = 2", "retry_max_attempts = 0");
        let result = Config::parse_toml_with_api_key(&content, None);
        assert_eq!(invalid_field(result), "api.http.retry_max_attempts");
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let content = VALID.replace("format = \"json\"", "format = \"xml\"");
        let result = Config::parse_toml_with_api_key(&content, None);
        assert_eq!(invalid_field(result), "logging.format");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let result = Config::parse_toml_with_api_key("[api", None);
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse(_)))));
    }

    #[test]
    fn logging_section_is_optional() {
        let content = "[api]\nbase_url = \"https://x.example\"\norganization_id = \"1\"\n";
        let config = Config::parse_toml_with_api_key(content, None).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }
}
