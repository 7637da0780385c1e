//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::adapter::outbound::league_api::API_KEY_ENV;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::settings::Config;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, CONFIG_TEMPLATE)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.init",
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::section("Config Initialized");
    output::success("Created configuration file");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your league's API", path.display()));
    output::note(&format!("2. Set the {API_KEY_ENV} environment variable"));
    output::note(&format!("3. Run: chiplead config validate -c {}", path.display()));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let key_loaded = config.api.api_key.is_some();

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "path": path.display().to_string(),
            "config": serde_json::to_value(&config)?,
            "api_key_loaded": key_loaded,
        }));
        return Ok(());
    }

    output::section("Effective Configuration");
    output::field("Path", path.display());

    output::section("API");
    output::field("Base URL", &config.api.base_url);
    output::field("Organization", &config.api.organization_id);
    if key_loaded {
        output::success(&format!("API key loaded from {API_KEY_ENV}"));
    } else {
        output::warning(&format!("{API_KEY_ENV} not set; requests are unauthenticated"));
    }

    output::section("HTTP");
    output::field("Timeout", format!("{}ms", config.api.http.timeout_ms));
    output::field(
        "Connect timeout",
        format!("{}ms", config.api.http.connect_timeout_ms),
    );
    output::field("Attempts", config.api.http.retry_max_attempts);
    output::field("Backoff", format!("{}ms", config.api.http.retry_backoff_ms));

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    let config = Config::load(path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "path": path.display().to_string(),
            "valid": true,
        }));
        return Ok(());
    }

    output::section("Config Validation");
    output::field("Path", path.display());
    output::success("Config file is valid");
    if config.api.api_key.is_none() {
        output::warning(&format!("{API_KEY_ENV} not set"));
    }
    output::field(
        "Next",
        format!("chiplead config show -c {}", path.display()),
    );

    Ok(())
}
