use std::fs;

use chiplead::error::{ConfigError, Error};
use chiplead::infrastructure::config::settings::Config;

fn load(contents: &str) -> Result<Config, Error> {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    Config::load(&path)
}

#[test]
fn shipped_example_config_loads() {
    let template = include_str!("../config.toml.example");
    let config = Config::parse_toml_with_api_key(template, None).expect("example must validate");

    assert_eq!(config.api.http.retry_max_attempts, 3);
    assert_eq!(config.logging.format, "pretty");
    assert!(config.api.api_key.is_none());
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[api]
base_url = "https://league.example/rest/v1"
organization_id = "3"

[api.http]
timeout_ms = 0
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "api.http.timeout_ms",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(config) => panic!(
            "Expected zero timeout to be rejected, got {}",
            config.api.http.timeout_ms
        ),
    }
}

#[test]
fn config_rejects_malformed_base_url() {
    let toml = r#"
[api]
base_url = "not a url"
organization_id = "3"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "api.base_url",
            ..
        }))
    ));
}

#[test]
fn config_rejects_bad_log_level() {
    let toml = r#"
[api]
base_url = "https://league.example/rest/v1"
organization_id = "3"

[logging]
level = "chiplead=loud=yes"
"#;

    assert!(matches!(
        load(toml),
        Err(Error::Config(ConfigError::InvalidValue {
            field: "logging.level",
            ..
        }))
    ));
}

#[test]
fn api_key_in_file_is_ignored() {
    let toml = r#"
[api]
base_url = "https://league.example/rest/v1"
organization_id = "3"
api_key = "from-file"
"#;

    let config = Config::parse_toml_with_api_key(toml, None).expect("valid config");
    assert!(config.api.api_key.is_none());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let result = Config::load(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::Config(ConfigError::ReadFile(_)))));
}
