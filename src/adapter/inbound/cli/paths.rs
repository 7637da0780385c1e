//! Path utilities for chiplead.
//!
//! Local state lives under `~/.chiplead/`:
//! - `~/.chiplead/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the chiplead home directory (`~/.chiplead/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".chiplead")
}

/// Returns the default config file path (`~/.chiplead/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_chiplead_home() {
        let config = default_config();

        assert!(home_dir().ends_with(".chiplead"));
        assert!(config.starts_with(home_dir()));
        assert!(config.ends_with("config.toml"));
    }
}
