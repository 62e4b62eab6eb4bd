//! Runtime configuration.
//!
//! Everything the shell personalizes lives here: the prompt identity, the
//! site base URL the navigation bridge opens against, and the boot-sequence
//! timeout. Loaded from an optional JSON file; missing fields fall back to
//! defaults, a missing file falls back to the full default config.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Host shown in the prompt and the session banner.
    #[serde(default = "default_host")]
    pub host: String,

    /// System name used by the banner and the boot sequence.
    #[serde(default = "default_system_name")]
    pub system_name: String,

    /// User shown in the prompt and the password prompt.
    #[serde(default = "default_user")]
    pub user: String,

    /// Base URL routes are joined onto when `open` navigates.
    #[serde(default = "default_site_base_url")]
    pub site_base_url: String,

    /// Boot overlay auto-dismiss timeout, in milliseconds.
    #[serde(default = "default_boot_timeout_ms")]
    pub boot_timeout_ms: u64,
}

fn default_host() -> String {
    "sicheng.dev".to_string()
}

fn default_system_name() -> String {
    "SichengOS".to_string()
}

fn default_user() -> String {
    "guest".to_string()
}

fn default_site_base_url() -> String {
    "https://sicheng.dev".to_string()
}

fn default_boot_timeout_ms() -> u64 {
    1800
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            system_name: default_system_name(),
            user: default_user(),
            site_base_url: default_site_base_url(),
            boot_timeout_ms: default_boot_timeout_ms(),
        }
    }
}

impl Config {
    pub fn boot_timeout(&self) -> Duration {
        Duration::from_millis(self.boot_timeout_ms)
    }

    /// Load from a JSON file, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no config file given, using defaults");
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = serde_json::from_str(r#"{"host": "example.dev"}"#).unwrap();
        assert_eq!(config.host, "example.dev");
        assert_eq!(config.user, "guest");
        assert_eq!(config.boot_timeout_ms, 1800);
    }

    #[test]
    fn load_without_path_returns_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.host, "sicheng.dev");
    }

    #[test]
    fn load_reads_a_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user": "visitor", "boot_timeout_ms": 250}}"#).unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.user, "visitor");
        assert_eq!(config.boot_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(Config::load(Some(file.path())).is_err());
    }
}
