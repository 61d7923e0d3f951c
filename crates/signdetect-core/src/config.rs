//! Client configuration.
//!
//! Configuration can come from a TOML file, environment variables, or the
//! built-in defaults (which match the backend's development setup).
//! Environment variables take priority over file values.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

const ENV_API_BASE_URL: &str = "SIGNDETECT_API_URL";
const ENV_POLL_INTERVAL_MS: &str = "SIGNDETECT_POLL_INTERVAL_MS";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the detection backend, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Period between prediction polls while a session is active.
    /// Any positive value is valid; the default mirrors the web dashboard.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Loads configuration from a TOML file, then applies environment
    /// variable overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config.with_env_overrides())
    }

    /// The conventional config file location
    /// (`~/.config/signdetect/config.toml`), if a config directory exists
    /// on this platform.
    pub fn default_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("signdetect").join("config.toml"))
    }

    fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(ENV_API_BASE_URL)
            && !url.is_empty()
        {
            self.api_base_url = url;
        }
        if let Ok(interval) = env::var(ENV_POLL_INTERVAL_MS)
            && let Ok(ms) = interval.parse::<u64>()
            && ms > 0
        {
            self.poll_interval_ms = ms;
        }
        self
    }

    /// The poll period as a `Duration`.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_dashboard() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.poll_interval_ms, 2000);
        assert_eq!(config.poll_interval(), Duration::from_millis(2000));
    }

    #[test]
    fn load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_url = \"https://signdetect.example.com/api\"\npoll_interval_ms = 500"
        )
        .unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://signdetect.example.com/api");
        assert_eq!(config.poll_interval_ms, 500);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_interval_ms = 250").unwrap();

        let config = ClientConfig::load(file.path()).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8080/api");
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "poll_interval_ms = \"soon\"").unwrap();

        let err = ClientConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, crate::SignDetectError::Config(_)));
    }
}
