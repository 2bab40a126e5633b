// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! Settings live in a TOML file under the platform config directory (created
//! with defaults on first run). Command-line flags override them per run.

use std::path::Path;
use std::time::Duration;

use netstatus_client::fetch::DEFAULT_STATUS_PATH;
use netstatus_client::labels::{DEFAULT_DOWN_LABEL, DEFAULT_SPEED_SUFFIX, DEFAULT_UP_LABEL};
use netstatus_client::{FetcherConfig, PollerConfig};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "netstatus-panel";
const CONFIG_NAME: &str = "config";

/// Shortest poll interval accepted.
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Display strings the page template embeds for the poller to read.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// Text shown when a link is up
    #[serde(default = "default_up")]
    pub up: String,

    /// Text shown when a link is down
    #[serde(default = "default_down")]
    pub down: String,

    /// Unit appended to link speeds
    #[serde(default = "default_speed_suffix")]
    pub speed_suffix: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            up: default_up(),
            down: default_down(),
            speed_suffix: default_speed_suffix(),
        }
    }
}

/// Application configuration stored in TOML format
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Configuration schema version
    #[serde(default = "default_config_version")]
    pub config_version: u32,

    /// Status server base URL (scheme, host, optional port)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Status endpoint path
    #[serde(default = "default_status_path")]
    pub status_path: String,

    /// Milliseconds between polls
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Localized labels
    #[serde(default)]
    pub labels: LabelConfig,

    /// Interfaces the panel has rows for
    #[serde(default = "default_interfaces")]
    pub interfaces: Vec<String>,
}

// Default value functions for serde
fn default_config_version() -> u32 {
    1
}

fn default_base_url() -> String {
    "http://localhost".to_string()
}

fn default_status_path() -> String {
    DEFAULT_STATUS_PATH.to_string()
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_request_timeout_ms() -> u64 {
    5000
}

fn default_interfaces() -> Vec<String> {
    vec!["eth0".to_string()]
}

fn default_up() -> String {
    DEFAULT_UP_LABEL.to_string()
}

fn default_down() -> String {
    DEFAULT_DOWN_LABEL.to_string()
}

fn default_speed_suffix() -> String {
    DEFAULT_SPEED_SUFFIX.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_version: default_config_version(),
            base_url: default_base_url(),
            status_path: default_status_path(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
            labels: LabelConfig::default(),
            interfaces: default_interfaces(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Load configuration from an explicit file, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self, confy::ConfyError> {
        confy::load_path(path)
    }

    /// Get the config file path for display to user
    pub fn get_config_path() -> Result<std::path::PathBuf, confy::ConfyError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), String> {
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(format!(
                "poll_interval_ms must be at least {MIN_POLL_INTERVAL_MS} (got {})",
                self.poll_interval_ms
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err("request_timeout_ms must be greater than 0".to_string());
        }
        if let Some(name) = self.interfaces.iter().find(|n| !is_valid_interface_name(n)) {
            return Err(format!("invalid interface name '{name}'"));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn poller_config(&self) -> PollerConfig {
        PollerConfig {
            interval: self.poll_interval(),
            ..Default::default()
        }
    }

    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            base_url: self.base_url.clone(),
            path: self.status_path.clone(),
            timeout: Duration::from_millis(self.request_timeout_ms),
            ..Default::default()
        }
    }
}

// Names become element ids, so keep them to id-safe characters
fn is_valid_interface_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(1000));
        assert_eq!(config.interfaces, vec!["eth0".to_string()]);
        assert_eq!(config.labels.speed_suffix, "Mbps");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml_from_str(
            r#"
            base_url = "http://10.0.0.1"
            interfaces = ["wan0", "lan0"]

            [labels]
            up = "Actif"
            "#,
        );

        assert_eq!(config.base_url, "http://10.0.0.1");
        assert_eq!(config.interfaces, vec!["wan0".to_string(), "lan0".to_string()]);
        assert_eq!(config.labels.up, "Actif");
        assert_eq!(config.labels.down, "Down");
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.status_path, "/status/network.json");
    }

    #[test]
    fn test_load_from_creates_file() {
        let path = std::env::temp_dir()
            .join(format!("netstatus-panel-{}", Uuid::new_v4()))
            .join("config.toml");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig {
            poll_interval_ms: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.poll_interval_ms = 1000;
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());

        config.request_timeout_ms = 5000;
        config.interfaces = vec!["eth0".to_string(), "eth 1".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.contains("eth 1"));
    }

    #[test]
    fn test_interface_names() {
        assert!(is_valid_interface_name("eth0"));
        assert!(is_valid_interface_name("br-lan"));
        assert!(is_valid_interface_name("eth0.100"));
        assert!(!is_valid_interface_name(""));
        assert!(!is_valid_interface_name("eth0#x"));
    }

    #[test]
    fn test_fetcher_config() {
        let config = AppConfig {
            base_url: "http://router".to_string(),
            request_timeout_ms: 2500,
            ..Default::default()
        };
        let fetcher = config.fetcher_config();
        assert_eq!(fetcher.base_url, "http://router");
        assert_eq!(fetcher.path, "/status/network.json");
        assert_eq!(fetcher.timeout, Duration::from_millis(2500));
    }

    fn toml_from_str(text: &str) -> AppConfig {
        // confy has no from-string entry point; round-trip through a file
        let path = std::env::temp_dir().join(format!("netstatus-panel-{}.toml", Uuid::new_v4()));
        std::fs::write(&path, text).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        config
    }
}
