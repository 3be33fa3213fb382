//! Configuration types for pricewatch
//!
//! Defines `Settings` (the `config.toml` file) and its sections.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::tabs::Tab;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Where the alert backend lives and how to talk to it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Base URL the `/api/...` endpoints are joined onto
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in milliseconds; 0 disables the client timeout
    #[serde(default)]
    pub request_timeout_ms: u64,

    /// Backend relay that delivers the channel test message
    #[serde(default = "default_test_endpoint")]
    pub test_endpoint: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: 0,
            test_endpoint: default_test_endpoint(),
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:10000".to_string()
}

fn default_test_endpoint() -> String {
    "/api/test".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Tab shown at startup
    #[serde(default)]
    pub default_tab: Tab,

    /// How long a status-line notice stays visible
    #[serde(default = "default_notice_timeout_ms")]
    pub notice_timeout_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            default_tab: Tab::default(),
            notice_timeout_ms: default_notice_timeout_ms(),
        }
    }
}

impl UiSettings {
    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }
}

fn default_notice_timeout_ms() -> u64 {
    4000
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Fetch the log feed at startup instead of waiting for a refresh
    #[serde(default = "default_true")]
    pub load_logs_on_start: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            load_logs_on_start: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.server.base_url, "http://127.0.0.1:10000");
        assert_eq!(settings.server.request_timeout(), None);
        assert_eq!(settings.server.test_endpoint, "/api/test");
        assert_eq!(settings.ui.default_tab, Tab::Rules);
        assert!(settings.behavior.load_logs_on_start);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[server]
request_timeout_ms = 2500

[ui]
default_tab = "logs"
"#,
        )
        .unwrap();

        assert_eq!(settings.server.base_url, "http://127.0.0.1:10000");
        assert_eq!(
            settings.server.request_timeout(),
            Some(Duration::from_millis(2500))
        );
        assert_eq!(settings.ui.default_tab, Tab::Logs);
        assert_eq!(settings.ui.notice_timeout_ms, 4000);
    }

    #[test]
    fn test_unknown_tab_is_rejected() {
        let result: Result<Settings, _> = toml::from_str("[ui]\ndefault_tab = \"charts\"\n");
        assert!(result.is_err());
    }
}
