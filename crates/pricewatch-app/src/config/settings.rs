//! Settings loader for `config.toml`

use std::path::{Path, PathBuf};

use pricewatch_core::prelude::*;
use url::Url;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "pricewatch";

const DEFAULT_CONFIG: &str = r#"# pricewatch configuration

[server]
# Base URL of the alert backend
base_url = "http://127.0.0.1:10000"
# Client-side request timeout in milliseconds (0 = none)
request_timeout_ms = 0
# Backend endpoint that relays the channel test message
test_endpoint = "/api/test"

[ui]
# Tab shown at startup: rules, notifications or logs
default_tab = "rules"
# How long status-line notices stay visible
notice_timeout_ms = 4000

[behavior]
# Fetch the activity log at startup
load_logs_on_start = true
"#;

/// Platform config file location (`<config dir>/pricewatch/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// A missing, unreadable or invalid file falls back to defaults; problems are
/// logged rather than returned.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists yet.
///
/// Returns `true` when a file was created.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);
    Ok(true)
}

/// Parse and validate a backend base URL
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| Error::invalid_url(raw, e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(Error::invalid_url(
                raw,
                format!("unsupported scheme '{}'", other),
            ))
        }
    }

    if url.cannot_be_a_base() {
        return Err(Error::invalid_url(raw, "URL cannot be used as a base"));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::Tab;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(&temp.path().join(CONFIG_FILENAME));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            r#"
[server]
base_url = "https://alerts.example.com"

[ui]
default_tab = "notifications"
notice_timeout_ms = 1000

[behavior]
load_logs_on_start = false
"#,
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.server.base_url, "https://alerts.example.com");
        assert_eq!(settings.ui.default_tab, Tab::Notifications);
        assert_eq!(settings.ui.notice_timeout_ms, 1000);
        assert!(!settings.behavior.load_logs_on_start);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_init_config_file_creates_parseable_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILENAME);

        assert!(init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_init_config_file_is_idempotent() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[ui]\ndefault_tab = \"logs\"\n").unwrap();

        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path).ui.default_tab, Tab::Logs);
    }

    #[test]
    fn test_default_config_path_is_namespaced() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("pricewatch/config.toml"));
        }
    }

    #[test]
    fn test_parse_base_url() {
        assert!(parse_base_url("http://localhost:10000").is_ok());
        assert!(parse_base_url("https://alerts.example.com/prefix/").is_ok());
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(matches!(
            parse_base_url("localhost:10000"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse_base_url("ftp://example.com"),
            Err(Error::InvalidUrl { .. })
        ));
        assert!(parse_base_url("not a url").is_err());
    }
}
