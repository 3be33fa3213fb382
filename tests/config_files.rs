//! Config file handling as the binary uses it: write the default file, edit
//! it, and load it back.

use pricewatch_app::config::{init_config_file, load_settings, parse_base_url, Settings};
use pricewatch_app::tabs::Tab;
use tempfile::tempdir;

#[test]
fn init_config_writes_loadable_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("nested").join("config.toml");

    assert!(init_config_file(&path).unwrap());
    assert!(!init_config_file(&path).unwrap());
    assert_eq!(load_settings(&path), Settings::default());
}

#[test]
fn edited_file_overrides_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[server]
base_url = "https://alerts.example.com/panel/"

[ui]
default_tab = "logs"
"#,
    )
    .unwrap();

    let settings = load_settings(&path);
    assert_eq!(settings.server.base_url, "https://alerts.example.com/panel/");
    assert_eq!(settings.ui.default_tab, Tab::Logs);
    assert!(settings.behavior.load_logs_on_start);
    assert!(parse_base_url(&settings.server.base_url).is_ok());
}

#[test]
fn broken_file_falls_back_to_defaults() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[server\nbase_url = ").unwrap();

    assert_eq!(load_settings(&path), Settings::default());
}
