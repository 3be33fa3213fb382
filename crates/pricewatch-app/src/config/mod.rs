//! Configuration file parsing for pricewatch
//!
//! Supports `<config dir>/pricewatch/config.toml`, overridable from the CLI.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, parse_base_url};
pub use types::*;
