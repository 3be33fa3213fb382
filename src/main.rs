//! pricewatch - terminal control panel for a price-alert backend
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};
use pricewatch_app::config::{self, Settings};
use pricewatch_app::tabs::Tab;
use pricewatch_core::logging;
use tracing::info;

/// pricewatch - manage price-alert rules, the notification channel and the
/// backend activity log
#[derive(Parser, Debug)]
#[command(name = "pricewatch", version)]
#[command(about = "Terminal control panel for a price-alert backend", long_about = None)]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Config file path (default: <config dir>/pricewatch/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tab shown at startup
    #[arg(long, value_name = "TAB")]
    tab: Option<Tab>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => config::default_config_path()
                .ok_or_else(|| eyre!("No config directory on this platform; pass --config")),
        }
    }

    /// Apply CLI overrides on top of the loaded file
    fn apply(&self, settings: &mut Settings) -> Result<()> {
        if let Some(server) = &self.server {
            config::parse_base_url(server)?;
            settings.server.base_url = server.clone();
        }
        if let Some(tab) = self.tab {
            settings.ui.default_tab = tab;
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let config_path = args.config_path()?;

    if args.init_config {
        if config::init_config_file(&config_path)? {
            eprintln!("Created {}", config_path.display());
        } else {
            eprintln!("{} already exists", config_path.display());
        }
        return Ok(());
    }

    logging::init()?;

    let mut settings = config::load_settings(&config_path);
    args.apply(&mut settings)?;
    info!("Backend: {}", settings.server.base_url);

    pricewatch_tui::run(settings).await?;
    Ok(())
}
