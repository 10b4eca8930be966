//! Interactive shell command handler.

use aero_core::Theme;
use aero_core::config::Config;
use anyhow::Result;
use tracing::info;

use crate::modes;

pub fn run(mut config: Config, theme: Option<Theme>) -> Result<()> {
    if let Some(theme) = theme {
        config.theme = theme;
    }
    info!(theme = %config.theme, search_key = %config.search_key, "starting shell");
    modes::run_interactive(&config)
}
