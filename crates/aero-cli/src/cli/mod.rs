//! CLI entry and dispatch.

use std::path::PathBuf;

use aero_core::Theme;
use aero_core::config::{self, paths};
use anyhow::{Context, Result};
use clap::Parser;

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "aero")]
#[command(version)]
#[command(about = "Minimal terminal shell with a search mode")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file to use instead of $AERO_HOME/config.toml
    #[arg(long, value_name = "PATH", env = "AERO_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Theme to start with (overrides config)
    #[arg(long, value_name = "THEME")]
    theme: Option<Theme>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(paths::config_path);

    match cli.command {
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
        None => {
            let _guard = logging::init()?;
            let config = config::Config::load_from(&config_path)
                .with_context(|| format!("load config from {}", config_path.display()))?;
            commands::shell::run(config, cli.theme)
        }
    }
}
