//! Full-screen terminal front end for Aero.

pub mod keymap;
pub mod palette;
pub mod render;
pub mod runtime;
pub mod terminal;

use std::io::{IsTerminal, stdout};

use aero_core::config::Config;
use aero_core::{HttpAssistant, OfflineAssistant, QueryAssistant, Session, Shell, SystemRunner};
use anyhow::{Context, Result};
pub use keymap::KeyMap;
pub use runtime::TuiRuntime;
use tracing::info;

/// Runs the interactive shell until the user exits.
///
/// # Errors
/// Returns an error if stdout is not a terminal, the configuration cannot be
/// turned into collaborators, or the terminal fails.
pub fn run_interactive(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!("Aero requires an interactive terminal.");
    }

    let keymap = KeyMap::new(&config.search_key)
        .with_context(|| format!("Invalid search_key {:?}", config.search_key))?;
    let runner = SystemRunner::new(config.command_timeout())?;
    let assistant = build_assistant(config)?;
    let shell = Shell::new(Session::with_options(config.session_options()), runner, assistant);

    let mut runtime = TuiRuntime::new(shell, keymap)?;
    runtime.run()
}

fn build_assistant(config: &Config) -> Result<Box<dyn QueryAssistant>> {
    match config.assistant.endpoint.as_deref() {
        Some(endpoint) => {
            info!(endpoint, "using http assistant");
            let assistant = HttpAssistant::new(endpoint, config.assistant.timeout())?;
            Ok(Box::new(assistant))
        }
        None => Ok(Box::new(OfflineAssistant)),
    }
}
