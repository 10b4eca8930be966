//! TUI runtime: owns the terminal and runs the event loop.
//!
//! Each iteration draws the session, blocks for one terminal event, maps it
//! to reducer keys and hands them to the [`Shell`], which executes any
//! resulting effect before the next draw.

use std::io::Stdout;

use aero_core::{CommandRunner, Flow, QueryAssistant, Shell};
use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::keymap::KeyMap;
use crate::render::Renderer;
use crate::terminal;

/// Full-screen runtime. The terminal is restored on drop.
pub struct TuiRuntime<R, A> {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    shell: Shell<R, A>,
    keymap: KeyMap,
    renderer: Renderer,
}

impl<R: CommandRunner, A: QueryAssistant> TuiRuntime<R, A> {
    /// Takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into raw mode.
    pub fn new(shell: Shell<R, A>, keymap: KeyMap) -> Result<Self> {
        let renderer = Renderer::new(shell.session().theme(), keymap.search_label());
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal()?;
        Ok(Self {
            terminal,
            shell,
            keymap,
            renderer,
        })
    }

    /// Runs until the shell asks to quit.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        info!("tui started");
        loop {
            self.renderer.set_theme(self.shell.session().theme());
            let (renderer, session) = (&self.renderer, self.shell.session());
            self.terminal
                .draw(|frame| renderer.render(session, frame))
                .context("Failed to draw frame")?;

            let event = event::read().context("Failed to read terminal event")?;
            if self.apply(&event) == Flow::Quit {
                info!("tui exiting");
                return Ok(());
            }
        }
    }

    fn apply(&mut self, event: &event::Event) -> Flow {
        let keys = self.keymap.keys_for(event, self.shell.session().mode());
        if keys.len() > 1 {
            debug!(count = keys.len(), "pasted keys");
        }
        for key in keys {
            if self.shell.handle(key) == Flow::Quit {
                return Flow::Quit;
            }
        }
        Flow::Continue
    }
}

impl<R, A> Drop for TuiRuntime<R, A> {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
