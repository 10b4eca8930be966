//! Core interaction model for Aero.
//!
//! Everything that decides *what happens* when a key is pressed lives here:
//! the [`Session`] reducer, the search and command parsers, and the
//! [`Shell`] driver that hands effects to the external collaborators
//! ([`CommandRunner`], [`QueryAssistant`]). Nothing in this crate touches the
//! terminal.

pub mod assistant;
pub mod command;
pub mod config;
pub mod runner;
pub mod search;
pub mod session;
pub mod shell;
pub mod theme;

pub use assistant::{HttpAssistant, OfflineAssistant, QueryAssistant};
pub use command::{Command, Invocation};
pub use runner::{CommandOutput, CommandRunner, RunError, SystemRunner};
pub use search::SearchQuery;
pub use session::{Dispatch, Effect, Key, LineKind, Mode, Session, TranscriptLine};
pub use shell::{Flow, Shell};
pub use theme::Theme;
