//! Built-in command parsing.
//!
//! Submitted Normal-mode lines are parsed into a [`Command`] before anything
//! runs. Built-ins match the whole line exactly (case-sensitive); everything
//! else becomes an external [`Invocation`].

use crate::theme::Theme;

/// Fixed help text printed by `help`.
pub const HELP_LINES: &[&str] = &[
    "Available commands:",
    "  help         - show this message",
    "  exit         - leave Aero",
    "  theme dark   - dark theme",
    "  theme light  - light theme",
];

/// A program name plus arguments, split on whitespace.
///
/// Quoting and escaping are not supported: `echo "a b"` passes `"a` and `b"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Splits a line on whitespace. Returns `None` for a blank line.
    pub fn from_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

/// A parsed Normal-mode submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing was typed.
    Empty,
    Exit,
    Help,
    SetTheme(Theme),
    External(Invocation),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        match line {
            "exit" => Command::Exit,
            "help" => Command::Help,
            "theme dark" => Command::SetTheme(Theme::Dark),
            "theme light" => Command::SetTheme(Theme::Light),
            _ => Invocation::from_line(line).map_or(Command::Empty, Command::External),
        }
    }
}
