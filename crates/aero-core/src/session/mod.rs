//! Interaction state and its reducer.
//!
//! ## State Hierarchy
//!
//! ```text
//! Session
//! ├── mode: Mode            (Normal | Search)
//! ├── input: String         (Normal-mode line)
//! ├── search: String        (Search-mode line)
//! ├── instruction: Option   (instruction of the last search, display only)
//! ├── transcript: Vec<TranscriptLine>
//! ├── history: History      (submitted lines + browse cursor)
//! └── theme: Theme
//! ```
//!
//! `reducer.rs` maps keys to transitions and returns an [`Effect`];
//! `dispatch.rs` decides what a submitted Normal-mode line does and records
//! collaborator results. Neither performs I/O.

mod dispatch;
mod history;
mod reducer;
mod transcript;

pub use dispatch::Dispatch;
pub use history::History;
pub use transcript::{LineKind, TranscriptLine};

use crate::search::{DEFAULT_INSTRUCTION, SearchQuery};
use crate::theme::Theme;

/// Prompt shown before Normal-mode input and its transcript echo.
pub const SHELL_PROMPT: &str = "aero > ";

/// Prompt shown before Search-mode input and its transcript echo.
pub const SEARCH_PROMPT: &str = "search > ";

/// Active interaction context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Search,
}

/// Discrete key events understood by the reducer.
///
/// The terminal layer translates raw key presses into these; the mapping of
/// physical keys (notably the search trigger) is configurable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Esc / Ctrl+C: leave Search mode, or quit from Normal mode.
    Cancel,
    /// The bound search trigger.
    EnterSearch,
    /// Enter.
    Submit,
    Backspace,
    HistoryPrev,
    HistoryNext,
    /// A single printable character.
    Char(char),
    /// Anything the reducer does not handle.
    Other,
}

/// Effects returned by the reducer for the driver to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A Normal-mode line was submitted; dispatch it.
    RunLine(String),
    /// A search was submitted; ask the assistant.
    RunQuery(SearchQuery),
    Quit,
}

/// Construction options for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub theme: Theme,
    /// Instruction used for searches without a `|` suffix.
    pub default_instruction: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            default_instruction: DEFAULT_INSTRUCTION.to_string(),
        }
    }
}

/// All mutable interaction state for one run of the shell.
#[derive(Debug)]
pub struct Session {
    mode: Mode,
    input: String,
    search: String,
    instruction: Option<String>,
    transcript: Vec<TranscriptLine>,
    history: History,
    theme: Theme,
    default_instruction: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session in Normal mode with the default theme.
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            mode: Mode::Normal,
            input: String::new(),
            search: String::new(),
            instruction: None,
            transcript: Vec::new(),
            history: History::new(),
            theme: options.theme,
            default_instruction: options.default_instruction,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Normal-mode input line.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Search-mode input line.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Instruction of the last submitted search, while search mode is open.
    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    /// The buffer currently receiving keystrokes.
    pub fn active_buffer(&self) -> &str {
        match self.mode {
            Mode::Normal => &self.input,
            Mode::Search => &self.search,
        }
    }

    pub fn transcript(&self) -> &[TranscriptLine] {
        &self.transcript
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Appends a line to the transcript.
    pub fn push_line(&mut self, kind: LineKind, text: impl Into<String>) {
        self.transcript.push(TranscriptLine::new(kind, text));
    }

    fn active_buffer_mut(&mut self) -> &mut String {
        match self.mode {
            Mode::Normal => &mut self.input,
            Mode::Search => &mut self.search,
        }
    }

    fn clear_search_state(&mut self) {
        self.search.clear();
        self.instruction = None;
    }
}
