//! Transcript lines.

/// What produced a transcript line; the renderer styles by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Echo of a submitted command line (`aero > ...`).
    Prompt,
    /// Captured output of an external command.
    Output,
    /// Error message from an external command.
    Error,
    /// Built-in command output (help text).
    Info,
    /// Echo of a submitted search (`search > ...`).
    SearchPrompt,
    /// A line returned by the query assistant.
    SearchResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptLine {
    pub kind: LineKind,
    pub text: String,
}

impl TranscriptLine {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}
