//! Command history with ↑/↓ navigation.

/// Previously submitted Normal-mode lines plus a browse cursor.
///
/// The cursor ranges over `0..=len`; `len` is the "fresh line" position where
/// the input buffer holds live text rather than a history entry.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry and moves the cursor to the fresh line.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = self.entries.len();
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Steps back one entry.
    ///
    /// Returns the entry to load, or `None` when already at the oldest entry
    /// (state is left unchanged).
    pub fn older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Steps forward one entry.
    ///
    /// Returns the entry to load, or `None` when the cursor reaches (or stays
    /// on) the fresh line and the input should be cleared.
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries.get(self.cursor).map(String::as_str)
        } else {
            self.cursor = self.entries.len();
            None
        }
    }
}
