//! Terminal key mapping.
//!
//! Translates crossterm events into the reducer's [`Key`]s. The search
//! trigger is configurable; everything else is fixed.

use std::str::FromStr;

use aero_core::{Key, Mode};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyBindingError {
    #[error("key binding is empty")]
    Empty,
    #[error("unknown modifier '{0}' (expected ctrl or alt)")]
    UnknownModifier(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// A single key plus modifiers, parsed from strings like `ctrl+k` or `f2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Returns true for an unmodified character binding such as `/`.
    ///
    /// Such a binding steals the character from the Normal-mode input.
    pub fn is_plain_char(&self) -> bool {
        matches!(self.code, KeyCode::Char(_)) && self.modifiers.is_empty()
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        // Shift is implied by the character itself ('?' vs '/').
        let mods = key.modifiers.difference(KeyModifiers::SHIFT);
        let code = match key.code {
            KeyCode::Char(c) if !self.modifiers.is_empty() => KeyCode::Char(c.to_ascii_lowercase()),
            code => code,
        };
        code == self.code && mods == self.modifiers
    }
}

impl FromStr for KeyBinding {
    type Err = KeyBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(KeyBindingError::Empty);
        }
        // A lone "+" is a character binding, not a separator.
        let (prefix, key) = match s.rsplit_once('+') {
            Some((prefix, key)) if !key.is_empty() => (Some(prefix), key),
            _ => (None, s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in prefix.into_iter().flat_map(|p| p.split('+')) {
            match part.trim().to_ascii_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" | "meta" => modifiers |= KeyModifiers::ALT,
                other => return Err(KeyBindingError::UnknownModifier(other.to_string())),
            }
        }

        let code = parse_key_code(key, !modifiers.is_empty())?;
        Ok(Self { code, modifiers })
    }
}

fn parse_key_code(key: &str, modified: bool) -> Result<KeyCode, KeyBindingError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        let c = if modified { c.to_ascii_lowercase() } else { c };
        return Ok(KeyCode::Char(c));
    }
    let lower = key.to_ascii_lowercase();
    match lower.as_str() {
        "tab" => Ok(KeyCode::Tab),
        "space" => Ok(KeyCode::Char(' ')),
        "insert" => Ok(KeyCode::Insert),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        _ => lower
            .strip_prefix('f')
            .and_then(|n| n.parse::<u8>().ok())
            .filter(|n| (1..=12).contains(n))
            .map(KeyCode::F)
            .ok_or_else(|| KeyBindingError::UnknownKey(key.to_string())),
    }
}

/// Maps terminal events to reducer keys.
#[derive(Debug, Clone)]
pub struct KeyMap {
    search: KeyBinding,
    search_label: String,
}

impl KeyMap {
    /// Creates a key map with the given search trigger.
    ///
    /// # Errors
    /// Returns an error if the binding cannot be parsed.
    pub fn new(search_key: &str) -> Result<Self, KeyBindingError> {
        Ok(Self {
            search: search_key.parse()?,
            search_label: search_key.trim().to_string(),
        })
    }

    /// Human-readable search trigger for the status line.
    pub fn search_label(&self) -> &str {
        &self.search_label
    }

    /// Translates one terminal event into zero or more keys.
    pub fn keys_for(&self, event: &Event, mode: Mode) -> Vec<Key> {
        match event {
            Event::Key(key) => vec![self.translate(key, mode)],
            Event::Paste(text) => self.paste_keys(text, mode),
            _ => Vec::new(),
        }
    }

    /// Turns pasted text into characters for the active buffer.
    ///
    /// Line breaks and tabs become spaces so pasted lines stay separated.
    /// A plain-character search trigger is dropped in Normal mode.
    fn paste_keys(&self, text: &str, mode: Mode) -> Vec<Key> {
        let reserved = match self.search.code {
            KeyCode::Char(c) if mode == Mode::Normal && self.search.is_plain_char() => Some(c),
            _ => None,
        };
        text.trim_end_matches(['\n', '\r'])
            .replace("\r\n", "\n")
            .chars()
            .filter_map(|c| match c {
                '\n' | '\r' | '\t' => Some(' '),
                c if c.is_control() || Some(c) == reserved => None,
                c => Some(c),
            })
            .map(Key::Char)
            .collect()
    }

    /// Translates a key press.
    pub fn translate(&self, key: &KeyEvent, mode: Mode) -> Key {
        if key.kind == KeyEventKind::Release {
            return Key::Other;
        }
        let plain_in_search = mode == Mode::Search && self.search.is_plain_char();
        if self.search.matches(key) && !plain_in_search {
            return Key::EnterSearch;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => Key::Cancel,
            KeyCode::Char('c') if ctrl => Key::Cancel,
            KeyCode::Enter => Key::Submit,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Up => Key::HistoryPrev,
            KeyCode::Down => Key::HistoryNext,
            KeyCode::Char(c) if !ctrl && !alt && !c.is_control() => Key::Char(c),
            _ => Key::Other,
        }
    }
}
