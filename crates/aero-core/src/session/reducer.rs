//! Key-event reducer.
//!
//! All key-driven state transitions happen here. The reducer never performs
//! I/O; work that needs a collaborator is returned as an [`Effect`].

use tracing::debug;

use super::{Effect, Key, LineKind, Mode, SEARCH_PROMPT, SHELL_PROMPT, Session};
use crate::search::parse_search;

impl Session {
    /// Applies one key event and returns the effect for the driver to run.
    pub fn reduce(&mut self, key: Key) -> Effect {
        match key {
            Key::Cancel => self.cancel(),
            Key::EnterSearch => {
                if self.mode == Mode::Normal {
                    debug!("entering search mode");
                    self.mode = Mode::Search;
                    self.clear_search_state();
                }
                Effect::None
            }
            Key::Submit => match self.mode {
                Mode::Search => self.submit_search(),
                Mode::Normal => self.submit_line(),
            },
            Key::Backspace => {
                self.active_buffer_mut().pop();
                Effect::None
            }
            Key::HistoryPrev => {
                if self.mode == Mode::Normal
                    && let Some(entry) = self.history.older()
                {
                    self.input = entry.to_string();
                }
                Effect::None
            }
            Key::HistoryNext => {
                if self.mode == Mode::Normal {
                    match self.history.newer() {
                        Some(entry) => self.input = entry.to_string(),
                        None => self.input.clear(),
                    }
                }
                Effect::None
            }
            Key::Char(c) => {
                self.active_buffer_mut().push(c);
                Effect::None
            }
            Key::Other => Effect::None,
        }
    }

    fn cancel(&mut self) -> Effect {
        match self.mode {
            Mode::Search => {
                debug!("leaving search mode");
                self.mode = Mode::Normal;
                self.clear_search_state();
                Effect::None
            }
            Mode::Normal => Effect::Quit,
        }
    }

    fn submit_search(&mut self) -> Effect {
        let parsed = parse_search(&self.search, &self.default_instruction);
        self.push_line(
            LineKind::SearchPrompt,
            format!("{SEARCH_PROMPT}{}", parsed.query),
        );
        self.search.clear();
        self.instruction = Some(parsed.instruction.clone());
        debug!(query = %parsed.query, instruction = %parsed.instruction, "search submitted");
        Effect::RunQuery(parsed)
    }

    fn submit_line(&mut self) -> Effect {
        let line = std::mem::take(&mut self.input);
        self.push_line(LineKind::Prompt, format!("{SHELL_PROMPT}{line}"));
        if !line.is_empty() {
            self.history.push(line.clone());
        }
        debug!(%line, "line submitted");
        Effect::RunLine(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{DEFAULT_INSTRUCTION, SearchQuery};
    use crate::session::SessionOptions;

    fn type_str(session: &mut Session, text: &str) {
        for c in text.chars() {
            assert_eq!(session.reduce(Key::Char(c)), Effect::None);
        }
    }

    fn submit(session: &mut Session, text: &str) -> Effect {
        type_str(session, text);
        session.reduce(Key::Submit)
    }

    fn texts(session: &Session) -> Vec<&str> {
        session
            .transcript()
            .iter()
            .map(|line| line.text.as_str())
            .collect()
    }

    #[test]
    fn test_chars_accumulate_in_order() {
        let mut session = Session::new();
        type_str(&mut session, "ls -la ✓");
        assert_eq!(session.input(), "ls -la ✓");
        assert_eq!(session.search(), "");
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.reduce(Key::Backspace), Effect::None);
        assert_eq!(session.input(), "");

        session.reduce(Key::EnterSearch);
        assert_eq!(session.reduce(Key::Backspace), Effect::None);
        assert_eq!(session.search(), "");
    }

    #[test]
    fn test_backspace_removes_last_char_of_active_buffer() {
        let mut session = Session::new();
        type_str(&mut session, "pwdé");
        session.reduce(Key::Backspace);
        assert_eq!(session.input(), "pwd");

        session.reduce(Key::EnterSearch);
        type_str(&mut session, "ab");
        session.reduce(Key::Backspace);
        assert_eq!(session.search(), "a");
        assert_eq!(session.input(), "pwd");
    }

    #[test]
    fn test_escape_in_normal_mode_quits_every_time() {
        let mut session = Session::new();
        assert_eq!(session.reduce(Key::Cancel), Effect::Quit);
        assert_eq!(session.reduce(Key::Cancel), Effect::Quit);
        assert_eq!(session.mode(), Mode::Normal);
    }

    #[test]
    fn test_escape_in_search_mode_returns_to_normal_and_clears() {
        let mut session = Session::new();
        session.reduce(Key::EnterSearch);
        type_str(&mut session, "draft");
        assert_eq!(session.reduce(Key::Cancel), Effect::None);
        assert_eq!(session.mode(), Mode::Normal);
        assert_eq!(session.search(), "");
        assert_eq!(session.instruction(), None);
    }

    #[test]
    fn test_enter_search_is_noop_when_already_searching() {
        let mut session = Session::new();
        session.reduce(Key::EnterSearch);
        type_str(&mut session, "keep");
        assert_eq!(session.reduce(Key::EnterSearch), Effect::None);
        assert_eq!(session.mode(), Mode::Search);
        assert_eq!(session.search(), "keep");
    }

    #[test]
    fn test_mode_isolation() {
        let mut session = Session::new();
        type_str(&mut session, "echo");
        session.reduce(Key::EnterSearch);
        assert_eq!(session.search(), "");
        type_str(&mut session, "rust");
        assert_eq!(session.input(), "echo");
        session.reduce(Key::Cancel);
        assert_eq!(session.input(), "echo");
        type_str(&mut session, " hi");
        assert_eq!(session.input(), "echo hi");
        assert_eq!(session.search(), "");
    }

    #[test]
    fn test_submit_non_empty_line_records_history() {
        let mut session = Session::new();
        let effect = submit(&mut session, "help");
        assert_eq!(effect, Effect::RunLine("help".to_string()));
        assert_eq!(session.history().entries(), ["help"]);
        assert_eq!(session.history().cursor(), 1);
        assert_eq!(session.input(), "");
        assert_eq!(texts(&session), ["aero > help"]);
        assert_eq!(session.transcript()[0].kind, LineKind::Prompt);
    }

    #[test]
    fn test_submit_empty_line_echoes_and_skips_history() {
        let mut session = Session::new();
        let effect = session.reduce(Key::Submit);
        assert_eq!(effect, Effect::RunLine(String::new()));
        assert!(session.history().entries().is_empty());
        assert_eq!(texts(&session), ["aero > "]);
    }

    #[test]
    fn test_history_navigation() {
        let mut session = Session::new();
        submit(&mut session, "ls");
        submit(&mut session, "pwd");

        session.reduce(Key::HistoryPrev);
        assert_eq!(session.input(), "pwd");
        session.reduce(Key::HistoryPrev);
        assert_eq!(session.input(), "ls");

        // Boundary: stays on the oldest entry.
        session.reduce(Key::HistoryPrev);
        assert_eq!(session.input(), "ls");
        assert_eq!(session.history().cursor(), 0);

        session.reduce(Key::HistoryNext);
        assert_eq!(session.input(), "pwd");
        session.reduce(Key::HistoryNext);
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 2);
    }

    #[test]
    fn test_history_next_at_fresh_line_clears_input() {
        let mut session = Session::new();
        submit(&mut session, "ls");
        type_str(&mut session, "draft");
        session.reduce(Key::HistoryNext);
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 1);
    }

    #[test]
    fn test_history_keys_ignored_in_search_mode() {
        let mut session = Session::new();
        submit(&mut session, "ls");
        session.reduce(Key::EnterSearch);
        type_str(&mut session, "q");
        session.reduce(Key::HistoryPrev);
        session.reduce(Key::HistoryNext);
        assert_eq!(session.search(), "q");
        assert_eq!(session.input(), "");
        assert_eq!(session.history().cursor(), 1);
    }

    #[test]
    fn test_search_mode_does_not_move_history_cursor() {
        let mut session = Session::new();
        submit(&mut session, "ls");
        submit(&mut session, "pwd");
        session.reduce(Key::HistoryPrev);
        session.reduce(Key::EnterSearch);
        session.reduce(Key::Cancel);
        assert_eq!(session.history().cursor(), 1);
        assert_eq!(session.input(), "pwd");
    }

    #[test]
    fn test_search_submit_is_sticky() {
        let mut session = Session::new();
        session.reduce(Key::EnterSearch);
        let effect = submit(&mut session, "weather");
        assert_eq!(
            effect,
            Effect::RunQuery(SearchQuery {
                query: "weather".to_string(),
                instruction: DEFAULT_INSTRUCTION.to_string(),
            })
        );
        assert_eq!(session.mode(), Mode::Search);
        assert_eq!(session.search(), "");
        assert_eq!(session.instruction(), Some(DEFAULT_INSTRUCTION));
        assert_eq!(texts(&session), ["search > weather"]);
        assert_eq!(session.transcript()[0].kind, LineKind::SearchPrompt);
        assert!(session.history().entries().is_empty());
    }

    #[test]
    fn test_search_submit_with_instruction() {
        let mut session = Session::new();
        session.reduce(Key::EnterSearch);
        let effect = submit(&mut session, " tokio | three bullets ");
        let Effect::RunQuery(query) = effect else {
            panic!("expected a query effect");
        };
        assert_eq!(query.query, "tokio");
        assert_eq!(query.instruction, "three bullets");
        assert_eq!(texts(&session), ["search > tokio"]);
    }

    #[test]
    fn test_reentering_search_clears_instruction() {
        let mut session = Session::new();
        session.reduce(Key::EnterSearch);
        submit(&mut session, "a | b");
        session.reduce(Key::Cancel);
        session.reduce(Key::EnterSearch);
        assert_eq!(session.instruction(), None);
    }

    #[test]
    fn test_other_key_is_noop() {
        let mut session = Session::new();
        type_str(&mut session, "x");
        assert_eq!(session.reduce(Key::Other), Effect::None);
        assert_eq!(session.input(), "x");
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_custom_default_instruction() {
        let mut session = Session::with_options(SessionOptions {
            default_instruction: "one line".to_string(),
            ..Default::default()
        });
        session.reduce(Key::EnterSearch);
        let Effect::RunQuery(query) = submit(&mut session, "x") else {
            panic!("expected a query effect");
        };
        assert_eq!(query.instruction, "one line");
    }
}
