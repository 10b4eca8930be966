//! Line dispatcher.
//!
//! Decides what a submitted Normal-mode line does, and records the results
//! collaborators hand back. Built-ins mutate the session directly; external
//! programs are returned as [`Dispatch::RunExternal`] for the driver.

use tracing::debug;

use super::{LineKind, Session};
use crate::command::{Command, HELP_LINES, Invocation};
use crate::runner::CommandOutput;

/// Outcome of dispatching a submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Quit,
    /// Lines to append as built-in output (may be empty).
    AppendLines(Vec<String>),
    /// Run an external program through the command runner.
    RunExternal(Invocation),
}

impl Session {
    /// Dispatches a submitted line.
    ///
    /// Theme changes are applied here; the other built-ins only describe what
    /// to show. The transcript is not touched, see [`Session::record_lines`].
    pub fn dispatch(&mut self, line: &str) -> Dispatch {
        let command = Command::parse(line);
        debug!(?command, "dispatching");
        match command {
            Command::Empty => Dispatch::AppendLines(Vec::new()),
            Command::Exit => Dispatch::Quit,
            Command::Help => {
                Dispatch::AppendLines(HELP_LINES.iter().map(ToString::to_string).collect())
            }
            Command::SetTheme(theme) => {
                self.theme = theme;
                Dispatch::AppendLines(Vec::new())
            }
            Command::External(invocation) => Dispatch::RunExternal(invocation),
        }
    }

    /// Appends built-in output lines.
    pub fn record_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.push_line(LineKind::Info, line);
        }
    }

    /// Appends the outcome of an external command: the error message first
    /// (if any), then the captured output (if any).
    pub fn record_command_result(&mut self, result: CommandOutput) {
        if let Some(error) = result.error {
            self.push_line(LineKind::Error, error.to_string());
        }
        if !result.output.is_empty() {
            let output = result.output.trim_end_matches(['\n', '\r']);
            self.push_line(LineKind::Output, output);
        }
    }

    /// Appends the lines returned by the query assistant.
    pub fn record_search_results(&mut self, lines: impl IntoIterator<Item = String>) {
        for line in lines {
            self.push_line(LineKind::SearchResult, line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::RunError;
    use crate::theme::Theme;

    #[test]
    fn test_dispatch_exit() {
        let mut session = Session::new();
        assert_eq!(session.dispatch("exit"), Dispatch::Quit);
    }

    #[test]
    fn test_dispatch_help_lists_builtins() {
        let mut session = Session::new();
        let Dispatch::AppendLines(lines) = session.dispatch("help") else {
            panic!("expected help lines");
        };
        assert_eq!(lines[0], "Available commands:");
        assert!(lines.iter().any(|l| l.contains("theme light")));
        assert!(lines.iter().any(|l| l.contains("exit")));
    }

    #[test]
    fn test_dispatch_theme_updates_session() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch("theme light"),
            Dispatch::AppendLines(vec![])
        );
        assert_eq!(session.theme(), Theme::Light);
        session.dispatch("theme dark");
        assert_eq!(session.theme(), Theme::Dark);
    }

    #[test]
    fn test_dispatch_empty_line_is_noop() {
        let mut session = Session::new();
        assert_eq!(session.dispatch(""), Dispatch::AppendLines(vec![]));
        assert_eq!(session.dispatch("   "), Dispatch::AppendLines(vec![]));
        assert!(session.transcript().is_empty());
    }

    #[test]
    fn test_dispatch_external() {
        let mut session = Session::new();
        assert_eq!(
            session.dispatch("git status -s"),
            Dispatch::RunExternal(Invocation {
                program: "git".to_string(),
                args: vec!["status".to_string(), "-s".to_string()],
            })
        );
    }

    #[test]
    fn test_record_error_then_output() {
        let mut session = Session::new();
        session.record_command_result(CommandOutput {
            output: "boom\n".to_string(),
            error: Some(RunError::Exit { code: 2 }),
        });
        let lines = session.transcript();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].kind, LineKind::Error);
        assert_eq!(lines[0].text, "exit status 2");
        assert_eq!(lines[1].kind, LineKind::Output);
        assert_eq!(lines[1].text, "boom");
    }

    #[test]
    fn test_record_error_without_output_adds_one_line() {
        let mut session = Session::new();
        session.record_command_result(CommandOutput {
            output: String::new(),
            error: Some(RunError::Exit { code: 1 }),
        });
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].kind, LineKind::Error);
    }

    #[test]
    fn test_record_success_output_only() {
        let mut session = Session::new();
        session.record_command_result(CommandOutput::success("a\nb\n"));
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].text, "a\nb");
    }

    #[test]
    fn test_record_search_results_keeps_order() {
        let mut session = Session::new();
        session.record_search_results(vec!["one".to_string(), "two".to_string()]);
        let kinds: Vec<_> = session.transcript().iter().map(|l| l.kind).collect();
        assert_eq!(kinds, [LineKind::SearchResult, LineKind::SearchResult]);
        assert_eq!(session.transcript()[1].text, "two");
    }
}
