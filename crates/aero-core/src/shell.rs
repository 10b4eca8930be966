//! Shell driver: a [`Session`] plus its collaborators.
//!
//! The session reducer stays free of I/O and returns [`Effect`]s; this is
//! where they are executed. Every effect completes before `handle` returns,
//! so one key is fully processed before the next is read.

use tracing::debug;

use crate::assistant::QueryAssistant;
use crate::runner::CommandRunner;
use crate::session::{Dispatch, Effect, Key, Session};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, A> {
    session: Session,
    runner: R,
    assistant: A,
}

impl<R: CommandRunner, A: QueryAssistant> Shell<R, A> {
    pub fn new(session: Session, runner: R, assistant: A) -> Self {
        Self {
            session,
            runner,
            assistant,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Reduces one key and executes the resulting effect.
    pub fn handle(&mut self, key: Key) -> Flow {
        match self.session.reduce(key) {
            Effect::None => Flow::Continue,
            Effect::Quit => Flow::Quit,
            Effect::RunLine(line) => self.run_line(&line),
            Effect::RunQuery(query) => {
                if query.is_empty() {
                    debug!("empty search query, skipping assistant");
                } else {
                    let lines = self.assistant.ask(&query.query, &query.instruction);
                    self.session.record_search_results(lines);
                }
                Flow::Continue
            }
        }
    }

    fn run_line(&mut self, line: &str) -> Flow {
        match self.session.dispatch(line) {
            Dispatch::Quit => Flow::Quit,
            Dispatch::AppendLines(lines) => {
                self.session.record_lines(lines);
                Flow::Continue
            }
            Dispatch::RunExternal(invocation) => {
                let result = self.runner.run(&invocation.program, &invocation.args);
                self.session.record_command_result(result);
                Flow::Continue
            }
        }
    }
}
