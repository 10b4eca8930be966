//! Pure view/render functions for the TUI.
//!
//! The [`Renderer`] reads a [`Session`] by immutable reference and draws to a
//! ratatui frame. It never mutates the session; its only state is the palette
//! for the current theme, updated through [`Renderer::set_theme`].

use aero_core::session::{SEARCH_PROMPT, SHELL_PROMPT};
use aero_core::{Mode, Session, Theme};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::palette::Palette;

/// Left padding applied to every row.
const INDENT: &str = "  ";

const TAB_WIDTH: usize = 8;

pub struct Renderer {
    theme: Theme,
    palette: Palette,
    search_label: String,
}

impl Renderer {
    /// Creates a renderer; `search_label` names the search key in the status line.
    pub fn new(theme: Theme, search_label: impl Into<String>) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
            search_label: search_label.into(),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Switches the palette if the theme changed.
    pub fn set_theme(&mut self, theme: Theme) {
        if theme != self.theme {
            self.theme = theme;
            self.palette = Palette::for_theme(theme);
        }
    }

    /// Renders the whole screen.
    pub fn render(&self, session: &Session, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_transcript(session, frame, chunks[0]);
        self.render_prompt(session, frame, chunks[2]);
        self.render_status(session, frame, chunks[3]);
    }

    fn render_transcript(&self, session: &Session, frame: &mut Frame, area: Rect) {
        let height = area.height as usize;
        if height == 0 {
            return;
        }

        // Walk backwards so only the visible tail is materialized.
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(height);
        'outer: for entry in session.transcript().iter().rev() {
            let style = self.palette.line(entry.kind);
            for row in entry.text.split('\n').rev() {
                if lines.len() == height {
                    break 'outer;
                }
                let row = display_row(row);
                lines.push(Line::from(Span::styled(format!("{INDENT}{row}"), style)));
            }
        }
        // Bottom-align: pad at the top when content doesn't fill the pane.
        lines.resize(height, Line::default());
        lines.reverse();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_prompt(&self, session: &Session, frame: &mut Frame, area: Rect) {
        let (prompt, style) = match session.mode() {
            Mode::Normal => (SHELL_PROMPT, self.palette.prompt),
            Mode::Search => (SEARCH_PROMPT, self.palette.search_prompt),
        };
        let prefix = format!("{INDENT}{prompt}");
        let prefix_width = prefix.width();
        let available = (area.width as usize).saturating_sub(prefix_width + 1);
        let text = visible_tail(session.active_buffer(), available);

        let line = Line::from(vec![
            Span::styled(prefix, style),
            Span::raw(text.to_string()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let x = (prefix_width + text.width()).min(area.width.saturating_sub(1) as usize);
        frame.set_cursor_position(Position::new(area.x + x as u16, area.y));
    }

    fn render_status(&self, session: &Session, frame: &mut Frame, area: Rect) {
        let text = match session.mode() {
            Mode::Normal => format!(
                "{INDENT}theme: {}   {} search",
                session.theme(),
                self.search_label
            ),
            Mode::Search => match session.instruction() {
                Some(instruction) => {
                    format!("{INDENT}search mode   esc to exit   instruction: {instruction}")
                }
                None => format!("{INDENT}search mode   esc to exit"),
            },
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, self.palette.status))),
            area,
        );
    }
}

/// Prepares one row of captured output for a terminal cell grid.
///
/// Carriage returns overwrite: only the text after the last non-empty `\r`
/// segment is kept. Tabs expand to the next multiple of [`TAB_WIDTH`].
fn display_row(row: &str) -> String {
    let row = row.rsplit('\r').find(|part| !part.is_empty()).unwrap_or("");
    let mut out = String::with_capacity(row.len());
    let mut col = 0;
    for c in row.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - col % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            col += pad;
        } else {
            out.push(c);
            col += c.width().unwrap_or(0);
        }
    }
    out
}

/// Returns the longest suffix of `text` that fits in `max_width` columns.
fn visible_tail(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (idx, c) in text.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            return &text[idx + c.len_utf8()..];
        }
    }
    text
}
