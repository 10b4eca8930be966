//! Theme palettes.
//!
//! A [`Palette`] is plain data owned by the renderer. Switching themes swaps
//! the palette; nothing else holds style state.

use aero_core::{LineKind, Theme};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub prompt: Style,
    pub output: Style,
    pub error: Style,
    pub status: Style,
    pub search_prompt: Style,
    pub search_result: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        let shared = Self {
            prompt: Style::new().fg(Color::Indexed(63)).add_modifier(Modifier::BOLD),
            output: Style::new().fg(Color::Indexed(245)),
            error: Style::new().fg(Color::Indexed(167)),
            status: Style::new()
                .fg(Color::Indexed(241))
                .add_modifier(Modifier::ITALIC),
            search_prompt: Style::new()
                .fg(Color::Indexed(212))
                .add_modifier(Modifier::BOLD),
            search_result: Style::new().fg(Color::Indexed(250)),
        };
        match theme {
            Theme::Dark => shared,
            Theme::Light => Self {
                prompt: Style::new().fg(Color::Indexed(25)).add_modifier(Modifier::BOLD),
                output: Style::new().fg(Color::Indexed(238)),
                error: Style::new().fg(Color::Indexed(124)),
                ..shared
            },
        }
    }

    /// Style for a transcript line.
    pub fn line(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Prompt | LineKind::Output | LineKind::Info => self.output,
            LineKind::Error => self.error,
            LineKind::SearchPrompt => self.search_prompt,
            LineKind::SearchResult => self.search_result,
        }
    }
}
