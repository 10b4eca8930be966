//! Display theme identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display theme stored by the session and toggled by `theme <name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Returns the lowercase name used in commands, config and the status line.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Returns all themes, in the order shown by `help`.
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|theme| theme.name() == s)
            .ok_or_else(|| format!("unknown theme '{s}' (expected dark or light)"))
    }
}
