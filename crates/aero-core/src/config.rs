//! Configuration management for Aero.
//!
//! Loads configuration from ${AERO_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::search::DEFAULT_INSTRUCTION;
use crate::session::SessionOptions;
use crate::theme::Theme;

pub mod paths {
    //! Path resolution for Aero configuration and data directories.
    //!
    //! AERO_HOME resolution order:
    //! 1. AERO_HOME environment variable (if set)
    //! 2. ~/.config/aero (default)
    //! 3. ./.aero when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Aero home directory.
    pub fn aero_home() -> PathBuf {
        if let Ok(home) = std::env::var("AERO_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".aero"),
            |h| h.join(".config").join("aero"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        aero_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        aero_home().join("logs")
    }
}

/// Query assistant configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// HTTP summarization endpoint. Unset uses the built-in offline assistant.
    pub endpoint: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: Config::DEFAULT_ASSISTANT_TIMEOUT_SECS,
        }
    }
}

impl AssistantConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme at startup
    pub theme: Theme,

    /// Key that opens search mode (e.g. "ctrl+k", "f2", "/")
    pub search_key: String,

    /// Instruction used when a search has no `|` suffix
    pub default_instruction: String,

    /// Timeout for external commands in seconds (0 disables)
    pub command_timeout_secs: u64,

    /// Query assistant configuration.
    pub assistant: AssistantConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            search_key: Config::DEFAULT_SEARCH_KEY.to_string(),
            default_instruction: DEFAULT_INSTRUCTION.to_string(),
            command_timeout_secs: 0,
            assistant: AssistantConfig::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_SEARCH_KEY: &str = "ctrl+k";
    const DEFAULT_ASSISTANT_TIMEOUT_SECS: u64 = 30;

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`, creating parent dirs.
    ///
    /// # Errors
    /// Fails if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Command timeout, or `None` when disabled.
    pub fn command_timeout(&self) -> Option<Duration> {
        (self.command_timeout_secs > 0).then(|| Duration::from_secs(self.command_timeout_secs))
    }

    /// Options for a fresh session built from this config.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            theme: self.theme,
            default_instruction: self.default_instruction.clone(),
        }
    }
}

/// Default config file contents written by `aero config init`.
pub fn default_config_template() -> &'static str {
    r#"# Aero configuration

# Theme at startup: "dark" or "light"
theme = "dark"

# Key that opens search mode: "ctrl+<c>", "alt+<c>", "f<n>", "tab" or a single character
search_key = "ctrl+k"

# Instruction used when a search has no "| instruction" suffix
default_instruction = "summarize the results clearly and concisely"

# Timeout for external commands in seconds (0 disables)
command_timeout_secs = 0

[assistant]
# HTTP summarization endpoint; unset uses the offline assistant
# endpoint = "http://localhost:8080/summarize"
timeout_secs = 30
"#
}
