//! Front-end configuration.

use crate::typer::ScriptLine;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Timing and content for the hero terminal and game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HeroConfig {
    /// Lines typed by the intro terminal, in order.
    #[serde(default = "default_script")]
    script: Vec<ScriptLine>,

    /// Delay between keystrokes.
    #[serde(default = "default_keystroke_ms")]
    keystroke_ms: u64,

    /// Pause after a line is fully typed, before it scrolls into history.
    #[serde(default = "default_line_pause_ms")]
    line_pause_ms: u64,

    /// Number of committed lines kept on screen.
    #[serde(default = "default_history_limit")]
    history_limit: usize,

    /// Delay before the opponent answers a move.
    #[serde(default = "default_opponent_think_ms")]
    opponent_think_ms: u64,

    /// Fixed seed for the opponent's random choices.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_script() -> Vec<ScriptLine> {
    vec![
        ScriptLine::new("muhammed@void", "git clone medbot && cd medbot"),
        ScriptLine::new("muhammed@void", "pnpm dev --env=healthcare-ai"),
        ScriptLine::new("muhammed@void", "pnpm dev --env=fintech-tools"),
        ScriptLine::new("muhammed@void", "yarn dev --portfolio"),
    ]
}

fn default_keystroke_ms() -> u64 {
    40
}

fn default_line_pause_ms() -> u64 {
    650
}

/// Largest accepted `history_limit`.
pub const MAX_HISTORY_LIMIT: usize = 64;

fn default_history_limit() -> usize {
    4
}

fn default_opponent_think_ms() -> u64 {
    500
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            script: default_script(),
            keystroke_ms: default_keystroke_ms(),
            line_pause_ms: default_line_pause_ms(),
            history_limit: default_history_limit(),
            opponent_think_ms: default_opponent_think_ms(),
            seed: None,
        }
    }
}

impl HeroConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(lines = config.script.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HISTORY_LIMIT).contains(&self.history_limit) {
            return Err(ConfigError::new(format!(
                "history_limit must be between 1 and {}, got {}",
                MAX_HISTORY_LIMIT, self.history_limit
            )));
        }
        Ok(())
    }

    /// Keystroke delay as a [`Duration`].
    pub fn keystroke_delay(&self) -> Duration {
        Duration::from_millis(self.keystroke_ms)
    }

    /// Line pause as a [`Duration`].
    pub fn line_pause(&self) -> Duration {
        Duration::from_millis(self.line_pause_ms)
    }

    /// Opponent thinking delay as a [`Duration`].
    pub fn opponent_think(&self) -> Duration {
        Duration::from_millis(self.opponent_think_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
