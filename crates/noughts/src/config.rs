//! Application configuration loaded from `noughts.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use derive_setters::Setters;
use noughts_engine::{GameConfig, OpponentKind, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Environment variable that overrides [`AppConfig::scores_path`].
pub const SCORES_PATH_ENV: &str = "NOUGHTS_SCORES_PATH";

/// Settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct AppConfig {
    /// Where cumulative scores are stored.
    #[serde(default = "default_scores_path")]
    scores_path: PathBuf,

    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_think_delay_ms")]
    think_delay_ms: u64,

    /// Opponent used when `play` is run without `--opponent`.
    #[serde(default = "default_opponent")]
    opponent: OpponentKind,

    /// Side the computer plays when `play` is run without `--computer-side`.
    #[serde(default = "default_computer_side")]
    computer_side: Player,

    /// Display name for X.
    #[serde(default)]
    x_name: Option<String>,

    /// Display name for O.
    #[serde(default)]
    o_name: Option<String>,

    /// Ring the terminal bell on moves and wins.
    #[serde(default = "default_sound")]
    sound: bool,
}

#[instrument]
fn default_scores_path() -> PathBuf {
    PathBuf::from("noughts_scores.json")
}

#[instrument]
fn default_think_delay_ms() -> u64 {
    500
}

#[instrument]
fn default_opponent() -> OpponentKind {
    OpponentKind::OptimalAi
}

#[instrument]
fn default_computer_side() -> Player {
    Player::O
}

fn default_sound() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            scores_path: default_scores_path(),
            think_delay_ms: default_think_delay_ms(),
            opponent: default_opponent(),
            computer_side: default_computer_side(),
            x_name: None,
            o_name: None,
            sound: default_sound(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            opponent = %config.opponent,
            think_delay_ms = config.think_delay_ms,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults. Environment
    /// overrides are applied either way.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = if path.as_ref().exists() {
            Self::from_file(path)?
        } else {
            debug!("No config file, using defaults");
            Self::default()
        };
        Ok(config.with_env_overrides())
    }

    /// Applies [`SCORES_PATH_ENV`] if set.
    #[instrument(skip(self))]
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(path) = std::env::var(SCORES_PATH_ENV) {
            debug!(%path, "Scores path overridden from environment");
            self.scores_path = PathBuf::from(path);
        }
        self
    }

    /// Resolves display names for a game.
    ///
    /// Configured names win; otherwise the computer side is called "AI" and
    /// human sides "Player X" / "Player O".
    #[instrument(skip(self))]
    pub fn player_names(&self, game: &GameConfig) -> PlayerNames {
        let resolve = |configured: &Option<String>, side: Player| {
            configured.clone().unwrap_or_else(|| {
                if game.is_computer(side) {
                    "AI".to_string()
                } else {
                    format!("Player {}", side)
                }
            })
        };
        PlayerNames::new(
            resolve(&self.x_name, Player::X),
            resolve(&self.o_name, Player::O),
        )
    }
}

/// Display names for both sides.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct PlayerNames {
    x: String,
    o: String,
}

impl PlayerNames {
    /// Returns the name for `side`.
    pub fn name(&self, side: Player) -> &str {
        match side {
            Player::X => &self.x,
            Player::O => &self.o,
        }
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
