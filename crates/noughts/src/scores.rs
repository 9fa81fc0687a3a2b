//! Cumulative win counts, kept per opponent mode in a JSON file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{OpponentKind, Player};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Wins for X and O in one mode. Draws are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScoreTally {
    #[serde(default)]
    x: u32,
    #[serde(default)]
    o: u32,
}

impl ScoreTally {
    /// Returns the wins for `side`.
    pub fn wins(&self, side: Player) -> u32 {
        match side {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn record(&mut self, side: Player) {
        match side {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - O {}", self.x, self.o)
    }
}

/// Score file keyed by opponent mode (`"human"`, `"optimal-ai"`, `"random-ai"`).
#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
    modes: BTreeMap<String, ScoreTally>,
}

impl ScoreStore {
    /// Loads the store from `path`; a missing file starts every mode at zero.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] if the file exists but cannot be read or parsed.
    #[instrument(skip(path))]
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ScoreError> {
        let path = path.into();
        let modes = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            debug!(path = %path.display(), "No score file yet");
            BTreeMap::new()
        };
        info!(path = %path.display(), modes = modes.len(), "Scores loaded");
        Ok(Self { path, modes })
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the tally for `mode`.
    pub fn tally(&self, mode: OpponentKind) -> ScoreTally {
        self.modes
            .get(&mode.to_string())
            .copied()
            .unwrap_or_default()
    }

    /// Adds a win for `winner` in `mode` and saves.
    ///
    /// On a failed save the in-memory tally is left as it was.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, mode: OpponentKind, winner: Player) -> Result<ScoreTally, ScoreError> {
        let mut tally = self.tally(mode);
        tally.record(winner);
        self.commit(mode, tally)?;
        info!(%mode, %winner, %tally, "Win recorded");
        Ok(tally)
    }

    /// Zeroes the tally for `mode` and saves.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: OpponentKind) -> Result<(), ScoreError> {
        self.commit(mode, ScoreTally::default())?;
        info!(%mode, "Scores reset");
        Ok(())
    }

    /// Stores `tally` for `mode` and saves, restoring the previous entry if
    /// the file cannot be written.
    fn commit(&mut self, mode: OpponentKind, tally: ScoreTally) -> Result<(), ScoreError> {
        let key = mode.to_string();
        let previous = self.modes.insert(key.clone(), tally);
        if let Err(e) = self.save() {
            match previous {
                Some(old) => self.modes.insert(key, old),
                None => self.modes.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    /// Writes the store to its file, creating parent directories.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self) -> Result<(), ScoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.modes)?;
        std::fs::write(&self.path, content)?;
        debug!("Scores saved");
        Ok(())
    }
}

/// Score store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Score error: {} at {}:{}", message, file, line)]
pub struct ScoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScoreError {
    /// Creates a new score error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ScoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for ScoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("Malformed score file: {}", err))
    }
}
