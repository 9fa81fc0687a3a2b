//! Noughts - terminal tic-tac-toe with persistent scores.
//!
//! Game logic lives in [`noughts_engine`]; this crate adds configuration,
//! the score file, the interactive session and batch simulation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod scores;
mod simulate;
mod terminal;

pub use config::{AppConfig, ConfigError, PlayerNames, SCORES_PATH_ENV};
pub use scores::{ScoreError, ScoreStore, ScoreTally};
pub use simulate::{SimulationReport, simulate};
pub use terminal::{BELL, Command, Cue, SessionSummary, TerminalSession, render_board};
