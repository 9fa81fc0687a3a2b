//! Derived game status.

use super::Player;
use super::rules::Line;
use serde::{Deserialize, Serialize};

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        winner: Player,
        /// Every line the winner holds, in canonical line order.
        lines: Vec<Line>,
    },
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }

    /// Returns the winning lines to highlight; empty unless won.
    pub fn winning_lines(&self) -> &[Line] {
        match self {
            GameStatus::Won { lines, .. } => lines,
            _ => &[],
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, .. } => write!(f, "Player {} wins", winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
