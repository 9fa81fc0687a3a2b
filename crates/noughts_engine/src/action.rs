//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who placed a
//! mark where, and the controller keeps them as the game history.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A rejected move. The game state is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index is not a board position (0-8).
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    OutOfTurn(Player),

    /// A computer move was requested but the game has no computer opponent.
    #[display("No computer opponent in this game")]
    NoComputerOpponent,
}

impl std::error::Error for InvalidMove {}
