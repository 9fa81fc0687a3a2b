//! Complete game state owned by the controller.

use super::{Board, GameStatus, Move, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Game status.
    status: GameStatus,
    /// Move history.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Records an already validated move.
    ///
    /// The turn only flips while the game continues, so a finished game
    /// still reports who made the last move.
    pub(crate) fn advance(&mut self, action: Move, board: Board, status: GameStatus) {
        self.board = board;
        self.history.push(action);
        if !status.is_over() {
            self.to_move = action.player.opponent();
        }
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn corrupt(&mut self, action: Move) {
        self.board
            .set(action.position, super::Square::Occupied(action.player));
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
