//! Terminal-state evaluation.

use super::super::{Board, GameStatus, Player};
use super::draw::is_full;
use super::win::winning_lines;
use tracing::instrument;

/// Evaluates the board without side effects.
///
/// X is checked before O. A win reports every line the winner holds so a
/// move completing two lines highlights both.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    for player in [Player::X, Player::O] {
        let lines = winning_lines(board, player);
        if !lines.is_empty() {
            return GameStatus::Won {
                winner: player,
                lines,
            };
        }
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
