//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Three positions that win the game when held by one player.
pub type Line = [Position; 3];

/// The eight winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn holds_line(board: &Board, player: Player, line: &Line) -> bool {
    line.iter()
        .all(|pos| board.get(*pos) == Square::Occupied(player))
}

/// Returns true if `player` holds any winning line.
///
/// Allocation-free; this is the check the minimax search runs at every node.
pub fn has_won(board: &Board, player: Player) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| holds_line(board, player, line))
}

/// Returns every line held by `player`, in [`WINNING_LINES`] order.
///
/// A single move can complete two lines at once, so this may return more
/// than one line.
pub fn winning_lines(board: &Board, player: Player) -> Vec<Line> {
    WINNING_LINES
        .iter()
        .filter(|line| holds_line(board, player, line))
        .copied()
        .collect()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row (X is checked
/// before O), `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|player| has_won(board, *player))
}
