//! Full-board check.
//!
//! A full board is only a draw when nobody holds a line; [`super::evaluate`]
//! checks wins first.

use super::super::Board;

/// True once all nine squares hold a mark.
pub fn is_full(board: &Board) -> bool {
    board.filled() == 9
}
