//! Move application and empty-square enumeration.

use super::super::contracts::{InBounds, SquareIsEmpty};
use super::super::{Board, InvalidMove, Player, Position, Square};
use tracing::{debug, instrument};

/// Places `side`'s mark at `index` and returns the resulting board.
///
/// The input board is never modified; on error the caller's state is
/// exactly as it was. Turn order is not checked here, the controller owns
/// the side to move.
///
/// # Errors
///
/// Returns [`InvalidMove::OutOfRange`] for an index outside 0-8 and
/// [`InvalidMove::Occupied`] when the square is taken.
#[instrument]
pub fn apply_move(board: &Board, index: usize, side: Player) -> Result<Board, InvalidMove> {
    let position = InBounds::check(index)?;
    SquareIsEmpty::check(position, board)?;

    let mut next = *board;
    next.set(position, Square::Occupied(side));
    debug!(%position, %side, "Mark placed");
    Ok(next)
}

/// Returns empty positions in ascending index order; empty when the board
/// is full.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_places_mark() {
        let board = Board::new();
        let next = apply_move(&board, 4, Player::X).unwrap();
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_rejects_occupied_without_mutation() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        assert_eq!(
            apply_move(&board, 0, Player::X),
            Err(InvalidMove::Occupied(Position::TopLeft))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range() {
        let board = Board::new();
        assert_eq!(
            apply_move(&board, 9, Player::O),
            Err(InvalidMove::OutOfRange(9))
        );
        assert_eq!(
            apply_move(&board, usize::MAX, Player::O),
            Err(InvalidMove::OutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let cells: Vec<usize> = empty_cells(&board).iter().map(|p| p.to_index()).collect();
        assert_eq!(cells, vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_empty_cells_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(empty_cells(&board).is_empty());
    }
}
