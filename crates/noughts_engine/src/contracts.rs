//! Contract-based validation for tic-tac-toe.
//!
//! Preconditions are checked before every move and reject it without
//! touching state. Invariants describe what must hold after every move;
//! the controller asserts them in debug builds.

use super::action::{InvalidMove, Move};
use super::state::GameState;
use super::{Board, Player, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index must name a board square.
pub struct InBounds;

impl InBounds {
    /// Converts `index` into a position or rejects it.
    pub fn check(index: usize) -> Result<Position, InvalidMove> {
        Position::from_index(index).ok_or(InvalidMove::OutOfRange(index))
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects occupied squares.
    pub fn check(position: Position, board: &Board) -> Result<(), InvalidMove> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(InvalidMove::Occupied(position))
        }
    }
}

/// Precondition: the game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game has ended.
    pub fn check(game: &GameState) -> Result<(), InvalidMove> {
        if game.status().is_over() {
            Err(InvalidMove::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects moves by the side that is not to move.
    pub fn check(player: Player, game: &GameState) -> Result<(), InvalidMove> {
        if player != game.to_move() {
            Err(InvalidMove::OutOfTurn(player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a move is legal if the game is running, it is
/// the player's turn, and the target square exists and is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, checked in the order listed above.
    #[instrument(skip(game))]
    pub fn check(index: usize, player: Player, game: &GameState) -> Result<Move, InvalidMove> {
        GameNotOver::check(game)?;
        PlayersTurn::check(player, game)?;
        let position = InBounds::check(index)?;
        SquareIsEmpty::check(position, game.board())?;
        Ok(Move::new(player, position))
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: X moves first and turns alternate, so X-count minus O-count
/// is 0 or 1.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the mark counts on `board`.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: history length matches filled squares, and every recorded
/// move is still on the board.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the history against the board.
    pub fn holds(game: &GameState) -> bool {
        let filled = game.board().filled();
        let history_len = game.history().len();

        let matches_board = game
            .history()
            .iter()
            .all(|m| game.board().get(m.position).player() == Some(m.player));

        let valid = filled == history_len && matches_board;
        if !valid {
            warn!(filled, history_len, matches_board, "History completeness violated");
        }
        valid
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
pub fn assert_invariants(game: &GameState) {
    debug_assert!(BoardConsistent::holds(game.board()), "Board consistency violated");
    debug_assert!(HistoryComplete::holds(game), "History completeness violated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameStatus;

    fn played(moves: &[(Player, Position)]) -> GameState {
        let mut game = GameState::new();
        for &(player, position) in moves {
            let mut board = *game.board();
            board.set(position, crate::Square::Occupied(player));
            game.advance(Move::new(player, position), board, GameStatus::InProgress);
        }
        game
    }

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let mov = LegalMove::check(4, Player::X, &game).expect("legal");
        assert_eq!(mov, Move::new(Player::X, Position::Center));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = played(&[(Player::X, Position::Center)]);
        assert_eq!(
            LegalMove::check(4, Player::O, &game),
            Err(InvalidMove::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let game = GameState::new();
        assert_eq!(
            LegalMove::check(9, Player::X, &game),
            Err(InvalidMove::OutOfRange(9))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameState::new();
        assert_eq!(
            LegalMove::check(4, Player::O, &game),
            Err(InvalidMove::OutOfTurn(Player::O))
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut game = GameState::new();
        let board: crate::Board = "XXX/OO./...".parse().unwrap();
        game.advance(
            Move::new(Player::X, Position::TopRight),
            board,
            crate::evaluate(&board),
        );
        assert_eq!(
            LegalMove::check(8, Player::O, &game),
            Err(InvalidMove::GameOver)
        );
    }

    #[test]
    fn test_invariants_hold_after_alternating_moves() {
        let game = played(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::X, Position::TopRight),
        ]);
        assert!(BoardConsistent::holds(game.board()));
        assert!(HistoryComplete::holds(&game));
    }

    #[test]
    fn test_invariants_detect_corruption() {
        let mut game = played(&[(Player::X, Position::Center)]);
        game.corrupt(Move::new(Player::O, Position::TopLeft));
        game.corrupt(Move::new(Player::O, Position::TopRight));
        assert!(!BoardConsistent::holds(game.board()));
        assert!(!HistoryComplete::holds(&game));
    }
}
