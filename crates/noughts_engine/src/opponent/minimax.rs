//! Optimal play by exhaustive minimax search.
//!
//! Scores are from the computer's point of view: a win `depth` plies below
//! the root is worth `WIN_SCORE - depth`, a loss `depth - WIN_SCORE`, a
//! draw `0`. Preferring shallow wins and deep losses makes the computer
//! finish games quickly and resist as long as possible.
//!
//! Searches run on a scratch copy of the board; every mark placed during
//! search is lifted again before the call returns.

use super::Opponent;
use crate::rules::{check_winner, has_won, is_full};
use crate::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Score of an immediate win.
pub const WIN_SCORE: i32 = 10;

/// Scores a position by full-depth minimax, without pruning.
///
/// `depth` is the ply count from the search root. When `maximizing` the
/// computer is to move, otherwise its opponent.
pub fn minimax(board: &mut Board, computer: Player, depth: i32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(board, computer, depth) {
        return score;
    }

    let mover = if maximizing { computer } else { computer.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        board.set(position, Square::Occupied(mover));
        let score = minimax(board, computer, depth + 1, !maximizing);
        board.set(position, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Minimax with fail-soft alpha-beta pruning.
///
/// Inside the `(alpha, beta)` window the result equals [`minimax`]; outside
/// it is a bound on the far side of the window.
fn alpha_beta(
    board: &mut Board,
    computer: Player,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(score) = terminal_score(board, computer, depth) {
        return score;
    }

    let mover = if maximizing { computer } else { computer.opponent() };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for position in Position::ALL {
        if !board.is_empty(position) {
            continue;
        }
        board.set(position, Square::Occupied(mover));
        let score = alpha_beta(board, computer, depth + 1, !maximizing, alpha, beta);
        board.set(position, Square::Empty);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if alpha >= beta {
            break;
        }
    }
    best
}

fn terminal_score(board: &Board, computer: Player, depth: i32) -> Option<i32> {
    if has_won(board, computer) {
        Some(WIN_SCORE - depth)
    } else if has_won(board, computer.opponent()) {
        Some(depth - WIN_SCORE)
    } else if is_full(board) {
        Some(0)
    } else {
        None
    }
}

/// Optimal opponent: never loses.
///
/// Ties between equally scored moves go to the lowest index, so the choice
/// is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxOpponent {
    pruning: bool,
}

impl MinimaxOpponent {
    /// Creates an optimal opponent that searches with alpha-beta pruning.
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Creates an optimal opponent that visits the whole game tree.
    ///
    /// Chooses the same moves as [`MinimaxOpponent::new`], only slower.
    pub fn exhaustive() -> Self {
        Self { pruning: false }
    }

    /// Returns the best move for `computer`, or `None` if the board is full
    /// or already decided.
    #[instrument(skip(self), fields(pruning = self.pruning))]
    pub fn best_move(&self, board: &Board, computer: Player) -> Option<Position> {
        if check_winner(board).is_some() || is_full(board) {
            return None;
        }

        let mut scratch = *board;
        let mut best: Option<(Position, i32)> = None;
        for position in Position::ALL {
            if !scratch.is_empty(position) {
                continue;
            }
            scratch.set(position, Square::Occupied(computer));
            let score = if self.pruning {
                // A move only replaces the best one when it scores strictly
                // higher, so anything at or below the current best may be cut.
                let alpha = best.map_or(i32::MIN, |(_, s)| s);
                alpha_beta(&mut scratch, computer, 0, false, alpha, i32::MAX)
            } else {
                minimax(&mut scratch, computer, 0, false)
            };
            scratch.set(position, Square::Empty);

            debug!(%position, score, "Scored candidate");
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((position, score));
            }
        }

        best.map(|(position, _)| position)
    }
}

impl Default for MinimaxOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for MinimaxOpponent {
    fn choose_move(&mut self, board: &Board, side: Player) -> Option<Position> {
        self.best_move(board, side)
    }

    fn name(&self) -> &str {
        "Optimal AI"
    }
}
