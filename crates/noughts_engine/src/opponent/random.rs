//! Random opponent: picks any open square with equal probability.

use super::Opponent;
use crate::rules::{check_winner, empty_cells};
use crate::{Board, Player, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Random opponent. No lookahead, so it can walk into losses.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates a random opponent seeded from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible random opponent.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks uniformly among empty squares, or `None` if the board is full
    /// or already decided.
    pub fn best_move(&mut self, board: &Board) -> Option<Position> {
        if check_winner(board).is_some() {
            return None;
        }
        let choice = empty_cells(board).choose(&mut self.rng).copied();
        debug!(?choice, "Random choice");
        choice
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    fn choose_move(&mut self, board: &Board, _side: Player) -> Option<Position> {
        self.best_move(board)
    }

    fn name(&self) -> &str {
        "Random AI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_picks_empty_squares() {
        let board: Board = "XOX/XO./OX.".parse().unwrap();
        let mut opponent = RandomOpponent::with_seed(1);
        for _ in 0..100 {
            let pos = opponent.best_move(&board);
            assert!(matches!(pos, Some(Position::MiddleRight) | Some(Position::BottomRight)));
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(RandomOpponent::with_seed(1).best_move(&board), None);
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomOpponent::with_seed(99);
        let mut b = RandomOpponent::with_seed(99);
        for _ in 0..20 {
            assert_eq!(a.best_move(&board), b.best_move(&board));
        }
    }
}
