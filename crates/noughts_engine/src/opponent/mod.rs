//! Computer opponents.
//!
//! Both policies sit behind the [`Opponent`] trait; which one a game uses
//! is chosen with [`OpponentKind`] in the game configuration.

mod minimax;
mod random;

pub use minimax::{MinimaxOpponent, WIN_SCORE, minimax};
pub use random::RandomOpponent;

use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Trait for computer players that pick moves.
pub trait Opponent: std::fmt::Debug {
    /// Chooses a move for `side`.
    ///
    /// Returns `None` when the board is full or already decided.
    fn choose_move(&mut self, board: &Board, side: Player) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Who plays against the human.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpponentKind {
    /// Local two-player game; no computer moves.
    #[default]
    Human,
    /// Exhaustive minimax; never loses.
    OptimalAi,
    /// Uniform choice among open squares.
    RandomAi,
}

impl OpponentKind {
    /// Returns true if this kind moves by itself.
    pub fn is_computer(self) -> bool {
        !matches!(self, OpponentKind::Human)
    }

    /// Builds the policy for this kind, or `None` for [`OpponentKind::Human`].
    ///
    /// `seed` makes the random policy reproducible; the minimax policy
    /// ignores it.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Option<Box<dyn Opponent>> {
        match self {
            OpponentKind::Human => None,
            OpponentKind::OptimalAi => Some(Box::new(MinimaxOpponent::new())),
            OpponentKind::RandomAi => Some(Box::new(match seed {
                Some(seed) => RandomOpponent::with_seed(seed),
                None => RandomOpponent::new(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_names_round_trip() {
        assert_eq!(OpponentKind::Human.to_string(), "human");
        assert_eq!(OpponentKind::OptimalAi.to_string(), "optimal-ai");
        assert_eq!(OpponentKind::RandomAi.to_string(), "random-ai");
        for kind in OpponentKind::iter() {
            assert_eq!(kind.to_string().parse::<OpponentKind>().unwrap(), kind);
        }
        assert!("minimax".parse::<OpponentKind>().is_err());
    }

    #[test]
    fn test_kind_serde_uses_kebab_case() {
        let json = serde_json::to_string(&OpponentKind::OptimalAi).unwrap();
        assert_eq!(json, "\"optimal-ai\"");
    }

    #[test]
    fn test_build() {
        assert!(OpponentKind::Human.build(None).is_none());
        let optimal = OpponentKind::OptimalAi.build(None).unwrap();
        assert_eq!(optimal.name(), "Optimal AI");
        let random = OpponentKind::RandomAi.build(Some(7)).unwrap();
        assert_eq!(random.name(), "Random AI");
    }
}
