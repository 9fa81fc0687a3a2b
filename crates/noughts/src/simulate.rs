//! Batch games between two computer policies.

use derive_getters::Getters;
use noughts_engine::{GameConfig, GameController, GameStatus, OpponentKind, Player};
use tracing::{debug, info, instrument};

/// Outcome counts for a batch of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SimulationReport {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl std::fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays `games` games, `x` against `o`.
///
/// X is driven through [`GameController::submit_move`], O is the
/// controller's computer side. With a seed, X uses `seed` and O `seed + 1`,
/// so a batch is reproducible.
///
/// # Errors
///
/// Fails if either side is [`OpponentKind::Human`].
#[instrument]
pub fn simulate(
    x: OpponentKind,
    o: OpponentKind,
    games: u32,
    seed: Option<u64>,
) -> anyhow::Result<SimulationReport> {
    let Some(mut x_policy) = x.build(seed) else {
        anyhow::bail!("X must be a computer policy, got {}", x);
    };
    if !o.is_computer() {
        anyhow::bail!("O must be a computer policy, got {}", o);
    }

    let config = GameConfig::against(o)
        .with_computer_side(Player::O)
        .with_seed(seed.map(|s| s.wrapping_add(1)));
    let mut game = GameController::start_new_game(config);
    let mut report = SimulationReport::default();

    for round in 0..games {
        if round > 0 {
            game.restart();
        }
        while !game.status().is_over() {
            if game.is_computer_turn() {
                game.request_computer_move()?;
            } else {
                let pos = x_policy
                    .choose_move(game.board(), Player::X)
                    .ok_or_else(|| anyhow::anyhow!("{} found no move", x_policy.name()))?;
                game.submit_move(pos.to_index())?;
            }
        }

        match game.status() {
            GameStatus::Won { winner: Player::X, .. } => report.x_wins += 1,
            GameStatus::Won { winner: Player::O, .. } => report.o_wins += 1,
            GameStatus::Draw => report.draws += 1,
            GameStatus::InProgress => {}
        }
        report.games += 1;
        debug!(round, status = %game.status(), "Game finished");
    }

    info!(%report, "Simulation complete");
    Ok(report)
}
