//! Noughts command-line entry point.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{AppConfig, ScoreStore, TerminalSession, simulate};
use noughts_engine::{GameConfig, GameController, OpponentKind};
use strum::IntoEnumIterator;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            opponent,
            computer_side,
            x_name,
            o_name,
            seed,
            delay_ms,
            mute,
        } => {
            if x_name.is_some() {
                config = config.with_x_name(x_name);
            }
            if o_name.is_some() {
                config = config.with_o_name(o_name);
            }
            if let Some(ms) = delay_ms {
                config = config.with_think_delay_ms(ms);
            }
            if mute {
                config = config.with_sound(false);
            }

            let game_config = GameConfig::against(opponent.unwrap_or(*config.opponent()))
                .with_computer_side(computer_side.unwrap_or(*config.computer_side()))
                .with_seed(seed);
            let scores = ScoreStore::load(config.scores_path().clone())?;

            info!(?game_config, "Starting interactive game");
            let stdin = std::io::stdin();
            let mut session = TerminalSession::new(
                config,
                GameController::start_new_game(game_config),
                scores,
                stdin.lock(),
                std::io::stdout(),
            );
            let summary = session.run()?;
            println!(
                "\nThanks for playing! {} game(s): X {}, O {}, draws {}",
                summary.games(),
                summary.x_wins(),
                summary.o_wins(),
                summary.draws()
            );
        }

        Command::Scores { opponent, reset } => {
            let mut scores = ScoreStore::load(config.scores_path().clone())?;
            let modes: Vec<OpponentKind> = match opponent {
                Some(mode) => vec![mode],
                None => OpponentKind::iter().collect(),
            };
            for mode in modes {
                if reset {
                    scores.reset(mode)?;
                }
                println!("{:<10} {}", mode.to_string(), scores.tally(mode));
            }
        }

        Command::Simulate { x, o, games, seed } => {
            let report = simulate(x, o, games, seed)?;
            println!("{}", report);
        }
    }

    Ok(())
}
