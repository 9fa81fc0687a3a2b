//! Command-line interface.

use clap::{Parser, Subcommand};
use noughts_engine::{OpponentKind, Player};
use std::path::PathBuf;

/// Tic-tac-toe against a friend or the computer.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Opponent: human, optimal-ai or random-ai
        #[arg(short, long)]
        opponent: Option<OpponentKind>,

        /// Side the computer plays (X or O)
        #[arg(long)]
        computer_side: Option<Player>,

        /// Display name for X
        #[arg(long)]
        x_name: Option<String>,

        /// Display name for O
        #[arg(long)]
        o_name: Option<String>,

        /// Seed for the random opponent
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer replies, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Start with sound cues off
        #[arg(long)]
        mute: bool,
    },

    /// Show or reset cumulative scores
    Scores {
        /// Only this mode; all modes when omitted
        #[arg(short, long)]
        opponent: Option<OpponentKind>,

        /// Zero the selected mode(s)
        #[arg(long)]
        reset: bool,
    },

    /// Play a batch of computer-vs-computer games
    Simulate {
        /// Policy for X
        #[arg(short = 'x', long, default_value = "optimal-ai")]
        x: OpponentKind,

        /// Policy for O
        #[arg(short = 'o', long, default_value = "random-ai")]
        o: OpponentKind,

        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Seed for random policies
        #[arg(long)]
        seed: Option<u64>,
    },
}
