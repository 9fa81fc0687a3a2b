//! Noughts engine - pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: stateless functions over a `Copy` [`Board`]: [`apply_move`],
//!   [`evaluate`], [`empty_cells`].
//! - **Opponents**: [`MinimaxOpponent`] (never loses) and [`RandomOpponent`]
//!   behind the [`Opponent`] trait, selected with [`OpponentKind`].
//! - **Controller**: [`GameController`] serializes human and computer moves
//!   through one validated path and reports each as a [`MoveReport`].
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameConfig, GameController, OpponentKind};
//!
//! let mut game = GameController::start_new_game(GameConfig::against(OpponentKind::OptimalAi));
//! game.submit_move(4).expect("center is open");
//! let reply = game.request_computer_move().expect("computer is to move");
//! assert_eq!(reply.position().to_index(), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod controller;
pub mod opponent;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use action::{InvalidMove, Move};
pub use controller::{GameConfig, GameController, MoveReport};
pub use opponent::{MinimaxOpponent, Opponent, OpponentKind, RandomOpponent};
pub use position::Position;
pub use rules::{Line, WINNING_LINES, apply_move, empty_cells, evaluate};
pub use state::GameState;
pub use status::GameStatus;
pub use types::{Board, ParseBoardError, Player, Square};
