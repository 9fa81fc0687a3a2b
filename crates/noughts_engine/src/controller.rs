//! Turn controller: the single entry point for moves.
//!
//! Human and computer moves go through the same `play` path, which checks
//! the contracts, applies the move with [`rules::apply_move`], evaluates the
//! result and flips the turn. The controller has no notion of time; a
//! caller that wants a thinking pause sleeps before asking for the
//! computer's move.

use super::contracts::{GameNotOver, LegalMove, PlayersTurn, assert_invariants};
use super::opponent::{Opponent, OpponentKind};
use super::rules::{self, Line};
use super::{Board, GameState, GameStatus, InvalidMove, Move, Player, Position};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game configuration. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Who plays the computer side.
    opponent: OpponentKind,
    /// Which side the computer plays when `opponent` is a computer.
    computer_side: Player,
    /// Seed for the random opponent; `None` seeds from the OS.
    seed: Option<u64>,
}

impl GameConfig {
    /// Local two-player game.
    pub fn two_player() -> Self {
        Self::default()
    }

    /// Game against `opponent`, which plays O.
    pub fn against(opponent: OpponentKind) -> Self {
        Self::default().with_opponent(opponent)
    }

    /// Returns true if `side` is played by the computer.
    pub fn is_computer(&self, side: Player) -> bool {
        self.opponent.is_computer() && self.computer_side == side
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opponent: OpponentKind::Human,
            computer_side: Player::O,
            seed: None,
        }
    }
}

/// Outcome of one accepted move, identical for human and computer moves.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveReport {
    /// Side that moved.
    mover: Player,
    /// Square that was played.
    position: Position,
    /// Board after the move.
    board: Board,
    /// Status after the move.
    status: GameStatus,
}

impl MoveReport {
    /// Lines to highlight; empty unless the move won the game.
    pub fn winning_lines(&self) -> &[Line] {
        self.status.winning_lines()
    }
}

/// Owns the state of one game and serializes every move through one path.
#[derive(Debug)]
pub struct GameController {
    config: GameConfig,
    state: GameState,
    opponent: Option<Box<dyn Opponent>>,
}

impl GameController {
    /// Starts a new game with an empty board and X to move.
    #[instrument]
    pub fn start_new_game(config: GameConfig) -> Self {
        info!(
            opponent = %config.opponent,
            computer_side = %config.computer_side,
            "Starting new game"
        );
        Self {
            opponent: config.opponent.build(config.seed),
            config,
            state: GameState::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the side to move (the last mover once the game is over).
    pub fn to_move(&self) -> Player {
        self.state.to_move()
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        self.state.status()
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    /// Returns the computer opponent's name, if there is one.
    pub fn opponent_name(&self) -> Option<&str> {
        self.opponent.as_deref().map(|o| o.name())
    }

    /// Returns true when the caller should ask for the computer's move.
    pub fn is_computer_turn(&self) -> bool {
        !self.status().is_over()
            && self.opponent.is_some()
            && self.config.computer_side == self.to_move()
    }

    /// Plays a human move at `index` (0-8) for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the game is over, the computer is to move,
    /// or the square is out of range or taken. State is unchanged on error.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Result<MoveReport, InvalidMove> {
        GameNotOver::check(&self.state)?;
        let side = self.to_move();
        if self.config.is_computer(side) {
            warn!(%side, "Human move attempted on the computer's turn");
            return Err(InvalidMove::OutOfTurn(side.opponent()));
        }
        self.play(index, side)
    }

    /// Asks the configured opponent for a move and plays it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::NoComputerOpponent`] in a two-player game,
    /// [`InvalidMove::GameOver`] once the game has ended, and
    /// [`InvalidMove::OutOfTurn`] if the human is to move.
    #[instrument(skip(self))]
    pub fn request_computer_move(&mut self) -> Result<MoveReport, InvalidMove> {
        let side = self.config.computer_side;
        let Some(opponent) = self.opponent.as_mut() else {
            return Err(InvalidMove::NoComputerOpponent);
        };
        GameNotOver::check(&self.state)?;
        PlayersTurn::check(side, &self.state)?;

        let position = opponent
            .choose_move(self.state.board(), side)
            .ok_or(InvalidMove::GameOver)?;
        debug!(opponent = opponent.name(), %position, "Computer chose move");
        self.play(position.to_index(), side)
    }

    /// Clears the board for a new game with the same configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::new();
    }

    fn play(&mut self, index: usize, side: Player) -> Result<MoveReport, InvalidMove> {
        let action = LegalMove::check(index, side, &self.state)?;
        let board = rules::apply_move(self.state.board(), index, side)?;
        let status = rules::evaluate(&board);
        let position = action.position;

        self.state.advance(action, board, status.clone());
        assert_invariants(&self.state);

        match &status {
            GameStatus::InProgress => debug!(%side, %position, "Move accepted"),
            GameStatus::Won { winner, lines } => {
                info!(%winner, lines = lines.len(), "Game won")
            }
            GameStatus::Draw => info!("Game drawn"),
        }

        Ok(MoveReport {
            mover: side,
            position,
            board,
            status,
        })
    }
}
