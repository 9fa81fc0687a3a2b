//! Line-oriented terminal play loop.
//!
//! The session reads commands from any [`BufRead`] and writes to any
//! [`Write`], so tests can drive it with a script.

use crate::config::{AppConfig, PlayerNames};
use crate::scores::ScoreStore;
use derive_getters::Getters;
use noughts_engine::{
    Board, GameController, GameStatus, Line, MoveReport, OpponentKind, Player, Position, Square,
};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Terminal bell, written once per cue while sound is on.
pub const BELL: char = '\x07';

/// One parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play on a square.
    Play(Position),
    /// Start a new game with the same configuration.
    Restart,
    /// Start a new game against another opponent.
    Mode(OpponentKind),
    /// Print the cumulative scores.
    Scores,
    /// Turn sound cues on or off.
    ToggleSound,
    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a trimmed input line; `None` if it means nothing.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let lower = line.to_ascii_lowercase();
        if let Some(kind) = lower.strip_prefix("mode ") {
            return kind.trim().parse().ok().map(Command::Mode);
        }
        match lower.as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "r" | "restart" => Some(Command::Restart),
            "s" | "scores" => Some(Command::Scores),
            "m" | "sound" | "mute" => Some(Command::ToggleSound),
            _ => Position::from_key_or_label(line).map(Command::Play),
        }
    }
}

/// Audible feedback for an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A mark was placed.
    Move,
    /// The mark won the game.
    Win,
}

impl Cue {
    /// Cues for one accepted move: always [`Cue::Move`], then [`Cue::Win`]
    /// if the move won.
    pub fn for_report(report: &MoveReport) -> impl Iterator<Item = Cue> {
        let won = report.status().winner().is_some();
        std::iter::once(Cue::Move).chain(won.then_some(Cue::Win))
    }
}

/// Counts of games finished during one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won { winner: Player::X, .. } => self.x_wins += 1,
            GameStatus::Won { winner: Player::O, .. } => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }
}

/// Interactive game session over a reader/writer pair.
pub struct TerminalSession<R, W> {
    app: AppConfig,
    game: GameController,
    scores: ScoreStore,
    sound: bool,
    input: R,
    output: W,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    /// Creates a session around an already-started game.
    ///
    /// Names, think delay and the initial sound setting come from `app`.
    pub fn new(
        app: AppConfig,
        game: GameController,
        scores: ScoreStore,
        input: R,
        output: W,
    ) -> Self {
        Self {
            sound: *app.sound(),
            app,
            game,
            scores,
            input,
            output,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Returns the score store.
    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    /// Returns true while sound cues are on.
    pub fn sound(&self) -> bool {
        self.sound
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn names(&self) -> PlayerNames {
        self.app.player_names(self.game.config())
    }

    fn mode(&self) -> OpponentKind {
        *self.game.config().opponent()
    }

    /// Runs until the user quits or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> anyhow::Result<SessionSummary> {
        info!(mode = %self.mode(), "Session started");
        self.print_scores()?;
        let think_delay = Duration::from_millis(*self.app.think_delay_ms());

        loop {
            if self.game.is_computer_turn() {
                if !think_delay.is_zero() {
                    std::thread::sleep(think_delay);
                }
                let report = self.game.request_computer_move()?;
                self.announce(&report)?;
                continue;
            }

            self.prompt()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => break,
                Some(Command::Restart) => {
                    self.game.restart();
                    writeln!(self.output, "\nNew game.")?;
                }
                Some(Command::Mode(kind)) => self.switch_mode(kind)?,
                Some(Command::Scores) => self.print_scores()?,
                Some(Command::ToggleSound) => {
                    self.sound = !self.sound;
                    info!(sound = self.sound, "Sound toggled");
                    writeln!(
                        self.output,
                        "Sound {}.",
                        if self.sound { "on" } else { "off" }
                    )?;
                }
                Some(Command::Play(pos)) => match self.game.submit_move(pos.to_index()) {
                    Ok(report) => self.announce(&report)?,
                    Err(e) => {
                        warn!(error = %e, "Move rejected");
                        writeln!(self.output, "{}", e)?;
                    }
                },
                None => {
                    writeln!(
                        self.output,
                        "Unrecognized input {:?}. Enter 1-9, r, s, m, mode <kind> or q.",
                        line.trim()
                    )?;
                }
            }
        }

        info!(games = self.summary.games, "Session ended");
        Ok(self.summary)
    }

    /// Starts a fresh game against `kind`; scores shown are that mode's.
    fn switch_mode(&mut self, kind: OpponentKind) -> anyhow::Result<()> {
        let config = (*self.game.config()).with_opponent(kind);
        self.game = GameController::start_new_game(config);
        info!(mode = %kind, "Mode switched");
        writeln!(self.output, "\nMode: {}. New game.", kind)?;
        self.print_scores()
    }

    fn prompt(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}", render_board(self.game.board(), &[]))?;
        if self.game.status().is_over() {
            write!(self.output, "Game over. r to play again, q to quit: ")?;
        } else {
            let side = self.game.to_move();
            let names = self.names();
            write!(
                self.output,
                "{} ({}) to move [1-9, r, s, m, q]: ",
                names.name(side),
                side
            )?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn announce(&mut self, report: &MoveReport) -> anyhow::Result<()> {
        for cue in Cue::for_report(report) {
            self.cue(cue)?;
        }

        let names = self.names();
        let mover = *report.mover();
        writeln!(
            self.output,
            "{} ({}) plays {}.",
            names.name(mover),
            mover,
            report.position()
        )?;

        match report.status() {
            GameStatus::InProgress => return Ok(()),
            GameStatus::Won { winner, lines } => {
                writeln!(self.output, "\n{}", render_board(report.board(), lines))?;
                writeln!(self.output, "{} Wins!", names.name(*winner))?;
                let mode = self.mode();
                match self.scores.record_win(mode, *winner) {
                    Ok(tally) => writeln!(self.output, "Score ({}): {}", mode, tally)?,
                    Err(e) => {
                        warn!(error = %e, "Could not save scores");
                        writeln!(self.output, "Could not save scores: {}", e.message)?;
                    }
                }
            }
            GameStatus::Draw => {
                writeln!(self.output, "\n{}", render_board(report.board(), &[]))?;
                writeln!(self.output, "It's a draw!")?;
            }
        }
        self.summary.record(report.status());
        Ok(())
    }

    fn cue(&mut self, cue: Cue) -> anyhow::Result<()> {
        if self.sound {
            debug!(?cue, "Cue");
            write!(self.output, "{}", BELL)?;
        }
        Ok(())
    }

    fn print_scores(&mut self) -> anyhow::Result<()> {
        let mode = self.mode();
        let tally = self.scores.tally(mode);
        let names = self.names();
        writeln!(
            self.output,
            "Score ({}): {} {} - {} {}",
            mode,
            names.name(Player::X),
            tally.wins(Player::X),
            names.name(Player::O),
            tally.wins(Player::O)
        )?;
        Ok(())
    }
}

/// Renders the board as a 3x3 grid.
///
/// Empty squares show their key (1-9); squares on a winning line are
/// bracketed, e.g. `[X]`.
pub fn render_board(board: &Board, highlight: &[Line]) -> String {
    let cell = |pos: Position| {
        let marked = highlight.iter().any(|line| line.contains(&pos));
        match board.get(pos) {
            Square::Occupied(p) if marked => format!("[{}]", p),
            Square::Occupied(p) => format!(" {} ", p),
            Square::Empty => format!(" {} ", pos.to_index() + 1),
        }
    };

    Position::ALL
        .chunks(3)
        .map(|row| {
            row.iter()
                .map(|&pos| cell(pos))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}
