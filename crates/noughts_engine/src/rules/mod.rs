//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can call them on scratch boards.

pub mod draw;
pub mod evaluate;
pub mod placement;
pub mod win;

pub use draw::is_full;
pub use evaluate::evaluate;
pub use placement::{apply_move, empty_cells};
pub use win::{Line, WINNING_LINES, check_winner, has_won, winning_lines};
