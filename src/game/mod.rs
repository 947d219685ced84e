//! Core Connect Four game logic: the reversible board, sides, and the
//! turn-taking state of a live game.

mod board;
mod side;
mod state;

pub use board::{Board, Cell, Line, Outcome, Placement, CELLS, COLS, ROWS};
pub use side::Side;
pub use state::GameState;

#[cfg(test)]
pub(crate) use board::tests::draw_board;
