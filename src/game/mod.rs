//! Core Connect Four game logic: board representation, players, outcome
//! detection and the open-window evaluation.

mod board;
pub mod eval;
mod player;
mod score;
pub mod window;

pub use board::{Board, Cell, Move, Outcome, COLS, ROWS};
pub use player::Player;
pub use score::Score;
