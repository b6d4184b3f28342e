//! Core Connect Four game model: the gravity-bound board grid and the two
//! player symbols.

mod board;
mod player;

pub use board::{Board, Cell, MoveError, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use player::Player;
