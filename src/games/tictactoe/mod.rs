//! Tic-tac-toe board engine with difficulty-tiered computer play.

mod board;
mod piece;
mod render;
mod strategy;

pub use board::{Board, Coord, LINES, Line};
pub use piece::{BoardDifficulty, BoardEncoding, Piece};
