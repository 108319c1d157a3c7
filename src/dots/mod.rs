mod board;
mod common;
mod game;

pub use board::{Board, Wall};
pub use common::{Direction, DotKind, Position};
pub use game::{DotMoved, GameError, GameModel, GameSnapshot, MoveOutcome};
