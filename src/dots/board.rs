use serde::{Deserialize, Serialize};

use super::{common::Position, game::GameError};

/// A square grid of `size` x `size` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: i32,
}

impl Board {
    pub fn new(size: i32) -> Self {
        Self { size }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn contains(&self, position: &Position) -> bool {
        (0..self.size).contains(&position.row) && (0..self.size).contains(&position.col)
    }
}

/// A blocked edge between two adjacent cells.
///
/// The pair is unordered: the cells are stored sorted so two walls built
/// from the same cells in any order compare equal.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    a: Position,
    b: Position,
}

impl Wall {
    pub fn new(a: Position, b: Position) -> Result<Self, GameError> {
        if a.direction_to(&b).is_err() {
            return Err(GameError::InvalidWall(a, b));
        }

        Ok(Self {
            a: a.min(b),
            b: a.max(b),
        })
    }

    pub fn cells(&self) -> (Position, Position) {
        (self.a, self.b)
    }

    pub fn blocks(&self, from: &Position, to: &Position) -> bool {
        (self.a == *from && self.b == *to) || (self.a == *to && self.b == *from)
    }
}
