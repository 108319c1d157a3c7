use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::game::GameError;

/// A cell coordinate. Rows grow downwards, columns grow to the right.
///
/// Positions are not bounded: translating off the grid is allowed and
/// it's up to the [`Board`](super::Board) to tell whether a cell exists.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn translate(&self, direction: Direction) -> Self {
        let (row_delta, col_delta) = direction.delta();
        Self::new(self.row + row_delta, self.col + col_delta)
    }

    /// The direction leading from `self` to `to`, if they are adjacent.
    ///
    /// Deltas saturate, so far away cells are reported with a clamped delta
    /// instead of overflowing.
    pub fn direction_to(&self, to: &Position) -> Result<Direction, GameError> {
        Direction::from_delta(
            to.row.saturating_sub(self.row),
            to.col.saturating_sub(self.col),
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row_delta, col_delta)` of a single step.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn invert(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn from_delta(row_delta: i32, col_delta: i32) -> Result<Self, GameError> {
        Self::ALL
            .into_iter()
            .find(|d| d.delta() == (row_delta, col_delta))
            .ok_or(GameError::InvalidDirection {
                row_delta,
                col_delta,
            })
    }
}

impl TryFrom<(i32, i32)> for Direction {
    type Error = GameError;

    fn try_from((row_delta, col_delta): (i32, i32)) -> Result<Self, Self::Error> {
        Self::from_delta(row_delta, col_delta)
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u" | "up" => Ok(Direction::Up),
            "d" | "down" => Ok(Direction::Down),
            "l" | "left" => Ok(Direction::Left),
            "r" | "right" => Ok(Direction::Right),
            _ => Err(GameError::UnknownDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        };
        f.write_str(name)
    }
}

/// Which of the two tokens. The primary one follows the requested
/// direction, the secondary one mirrors it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum DotKind {
    Primary,
    Secondary,
}

impl fmt::Display for DotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotKind::Primary => f.write_str("PRIMARY"),
            DotKind::Secondary => f.write_str("SECONDARY"),
        }
    }
}
