//! The reference puzzle: a 7x7 board with a fixed maze of walls.

use crate::dots::{GameError, Position, Wall};

pub const BOARD_SIZE: i32 = 7;

pub const PRIMARY_START: Position = Position { row: 0, col: 4 };
pub const SECONDARY_START: Position = Position { row: 6, col: 2 };

pub const DEFAULT_PLAYER_NAME: &str = "Unnamed Player";

// Each entry is one blocked edge between two adjacent cells, as (row, col).
pub const CANONICAL_WALLS: [((i32, i32), (i32, i32)); 16] = [
    ((1, 2), (1, 3)),
    ((0, 3), (1, 3)),
    ((1, 3), (2, 3)),
    ((2, 1), (2, 2)),
    ((2, 2), (3, 2)),
    ((3, 1), (4, 1)),
    ((2, 4), (3, 4)),
    ((3, 3), (3, 4)),
    ((3, 4), (4, 4)),
    ((4, 2), (4, 3)),
    ((4, 3), (5, 3)),
    ((5, 5), (5, 6)),
    ((4, 6), (5, 6)),
    ((6, 0), (6, 1)),
    ((6, 3), (5, 3)),
    ((6, 2), (6, 3)),
];

pub fn canonical_walls() -> Result<Vec<Wall>, GameError> {
    CANONICAL_WALLS
        .iter()
        .map(|&((a_row, a_col), (b_row, b_col))| {
            Wall::new(Position::new(a_row, a_col), Position::new(b_row, b_col))
        })
        .collect()
}
