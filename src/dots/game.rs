use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::{
    board::{Board, Wall},
    common::{Direction, DotKind, Position},
};
use crate::configuration::{canonical_walls, BOARD_SIZE, PRIMARY_START, SECONDARY_START};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("({row_delta}, {col_delta}) is not a direction")]
    InvalidDirection { row_delta: i32, col_delta: i32 },
    #[error("Unknown direction {0:?}")]
    UnknownDirection(String),
    #[error("Cells {0} and {1} are not adjacent, no wall can separate them")]
    InvalidWall(Position, Position),
    #[error("Dots cannot start at {primary} and {secondary}")]
    InvalidConfiguration {
        primary: Position,
        secondary: Position,
    },
    #[error("Moving {0} is not allowed")]
    IllegalMove(Direction),
    #[error("Invalid level at line {line}: {reason}")]
    InvalidLevel { line: usize, reason: String },
}

/// One token changing cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DotMoved {
    pub dot: DotKind,
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub primary: Position,
    pub secondary: Position,
    pub steps: usize,
    pub solved: bool,
}

/// Everything a single coupled move changed: both tokens, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moves: [DotMoved; 2],
    pub snapshot: GameSnapshot,
}

impl MoveOutcome {
    pub fn solved(&self) -> bool {
        self.snapshot.solved
    }
}

/// The two dots, the board they live on and the walls between cells.
///
/// The primary dot moves in the requested direction while the secondary
/// one moves the opposite way in the same step. Both dots are always on
/// the board and never share a cell before the puzzle is solved.
///
/// The model is plain data without interior mutability: it is `Send` but
/// meant to be driven by a single caller at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameModel {
    board: Board,
    walls: Vec<Wall>,
    primary: Position,
    secondary: Position,
    steps: usize,
}

impl GameModel {
    /// The reference maze with custom starting cells.
    pub fn new(primary: Position, secondary: Position) -> Result<Self, GameError> {
        Self::with_layout(Board::new(BOARD_SIZE), canonical_walls()?, primary, secondary)
    }

    /// The reference puzzle as shipped.
    pub fn canonical() -> Result<Self, GameError> {
        Self::new(PRIMARY_START, SECONDARY_START)
    }

    pub fn with_layout(
        board: Board,
        walls: Vec<Wall>,
        primary: Position,
        secondary: Position,
    ) -> Result<Self, GameError> {
        if !board.contains(&primary) || !board.contains(&secondary) || primary == secondary {
            return Err(GameError::InvalidConfiguration { primary, secondary });
        }

        Ok(Self {
            board,
            walls,
            primary,
            secondary,
            steps: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn is_on_board(&self, position: &Position) -> bool {
        self.board.contains(position)
    }

    pub fn position_of(&self, dot: DotKind) -> Position {
        match dot {
            DotKind::Primary => self.primary,
            DotKind::Secondary => self.secondary,
        }
    }

    pub fn positions(&self) -> [Position; 2] {
        [self.primary, self.secondary]
    }

    /// The dot standing on `position`. Once solved both dots share the
    /// cell and the primary one is reported.
    pub fn dot_at(&self, position: &Position) -> Option<DotKind> {
        if self.primary == *position {
            Some(DotKind::Primary)
        } else if self.secondary == *position {
            Some(DotKind::Secondary)
        } else {
            None
        }
    }

    pub fn is_solved(&self) -> bool {
        self.primary == self.secondary
    }

    pub fn is_legal(&self, direction: Direction) -> bool {
        let primary_to = self.primary.translate(direction);
        let secondary_to = self.secondary.translate(direction.invert());

        self.leg_is_open(&self.primary, &primary_to, &self.secondary)
            && self.leg_is_open(&self.secondary, &secondary_to, &self.primary)
    }

    /// Same as [`GameModel::is_legal`] for a raw `(row, col)` delta.
    pub fn is_legal_delta(&self, row_delta: i32, col_delta: i32) -> Result<bool, GameError> {
        Direction::from_delta(row_delta, col_delta).map(|d| self.is_legal(d))
    }

    /// The direction bringing the primary dot onto `target`.
    pub fn direction_to(&self, target: &Position) -> Result<Direction, GameError> {
        self.primary.direction_to(target)
    }

    pub fn valid_moves(&self) -> BTreeSet<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_legal(*d))
            .collect()
    }

    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveOutcome, GameError> {
        if !self.is_legal(direction) {
            return Err(GameError::IllegalMove(direction));
        }

        let primary_from = self.primary;
        let secondary_from = self.secondary;
        self.primary = primary_from.translate(direction);
        self.secondary = secondary_from.translate(direction.invert());
        self.steps += 1;

        info!(
            "move {}: primary {} -> {}, secondary {} -> {}",
            direction, primary_from, self.primary, secondary_from, self.secondary
        );
        if self.is_solved() {
            info!("solved at {} after {} steps", self.primary, self.steps);
        }

        Ok(MoveOutcome {
            moves: [
                DotMoved {
                    dot: DotKind::Primary,
                    from: primary_from,
                    to: self.primary,
                },
                DotMoved {
                    dot: DotKind::Secondary,
                    from: secondary_from,
                    to: self.secondary,
                },
            ],
            snapshot: self.snapshot(),
        })
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            primary: self.primary,
            secondary: self.secondary,
            steps: self.steps,
            solved: self.is_solved(),
        }
    }

    fn leg_is_open(&self, from: &Position, to: &Position, other: &Position) -> bool {
        if !self.board.contains(to) {
            debug!("{} -> {} leaves the board", from, to);
            return false;
        }

        // Landing on the other dot's current cell means the two would swap.
        if to == other {
            debug!("{} -> {} runs into the other dot", from, to);
            return false;
        }

        if self.walls.iter().any(|wall| wall.blocks(from, to)) {
            debug!("{} -> {} is walled", from, to);
            return false;
        }

        true
    }
}

impl fmt::Display for GameModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{},{}{}]",
            DotKind::Primary,
            self.primary,
            DotKind::Secondary,
            self.secondary
        )
    }
}

/// Parses a level:
///
/// ```text
/// 7
/// 0,4
/// 6,2
/// 1,2 1,3
/// ```
///
/// Board size, primary start, secondary start, then one wall per line.
/// Blank lines and `#` comments are skipped.
impl FromStr for GameModel {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let last_line = s.lines().count();
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'));

        let mut next = |what: &str| {
            lines.next().ok_or_else(|| GameError::InvalidLevel {
                line: last_line,
                reason: format!("missing {}", what),
            })
        };

        let (line, size) = next("board size")?;
        let size: i32 = size.parse().map_err(|_| GameError::InvalidLevel {
            line,
            reason: format!("bad board size {:?}", size),
        })?;
        if size <= 0 {
            return Err(GameError::InvalidLevel {
                line,
                reason: "board size must be positive".to_string(),
            });
        }

        let (line, text) = next("primary start")?;
        let primary = parse_position(line, text)?;
        let (line, text) = next("secondary start")?;
        let secondary = parse_position(line, text)?;

        let walls = lines
            .map(|(line, text)| parse_wall(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        Self::with_layout(Board::new(size), walls, primary, secondary)
    }
}

fn parse_position(line: usize, text: &str) -> Result<Position, GameError> {
    let invalid = || GameError::InvalidLevel {
        line,
        reason: format!("expected row,col but found {:?}", text),
    };

    let (row, col) = text.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;

    Ok(Position::new(row, col))
}

fn parse_wall(line: usize, text: &str) -> Result<Wall, GameError> {
    let cells = text.split_whitespace().collect::<Vec<_>>();
    let (a, b) = match cells.as_slice() {
        [a, b] => (parse_position(line, a)?, parse_position(line, b)?),
        _ => {
            return Err(GameError::InvalidLevel {
                line,
                reason: format!("expected two cells but found {:?}", text),
            })
        }
    };

    Wall::new(a, b)
}
