use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Contents of a single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Stone color of the given side.
    pub fn of_side(is_black: bool) -> Self {
        if is_black { Cell::Black } else { Cell::White }
    }

    pub fn opponent(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Black => Cell::White,
            Cell::White => Cell::Black,
        }
    }

    /// Compact encoding used in snapshots: 0=empty, 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => 2,
        }
    }
}

/// A board coordinate, x to the right and y downward from the top-left corner.
///
/// Always within `0..8` on both axes; every constructor rejects off-board values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Result<Self, GameError> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return Err(GameError::OutOfBounds { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Position for constant tables. Off-board values fail const evaluation.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        assert!((x as usize) < BOARD_SIZE && (y as usize) < BOARD_SIZE);
        Self { x, y }
    }

    /// Builds a position from signed coordinates, `None` when off the board.
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        if (0..BOARD_SIZE as i32).contains(&x) && (0..BOARD_SIZE as i32).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> usize {
        self.x as usize
    }

    pub fn y(self) -> usize {
        self.y as usize
    }

    /// Row-major index in `0..64`.
    pub fn index(self) -> usize {
        self.y() * BOARD_SIZE + self.x()
    }

    /// All 64 positions in row-major order (y outer, x inner).
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|y| (0..BOARD_SIZE as u8).map(move |x| Position { x, y }))
    }
}

/// Turn state of a session. A finished game falls back to `NotStarted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Status {
    #[default]
    NotStarted,
    BlackToMove,
    WhiteToMove,
}

impl Status {
    pub fn side_to_move(self) -> Option<bool> {
        match self {
            Status::NotStarted => None,
            Status::BlackToMove => Some(true),
            Status::WhiteToMove => Some(false),
        }
    }

    fn of_side(is_black: bool) -> Self {
        if is_black {
            Status::BlackToMove
        } else {
            Status::WhiteToMove
        }
    }

    /// The status handing the turn to the other side.
    pub fn after_turn_of(is_black: bool) -> Self {
        Self::of_side(!is_black)
    }
}

/// Computer strength. Only affects the noise added to positional scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Difficulty::Easy),
            1 => Ok(Difficulty::Medium),
            2 => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidDifficulty(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Draw,
}

/// Public game state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cells, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub status: Status,
    pub difficulty: Difficulty,
    pub black_score: u8,
    pub white_score: u8,
    pub pass_count: u8,
    /// Contract:
    /// - Normal move: the placed stone.
    /// - Pass, or nothing played yet: `None`.
    pub last_move: Option<Position>,
    /// Cells recolored by the last move; empty after a pass.
    pub flipped: Vec<Position>,
}

/// Final tally after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_rejects_coordinates_outside_the_board() {
        assert_eq!(
            Position::new(8, 0).unwrap_err(),
            GameError::OutOfBounds { x: 8, y: 0 }
        );
        assert!(Position::new(0, 8).is_err());
        assert!(Position::new(7, 7).is_ok());
        assert_eq!(Position::checked(-1, 3), None);
    }

    #[test]
    fn position_all_walks_row_major() {
        let all: Vec<Position> = Position::all().collect();

        assert_eq!(all.len(), NUM_SQUARES);
        assert_eq!(all[1], Position::new(1, 0).unwrap());
        assert_eq!(all[8], Position::new(0, 1).unwrap());
        assert!(all.iter().enumerate().all(|(i, p)| p.index() == i));
    }

    #[test]
    fn difficulty_from_raw_value_is_closed() {
        assert_eq!(Difficulty::try_from(2).unwrap(), Difficulty::Hard);
        assert_eq!(
            Difficulty::try_from(3).unwrap_err(),
            GameError::InvalidDifficulty(3)
        );
    }
}
