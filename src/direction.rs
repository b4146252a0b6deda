use crate::types::Position;

/// Compass direction used to walk a line away from a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// All eight directions, clockwise from north.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::NorthEast,
    Direction::East,
    Direction::SouthEast,
    Direction::South,
    Direction::SouthWest,
    Direction::West,
    Direction::NorthWest,
];

impl Direction {
    /// Unit `(dx, dy)` offset, y growing downward.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// The square one step away, `None` past the edge.
    pub fn step(self, from: Position) -> Option<Position> {
        let (dx, dy) = self.offset();
        Position::checked(from.x() as i32 + dx, from.y() as i32 + dy)
    }

    /// Squares walked from `from` (exclusive) until the board edge.
    pub fn ray(self, from: Position) -> impl Iterator<Item = Position> {
        std::iter::successors(self.step(from), move |&pos| self.step(pos))
    }
}
