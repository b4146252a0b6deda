use crate::types::{BOARD_SIZE, Cell, NUM_SQUARES, Position};

/// 8x8 grid of tri-state squares.
///
/// Pure storage: `set` performs no legality checks, the rule functions in
/// [`crate::rules`] are responsible for keeping the position valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; NUM_SQUARES],
}

impl Board {
    /// Creates the opening position:
    /// (3,3)=white, (4,3)=black, (3,4)=black, (4,4)=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.reset();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
        }
    }

    /// Parses eight rows of `B`, `W` and `.` (top row first).
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != BOARD_SIZE {
                return Err(format!("row {y} must have {BOARD_SIZE} squares, got {row:?}"));
            }
            for (x, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'B' | 'b' => Cell::Black,
                    'W' | 'w' => Cell::White,
                    '.' => Cell::Empty,
                    other => return Err(format!("unexpected square {other:?} in row {y}")),
                };
                board.cells[y * BOARD_SIZE + x] = cell;
            }
        }
        Ok(board)
    }

    /// Restores the opening layout.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; NUM_SQUARES];
        for (x, y, cell) in [
            (3, 3, Cell::White),
            (3, 4, Cell::Black),
            (4, 3, Cell::Black),
            (4, 4, Cell::White),
        ] {
            self.cells[y * BOARD_SIZE + x] = cell;
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.index()] = cell;
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns `(black_count, white_count)` from a full scan.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .fold((0u8, 0u8), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        self.cells.map(Cell::to_u8)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
