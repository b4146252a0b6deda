use once_cell::sync::Lazy;

use crate::types::{BOARD_SIZE, Position};

/// Per-square scores indexed `[y][x]`.
pub type ScoreMatrix = [[i32; BOARD_SIZE]; BOARD_SIZE];

const HALF: usize = BOARD_SIZE / 2;

/// Top-left quadrant of the positional table, `[y][x]`.
/// Corners are worth the most, squares touching a corner are penalized.
const QUADRANT: [[i32; HALF]; HALF] = [
    [90, 10, 80, 50],
    [10, 10, 70, 40],
    [80, 70, 60, 30],
    [50, 40, 30, 20],
];

/// Full positional table, the quadrant mirrored horizontally then vertically.
pub static BASE_SCORES: Lazy<ScoreMatrix> = Lazy::new(mirror_quadrant);

fn mirror_quadrant() -> ScoreMatrix {
    let mut scores = [[0; BOARD_SIZE]; BOARD_SIZE];
    for (y, row) in QUADRANT.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            scores[y][x] = value;
            scores[y][BOARD_SIZE - 1 - x] = value;
        }
    }
    for y in 0..HALF {
        scores[BOARD_SIZE - 1 - y] = scores[y];
    }
    scores
}

pub fn score_at(scores: &ScoreMatrix, pos: Position) -> i32 {
    scores[pos.y()][pos.x()]
}
