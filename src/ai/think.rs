use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::candidate::{MoveCandidate, pick_best};
use crate::ai::weights::{BASE_SCORES, ScoreMatrix, score_at};
use crate::board::Board;
use crate::config::{MAX_ADJUSTMENT, ThinkConfig};
use crate::direction::Direction;
use crate::game::MoveSelector;
use crate::rules;
use crate::types::{Cell, Difficulty, Position};

/// Edge scans for the line bonus: the square next to a corner, and the
/// direction running along that edge toward the opposite corner.
const EDGE_SCANS: [(Position, Direction); 8] = [
    (Position::at(1, 0), Direction::East),
    (Position::at(1, 7), Direction::East),
    (Position::at(6, 0), Direction::West),
    (Position::at(6, 7), Direction::West),
    (Position::at(0, 1), Direction::South),
    (Position::at(7, 1), Direction::South),
    (Position::at(0, 6), Direction::North),
    (Position::at(7, 6), Direction::North),
];

/// Picks the computer's move for `is_black`, or `None` without legal moves.
///
/// One ply only: positional weights, the edge line bonus and
/// difficulty-scaled noise, then the best-scoring legal square. Ties go to
/// the first square in row-major order.
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    is_black: bool,
    difficulty: Difficulty,
    config: &ThinkConfig,
    rng: &mut R,
) -> Option<Position> {
    let scores = score_matrix(board, is_black, difficulty, config, rng);
    debug!("score matrix for {}:\n{}", side_name(is_black), format_matrix(&scores));

    let best = pick_best(candidates(board, is_black, &scores))?;
    debug!(
        "{} picks ({}, {}) with score {}",
        side_name(is_black),
        best.position.x(),
        best.position.y(),
        best.score
    );
    Some(best.position)
}

/// Base table plus line bonus plus noise, built fresh for each call.
pub fn score_matrix<R: Rng + ?Sized>(
    board: &Board,
    is_black: bool,
    difficulty: Difficulty,
    config: &ThinkConfig,
    rng: &mut R,
) -> ScoreMatrix {
    let mut scores = *BASE_SCORES;
    add_line_bonus(board, Cell::of_side(is_black), config, &mut scores);
    add_noise(config.noise_for(difficulty), rng, &mut scores);
    scores
}

/// Every legal square for `is_black` with its score, row-major.
pub fn candidates(board: &Board, is_black: bool, scores: &ScoreMatrix) -> Vec<MoveCandidate> {
    rules::legal_moves(board, is_black)
        .into_iter()
        .map(|pos| MoveCandidate::new(pos, score_at(scores, pos)))
        .collect()
}

fn add_line_bonus(board: &Board, own: Cell, config: &ThinkConfig, scores: &mut ScoreMatrix) {
    for (start, dir) in EDGE_SCANS {
        if !board.is_empty(start) {
            continue;
        }
        let owned = dir.ray(start).filter(|&pos| board.get(pos) == own).count();
        if owned >= config.line_bonus_threshold {
            let score = &mut scores[start.y()][start.x()];
            *score = score.saturating_add(config.line_bonus.clamp(0, MAX_ADJUSTMENT));
        }
    }
}

fn add_noise<R: Rng + ?Sized>(amplitude: i32, rng: &mut R, scores: &mut ScoreMatrix) {
    let amplitude = amplitude.clamp(0, MAX_ADJUSTMENT);
    if amplitude == 0 {
        return;
    }
    for score in scores.iter_mut().flatten() {
        *score = score.saturating_add(rng.gen_range(-amplitude..=amplitude));
    }
}

fn side_name(is_black: bool) -> &'static str {
    if is_black { "black" } else { "white" }
}

fn format_matrix(scores: &ScoreMatrix) -> String {
    scores
        .iter()
        .map(|row| {
            row.iter()
                .map(|score| format!("{score:4}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Heuristic move selector owning its random source.
#[derive(Debug, Clone)]
pub struct ThinkEngine {
    config: ThinkConfig,
    rng: StdRng,
}

impl ThinkEngine {
    pub fn new(config: ThinkConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn seeded(config: ThinkConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ThinkEngine {
    fn default() -> Self {
        Self::new(ThinkConfig::default())
    }
}

impl MoveSelector for ThinkEngine {
    fn select_move(
        &mut self,
        board: &Board,
        is_black: bool,
        difficulty: Difficulty,
    ) -> Option<Position> {
        best_move(board, is_black, difficulty, &self.config, &mut self.rng)
    }
}
