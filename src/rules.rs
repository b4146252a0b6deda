//! Move legality and capture for one side, evaluated against a borrowed board.
//!
//! Every function here is stateless: the board and the mover's color are
//! explicit parameters, nothing is retained between calls.

use rand::Rng;

use crate::ai::think;
use crate::board::Board;
use crate::config::ThinkConfig;
use crate::direction::{DIRECTIONS, Direction};
use crate::types::{Cell, Difficulty, Position};

/// Returns true when `is_black` may place a stone at `pos`.
pub fn can_move(board: &Board, is_black: bool, pos: Position) -> bool {
    if !board.is_empty(pos) || !has_neighbours(board, pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| captures_in_direction(board, is_black, pos, dir))
}

/// Recolors every opponent run bracketed by `pos` and a friendly stone.
///
/// Does not place the stone at `pos` and does not check legality; callers
/// must check [`can_move`] first and write the placed stone themselves.
/// Returns the flipped squares.
pub fn flip_at(board: &mut Board, is_black: bool, pos: Position) -> Vec<Position> {
    let mut flipped = Vec::new();
    for dir in DIRECTIONS {
        let run = capture_run(board, is_black, pos, dir);
        for &target in &run {
            board.set(target, Cell::of_side(is_black));
        }
        flipped.extend(run);
    }
    flipped
}

/// All legal squares for `is_black` in row-major order.
pub fn legal_moves(board: &Board, is_black: bool) -> Vec<Position> {
    Position::all()
        .filter(|&pos| can_move(board, is_black, pos))
        .collect()
}

pub fn has_legal_move(board: &Board, is_black: bool) -> bool {
    Position::all().any(|pos| can_move(board, is_black, pos))
}

/// Computer's choice for `is_black`; see [`think::best_move`].
pub fn best_move<R: Rng + ?Sized>(
    board: &Board,
    is_black: bool,
    difficulty: Difficulty,
    config: &ThinkConfig,
    rng: &mut R,
) -> Option<Position> {
    think::best_move(board, is_black, difficulty, config, rng)
}

fn has_neighbours(board: &Board, pos: Position) -> bool {
    DIRECTIONS
        .iter()
        .filter_map(|dir| dir.step(pos))
        .any(|neighbour| !board.is_empty(neighbour))
}

fn captures_in_direction(board: &Board, is_black: bool, pos: Position, dir: Direction) -> bool {
    let own = Cell::of_side(is_black);
    let opponent = own.opponent();

    let mut ray = dir.ray(pos);
    match ray.next() {
        Some(first) if board.get(first) == opponent => {}
        _ => return false,
    }

    for target in ray {
        match board.get(target) {
            cell if cell == opponent => continue,
            cell if cell == own => return true,
            _ => return false,
        }
    }
    false
}

/// Opponent stones between `pos` and the next friendly stone along `dir`,
/// or nothing when the run ends on an empty square or the edge.
fn capture_run(board: &Board, is_black: bool, pos: Position, dir: Direction) -> Vec<Position> {
    let own = Cell::of_side(is_black);
    let mut run = Vec::new();

    for target in dir.ray(pos) {
        match board.get(target) {
            Cell::Empty => return Vec::new(),
            cell if cell == own => return run,
            _ => run.push(target),
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pos(x: usize, y: usize) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn t01_initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        assert_eq!(
            legal_moves(&board, true),
            vec![pos(3, 2), pos(2, 3), pos(5, 4), pos(4, 5)]
        );
    }

    #[test]
    fn initial_white_legal_moves_mirror_black() {
        let board = Board::new();

        assert_eq!(
            legal_moves(&board, false),
            vec![pos(4, 2), pos(5, 3), pos(2, 4), pos(3, 5)]
        );
    }

    #[test]
    fn can_move_rejects_occupied_and_isolated_squares() {
        let board = Board::new();

        assert!(!can_move(&board, true, pos(3, 3)));
        assert!(!can_move(&board, true, pos(0, 0)));
        // Adjacent to stones but captures nothing.
        assert!(!can_move(&board, true, pos(2, 2)));
    }

    #[test]
    fn can_move_never_mutates_the_board() {
        let board = Board::new();
        let before = board;

        for _ in 0..3 {
            for p in Position::all() {
                let _ = can_move(&board, true, p);
                let _ = can_move(&board, false, p);
            }
        }

        assert_eq!(board, before);
    }

    #[test]
    fn opening_move_flips_exactly_one_stone() {
        let mut board = Board::new();
        let target = pos(2, 3);
        assert!(can_move(&board, true, target));

        board.set(target, Cell::Black);
        let flipped = flip_at(&mut board, true, target);

        assert_eq!(flipped, vec![pos(3, 3)]);
        assert_eq!(board.get(pos(3, 3)), Cell::Black);
        assert_eq!(board.get(pos(4, 4)), Cell::White);
        assert_eq!(board.count(), (4, 1));
    }

    #[test]
    fn flip_at_captures_in_several_directions_at_once() {
        let mut board = Board::from_rows([
            "B...B...",
            ".W.W....",
            "..W.....",
            "BWW.WWWB",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let target = pos(3, 3);
        assert!(can_move(&board, true, target));

        board.set(target, Cell::Black);
        let mut flipped = flip_at(&mut board, true, target);
        flipped.sort_by_key(|p| p.index());

        assert_eq!(
            flipped,
            vec![
                pos(1, 1),
                pos(3, 1),
                pos(2, 2),
                pos(1, 3),
                pos(2, 3),
                pos(4, 3),
                pos(5, 3),
                pos(6, 3),
            ]
        );
        assert_eq!(board.count(), (12, 0));
    }

    #[test]
    fn run_ending_on_empty_square_or_edge_is_not_captured() {
        let mut board = Board::from_rows([
            "........",
            "........",
            "........",
            ".WW.WWWW",
            "...B....",
            "...B....",
            "........",
            "........",
        ])
        .unwrap();
        let target = pos(3, 3);
        assert!(!can_move(&board, true, target));

        board.set(target, Cell::Black);
        let flipped = flip_at(&mut board, true, target);

        assert!(flipped.is_empty());
        assert_eq!(board.count(), (3, 6));
    }

    #[test]
    fn adjacent_friendly_stone_blocks_the_line() {
        let board = Board::from_rows([
            "........",
            "........",
            "........",
            "..BBW...",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert!(!can_move(&board, true, pos(1, 3)));
        assert!(can_move(&board, false, pos(1, 3)));
    }

    #[test]
    fn best_move_returns_one_of_the_legal_squares() {
        let board = Board::new();
        let legal = legal_moves(&board, false);

        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = best_move(&board, false, Difficulty::Easy, &ThinkConfig::default(), &mut rng);
            assert!(legal.contains(&mv.unwrap()));
        }
    }

    #[test]
    fn best_move_is_none_without_legal_squares() {
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            best_move(&board, false, Difficulty::Hard, &ThinkConfig::default(), &mut rng),
            None
        );
    }

    #[test]
    fn has_legal_move_is_false_on_single_color_board() {
        let mut board = Board::empty();
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(1, 0), Cell::Black);

        assert!(!has_legal_move(&board, true));
        assert!(!has_legal_move(&board, false));
        assert!(has_legal_move(&Board::new(), false));
    }
}
