use log::{debug, info, trace, warn};

use crate::ai::think::ThinkEngine;
use crate::board::Board;
use crate::error::GameError;
use crate::rules;
use crate::types::{Cell, Difficulty, GameResult, GameState, Outcome, Position, Status};

/// More consecutive passes than this end the game.
const MAX_PASSES: u8 = 2;

/// Chooses the computer's square for a side, `None` when it has to pass.
pub trait MoveSelector: Send {
    fn select_move(
        &mut self,
        board: &Board,
        is_black: bool,
        difficulty: Difficulty,
    ) -> Option<Position>;
}

/// One game of human (black) against computer (white).
///
/// Owns the board exclusively; the rule functions and the move selector
/// only borrow it for the duration of a call.
pub struct GameSession {
    board: Board,
    status: Status,
    black_score: u8,
    white_score: u8,
    /// Forced passes since the last reset. Successful moves do not clear it.
    pass_count: u8,
    difficulty: Difficulty,
    last_move: Option<Position>,
    flipped: Vec<Position>,
    selector: Box<dyn MoveSelector>,
}

impl GameSession {
    pub fn new(difficulty: Difficulty, selector: Box<dyn MoveSelector>) -> Self {
        let mut session = Self {
            board: Board::new(),
            status: Status::NotStarted,
            black_score: 0,
            white_score: 0,
            pass_count: 0,
            difficulty,
            last_move: None,
            flipped: Vec::new(),
            selector,
        };
        session.reset();
        session
    }

    pub fn new_with_think_engine(difficulty: Difficulty) -> Self {
        Self::new(difficulty, Box::new(ThinkEngine::default()))
    }

    /// Restores the opening position and counters. The game is not started.
    pub fn reset(&mut self) {
        self.board.reset();
        self.status = Status::NotStarted;
        self.pass_count = 0;
        self.last_move = None;
        self.flipped.clear();
        self.recompute_scores();
    }

    /// New-game request: reset, then black to move.
    pub fn start(&mut self) {
        self.reset();
        self.status = Status::BlackToMove;
        info!("new game started at {:?} difficulty", self.difficulty);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tile(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn black_score(&self) -> u8 {
        self.black_score
    }

    pub fn white_score(&self) -> u8 {
        self.white_score
    }

    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), GameError> {
        if self.status != Status::NotStarted {
            return Err(GameError::GameInProgress);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Rescans the board and stores the counts.
    pub fn recompute_scores(&mut self) -> (u8, u8) {
        let (black, white) = self.board.count();
        self.black_score = black;
        self.white_score = white;
        (black, white)
    }

    pub fn can_move(&self, is_black: bool, pos: Position) -> bool {
        rules::can_move(&self.board, is_black, pos)
    }

    pub fn has_legal_move(&self, is_black: bool) -> bool {
        rules::has_legal_move(&self.board, is_black)
    }

    pub fn legal_moves(&self, is_black: bool) -> Vec<Position> {
        rules::legal_moves(&self.board, is_black)
    }

    /// Validates and plays a stone for `is_black`, then advances the turn.
    pub fn place_move(&mut self, is_black: bool, pos: Position) -> Result<(), GameError> {
        self.ensure_turn(is_black)?;
        if !self.can_move(is_black, pos) {
            return Err(GameError::IllegalMove {
                x: pos.x(),
                y: pos.y(),
            });
        }
        self.apply_move(is_black, pos);
        Ok(())
    }

    /// Forced pass; only allowed when `is_black` has no legal square.
    pub fn pass_turn(&mut self, is_black: bool) -> Result<(), GameError> {
        self.ensure_turn(is_black)?;
        if self.has_legal_move(is_black) {
            return Err(GameError::PassNotAllowed);
        }

        self.pass_count += 1;
        self.last_move = None;
        self.flipped.clear();
        debug!(
            "{} passes, pass count now {}",
            side_name(is_black),
            self.pass_count
        );
        self.finish_turn(is_black);
        Ok(())
    }

    /// Lets the selector play white's turn.
    ///
    /// Returns the chosen square, or `Ok(None)` when white had to pass.
    pub fn computer_move(&mut self) -> Result<Option<Position>, GameError> {
        let is_black = false;
        self.ensure_turn(is_black)?;

        match self
            .selector
            .select_move(&self.board, is_black, self.difficulty)
        {
            Some(pos) => {
                if !self.can_move(is_black, pos) {
                    warn!(
                        "selector proposed illegal square ({}, {}) for {}",
                        pos.x(),
                        pos.y(),
                        side_name(is_black)
                    );
                    return Err(GameError::IllegalMove {
                        x: pos.x(),
                        y: pos.y(),
                    });
                }
                self.apply_move(is_black, pos);
                Ok(Some(pos))
            }
            None => {
                self.pass_turn(is_black)?;
                Ok(None)
            }
        }
    }

    /// True once passes exceed the limit, a color is wiped out or the board is full.
    pub fn is_game_over_position(&self) -> bool {
        if self.pass_count > MAX_PASSES {
            return true;
        }
        let (black, white) = self.board.count();
        black == 0 || white == 0 || self.board.empty_count() == 0
    }

    pub fn result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            outcome: if black_count > white_count {
                Outcome::BlackWins
            } else if white_count > black_count {
                Outcome::WhiteWins
            } else {
                Outcome::Draw
            },
            black_count,
            white_count,
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board.to_array().to_vec(),
            status: self.status,
            difficulty: self.difficulty,
            black_score: self.black_score,
            white_score: self.white_score,
            pass_count: self.pass_count,
            last_move: self.last_move,
            flipped: self.flipped.clone(),
        }
    }

    fn ensure_turn(&self, is_black: bool) -> Result<(), GameError> {
        match self.status.side_to_move() {
            None => Err(GameError::NotInProgress),
            Some(side) if side != is_black => Err(GameError::WrongTurn),
            Some(_) => Ok(()),
        }
    }

    fn apply_move(&mut self, is_black: bool, pos: Position) {
        self.board.set(pos, Cell::of_side(is_black));
        self.flipped = rules::flip_at(&mut self.board, is_black, pos);
        self.last_move = Some(pos);
        self.recompute_scores();
        trace!(
            "{} plays ({}, {}) flipping {}",
            side_name(is_black),
            pos.x(),
            pos.y(),
            self.flipped.len()
        );
        self.finish_turn(is_black);
    }

    fn finish_turn(&mut self, is_black: bool) {
        if self.is_game_over_position() {
            self.status = Status::NotStarted;
            let result = self.result();
            info!(
                "game over: {:?}, black {} white {}",
                result.outcome, result.black_count, result.white_count
            );
        } else {
            self.status = Status::after_turn_of(is_black);
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, status: Status) {
        self.board = board;
        self.status = status;
        self.last_move = None;
        self.flipped.clear();
        self.recompute_scores();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new_with_think_engine(Difficulty::default())
    }
}

fn side_name(is_black: bool) -> &'static str {
    if is_black { "black" } else { "white" }
}
