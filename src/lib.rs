use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::ThinkConfig;
pub use error::{ConfigError, GameError};
pub use game::{GameSession, MoveSelector};
pub use types::{Cell, Difficulty, GameResult, GameState, Outcome, Position, Status};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
