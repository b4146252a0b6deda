//! JavaScript facade over [`GameSession`]. The human always plays black.

use std::fmt::Display;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::ai::think::ThinkEngine;
use crate::config::ThinkConfig;
use crate::game::GameSession;
use crate::types::{Difficulty, Position};

#[wasm_bindgen]
pub struct WasmGame {
    session: GameSession,
}

#[wasm_bindgen]
impl WasmGame {
    /// `difficulty`: 0=easy, 1=medium, 2=hard.
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: u8) -> Result<WasmGame, JsValue> {
        Self::build(difficulty, ThinkConfig::default())
    }

    /// Same as the constructor with a partial `ThinkConfig` object.
    pub fn with_config(difficulty: u8, config: JsValue) -> Result<WasmGame, JsValue> {
        let config: ThinkConfig = if config.is_undefined() || config.is_null() {
            ThinkConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(to_js_error)?;
        Self::build(difficulty, config)
    }

    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn set_difficulty(&mut self, difficulty: u8) -> Result<(), JsValue> {
        let difficulty = Difficulty::try_from(difficulty).map_err(to_js_error)?;
        self.session.set_difficulty(difficulty).map_err(to_js_error)
    }

    pub fn place(&mut self, x: usize, y: usize) -> Result<(), JsValue> {
        let pos = Position::new(x, y).map_err(to_js_error)?;
        self.session.place_move(true, pos).map_err(to_js_error)
    }

    pub fn pass(&mut self) -> Result<(), JsValue> {
        self.session.pass_turn(true).map_err(to_js_error)
    }

    pub fn can_move(&self, x: usize, y: usize) -> Result<bool, JsValue> {
        let pos = Position::new(x, y).map_err(to_js_error)?;
        Ok(self.session.can_move(true, pos))
    }

    /// Chosen square as `{ x, y }`, or `undefined` after a forced pass.
    pub fn computer_move(&mut self) -> Result<JsValue, JsValue> {
        let chosen = self.session.computer_move().map_err(to_js_error)?;
        to_js(&chosen)
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        let moves = match self.session.status().side_to_move() {
            Some(is_black) => self.session.legal_moves(is_black),
            None => Vec::new(),
        };
        to_js(&moves)
    }

    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.to_game_state())
    }

    pub fn get_result(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.result())
    }
}

impl WasmGame {
    fn build(difficulty: u8, config: ThinkConfig) -> Result<WasmGame, JsValue> {
        let difficulty = Difficulty::try_from(difficulty).map_err(to_js_error)?;
        Ok(Self {
            session: GameSession::new(difficulty, Box::new(ThinkEngine::new(config))),
        })
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

fn to_js_error(err: impl Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
