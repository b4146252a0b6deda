#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use othello::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn new_game_reports_opening_scores() {
    let mut game = WasmGame::new(1).unwrap();
    game.start();

    let state = game.get_state().unwrap();

    assert_eq!(field(&state, "black_score").as_f64(), Some(2.0));
    assert_eq!(field(&state, "white_score").as_f64(), Some(2.0));
    assert_eq!(field(&state, "status").as_string().as_deref(), Some("BlackToMove"));
}

#[wasm_bindgen_test]
fn human_move_then_computer_reply() {
    let mut game = WasmGame::new(2).unwrap();
    game.start();

    game.place(2, 3).unwrap();
    let reply = game.computer_move().unwrap();

    assert!(field(&reply, "x").as_f64().is_some());
    let state = game.get_state().unwrap();
    assert_eq!(field(&state, "status").as_string().as_deref(), Some("BlackToMove"));
}

#[wasm_bindgen_test]
fn invalid_input_surfaces_as_error_strings() {
    assert!(WasmGame::new(7).is_err());

    let mut game = WasmGame::new(0).unwrap();
    game.start();

    let err = game.place(0, 0).unwrap_err();
    assert!(err.as_string().unwrap().contains("illegal move"));
    assert!(game.place(9, 0).is_err());
}

#[wasm_bindgen_test]
fn partial_config_object_is_accepted() {
    let config = js_sys::Object::new();
    Reflect::set(&config, &JsValue::from_str("hard_noise"), &JsValue::from_f64(0.0)).unwrap();

    let mut game = WasmGame::with_config(2, config.into()).unwrap();
    game.start();

    assert!(game.can_move(2, 3).unwrap());
}
