#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use tictactoe::TicTacToe;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap()
}

fn squares(view: &JsValue) -> Vec<String> {
    Array::from(&get(view, "squares"))
        .iter()
        .map(|sq| get(&sq, "value").as_string().unwrap())
        .collect()
}

#[wasm_bindgen_test]
fn new_game_view_has_empty_board() {
    let game = TicTacToe::new();
    let view = game.view().unwrap();

    assert_eq!(get(&view, "status").as_string().unwrap(), "Next player: X");
    assert_eq!(squares(&view), vec![""; 9]);
    assert_eq!(Array::from(&get(&view, "rows")).length(), 3);
    assert_eq!(get(&view, "sortLabel").as_string().unwrap(), "Sort Descending");
}

#[wasm_bindgen_test]
fn clicks_play_and_win() {
    let mut game = TicTacToe::new();
    for idx in [0, 3, 1, 4, 2] {
        assert!(game.click_cell(idx).unwrap());
    }
    assert!(!game.click_cell(8).unwrap());

    let view = game.view().unwrap();
    let highlighted: Vec<f64> = Array::from(&get(&view, "squares"))
        .iter()
        .filter(|sq| get(sq, "highlighted").as_bool().unwrap())
        .map(|sq| get(&sq, "index").as_f64().unwrap())
        .collect();

    assert_eq!(game.status(), "Winner: X");
    assert_eq!(highlighted, vec![0.0, 1.0, 2.0]);
    assert!(get(&view, "isConcluded").as_bool().unwrap());
}

#[wasm_bindgen_test]
fn move_list_uses_camel_case_fields() {
    let mut game = TicTacToe::new();
    game.click_cell(4).unwrap();
    game.toggle_sort();

    let view = game.view().unwrap();
    let moves = Array::from(&get(&view, "moves"));
    let first = moves.get(0);

    assert!(get(&view, "reversed").as_bool().unwrap());
    assert_eq!(get(&first, "moveNumber").as_f64().unwrap(), 1.0);
    assert_eq!(
        get(&first, "label").as_string().unwrap(),
        "You are at move #1 (Row: 2, Col: 2)"
    );
    assert!(!get(&first, "activatable").as_bool().unwrap());
}

#[wasm_bindgen_test]
fn out_of_range_clicks_are_errors() {
    let mut game = TicTacToe::new();

    assert!(game.click_cell(9).is_err());
    assert!(game.click_move(3).is_err());
    assert!(game.click_move(0).is_ok());
}

#[wasm_bindgen_test]
fn options_object_sets_initial_order() {
    let options = Object::new();
    Reflect::set(&options, &"descending".into(), &JsValue::TRUE).unwrap();

    let game = TicTacToe::with_options(options.into()).unwrap();
    let view = game.view().unwrap();

    assert!(get(&view, "reversed").as_bool().unwrap());
    assert!(TicTacToe::with_options(JsValue::UNDEFINED).is_ok());
    assert!(TicTacToe::with_options(JsValue::from_str("nope")).is_err());
}
