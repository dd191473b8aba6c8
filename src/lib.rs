use wasm_bindgen::prelude::*;

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod types;
pub mod view;

use crate::error::GameError;
use crate::types::GameOptions;
use crate::view::GameUi;

/// Game handle owned by the page. Each instance is an independent game.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct TicTacToe {
    ui: GameUi,
}

#[wasm_bindgen]
impl TicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game from an options object such as `{ descending: true }`.
    /// `undefined` and `null` fall back to the defaults.
    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(options: JsValue) -> Result<TicTacToe, JsError> {
        let options: GameOptions = if options.is_undefined() || options.is_null() {
            GameOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|err| GameError::Options(err.to_string()))?
        };
        Ok(Self {
            ui: GameUi::with_options(options),
        })
    }

    /// Returns `true` when the click placed a mark.
    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, index: u8) -> Result<bool, JsError> {
        Ok(self.ui.click_cell(index as usize)?)
    }

    /// Returns `true` when the click moved to another entry.
    #[wasm_bindgen(js_name = clickMove)]
    pub fn click_move(&mut self, position: u32) -> Result<bool, JsError> {
        Ok(self.ui.click_move(position as usize)?)
    }

    #[wasm_bindgen(js_name = toggleSort)]
    pub fn toggle_sort(&mut self) {
        self.ui.toggle_sort();
    }

    /// Current view as a plain JS object; see [`types::GameView`].
    pub fn view(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.ui.render())?)
    }

    pub fn status(&self) -> String {
        self.ui.game().status().to_string()
    }
}
