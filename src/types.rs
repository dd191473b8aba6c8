use serde::{Deserialize, Serialize};

/// One square as the page should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub index: u8,
    pub row: u8,
    pub col: u8,
    /// `"X"`, `"O"`, or `""` for an empty square.
    pub value: &'static str,
    pub highlighted: bool,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveView {
    pub move_number: u32,
    pub label: String,
    /// Contract:
    /// - `true`: render a button that calls `clickMove(moveNumber)`.
    /// - `false`: the entry being shown, render as plain text.
    pub activatable: bool,
}

/// Public game view returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub status: String,
    pub is_concluded: bool,
    /// Row-major, always 9 squares.
    pub squares: Vec<SquareView>,
    /// `squares` grouped into the three board rows.
    pub rows: Vec<Vec<SquareView>>,
    pub current_move: u32,
    /// Text of the sort toggle, naming the order it switches to.
    pub sort_label: &'static str,
    /// `true` when the list is descending; render as `<ol reversed>`.
    pub reversed: bool,
    pub moves: Vec<MoveView>,
}

/// Options accepted from the host page. Every field is optional.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Start with the move list in descending order.
    pub descending: bool,
}
