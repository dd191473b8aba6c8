use tracing::{debug, trace};

use crate::board::{BOARD_LEN, BOARD_WIDTH};
use crate::error::{GameError, Result};
use crate::game::GameInstance;
use crate::moves::{MoveList, SortOrder};
use crate::types::{GameOptions, GameView, MoveView, SquareView};

/// Board, status line, and move list, driven by clicks.
///
/// Every event runs to completion before [`GameUi::render`] can observe the
/// state, so a rendered view is never half-updated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameUi {
    game: GameInstance,
    sort_order: SortOrder,
}

impl GameUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GameOptions) -> Self {
        let sort_order = if options.descending {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        };
        Self {
            game: GameInstance::new(),
            sort_order,
        }
    }

    pub fn game(&self) -> &GameInstance {
        &self.game
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Handles a click on square `index`. Returns whether the game changed.
    ///
    /// Clicks on a taken square or after a win are ignored.
    pub fn click_cell(&mut self, index: usize) -> Result<bool> {
        if index >= BOARD_LEN {
            return Err(GameError::CellOutOfRange { index });
        }
        if !self.game.can_play(index) {
            trace!(index, "click ignored");
            return Ok(false);
        }
        Ok(self.game.play_move(index)?.is_accepted())
    }

    /// Handles a click on move list entry `position`. Returns whether the
    /// pointer moved.
    pub fn click_move(&mut self, position: usize) -> Result<bool> {
        if position == self.game.current_move() {
            trace!(position, "already at move");
            return Ok(false);
        }
        self.game.jump_to(position)?;
        Ok(true)
    }

    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggled();
        debug!(order = ?self.sort_order, "sort order toggled");
    }

    pub fn render(&self) -> GameView {
        let board = self.game.current_board();
        let squares: Vec<SquareView> = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| SquareView {
                index: index as u8,
                row: (index / BOARD_WIDTH) as u8,
                col: (index % BOARD_WIDTH) as u8,
                value: cell.glyph(),
                highlighted: self.game.is_highlighted(index),
            })
            .collect();
        let rows = squares.chunks(BOARD_WIDTH).map(<[_]>::to_vec).collect();

        let moves = MoveList::new(&self.game)
            .ordered(self.sort_order)
            .map(|m| MoveView {
                move_number: m.move_number as u32,
                activatable: m.is_activatable(),
                label: m.label,
            })
            .collect();

        let status = self.game.status();
        let descending = self.sort_order == SortOrder::Descending;

        GameView {
            status: status.to_string(),
            is_concluded: status.is_concluded(),
            squares,
            rows,
            current_move: self.game.current_move() as u32,
            sort_label: if descending {
                "Sort Ascending"
            } else {
                "Sort Descending"
            },
            reversed: descending,
            moves,
        }
    }
}
