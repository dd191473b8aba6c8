use std::fmt;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_LEN: usize = BOARD_WIDTH * BOARD_WIDTH;

/// The eight lines that win the game, in detection priority order.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of one square.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// Glyph shown in the square; empty squares render blank.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "",
            Cell::X => "X",
            Cell::O => "O",
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_cell().glyph())
    }
}

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Player,
    pub line: [usize; 3],
}

/// One 3x3 board snapshot, row-major.
///
/// Boards are never edited in place by the game; placing a mark yields a new
/// snapshot via [`Board::with_mark`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_LEN],
}

impl Board {
    /// Creates the empty starting board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; BOARD_LEN]) -> Self {
        Self { cells }
    }

    /// Returns a copy of this board with `index` set to `player`'s mark.
    /// Returns `None` when the square is taken or off the board.
    pub fn with_mark(&self, index: usize, player: Player) -> Option<Self> {
        if !self.cell(index)?.is_empty() {
            return None;
        }
        let mut next = *self;
        next.cells[index] = player.to_cell();
        Some(next)
    }

    /// Returns the cell at `index`, or `None` when it is off the board.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; BOARD_LEN] {
        &self.cells
    }

    /// Returns the first completed line in [`WINNING_LINES`] order.
    ///
    /// A board holding completed lines for both players cannot arise from
    /// alternating play and has no winner.
    pub fn winner(&self) -> Option<WinningLine> {
        let mut completed = WINNING_LINES
            .iter()
            .filter_map(|&line| self.completed_line(line));
        let first = completed.next()?;
        if completed.any(|other| other.winner != first.winner) {
            return None;
        }
        Some(first)
    }

    fn completed_line(&self, line: [usize; 3]) -> Option<WinningLine> {
        let [a, b, c] = line;
        let winner = Player::from_cell(self.cells[a])?;
        (self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c])
            .then_some(WinningLine { winner, line })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns `(x_count, o_count)`.
    pub fn count(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(x, o), cell| match cell {
            Cell::X => (x + 1, o),
            Cell::O => (x, o + 1),
            Cell::Empty => (x, o),
        })
    }
}

/// Converts a square index to a 1-based `(row, col)` pair.
pub fn row_col(index: usize) -> (usize, usize) {
    (index / BOARD_WIDTH + 1, index % BOARD_WIDTH + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        let mut cells = [Cell::Empty; BOARD_LEN];
        for (cell, ch) in cells.iter_mut().zip(s.chars()) {
            *cell = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();

        assert_eq!(board.winner(), None);
        assert!(!board.is_full());
        assert_eq!(board.count(), (0, 0));
    }

    #[test]
    fn detects_every_line_for_both_players() {
        for line in WINNING_LINES {
            for player in [Player::X, Player::O] {
                let mut board = Board::new();
                for idx in line {
                    board = board.with_mark(idx, player).unwrap();
                }

                assert_eq!(
                    board.winner(),
                    Some(WinningLine {
                        winner: player,
                        line
                    })
                );
            }
        }
    }

    #[test]
    fn top_row_win_is_reported_with_its_indices() {
        let board = board("XXXOO....");

        let win = board.winner().unwrap();

        assert_eq!(win.winner, Player::X);
        assert_eq!(win.line, [0, 1, 2]);
    }

    #[test]
    fn mixed_line_is_not_a_win() {
        assert_eq!(board("XOX......").winner(), None);
        assert_eq!(board("XOXXOOOXX").winner(), None);
    }

    #[test]
    fn first_line_in_priority_order_wins_ties() {
        // Row 0 and column 0 both complete; rows come first.
        let board = board("XXXX..X..");

        assert_eq!(board.winner().unwrap().line, [0, 1, 2]);
    }

    #[test]
    fn lines_for_both_players_report_no_winner() {
        let board = board("XXXOOO...");

        assert_eq!(board.winner(), None);
    }

    #[test]
    fn with_mark_leaves_original_untouched() {
        let before = Board::new();

        let after = before.with_mark(4, Player::O).unwrap();

        assert_eq!(before.cell(4), Some(Cell::Empty));
        assert_eq!(after.cell(4), Some(Cell::O));
        assert_eq!(after.cell(9), None);
        assert_eq!(after.count(), (0, 1));
    }

    #[test]
    fn with_mark_refuses_taken_or_missing_squares() {
        let board = board("X...O....");

        assert_eq!(board.with_mark(0, Player::O), None);
        assert_eq!(board.with_mark(4, Player::X), None);
        assert_eq!(board.with_mark(9, Player::X), None);
        assert_eq!(board.with_mark(usize::MAX, Player::O), None);
        assert_eq!(board.with_mark(8, Player::O).unwrap().count(), (1, 2));
    }

    #[test]
    fn full_board_is_reported() {
        assert!(board("XOXXOOOXX").is_full());
        assert!(!board("XOXXOOOX.").is_full());
    }

    #[test]
    fn row_col_is_one_based() {
        assert_eq!(row_col(0), (1, 1));
        assert_eq!(row_col(4), (2, 2));
        assert_eq!(row_col(5), (2, 3));
        assert_eq!(row_col(8), (3, 3));
    }

    #[test]
    fn player_display_and_opponent() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Cell::Empty.glyph(), "");
    }
}
