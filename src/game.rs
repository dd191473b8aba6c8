use std::fmt;

use tracing::{debug, instrument, trace};

use crate::board::{BOARD_LEN, Board, Player, WinningLine};
use crate::error::{GameError, Result};

/// One step of the game: the board after a move and the square that was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub board: Board,
    /// `None` only for the starting board.
    pub last_move: Option<usize>,
}

/// Outcome shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Draw,
    NextPlayer(Player),
}

impl Status {
    pub fn is_concluded(self) -> bool {
        !matches!(self, Status::NextPlayer(_))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {player}"),
            Status::Draw => f.write_str("It's a draw!"),
            Status::NextPlayer(player) => write!(f, "Next player: {player}"),
        }
    }
}

/// Why a move was turned away. Rejections leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    GameConcluded,
    CellOccupied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Accepted {
        player: Player,
        winner: Option<WinningLine>,
    },
    Rejected(Rejection),
}

impl PlayOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PlayOutcome::Accepted { .. })
    }
}

/// Game state store: the history of boards, the pointer into it, and the
/// highlighted winning line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInstance {
    history: Vec<HistoryEntry>,
    current_move: usize,
    highlight: Option<[usize; 3]>,
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new()
    }
}

impl GameInstance {
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry {
                board: Board::new(),
                last_move: None,
            }],
            current_move: 0,
            highlight: None,
        }
    }

    /// Places the next player's mark on `index`.
    ///
    /// Moves onto a taken square or after the game is won come back as
    /// [`PlayOutcome::Rejected`]. Playing from an earlier position discards
    /// every later entry.
    #[instrument(level = "debug", skip(self), fields(current_move = self.current_move))]
    pub fn play_move(&mut self, index: usize) -> Result<PlayOutcome> {
        let board = self.current_board();
        if board.cell(index).is_none() {
            return Err(GameError::CellOutOfRange { index });
        }
        if board.winner().is_some() {
            trace!("move rejected: game already won");
            return Ok(PlayOutcome::Rejected(Rejection::GameConcluded));
        }

        let player = self.next_player();
        let Some(next) = board.with_mark(index, player) else {
            trace!("move rejected: square occupied");
            return Ok(PlayOutcome::Rejected(Rejection::CellOccupied));
        };

        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry {
            board: next,
            last_move: Some(index),
        });
        self.current_move = self.history.len() - 1;

        let winner = next.winner();
        self.highlight = winner.map(|win| win.line);
        debug!(%player, move_number = self.current_move, won = winner.is_some(), "move played");

        Ok(PlayOutcome::Accepted { player, winner })
    }

    /// Moves the pointer to `position` and clears the highlight.
    #[instrument(level = "debug", skip(self))]
    pub fn jump_to(&mut self, position: usize) -> Result<()> {
        if position >= self.history.len() {
            return Err(GameError::MoveOutOfRange {
                position,
                len: self.history.len(),
            });
        }

        self.current_move = position;
        self.highlight = None;
        debug!("jumped");
        Ok(())
    }

    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(win) = board.winner() {
            Status::Winner(win.winner)
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::NextPlayer(self.next_player())
        }
    }

    /// X moves on even positions, O on odd ones.
    pub fn next_player(&self) -> Player {
        if self.current_move % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    pub fn current_board(&self) -> Board {
        self.history[self.current_move].board
    }

    pub fn current_move(&self) -> usize {
        self.current_move
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn highlight(&self) -> Option<[usize; 3]> {
        self.highlight
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlight.is_some_and(|line| line.contains(&index))
    }

    /// Whether a click on `index` would be accepted right now.
    pub fn can_play(&self, index: usize) -> bool {
        self.current_board().winner().is_none()
            && self
                .current_board()
                .cell(index)
                .is_some_and(|cell| cell.is_empty())
    }
}
