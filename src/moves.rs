use std::iter::Enumerate;
use std::slice;

use crate::board::row_col;
use crate::game::{GameInstance, HistoryEntry};

/// Display order of the move list. Only affects presentation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One line of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub move_number: usize,
    pub label: String,
    /// 1-based `(row, col)` of the square played to reach this entry.
    pub position: Option<(usize, usize)>,
    /// The entry being shown; rendered as text instead of a jump button.
    pub is_current: bool,
}

impl MoveDescriptor {
    fn new(move_number: usize, entry: &HistoryEntry, current_move: usize) -> Self {
        let is_current = move_number == current_move;
        let mut label = if is_current {
            format!("You are at move #{move_number}")
        } else if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{move_number}")
        };

        let position = entry.last_move.map(row_col);
        if let Some((row, col)) = position {
            label.push_str(&format!(" (Row: {row}, Col: {col})"));
        }

        Self {
            move_number,
            label,
            position,
            is_current,
        }
    }

    pub fn is_activatable(&self) -> bool {
        !self.is_current
    }
}

/// Borrowed view over a game's history that can be iterated any number of times.
#[derive(Debug, Clone, Copy)]
pub struct MoveList<'a> {
    game: &'a GameInstance,
}

impl<'a> MoveList<'a> {
    pub fn new(game: &'a GameInstance) -> Self {
        Self { game }
    }

    pub fn len(&self) -> usize {
        self.game.history().len()
    }

    /// Always `false`; the starting board is always listed.
    pub fn is_empty(&self) -> bool {
        self.game.history().is_empty()
    }

    /// Descriptors in ascending move order.
    pub fn iter(&self) -> Moves<'a> {
        self.ordered(SortOrder::Ascending)
    }

    /// Descriptors in the given order. Descending walks the same sequence
    /// from the back.
    pub fn ordered(&self, order: SortOrder) -> Moves<'a> {
        Moves {
            entries: self.game.history().iter().enumerate(),
            current_move: self.game.current_move(),
            order,
        }
    }
}

impl<'a> IntoIterator for MoveList<'a> {
    type Item = MoveDescriptor;
    type IntoIter = Moves<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over [`MoveDescriptor`]s.
#[derive(Debug, Clone)]
pub struct Moves<'a> {
    entries: Enumerate<slice::Iter<'a, HistoryEntry>>,
    current_move: usize,
    order: SortOrder,
}

impl Moves<'_> {
    fn describe(&self, item: Option<(usize, &HistoryEntry)>) -> Option<MoveDescriptor> {
        item.map(|(n, entry)| MoveDescriptor::new(n, entry, self.current_move))
    }
}

impl Iterator for Moves<'_> {
    type Item = MoveDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.order {
            SortOrder::Ascending => self.entries.next(),
            SortOrder::Descending => self.entries.next_back(),
        };
        self.describe(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl DoubleEndedIterator for Moves<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = match self.order {
            SortOrder::Ascending => self.entries.next_back(),
            SortOrder::Descending => self.entries.next(),
        };
        self.describe(item)
    }
}

impl ExactSizeIterator for Moves<'_> {}
