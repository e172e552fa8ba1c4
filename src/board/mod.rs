//! Board data model: cells, boards, snapshots, win detection, legal moves.
//!
//! Everything here is pure and synchronous. A [`BoardSet`] is an immutable
//! snapshot; [`BoardSet::with_move`] is the only way to derive the next one.

pub mod moves;
pub mod patterns;
pub mod set;

pub use moves::{cell_value, legal_moves, Move};
pub use patterns::{is_dead, win_patterns, LinePattern};
pub use set::BoardSet;

use serde::{Deserialize, Serialize};

use crate::core::BoardSize;

/// One cell of a board.
///
/// Notakto has a single shared mark: both players place the same symbol, so
/// a cell never records who marked it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Marked,
}

impl Cell {
    /// Whether this cell can still receive a mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A square board stored as a flat row-major cell sequence.
///
/// Boards are value types: equality compares cell contents, and marking a
/// cell produces a new board rather than mutating in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board of the given size.
    #[must_use]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            cells: vec![Cell::Empty; size.cell_count()],
        }
    }

    /// The cell at a flat index.
    ///
    /// Out-of-range indices are a caller error.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// A copy of this board with one additional mark.
    ///
    /// The caller has already checked the cell is empty; marking an occupied
    /// cell is a programming error.
    #[must_use]
    pub(crate) fn with_mark(&self, index: usize) -> Self {
        debug_assert!(self.cells[index].is_empty(), "Cell already marked");
        let mut cells = self.cells.clone();
        cells[index] = Cell::Marked;
        Self { cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(BoardSize::Three);

        assert_eq!(board.cell_count(), 9);
        assert!(board.cells().iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_with_mark_does_not_mutate() {
        let board = Board::empty(BoardSize::Two);
        let marked = board.with_mark(0);

        assert_eq!(board, Board::empty(BoardSize::Two));
        assert_eq!(marked.cell(0), Cell::Marked);
        assert!(marked.cell(1).is_empty());
    }

    #[test]
    fn test_value_equality() {
        let a = Board::empty(BoardSize::Two).with_mark(3);
        let b = Board::empty(BoardSize::Two).with_mark(3);

        assert_eq!(a, b);
        assert_ne!(a, Board::empty(BoardSize::Two));
    }

    #[test]
    fn test_serialization() {
        let board = Board::empty(BoardSize::Two).with_mark(1);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }
}
