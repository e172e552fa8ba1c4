//! Board-set snapshots.
//!
//! A `BoardSet` is one complete immutable state of all boards in a game.
//! Applying a move produces a new snapshot, so history retention and undo
//! are plain sequence operations. The board list is an `im::Vector` for
//! structural sharing between consecutive snapshots.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::patterns::is_dead;
use super::Board;
use crate::core::{BoardSize, GameConfig};

/// An immutable snapshot of every board in a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSet {
    boards: Vector<Board>,
    size: BoardSize,
}

impl BoardSet {
    /// Create a set of all-empty boards.
    ///
    /// `board_count` is clamped by the caller; 0 or more than
    /// [`GameConfig::MAX_BOARDS`] is a programming error.
    #[must_use]
    pub fn empty(board_count: usize, size: BoardSize) -> Self {
        assert!(
            (1..=GameConfig::MAX_BOARDS).contains(&board_count),
            "Board count must be 1-{}",
            GameConfig::MAX_BOARDS
        );
        Self {
            boards: (0..board_count).map(|_| Board::empty(size)).collect(),
            size,
        }
    }

    /// The shared board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Number of boards in the set.
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// The board at an index.
    ///
    /// Out-of-range indices are a caller error.
    #[must_use]
    pub fn board(&self, index: usize) -> &Board {
        &self.boards[index]
    }

    /// Iterate over the boards in order.
    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.boards.iter()
    }

    /// Whether the board at `index` contains a completed line.
    #[must_use]
    pub fn is_board_dead(&self, index: usize) -> bool {
        is_dead(&self.boards[index], self.size)
    }

    /// Number of boards without a completed line.
    #[must_use]
    pub fn live_count(&self) -> usize {
        (0..self.boards.len())
            .filter(|&i| !self.is_board_dead(i))
            .count()
    }

    /// Whether every board is dead (the terminal state).
    #[must_use]
    pub fn all_dead(&self) -> bool {
        self.live_count() == 0
    }

    /// Whether a move targets an empty cell on a live, in-range board.
    #[must_use]
    pub fn is_legal(&self, mv: Move) -> bool {
        mv.board < self.boards.len()
            && mv.cell < self.boards[mv.board].cell_count()
            && !self.is_board_dead(mv.board)
            && self.boards[mv.board].cell(mv.cell).is_empty()
    }

    /// Apply a move, producing a new snapshot.
    ///
    /// Returns `None` for an illegal move (dead board, occupied cell, or
    /// out-of-range index); the input set is never touched either way.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Option<Self> {
        if !self.is_legal(mv) {
            return None;
        }
        let mut boards = self.boards.clone();
        boards.set(mv.board, self.boards[mv.board].with_mark(mv.cell));
        Some(Self {
            boards,
            size: self.size,
        })
    }
}
