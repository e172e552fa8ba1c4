//! Legal-move enumeration with center-biased ordering.

use serde::{Deserialize, Serialize};

use super::set::BoardSet;
use crate::core::BoardSize;

/// A target cell within a board set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Index of the target board within the set.
    pub board: usize,
    /// Flat row-major cell index within that board.
    pub cell: usize,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(board: usize, cell: usize) -> Self {
        Self { board, cell }
    }
}

/// Ordering score for a cell: negative Manhattan distance from the board
/// center, so center cells score highest.
///
/// Distances are doubled to keep even-sided boards (whose geometric center
/// falls between cells) in integer arithmetic.
#[must_use]
pub fn cell_value(cell: usize, size: BoardSize) -> i32 {
    let side = size.side() as i32;
    let row = cell as i32 / side;
    let col = cell as i32 % side;
    let center2 = side - 1; // doubled center coordinate
    -((2 * row - center2).abs() + (2 * col - center2).abs())
}

/// All legal moves in the set: every empty cell on every live board.
///
/// Moves are ordered center-first by [`cell_value`]; ties keep the natural
/// board-ascending, cell-ascending order. The ordering only biases which
/// move the AI heuristic reaches for first, legality is unaffected.
///
/// Returns an empty vec iff every board is dead (the terminal state).
#[must_use]
pub fn legal_moves(set: &BoardSet) -> Vec<Move> {
    let mut moves = Vec::new();

    for (b, board) in set.boards().enumerate() {
        if set.is_board_dead(b) {
            continue;
        }
        for (c, cell) in board.cells().iter().enumerate() {
            if cell.is_empty() {
                moves.push(Move::new(b, c));
            }
        }
    }

    // Stable sort preserves the natural order on ties.
    moves.sort_by_key(|m| std::cmp::Reverse(cell_value(m.cell, set.size())));
    moves
}
