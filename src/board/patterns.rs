//! Win detection over memoized line patterns.
//!
//! A board is dead once any row, column, or main diagonal is fully marked.
//! The patterns are a pure function of board size, so they are computed once
//! per supported size at first use and shared from a static table.

use once_cell::sync::Lazy;
use smallvec::SmallVec;

use super::Board;
use crate::core::BoardSize;

/// Flat indices forming one winning line.
///
/// Lines never exceed five cells, so they fit inline without allocation.
pub type LinePattern = SmallVec<[usize; 5]>;

static LINE_PATTERNS: Lazy<[Vec<LinePattern>; 4]> = Lazy::new(|| {
    [
        build_patterns(BoardSize::Two),
        build_patterns(BoardSize::Three),
        build_patterns(BoardSize::Four),
        build_patterns(BoardSize::Five),
    ]
});

fn build_patterns(size: BoardSize) -> Vec<LinePattern> {
    let side = size.side();
    let mut patterns = Vec::with_capacity(2 * side + 2);

    for i in 0..side {
        patterns.push((0..side).map(|j| i * side + j).collect()); // row i
        patterns.push((0..side).map(|j| i + j * side).collect()); // column i
    }
    patterns.push((0..side).map(|i| i * (side + 1)).collect()); // main diagonal
    patterns.push((0..side).map(|i| (i + 1) * (side - 1)).collect()); // anti-diagonal

    patterns
}

/// All winning line patterns for the given board size.
#[must_use]
pub fn win_patterns(size: BoardSize) -> &'static [LinePattern] {
    &LINE_PATTERNS[size.side() - 2]
}

/// Whether a board contains a completed line of marks.
///
/// Dead boards accept no further moves; killing the last live board loses
/// the game under the misère convention.
#[must_use]
pub fn is_dead(board: &Board, size: BoardSize) -> bool {
    win_patterns(size)
        .iter()
        .any(|pattern| pattern.iter().all(|&i| !board.cell(i).is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with_marks(size: BoardSize, marks: &[usize]) -> Board {
        marks
            .iter()
            .fold(Board::empty(size), |board, &i| board.with_mark(i))
    }

    #[test]
    fn test_pattern_counts() {
        for size in BoardSize::ALL {
            // side rows + side columns + two diagonals
            assert_eq!(win_patterns(size).len(), 2 * size.side() + 2);
        }
    }

    #[test]
    fn test_pattern_indices_in_range() {
        for size in BoardSize::ALL {
            for pattern in win_patterns(size) {
                assert_eq!(pattern.len(), size.side());
                assert!(pattern.iter().all(|&i| i < size.cell_count()));
            }
        }
    }

    #[test]
    fn test_empty_board_is_live() {
        for size in BoardSize::ALL {
            assert!(!is_dead(&Board::empty(size), size));
        }
    }

    #[test]
    fn test_completed_row() {
        let board = board_with_marks(BoardSize::Three, &[0, 1, 2]);
        assert!(is_dead(&board, BoardSize::Three));

        let board = board_with_marks(BoardSize::Three, &[6, 7, 8]);
        assert!(is_dead(&board, BoardSize::Three));
    }

    #[test]
    fn test_completed_column() {
        let board = board_with_marks(BoardSize::Three, &[1, 4, 7]);
        assert!(is_dead(&board, BoardSize::Three));
    }

    #[test]
    fn test_completed_diagonals() {
        let main = board_with_marks(BoardSize::Three, &[0, 4, 8]);
        assert!(is_dead(&main, BoardSize::Three));

        let anti = board_with_marks(BoardSize::Three, &[2, 4, 6]);
        assert!(is_dead(&anti, BoardSize::Three));
    }

    #[test]
    fn test_incomplete_lines_stay_live() {
        // Four marks but no completed row, column, or diagonal.
        let board = board_with_marks(BoardSize::Three, &[0, 1, 3, 4]);
        assert!(!is_dead(&board, BoardSize::Three));
    }

    #[test]
    fn test_every_line_on_every_size() {
        for size in BoardSize::ALL {
            for pattern in win_patterns(size) {
                let marks: Vec<usize> = pattern.iter().copied().collect();
                let board = board_with_marks(size, &marks);
                assert!(is_dead(&board, size), "{size:?} line {marks:?}");

                // Dropping any single cell from the line revives the board.
                for skip in 0..marks.len() {
                    let partial: Vec<usize> = marks
                        .iter()
                        .enumerate()
                        .filter(|&(i, _)| i != skip)
                        .map(|(_, &m)| m)
                        .collect();
                    let board = board_with_marks(size, &partial);
                    assert!(!is_dead(&board, size), "{size:?} partial {partial:?}");
                }
            }
        }
    }

    #[test]
    fn test_larger_board_row() {
        let board = board_with_marks(BoardSize::Five, &[10, 11, 12, 13, 14]);
        assert!(is_dead(&board, BoardSize::Five));

        let board = board_with_marks(BoardSize::Five, &[10, 11, 12, 13]);
        assert!(!is_dead(&board, BoardSize::Five));
    }
}
