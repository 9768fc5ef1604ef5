//! Draw detection logic.

use super::super::Mark;
use tracing::instrument;

/// Checks if the board is full, given how many marks have been placed.
pub fn is_full(placed: usize, cell_count: usize) -> bool {
    placed >= cell_count
}

/// Checks for a full board with no winner.
#[instrument]
pub fn is_draw(winner: Option<Mark>, placed: usize, cell_count: usize) -> bool {
    winner.is_none() && is_full(placed, cell_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(0, 9));
    }

    #[test]
    fn test_partial_board_not_full() {
        assert!(!is_full(1, 9));
        assert!(!is_draw(None, 8, 9));
    }

    #[test]
    fn test_draw_detection() {
        assert!(is_full(9, 9));
        assert!(is_draw(None, 9, 9));
    }

    #[test]
    fn test_not_draw_if_winner() {
        assert!(is_full(9, 9));
        assert!(!is_draw(Some(Mark::X), 9, 9));
    }
}
