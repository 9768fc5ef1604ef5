//! Win detection logic.

use super::super::lines::Line;
use super::super::{Cell, Mark};
use tracing::instrument;

/// Returns the mark holding every cell of `line`, if one does.
///
/// `cells` is the board in row-major order; line indices are 1-based.
/// Every consecutive pair must hold the same non-empty mark.
pub fn winning_mark(line: &Line, cells: &[Cell]) -> Option<Mark> {
    let mut marks = line
        .cells()
        .iter()
        .map(|&index| index.checked_sub(1).and_then(|i| cells.get(i)).copied());

    let first = marks.next()??.mark()?;
    marks
        .all(|cell| cell == Some(Cell::Marked(first)))
        .then_some(first)
}

/// Returns the first winning line in scan order together with its mark.
#[instrument(skip_all)]
pub fn winning_line(
    cells: &[Cell],
    lines: impl IntoIterator<Item = Line>,
) -> Option<(Line, Mark)> {
    lines
        .into_iter()
        .find_map(|line| winning_mark(&line, cells).map(|mark| (line, mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line whose cells all hold `mark`.
#[instrument(skip_all)]
pub fn check_winner(cells: &[Cell], lines: impl IntoIterator<Item = Line>) -> Option<Mark> {
    winning_line(cells, lines).map(|(_, mark)| mark)
}
