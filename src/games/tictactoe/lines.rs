//! Winning-line generation.
//!
//! Lines are generated by sliding a `w × w` window (w = winning condition)
//! over the board. Each window anchor contributes its top row, left column
//! and both diagonals. Horizontal runs in the bottom `w - 1` rows and
//! vertical runs in the rightmost `w - 1` columns are never the top row or
//! left column of any window, so they are generated separately as edge
//! lines.

use super::dimensions::Dimensions;
use derive_more::Display;
use tracing::{debug, instrument};

/// Direction of a winning line.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Descending,
    /// Bottom-left to top-right, stored top-right first.
    Ascending,
}

/// An ordered run of 1-based cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    direction: Direction,
    cells: Vec<usize>,
}

impl Line {
    /// Returns the direction of this line.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the 1-based cell indices in order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Checks if the line has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Horizontal,
    Direction::Vertical,
    Direction::Descending,
    Direction::Ascending,
];

impl Direction {
    /// Row and column step from one cell of the line to the next.
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Descending => (1, 1),
            Direction::Ascending => (1, -1),
        }
    }
}

/// The line of a window anchored at the board cell `offset + 1`.
fn window_line(direction: Direction, size: usize, w: usize, offset: usize) -> Line {
    let cells = (0..w)
        .map(|j| {
            let base = match direction {
                Direction::Horizontal => j + 1,
                Direction::Vertical => 1 + size * j,
                Direction::Descending => j + 1 + size * j,
                // Relative to the window's own frame, not the board's.
                Direction::Ascending => w - j + size * j,
            };
            base + offset
        })
        .collect();
    Line { direction, cells }
}

/// The run in `direction` that contains `(row, column)` as its `back`-th cell.
fn run_through(
    dims: Dimensions,
    direction: Direction,
    (row, column): (usize, usize),
    back: usize,
) -> Option<Line> {
    let (dr, dc) = direction.step();
    let cells = (0..*dims.winning_condition())
        .map(|j| {
            let distance = isize::try_from(j).ok()? - isize::try_from(back).ok()?;
            let r = row.checked_add_signed(dr * distance)?;
            let c = column.checked_add_signed(dc * distance)?;
            dims.index(r, c)
        })
        .collect::<Option<Vec<_>>>()?;
    Some(Line { direction, cells })
}

/// Generates the lines contributed by every window anchor.
///
/// Anchors are visited row by row (`y` outer, `x` inner) and each yields a
/// horizontal, vertical, descending and ascending line in that order. The
/// result has exactly `4 × (size - w + 1)²` lines, produced on demand.
pub fn anchored(dims: Dimensions) -> impl Iterator<Item = Line> {
    let size = *dims.size();
    let w = *dims.winning_condition();
    let span = size - w + 1;

    (0..span)
        .flat_map(move |y| (0..span).map(move |x| x + y * size))
        .flat_map(move |offset| {
            DIRECTIONS
                .into_iter()
                .map(move |direction| window_line(direction, size, w, offset))
        })
}

/// Generates the horizontal and vertical runs no window anchor reaches.
///
/// Yields `2 × (w - 1) × (size - w + 1)` lines: horizontals whose row lies
/// below the last anchor row, then verticals whose column lies right of
/// the last anchor column.
pub fn edge(dims: Dimensions) -> impl Iterator<Item = Line> {
    let size = *dims.size();
    let w = *dims.winning_condition();
    let span = size - w + 1;

    let horizontals = (span..size).flat_map(move |y| {
        (0..span).map(move |x| window_line(Direction::Horizontal, size, w, x + y * size))
    });
    let verticals = (0..span).flat_map(move |y| {
        (span..size).map(move |x| window_line(Direction::Vertical, size, w, x + y * size))
    });
    horizontals.chain(verticals)
}

/// Every line on which a run of `w` marks wins, anchored lines first.
///
/// Lines are generated when iterated, never stored, so any board size
/// costs the same to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLines {
    dims: Dimensions,
}

impl WinningLines {
    /// Winning lines for the given dimensions.
    #[instrument]
    pub fn new(dims: Dimensions) -> Self {
        debug!(total = line_count(dims), "Winning lines ready");
        Self { dims }
    }

    /// All lines in scan order.
    pub fn iter(&self) -> impl Iterator<Item = Line> {
        anchored(self.dims).chain(edge(self.dims))
    }

    /// Lines contributed by window anchors.
    pub fn anchored(&self) -> impl Iterator<Item = Line> {
        anchored(self.dims)
    }

    /// Lines along the bottom and right edges.
    pub fn edge(&self) -> impl Iterator<Item = Line> {
        edge(self.dims)
    }

    /// Lines passing through a 1-based cell index.
    ///
    /// Yields at most `4 × w` lines, each also produced by [`iter`](Self::iter).
    /// An index outside the board has none.
    pub fn through(&self, index: usize) -> impl Iterator<Item = Line> {
        let dims = self.dims;
        let w = *dims.winning_condition();
        dims.coordinates(index).into_iter().flat_map(move |origin| {
            DIRECTIONS.into_iter().flat_map(move |direction| {
                (0..w).filter_map(move |back| run_through(dims, direction, origin, back))
            })
        })
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        line_count(self.dims)
    }

    /// Checks if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn line_count(dims: Dimensions) -> usize {
    let w = *dims.winning_condition();
    let span = *dims.size() - w + 1;
    4 * span * span + 2 * (w - 1) * span
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(size: usize, w: usize) -> Dimensions {
        Dimensions::new(size, w).unwrap()
    }

    #[test]
    fn test_classic_board_lines() {
        let lines: Vec<Line> = anchored(dims(3, 3)).collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].cells(), &[1, 2, 3]);
        assert_eq!(lines[1].cells(), &[1, 4, 7]);
        assert_eq!(lines[2].cells(), &[1, 5, 9]);
        assert_eq!(lines[3].cells(), &[3, 5, 7]);
        assert_eq!(edge(dims(3, 3)).count(), 4);
    }

    #[test]
    fn test_full_length_condition_edge_lines() {
        // One anchor: rows 2..4 and columns 2..4 come from the edge
        let lines: Vec<Line> = edge(dims(4, 4)).collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|line| line.len() == 4));
    }

    #[test]
    fn test_ascending_diagonal_in_window_frame() {
        // Last anchor of a 5x5 board with w = 3 is (2, 2)
        let last = anchored(dims(5, 3)).last().unwrap();
        assert_eq!(last.direction(), Direction::Ascending);
        assert_eq!(last.cells(), &[15, 19, 23]);
    }

    #[test]
    fn test_lines_through_corner_and_center() {
        let lines = WinningLines::new(dims(3, 3));
        let corner: Vec<Line> = lines.through(1).collect();
        assert_eq!(corner.len(), 3);
        assert!(corner.iter().all(|line| line.cells().contains(&1)));
        assert_eq!(lines.through(5).count(), 4);
        assert_eq!(lines.through(0).count(), 0);
        assert_eq!(lines.through(10).count(), 0);
    }

    #[test]
    fn test_lines_are_not_stored_for_large_boards() {
        let lines = WinningLines::new(dims(1000, 5));
        assert_eq!(lines.len(), 4 * 996 * 996 + 2 * 4 * 996);
        assert_eq!(lines.through(500_500).count(), 4 * 5);
    }
}
