//! Text layout of the board.
//!
//! ```text
//! Winning condition: 3
//!    1  2  3
//! 0 |X||_||_|
//! 3 |_||O||_|
//! 6 |_||_||_|
//! ```
//!
//! Rows are labelled with the 0-based linear index of their first cell and
//! padded to the width of the widest label, `size * (size - 1)`.

use super::board::GameBoard;
use tracing::instrument;

/// A rendered board, split by the part the console styles differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    /// `Winning condition: <w>` line.
    pub header: String,
    /// Column numbers aligned over the cells.
    pub guide: String,
    /// Labelled cell rows, top to bottom.
    pub rows: Vec<String>,
}

impl BoardView {
    /// Lays out the given board.
    #[instrument(skip(board))]
    pub fn new(board: &GameBoard) -> Self {
        let size = board.size();
        let rows = board
            .render_rows()
            .into_iter()
            .enumerate()
            .map(|(row, cells)| format!("{}{}", row_label(size, row), cells))
            .collect();
        Self {
            header: header(board.winning_condition()),
            guide: column_guide(size),
            rows,
        }
    }
}

impl std::fmt::Display for BoardView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.guide)?;
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Width of the widest row label.
fn label_width(size: usize) -> usize {
    digits(size * (size - 1))
}

/// Returns the header line naming the winning condition.
pub fn header(winning_condition: usize) -> String {
    format!("Winning condition: {}", winning_condition)
}

/// Returns the row of 1-based column numbers.
pub fn column_guide(size: usize) -> String {
    let mut guide = " ".repeat(label_width(size) + 1);
    for column in 1..=size {
        if column >= 10 {
            guide.push_str(&format!(" {}", column));
        } else {
            guide.push_str(&format!(" {} ", column));
        }
    }
    guide
}

/// Returns the padded label of a 0-based row.
pub fn row_label(size: usize, row: usize) -> String {
    let label = row * size;
    let padding = label_width(size) - digits(label) + 1;
    format!("{}{}", label, " ".repeat(padding))
}
