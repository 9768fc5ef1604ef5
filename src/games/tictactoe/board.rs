//! Board state for N-in-a-row tic-tac-toe.

use super::dimensions::Dimensions;
use super::lines::WinningLines;
use super::rules;
use super::types::{Cell, GameStatus, Mark, Outcome};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// A square board of marks with a turn counter.
///
/// Cells are addressed by 1-based linear indices in row-major order.
/// Each placement is checked against the winning lines through its cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    dims: Dimensions,
    cells: Vec<Cell>,
    turn: usize,
    last_mark: Option<Mark>,
    history: Vec<usize>,
    winner: Option<Mark>,
    lines: WinningLines,
}

impl GameBoard {
    /// Creates an empty board, with X to move on turn 1.
    #[instrument]
    pub fn new(dims: Dimensions) -> Self {
        info!(
            size = *dims.size(),
            winning_condition = *dims.winning_condition(),
            "Creating board"
        );
        Self {
            dims,
            cells: vec![Cell::Empty; dims.cell_count()],
            turn: 1,
            last_mark: None,
            history: Vec::new(),
            winner: None,
            lines: WinningLines::new(dims),
        }
    }

    /// Places the current player's mark at a 1-based index.
    ///
    /// On success the turn advances and the placed mark is returned.
    ///
    /// # Errors
    ///
    /// Rejects without touching the board when the index is outside
    /// `1..=size²`, the cell is already marked, or the game has ended.
    #[instrument(skip(self), fields(turn = self.turn))]
    pub fn place(&mut self, index: usize) -> Result<Mark, PlaceError> {
        let cell_count = self.dims.cell_count();
        if index == 0 || index > cell_count {
            return Err(PlaceError::OutOfRange { index, cell_count });
        }
        if let Cell::Marked(mark) = self.cells[index - 1] {
            return Err(PlaceError::Occupied { index, mark });
        }
        if self.status().is_finished() {
            return Err(PlaceError::GameOver);
        }

        let mark = self.current_mark();
        self.cells[index - 1] = Cell::Marked(mark);
        self.last_mark = Some(mark);
        self.history.push(index);
        self.turn += 1;

        self.winner = rules::check_winner(&self.cells, self.lines.through(index));
        if let Some(winner) = self.winner {
            info!(%winner, index, "Winning line completed");
        }

        debug!(index, %mark, next_turn = self.turn, "Placed mark");
        Ok(mark)
    }

    /// Returns the mark that moves next.
    pub fn current_mark(&self) -> Mark {
        Mark::for_turn(self.turn)
    }

    /// Returns whether the game is won, drawn or still going.
    ///
    /// A winning line takes precedence over a full board.
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner {
            GameStatus::Won(mark)
        } else if rules::is_draw(self.winner, self.history.len(), self.dims.cell_count()) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Checks if the game has ended in a win or a draw.
    pub fn is_finished(&self) -> bool {
        self.status().is_finished()
    }

    /// Checks for a full board with no winning line.
    pub fn is_drawn(&self) -> bool {
        self.status() == GameStatus::Draw
    }

    /// Returns the outcome once the game has ended.
    ///
    /// A win is credited to the mark of the last placement.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(Outcome::Draw),
            GameStatus::Won(mark) => Some(Outcome::Winner(self.last_mark.unwrap_or(mark))),
        }
    }

    /// Returns the cell at a 1-based index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        index.checked_sub(1).and_then(|i| self.cells.get(i)).copied()
    }

    /// Returns the cells of one 0-based row, if the row exists.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        let size = *self.dims.size();
        let start = row.checked_mul(size)?;
        self.cells.get(start..start.checked_add(size)?)
    }

    /// Renders each row as a string of `|X|`, `|O|` and `|_|` glyphs.
    pub fn render_rows(&self) -> Vec<String> {
        (0..*self.dims.size())
            .filter_map(|row| self.row(row))
            .map(|cells| cells.iter().map(|cell| cell.glyph()).collect())
            .collect()
    }

    /// Returns the board dimensions.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Returns the edge length.
    pub fn size(&self) -> usize {
        *self.dims.size()
    }

    /// Returns the run length needed to win.
    pub fn winning_condition(&self) -> usize {
        *self.dims.winning_condition()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the 1-based turn counter.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Returns the mark of the most recent placement.
    pub fn last_mark(&self) -> Option<Mark> {
        self.last_mark
    }

    /// Returns the placed indices in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the winning lines of this board.
    pub fn lines(&self) -> WinningLines {
        self.lines
    }
}

/// Rejected placement.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Index outside `1..=cell_count`.
    #[display("Cell {index} does not exist (1-{cell_count})")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cells on the board.
        cell_count: usize,
    },
    /// Cell already holds a mark.
    #[display("Cell {index} is already occupied by {mark}")]
    Occupied {
        /// Requested index.
        index: usize,
        /// Mark in the cell.
        mark: Mark,
    },
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}
