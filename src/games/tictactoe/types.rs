//! Core domain types for N-in-a-row tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark placed by a player.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Player X (moves on odd turns).
    X,
    /// Player O (moves on even turns).
    O,
}

impl Mark {
    /// Returns the mark that moves on the given 1-based turn.
    #[instrument]
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 != 0 { Mark::X } else { Mark::O }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Checks if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Renders the cell as `|X|`, `|O|` or `|_|`.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Empty => "|_|",
            Cell::Marked(Mark::X) => "|X|",
            Cell::Marked(Mark::O) => "|O|",
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A winning line exists for this mark.
    Won(Mark),
    /// Board is full and no line wins.
    Draw,
}

impl GameStatus {
    /// Checks if the game has ended.
    pub fn is_finished(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Outcome of a finished game, as reported to the players.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark that completed a line.
    #[display("Player {_0} wins!")]
    Winner(Mark),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_parity() {
        assert_eq!(Mark::for_turn(1), Mark::X);
        assert_eq!(Mark::for_turn(2), Mark::O);
        assert_eq!(Mark::for_turn(3), Mark::X);
        assert_eq!(Mark::for_turn(10), Mark::O);
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Empty.glyph(), "|_|");
        assert_eq!(Cell::Marked(Mark::X).glyph(), "|X|");
        assert_eq!(Cell::Marked(Mark::O).glyph(), "|O|");
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Mark::O).to_string(), "Player O wins!");
        assert_eq!(Outcome::Draw.to_string(), "Draw");
        assert_eq!(Outcome::Winner(Mark::X).winner(), Some(Mark::X));
        assert!(Outcome::Draw.is_draw());
    }
}
