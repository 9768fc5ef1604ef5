//! N-in-a-row tic-tac-toe on a square board of any size.

mod board;
mod dimensions;
pub mod lines;
mod render;
pub mod rules;
mod types;

pub use board::{GameBoard, PlaceError};
pub use dimensions::{
    Dimensions, MAX_SIZE, MIN_SIZE, SetupError, validate_condition, validate_size,
};
pub use lines::{Direction, Line, WinningLines};
pub use render::{BoardView, column_guide, header, row_label};
pub use types::{Cell, GameStatus, Mark, Outcome};
