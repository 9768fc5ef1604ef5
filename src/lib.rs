//! Strictly N-toe - tic-tac-toe on any square board
//!
//! Two players take turns placing `X` and `O` on a `size × size` board.
//! The first to complete a run of `winning_condition` marks horizontally,
//! vertically or diagonally wins.
//!
//! # Architecture
//!
//! - **Games**: board state, winning-line generation and rules
//! - **Console**: terminal abstraction, input parsing and the game loop
//! - **Config**: TOML configuration with board presets
//!
//! # Example
//!
//! ```
//! use strictly_ntoe::{Dimensions, GameBoard, GameStatus, Mark};
//!
//! let mut board = GameBoard::new(Dimensions::new(4, 2)?);
//! board.place(1)?;
//! board.place(5)?;
//! board.place(2)?;
//! assert_eq!(board.status(), GameStatus::Won(Mark::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console and game loop
pub use console::{
    Console, ConsoleError, ConsoleSettings, GameLoop, InputError, Presets, StreamConsole, Tone,
    parse_cell, parse_condition, parse_confirmation, parse_integer, parse_size,
};

// Crate-level exports - Game types
pub use games::tictactoe::{
    BoardView, Cell, Dimensions, Direction, GameBoard, GameStatus, Line, MAX_SIZE, MIN_SIZE, Mark,
    Outcome, PlaceError, SetupError, WinningLines, column_guide, header, row_label,
    validate_condition, validate_size,
};

// Crate-level exports - Rules
pub use games::tictactoe::lines::{anchored, edge};
pub use games::tictactoe::rules::{check_winner, is_draw, is_full, winning_line, winning_mark};
