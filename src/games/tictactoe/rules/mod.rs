//! Game rules for N-in-a-row tic-tac-toe.
//!
//! Pure functions evaluating cells against the winning lines. Rules are
//! kept apart from board storage so they can be tested on raw cell slices.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line, winning_mark};
