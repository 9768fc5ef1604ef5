//! Parsing of typed player input.

use crate::games::tictactoe::{Dimensions, PlaceError, validate_size};
use derive_more::{Display, Error};
use tracing::instrument;

/// Rejected player input.
///
/// Every variant is recoverable: the loop reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Input is not a whole number.
    #[display("'{_0}' is not a whole number")]
    Parse(#[error(not(source))] String),
    /// Board size outside the accepted range.
    #[display("Board size {_0} is out of range")]
    SizeOutOfRange(#[error(not(source))] i64),
    /// Winning condition outside `2..=size`.
    #[display("Winning condition {condition} is out of range for board size {size}")]
    ConditionOutOfRange {
        /// Board edge the condition was checked against.
        size: usize,
        /// Rejected condition.
        condition: i64,
    },
    /// Cell index outside the board.
    #[display("Cell {_0} does not exist")]
    CellOutOfRange(#[error(not(source))] i64),
    /// Cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    Occupied(#[error(not(source))] usize),
    /// The game has already ended.
    #[display("Game is already over")]
    Finished,
    /// Replay answer other than Y or N.
    #[display("'{_0}' is not Y or N")]
    Confirmation(#[error(not(source))] String),
}

impl From<PlaceError> for InputError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfRange { index, .. } => {
                Self::CellOutOfRange(i64::try_from(index).unwrap_or(i64::MAX))
            }
            PlaceError::Occupied { index, .. } => Self::Occupied(index),
            PlaceError::GameOver => Self::Finished,
        }
    }
}

/// Parses a whole number, ignoring surrounding whitespace.
#[instrument]
pub fn parse_integer(input: &str) -> Result<i64, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| InputError::Parse(trimmed.to_string()))
}

/// Parses a board size greater than one.
#[instrument]
pub fn parse_size(input: &str) -> Result<usize, InputError> {
    let value = parse_integer(input)?;
    usize::try_from(value)
        .ok()
        .filter(|size| validate_size(*size).is_ok())
        .ok_or(InputError::SizeOutOfRange(value))
}

/// Parses a winning condition in `2..=size` into board dimensions.
#[instrument]
pub fn parse_condition(input: &str, size: usize) -> Result<Dimensions, InputError> {
    let value = parse_integer(input)?;
    let out_of_range = InputError::ConditionOutOfRange {
        size,
        condition: value,
    };
    let condition = usize::try_from(value).map_err(|_| out_of_range.clone())?;
    Dimensions::new(size, condition).map_err(|_| out_of_range)
}

/// Parses a 1-based cell index.
///
/// Negative numbers are out of range; whether a non-negative index exists
/// is decided by the board.
#[instrument]
pub fn parse_cell(input: &str) -> Result<usize, InputError> {
    let value = parse_integer(input)?;
    usize::try_from(value).map_err(|_| InputError::CellOutOfRange(value))
}

/// Parses a case-insensitive Y/N answer into `true` for yes.
#[instrument]
pub fn parse_confirmation(input: &str) -> Result<bool, InputError> {
    let trimmed = input.trim();
    match trimmed.to_uppercase().as_str() {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(InputError::Confirmation(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_trims() {
        assert_eq!(parse_integer(" 12 "), Ok(12));
        assert_eq!(parse_integer("-3"), Ok(-3));
        assert_eq!(parse_integer("abc"), Err(InputError::Parse("abc".into())));
        assert_eq!(parse_integer(""), Err(InputError::Parse(String::new())));
    }

    #[test]
    fn test_parse_size_bounds() {
        assert_eq!(parse_size("2"), Ok(2));
        assert_eq!(parse_size("101"), Ok(101));
        assert_eq!(parse_size("46341"), Err(InputError::SizeOutOfRange(46_341)));
        assert_eq!(parse_size("1"), Err(InputError::SizeOutOfRange(1)));
        assert_eq!(parse_size("-4"), Err(InputError::SizeOutOfRange(-4)));
        assert!(matches!(parse_size("x"), Err(InputError::Parse(_))));
    }

    #[test]
    fn test_parse_condition_bounds() {
        let dims = parse_condition("3", 4).unwrap();
        assert_eq!(*dims.winning_condition(), 3);
        assert_eq!(
            parse_condition("5", 4),
            Err(InputError::ConditionOutOfRange {
                size: 4,
                condition: 5
            })
        );
        assert!(parse_condition("1", 4).is_err());
        assert!(parse_condition("-2", 4).is_err());
    }

    #[test]
    fn test_parse_cell_rejects_negative() {
        assert_eq!(parse_cell("0"), Ok(0));
        assert_eq!(parse_cell("-1"), Err(InputError::CellOutOfRange(-1)));
    }

    #[test]
    fn test_parse_confirmation_case_insensitive() {
        assert_eq!(parse_confirmation("y"), Ok(true));
        assert_eq!(parse_confirmation(" N "), Ok(false));
        assert_eq!(
            parse_confirmation("yes"),
            Err(InputError::Confirmation("yes".into()))
        );
    }

    #[test]
    fn test_place_errors_convert() {
        let err = PlaceError::Occupied {
            index: 5,
            mark: crate::games::tictactoe::Mark::X,
        };
        assert_eq!(InputError::from(err), InputError::Occupied(5));
    }
}
