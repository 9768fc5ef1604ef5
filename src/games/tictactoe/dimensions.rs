//! Validated board dimensions.

use derive_getters::Getters;
use derive_more::{Display, Error};
use tracing::instrument;

/// Smallest accepted board edge.
pub const MIN_SIZE: usize = 2;

/// Largest accepted board edge.
///
/// Every 1-based cell index of the largest board fits in an `i32`.
pub const MAX_SIZE: usize = 46_340;

/// Board edge length and the run length needed to win.
///
/// Holds `MIN_SIZE <= size <= MAX_SIZE` and `2 <= winning_condition <= size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct Dimensions {
    /// Edge length of the square board.
    size: usize,
    /// Number of marks in a row needed to win.
    winning_condition: usize,
}

impl Dimensions {
    /// Validates a size and winning condition.
    #[instrument]
    pub fn new(size: usize, winning_condition: usize) -> Result<Self, SetupError> {
        validate_size(size)?;
        validate_condition(size, winning_condition)?;
        Ok(Self {
            size,
            winning_condition,
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Converts a 1-based linear index to 0-based `(row, column)`.
    pub fn coordinates(&self, index: usize) -> Option<(usize, usize)> {
        if index == 0 || index > self.cell_count() {
            return None;
        }
        let zero_based = index - 1;
        Some((zero_based / self.size, zero_based % self.size))
    }

    /// Converts 0-based `(row, column)` to a 1-based linear index.
    pub fn index(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.size && column < self.size).then(|| row * self.size + column + 1)
    }
}

/// Checks that a board edge is within `MIN_SIZE..=MAX_SIZE`.
#[instrument]
pub fn validate_size(size: usize) -> Result<(), SetupError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(SetupError::InvalidSize(size))
    }
}

/// Checks that a winning condition is within `2..=size`.
#[instrument]
pub fn validate_condition(size: usize, winning_condition: usize) -> Result<(), SetupError> {
    if (2..=size).contains(&winning_condition) {
        Ok(())
    } else {
        Err(SetupError::InvalidCondition {
            size,
            winning_condition,
        })
    }
}

/// Rejected board setup.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Size outside `MIN_SIZE..=MAX_SIZE`.
    #[display("Board size {} must be between {} and {}", _0, MIN_SIZE, MAX_SIZE)]
    InvalidSize(#[error(not(source))] usize),
    /// Winning condition outside `2..=size`.
    #[display("Winning condition {winning_condition} must be between 2 and {size}")]
    InvalidCondition {
        /// Board edge the condition was checked against.
        size: usize,
        /// Rejected condition.
        winning_condition: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_classic_board() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert_eq!(*dims.size(), 3);
        assert_eq!(*dims.winning_condition(), 3);
        assert_eq!(dims.cell_count(), 9);
    }

    #[test]
    fn test_accepts_large_sizes() {
        assert!(Dimensions::new(101, 3).is_ok());
        assert!(Dimensions::new(MAX_SIZE, 2).is_ok());
        assert!(i32::try_from(Dimensions::new(MAX_SIZE, 2).unwrap().cell_count()).is_ok());
    }

    #[test]
    fn test_rejects_small_size() {
        assert_eq!(Dimensions::new(1, 1), Err(SetupError::InvalidSize(1)));
        assert_eq!(Dimensions::new(0, 2), Err(SetupError::InvalidSize(0)));
        assert_eq!(
            Dimensions::new(MAX_SIZE + 1, 2),
            Err(SetupError::InvalidSize(MAX_SIZE + 1))
        );
    }

    #[test]
    fn test_rejects_condition_out_of_range() {
        assert!(matches!(
            Dimensions::new(4, 1),
            Err(SetupError::InvalidCondition { .. })
        ));
        assert!(matches!(
            Dimensions::new(4, 5),
            Err(SetupError::InvalidCondition { .. })
        ));
        assert!(Dimensions::new(4, 4).is_ok());
        assert!(Dimensions::new(4, 2).is_ok());
    }

    #[test]
    fn test_coordinates_round_trip_corners() {
        let dims = Dimensions::new(4, 2).unwrap();
        assert_eq!(dims.coordinates(1), Some((0, 0)));
        assert_eq!(dims.coordinates(4), Some((0, 3)));
        assert_eq!(dims.coordinates(13), Some((3, 0)));
        assert_eq!(dims.coordinates(16), Some((3, 3)));
        assert_eq!(dims.coordinates(0), None);
        assert_eq!(dims.coordinates(17), None);
        assert_eq!(dims.index(3, 3), Some(16));
        assert_eq!(dims.index(4, 0), None);
    }
}
