use super::error::{Error, GameResult};

/// Dimensions of a board, fixed once the board is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    /// Number of slots (columns).
    pub width: usize,
    /// Number of places (rows) in each slot.
    pub height: usize,
}

impl BoardConfig {
    /// Columns of a standard board.
    pub const DEFAULT_WIDTH: usize = 7;
    /// Rows of a standard board.
    pub const DEFAULT_HEIGHT: usize = 6;
    /// Largest accepted width or height.
    pub const MAX_DIM: usize = 64;

    /// Create a new config. Call [`BoardConfig::validate`] or go through
    /// [`Board::new`](super::Board::new) to check it.
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are in `1..=MAX_DIM`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDim` otherwise.
    pub fn validate(&self) -> GameResult<()> {
        let valid = |dim: usize| (1..=Self::MAX_DIM).contains(&dim);
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(Error::InvalidDim {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Total number of places on the board.
    pub const fn places(&self) -> usize {
        self.width * self.height
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}
