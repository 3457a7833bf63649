/// All the possible recoverable errors produced by the board.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A board dimension is zero or larger than [`BoardConfig::MAX_DIM`](super::BoardConfig::MAX_DIM).
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDim {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// The column is outside the board.
    #[error("column {column} does not exist (board has {width} columns)")]
    InvalidColumn {
        /// Zero indexed column that was requested.
        column: usize,
        /// Number of columns on the board.
        width: usize,
    },
    /// The place is outside the board.
    #[error("place ({column}, {row}) is outside the board")]
    InvalidPlace {
        /// Zero indexed column.
        column: usize,
        /// Zero indexed row.
        row: usize,
    },
    /// No empty place is left in the column.
    #[error("column {0} is already full")]
    ColumnFull(usize),
    /// Input that could not be turned into a move.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),
}

/// Result type making use of custom errors.
pub type GameResult<T> = Result<T, Error>;
