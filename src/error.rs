use core::fmt;

/// Result alias for `psp`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by partitioning, validation, and augmentation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Similarity matrix is not square.
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Similarity matrix is not symmetric.
    NotSymmetric {
        /// Row of the first offending entry.
        row: usize,
        /// Column of the first offending entry.
        col: usize,
    },

    /// Similarity matrix diagonal is not all ones.
    DiagonalNotOnes {
        /// Diagonal position of the first offending entry.
        index: usize,
        /// Value found there.
        value: f32,
    },

    /// Data length does not match the matrix dimension.
    DimensionMismatch {
        /// Expected dimension (the matrix side).
        expected: usize,
        /// Found dimension (the data length).
        found: usize,
    },

    /// Shape mismatch (string description).
    ShapeMismatch {
        /// Expected shape description.
        expected: String,
        /// Actual shape description.
        actual: String,
    },

    /// A similarity function returned a value outside [0, 1].
    SimilarityOutOfRange {
        /// Row (first argument index).
        row: usize,
        /// Column (second argument index).
        col: usize,
        /// Offending value.
        value: f32,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Invalid number of classes requested.
    InvalidClassCount {
        /// Requested count.
        requested: usize,
        /// Number of classes currently available.
        available: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::NotSquare { rows, cols } => {
                write!(f, "similarity matrix must be square, got {rows}x{cols}")
            }
            Error::NotSymmetric { row, col } => {
                write!(f, "similarity matrix must be symmetric (mismatch at [{row}, {col}])")
            }
            Error::DiagonalNotOnes { index, value } => {
                write!(
                    f,
                    "similarity matrix must have all ones on the diagonal (found {value} at {index})"
                )
            }
            Error::DimensionMismatch { expected, found } => {
                write!(
                    f,
                    "data length {found} doesn't match matrix dimension {expected}"
                )
            }
            Error::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, actual {actual}")
            }
            Error::SimilarityOutOfRange { row, col, value } => {
                write!(
                    f,
                    "similarity function must return a value between 0 and 1, got {value} for pair ({row}, {col})"
                )
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::InvalidClassCount {
                requested,
                available,
            } => {
                write!(
                    f,
                    "cannot keep {requested} classes ({available} available)"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
