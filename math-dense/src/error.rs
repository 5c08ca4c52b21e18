//! Error types for dense matrix operations.
//!
//! Shape problems are caught when a [`SquareMatrix`](crate::SquareMatrix) or
//! [`AugmentedMatrix`](crate::AugmentedMatrix) is built, so the numerical
//! routines themselves only ever report [`DenseError::SingularMatrix`].

use thiserror::Error;

/// Errors that can occur while building or solving dense systems.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DenseError {
    /// The best available pivot is below the elimination tolerance.
    #[error("matrix is singular or nearly singular: pivot {pivot:e} in column {column}")]
    SingularMatrix {
        /// Column whose pivot broke down
        column: usize,
        /// Value of the rejected pivot
        pivot: f64,
    },

    /// The matrix does not have the layout the operation requires.
    #[error("invalid shape {rows}x{cols}: {reason}")]
    InvalidShape {
        /// Number of rows supplied
        rows: usize,
        /// Number of columns supplied
        cols: usize,
        /// What the operation expected instead
        reason: &'static str,
    },

    /// Nested-row input whose rows do not all have the same length.
    #[error("ragged rows: row {row} has {got} entries, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of row 0
        expected: usize,
        /// Length of the offending row
        got: usize,
    },

    /// An entry is NaN or infinite.
    #[error("non-finite entry at ({row}, {col})")]
    NonFiniteEntry {
        /// Row of the entry
        row: usize,
        /// Column of the entry
        col: usize,
    },

    /// Right-hand side length does not match the coefficient matrix.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },
}

/// A specialized `Result` type for dense matrix operations.
pub type Result<T> = std::result::Result<T, DenseError>;

impl DenseError {
    /// Returns `true` if this error was raised while validating input layout.
    ///
    /// This includes `InvalidShape`, `RaggedRows` and `DimensionMismatch`.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            DenseError::InvalidShape { .. }
                | DenseError::RaggedRows { .. }
                | DenseError::DimensionMismatch { .. }
        )
    }

    /// Returns `true` if elimination broke down on a near-zero pivot.
    pub fn is_singular(&self) -> bool {
        matches!(self, DenseError::SingularMatrix { .. })
    }
}
