//! Error types for sparse matrix conversion.
//!
//! This module provides structured error handling for building coordinate
//! matrices and converting them to the block compressed sparse row format.

use thiserror::Error;

/// Errors that can occur while building or converting sparse matrices.
#[derive(Debug, Error)]
pub enum SparseError {
    /// The three triplet arrays differ in length.
    #[error(
        "triplet arrays have mismatched lengths: {row_indices} row indices, \
         {col_indices} col indices, {values} values"
    )]
    LengthMismatch {
        /// Length of the row index array
        row_indices: usize,
        /// Length of the column index array
        col_indices: usize,
        /// Length of the value array
        values: usize,
    },

    /// Block size is invalid (must be > 0).
    #[error("invalid block size: {block_size} (must be > 0)")]
    InvalidBlockSize {
        /// The invalid block size
        block_size: usize,
    },

    /// A triplet index lies outside the declared matrix dimensions.
    #[error("triplet index ({row}, {col}) out of bounds for a {num_rows}x{num_cols} matrix")]
    IndexOutOfBounds {
        /// Row index of the offending triplet
        row: usize,
        /// Column index of the offending triplet
        col: usize,
        /// Declared number of rows
        num_rows: usize,
        /// Declared number of columns
        num_cols: usize,
    },
}

/// A specialized `Result` type for sparse matrix operations.
pub type Result<T> = std::result::Result<T, SparseError>;

impl SparseError {
    /// Returns `true` if this is a length mismatch error.
    pub fn is_length_mismatch(&self) -> bool {
        matches!(self, SparseError::LengthMismatch { .. })
    }

    /// Returns `true` if this is a block size error.
    pub fn is_block_size_error(&self) -> bool {
        matches!(self, SparseError::InvalidBlockSize { .. })
    }

    /// Returns `true` if this is an index bounds error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, SparseError::IndexOutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_display() {
        let err = SparseError::LengthMismatch {
            row_indices: 3,
            col_indices: 3,
            values: 2,
        };
        assert!(err.to_string().contains("3 row indices"));
        assert!(err.to_string().contains("2 values"));
    }

    #[test]
    fn test_block_size_display() {
        let err = SparseError::InvalidBlockSize { block_size: 0 };
        assert_eq!(err.to_string(), "invalid block size: 0 (must be > 0)");
    }

    #[test]
    fn test_bounds_display() {
        let err = SparseError::IndexOutOfBounds {
            row: 7,
            col: 2,
            num_rows: 6,
            num_cols: 6,
        };
        assert!(err.to_string().contains("(7, 2)"));
        assert!(err.to_string().contains("6x6"));
    }

    #[test]
    fn test_is_bounds_error() {
        let bounds_err = SparseError::IndexOutOfBounds {
            row: 1,
            col: 1,
            num_rows: 1,
            num_cols: 1,
        };
        let size_err = SparseError::InvalidBlockSize { block_size: 0 };

        assert!(bounds_err.is_bounds_error());
        assert!(!size_err.is_bounds_error());
        assert!(size_err.is_block_size_error());
        assert!(!bounds_err.is_length_mismatch());
    }
}
