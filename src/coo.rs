//! Coordinate (COO) sparse matrix format
//!
//! COO format stores a matrix as three parallel arrays of triplets:
//! - `row_indices`: row index of each non-zero
//! - `col_indices`: column index of each non-zero
//! - `values`: the non-zero values
//!
//! Triplets are unordered and duplicates are permitted; the last triplet for
//! a given `(row, col)` position wins when the matrix is materialized.

use crate::error::{Result, SparseError};
use ndarray::Array2;

/// Sparse matrix in coordinate (triplet) format
///
/// This is the assembly-friendly format: entries can be appended in any
/// order and converted to an indexed format afterwards.
#[derive(Debug, Clone)]
pub struct CooMatrix {
    /// Number of rows
    pub num_rows: usize,
    /// Number of columns
    pub num_cols: usize,
    /// Row index of each stored entry
    pub row_indices: Vec<usize>,
    /// Column index of each stored entry
    pub col_indices: Vec<usize>,
    /// Stored entry values
    pub values: Vec<f64>,
}

impl CooMatrix {
    /// Create a new empty COO matrix
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            row_indices: Vec::new(),
            col_indices: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a COO matrix with pre-allocated capacity
    pub fn with_capacity(num_rows: usize, num_cols: usize, nnz_estimate: usize) -> Self {
        Self {
            num_rows,
            num_cols,
            row_indices: Vec::with_capacity(nnz_estimate),
            col_indices: Vec::with_capacity(nnz_estimate),
            values: Vec::with_capacity(nnz_estimate),
        }
    }

    /// Create a COO matrix from parallel triplet arrays
    ///
    /// Validates that the three arrays have equal length and that every
    /// index lies within the declared dimensions.
    pub fn from_parts(
        num_rows: usize,
        num_cols: usize,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if row_indices.len() != values.len() || col_indices.len() != values.len() {
            return Err(SparseError::LengthMismatch {
                row_indices: row_indices.len(),
                col_indices: col_indices.len(),
                values: values.len(),
            });
        }

        for (&row, &col) in row_indices.iter().zip(&col_indices) {
            if row >= num_rows || col >= num_cols {
                return Err(SparseError::IndexOutOfBounds {
                    row,
                    col,
                    num_rows,
                    num_cols,
                });
            }
        }

        Ok(Self {
            num_rows,
            num_cols,
            row_indices,
            col_indices,
            values,
        })
    }

    /// Append a triplet (row, col, value)
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.num_rows || col >= self.num_cols {
            return Err(SparseError::IndexOutOfBounds {
                row,
                col,
                num_rows: self.num_rows,
                num_cols: self.num_cols,
            });
        }

        self.row_indices.push(row);
        self.col_indices.push(col);
        self.values.push(value);
        Ok(())
    }

    /// Number of stored triplets (including duplicates)
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Convert to dense matrix (for debugging/small matrices)
    ///
    /// Triplets are applied in storage order, so the last entry for a given
    /// `(row, col)` position wins.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.num_rows, self.num_cols));

        for n in 0..self.nnz() {
            dense[[self.row_indices[n], self.col_indices[n]]] = self.values[n];
        }

        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_coo_push() {
        let mut coo = CooMatrix::new(3, 3);
        coo.push(0, 0, 1.0).unwrap();
        coo.push(2, 1, -2.5).unwrap();

        assert_eq!(coo.nnz(), 2);
        assert_eq!(coo.row_indices, vec![0, 2]);
        assert_eq!(coo.col_indices, vec![0, 1]);
    }

    #[test]
    fn test_coo_push_out_of_bounds() {
        let mut coo = CooMatrix::new(3, 3);

        let err = coo.push(3, 0, 1.0).unwrap_err();
        assert!(err.is_bounds_error());

        let err = coo.push(0, 5, 1.0).unwrap_err();
        assert!(err.is_bounds_error());

        // Nothing was stored by the failed pushes
        assert_eq!(coo.nnz(), 0);
    }

    #[test]
    fn test_coo_from_parts() {
        let coo =
            CooMatrix::from_parts(2, 2, vec![0, 1], vec![1, 0], vec![2.0, 3.0]).unwrap();
        assert_eq!(coo.nnz(), 2);
    }

    #[test]
    fn test_coo_from_parts_length_mismatch() {
        let err = CooMatrix::from_parts(2, 2, vec![0, 1], vec![1], vec![2.0, 3.0]).unwrap_err();
        assert!(err.is_length_mismatch());
    }

    #[test]
    fn test_coo_from_parts_out_of_bounds() {
        let err = CooMatrix::from_parts(2, 2, vec![0, 2], vec![1, 0], vec![2.0, 3.0]).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_coo_to_dense() {
        let mut coo = CooMatrix::new(2, 3);
        coo.push(0, 0, 1.0).unwrap();
        coo.push(1, 2, 4.0).unwrap();

        let dense = coo.to_dense();
        assert_eq!(dense.dim(), (2, 3));
        assert_relative_eq!(dense[[0, 0]], 1.0);
        assert_relative_eq!(dense[[1, 2]], 4.0);
        assert_relative_eq!(dense[[0, 1]], 0.0);
    }

    #[test]
    fn test_coo_to_dense_last_write_wins() {
        let mut coo = CooMatrix::new(2, 2);
        coo.push(0, 0, 1.0).unwrap();
        coo.push(0, 0, 7.0).unwrap();

        let dense = coo.to_dense();
        assert_relative_eq!(dense[[0, 0]], 7.0);
    }
}
