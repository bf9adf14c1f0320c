//! Block Compressed Sparse Row (BCSR) matrix format
//!
//! BCSR groups the non-zeros of a sparse matrix into fixed-size dense
//! sub-blocks and stores:
//! - `blocks`: the dense blocks in row-major block order
//! - `block_col_indices`: starting global column of each block
//! - `block_row_ptrs`: index into `blocks` where each block-row starts
//!
//! The row pointer array covers every block-row of the matrix span, so
//! lookup by block-row index is O(1) even when a block-row holds no blocks.

use crate::coo::CooMatrix;
use crate::error::{Result, SparseError};
use ndarray::Array2;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// One dense sub-block of a BCSR matrix
///
/// Owns a zero-padded `block_size x block_size` grid together with its
/// coordinate in the block grid. Cells not covered by any input entry
/// stay zero, including the padding of trailing partial blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Row index of this block in block-grid coordinates
    pub block_row: usize,
    /// Column index of this block in block-grid coordinates
    pub block_col: usize,
    /// Dense block values
    pub values: Array2<f64>,
}

impl Block {
    /// Create a zero-initialized block at the given block coordinate
    pub fn zeros(block_row: usize, block_col: usize, block_size: usize) -> Self {
        Self {
            block_row,
            block_col,
            values: Array2::zeros((block_size, block_size)),
        }
    }
}

/// Sparse matrix in Block Compressed Sparse Row format
///
/// Produced by [`BcsrMatrix::from_coo`] or [`BcsrMatrix::from_dense`] and
/// immutable afterwards. Blocks are ordered by ascending block-row, then
/// ascending block-column, with no duplicate block coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BcsrMatrix {
    /// Number of rows
    pub num_rows: usize,
    /// Number of columns
    pub num_cols: usize,
    /// Block size (rows and columns per block)
    pub block_size: usize,
    /// Number of block rows spanned by the matrix
    pub num_block_rows: usize,
    /// Number of block columns spanned by the matrix
    pub num_block_cols: usize,
    /// Dense blocks in row-major block order
    pub blocks: Vec<Block>,
    /// Starting global column of each block
    pub block_col_indices: Vec<usize>,
    /// Block row pointers: block_row_ptrs[r] is the start index in `blocks`
    /// for block-row r; block_row_ptrs[num_block_rows] = nnzb
    pub block_row_ptrs: Vec<usize>,
}

impl BcsrMatrix {
    /// Convert a COO matrix to BCSR with the given block size
    ///
    /// Triplets may arrive in any order and may repeat a `(row, col)`
    /// position; the last triplet for an exact position wins. All entries
    /// that map into the same block accumulate into one shared grid.
    ///
    /// Trailing partial blocks (when `block_size` does not divide the
    /// matrix dimensions) are zero-padded.
    ///
    /// # Errors
    ///
    /// - [`SparseError::InvalidBlockSize`] if `block_size` is 0
    /// - [`SparseError::LengthMismatch`] if the triplet arrays differ in length
    /// - [`SparseError::IndexOutOfBounds`] if a triplet lies outside the
    ///   declared dimensions
    pub fn from_coo(coo: &CooMatrix, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(SparseError::InvalidBlockSize { block_size });
        }
        if coo.row_indices.len() != coo.values.len() || coo.col_indices.len() != coo.values.len()
        {
            return Err(SparseError::LengthMismatch {
                row_indices: coo.row_indices.len(),
                col_indices: coo.col_indices.len(),
                values: coo.values.len(),
            });
        }

        let num_block_rows = coo.num_rows.div_ceil(block_size);
        let num_block_cols = coo.num_cols.div_ceil(block_size);

        // Group triplets into dense blocks keyed by block coordinate. The
        // reference returned by `entry` points at the block stored in the
        // map, so every triplet after the first keeps updating the same grid.
        let mut block_map: BTreeMap<(usize, usize), Block> = BTreeMap::new();

        for n in 0..coo.values.len() {
            let row = coo.row_indices[n];
            let col = coo.col_indices[n];
            if row >= coo.num_rows || col >= coo.num_cols {
                return Err(SparseError::IndexOutOfBounds {
                    row,
                    col,
                    num_rows: coo.num_rows,
                    num_cols: coo.num_cols,
                });
            }

            let key = (row / block_size, col / block_size);
            let block = block_map
                .entry(key)
                .or_insert_with(|| Block::zeros(key.0, key.1, block_size));
            // Last write wins for duplicate (row, col) triplets
            block.values[[row % block_size, col % block_size]] = coo.values[n];
        }

        // Drain in ascending (block_row, block_col) key order, which is the
        // row-major block order the row pointers assume.
        let nnzb = block_map.len();
        let mut blocks = Vec::with_capacity(nnzb);
        let mut block_col_indices = Vec::with_capacity(nnzb);
        let mut block_row_ptrs = Vec::with_capacity(num_block_rows + 1);

        for (position, ((block_row, _), block)) in block_map.into_iter().enumerate() {
            // One pointer per block-row up to this block's row, so that
            // skipped empty block-rows get an empty index range.
            while block_row_ptrs.len() <= block_row {
                block_row_ptrs.push(position);
            }
            block_col_indices.push(block.block_col * block_size);
            blocks.push(block);
        }
        while block_row_ptrs.len() <= num_block_rows {
            block_row_ptrs.push(nnzb);
        }

        Ok(Self {
            num_rows: coo.num_rows,
            num_cols: coo.num_cols,
            block_size,
            num_block_rows,
            num_block_cols,
            blocks,
            block_col_indices,
            block_row_ptrs,
        })
    }

    /// Convert a dense matrix to BCSR
    ///
    /// A block is stored iff it contains at least one entry with magnitude
    /// above `threshold`; entries at or below the threshold are dropped.
    /// The result is identical to [`BcsrMatrix::from_coo`] applied to the
    /// list of above-threshold entries.
    ///
    /// # Errors
    ///
    /// [`SparseError::InvalidBlockSize`] if `block_size` is 0.
    pub fn from_dense(dense: &Array2<f64>, block_size: usize, threshold: f64) -> Result<Self> {
        if block_size == 0 {
            return Err(SparseError::InvalidBlockSize { block_size });
        }

        let (num_rows, num_cols) = dense.dim();
        let num_block_rows = num_rows.div_ceil(block_size);
        let num_block_cols = num_cols.div_ceil(block_size);

        let mut blocks = Vec::new();
        let mut block_col_indices = Vec::new();
        let mut block_row_ptrs = Vec::with_capacity(num_block_rows + 1);
        block_row_ptrs.push(0);

        for block_row in 0..num_block_rows {
            let row_start = block_row * block_size;
            let row_end = (row_start + block_size).min(num_rows);

            for block_col in 0..num_block_cols {
                let col_start = block_col * block_size;
                let col_end = (col_start + block_size).min(num_cols);

                let mut block = Block::zeros(block_row, block_col, block_size);
                let mut occupied = false;

                for i in row_start..row_end {
                    for j in col_start..col_end {
                        let val = dense[[i, j]];
                        if val.abs() > threshold {
                            block.values[[i - row_start, j - col_start]] = val;
                            occupied = true;
                        }
                    }
                }

                if occupied {
                    block_col_indices.push(col_start);
                    blocks.push(block);
                }
            }
            block_row_ptrs.push(blocks.len());
        }

        Ok(Self {
            num_rows,
            num_cols,
            block_size,
            num_block_rows,
            num_block_cols,
            blocks,
            block_col_indices,
            block_row_ptrs,
        })
    }

    /// Number of stored (non-zero) blocks
    pub fn nnzb(&self) -> usize {
        self.blocks.len()
    }

    /// Fraction of block positions that hold a stored block
    pub fn sparsity(&self) -> f64 {
        let total = self.num_block_rows * self.num_block_cols;
        if total == 0 {
            0.0
        } else {
            self.nnzb() as f64 / total as f64
        }
    }

    /// Get the range of indices in `blocks` for a given block-row
    pub fn block_row_range(&self, block_row: usize) -> Range<usize> {
        self.block_row_ptrs[block_row]..self.block_row_ptrs[block_row + 1]
    }

    /// Get the (starting column, block) pairs for a block-row
    pub fn row_blocks(&self, block_row: usize) -> impl Iterator<Item = (usize, &Block)> + '_ {
        let range = self.block_row_range(block_row);
        self.block_col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.blocks[range].iter())
    }

    /// Get element at (row, col), returns 0 if no block covers the position
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let col_start = (col / self.block_size) * self.block_size;

        for idx in self.block_row_range(row / self.block_size) {
            if self.block_col_indices[idx] == col_start {
                return self.blocks[idx].values[[row % self.block_size, col % self.block_size]];
            }
        }
        0.0
    }

    /// Convert to dense matrix (for debugging/small matrices)
    ///
    /// The zero padding of trailing partial blocks is clipped to the matrix
    /// dimensions.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut dense = Array2::zeros((self.num_rows, self.num_cols));

        for block_row in 0..self.num_block_rows {
            let row_start = block_row * self.block_size;
            let local_rows = (row_start + self.block_size).min(self.num_rows) - row_start;

            for (col_start, block) in self.row_blocks(block_row) {
                let local_cols = (col_start + self.block_size).min(self.num_cols) - col_start;

                for i in 0..local_rows {
                    for j in 0..local_cols {
                        dense[[row_start + i, col_start + j]] = block.values[[i, j]];
                    }
                }
            }
        }

        dense
    }
}

/// Human-readable dump of the block count and the two index arrays
///
/// Diagnostic view only, not a parseable format.
impl fmt::Display for BcsrMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nnzb = {}", self.nnzb())?;
        writeln!(f, "cols = {:?}", self.block_col_indices)?;
        write!(f, "block_row_ptr = {:?}", self.block_row_ptrs)
    }
}
