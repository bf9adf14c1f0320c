//! Sparse matrix conversion from coordinate (COO) to Block Compressed
//! Sparse Row (BCSR) format
//!
//! This crate groups the non-zeros of a triplet-form sparse matrix into
//! fixed-size dense sub-blocks and indexes them with a compressed
//! per-block-row pointer array plus per-block column indices.
//!
//! # Features
//!
//! - **COO assembly**: append triplets in any order, duplicates allowed
//!   (last write wins per position)
//! - **BCSR conversion**: deterministic row-major block ordering with full
//!   row-pointer encoding (O(1) lookup for empty block-rows included)
//! - **Dense interop**: build BCSR from a dense matrix with a drop
//!   threshold, reconstruct a dense matrix for inspection
//! - **Eager validation**: mismatched array lengths, zero block sizes, and
//!   out-of-range indices are reported before any structure is returned
//!
//! # Example
//!
//! ```
//! use math_sparse_bcsr::{BcsrMatrix, CooMatrix};
//!
//! let mut coo = CooMatrix::new(6, 6);
//! coo.push(0, 0, 0.1)?;
//! coo.push(2, 3, 0.4)?;
//! coo.push(3, 3, 0.4)?;
//!
//! let bcsr = BcsrMatrix::from_coo(&coo, 2)?;
//! assert_eq!(bcsr.nnzb(), 2);
//! println!("{bcsr}");
//! # Ok::<(), math_sparse_bcsr::SparseError>(())
//! ```

pub mod bcsr;
pub mod coo;
pub mod error;

// Re-export main types
pub use bcsr::{BcsrMatrix, Block};
pub use coo::CooMatrix;
pub use error::{Result, SparseError};
