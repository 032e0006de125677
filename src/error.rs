//! Error type shared by the matrix constructors and the kernels.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MatmulError>;

/// Everything that can go wrong before a multiplication starts.
///
/// Kernels never fail halfway: all checks run at the boundary, before the
/// first read of either operand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatmulError {
    /// A is `left`×`left` but B is `right`×`right`.
    #[error("dimension mismatch: cannot multiply {left}x{left} by {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A nested-row input where one row has a different length.
    #[error("ragged matrix: row {row} has {actual} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Rectangular nested-row input that isn't square.
    #[error("matrix is not square: {rows} rows x {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    /// Flat buffer whose length isn't n².
    #[error("buffer of {len} elements does not hold a {n}x{n} matrix")]
    LengthMismatch { n: usize, len: usize },

    #[error("block size must be positive")]
    InvalidBlockSize,

    #[error("unknown kernel '{0}' (expected ijk, ikj, kij, blocked or blocked:<size>)")]
    UnknownKernel(String),

    #[error("no timing samples")]
    EmptySamples,
}
