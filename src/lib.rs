//! Square matrix multiplication in Rust, four ways.
//!
//! Same arithmetic, different loop nesting. The point is to see how much
//! the order you walk memory in matters: the textbook i-j-k order strides
//! down columns of B and thrashes the cache, swapping two loops (i-k-j)
//! fixes that, and blocking keeps tiles of all three matrices hot.
//!
//! ## Usage
//!
//! ```
//! use matmul_loops::{matmul_ijk, matmul_ikj, random_matrix};
//!
//! let a = random_matrix(64, 42);
//! let b = random_matrix(64, 43);
//!
//! let c1 = matmul_ijk(&a, &b).unwrap();
//! let c2 = matmul_ikj(&a, &b).unwrap();
//!
//! assert!(c1.approx_eq(&c2, 1e-10));
//! ```
//!
//! Blocked, with a custom tile:
//!
//! ```
//! use matmul_loops::{matmul_blocked, Matrix};
//!
//! let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
//!
//! let c = matmul_blocked(&a, &b, 1).unwrap();
//! assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
//! ```
//!
//! ## What's inside
//!
//! - i-j-k, i-k-j, k-i-j naive loop orders
//! - Cache-blocked multiply with a configurable tile size
//! - Seeded random matrices (ChaCha8)
//! - A benchmark runner binary and a criterion suite

pub mod blocked;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod report;
pub mod stats;

use tracing::debug;

pub use blocked::DEFAULT_BLOCK_SIZE;
pub use error::{MatmulError, Result};
pub use kernel::Kernel;
pub use matrix::Matrix;
pub use matrix::random::random_matrix;

/// Matrix multiply with i-j-k loop order: returns A * B.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if A and B differ in size.
pub fn matmul_ijk(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with(a, b, "ijk", matrix::naive_ijk::matmul_naive_ijk)
}

/// Matrix multiply with i-k-j loop order: returns A * B.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if A and B differ in size.
pub fn matmul_ikj(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with(a, b, "ikj", matrix::naive_ikj::matmul_naive_ikj)
}

/// Matrix multiply with k-i-j loop order: returns A * B.
///
/// # Errors
///
/// Returns [`MatmulError::DimensionMismatch`] if A and B differ in size.
pub fn matmul_kij(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    multiply_with(a, b, "kij", matrix::naive_kij::matmul_naive_kij)
}

/// Cache-blocked matrix multiply: returns A * B.
///
/// `block_size` doesn't need to divide the matrix size; edge tiles are
/// clipped.
///
/// # Errors
///
/// - [`MatmulError::InvalidBlockSize`] if `block_size` is 0
/// - [`MatmulError::DimensionMismatch`] if A and B differ in size
pub fn matmul_blocked(a: &Matrix, b: &Matrix, block_size: usize) -> Result<Matrix> {
    if block_size == 0 {
        return Err(MatmulError::InvalidBlockSize);
    }
    a.check_same_size(b)?;
    debug!(n = a.n(), block_size, "matmul blocked");

    let n = a.n();
    let mut c = Matrix::zeros(n);
    blocked::gemm_tiled::matmul_blocked_tiled(
        a.as_slice(),
        b.as_slice(),
        c.as_mut_slice(),
        n,
        block_size,
    );
    Ok(c)
}

/// [`matmul_blocked`] with [`DEFAULT_BLOCK_SIZE`].
pub fn matmul_blocked_default(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    matmul_blocked(a, b, DEFAULT_BLOCK_SIZE)
}

fn multiply_with<F>(a: &Matrix, b: &Matrix, name: &str, f: F) -> Result<Matrix>
where
    F: Fn(&[f64], &[f64], &mut [f64], usize),
{
    a.check_same_size(b)?;
    debug!(n = a.n(), kernel = name, "matmul");

    let n = a.n();
    let mut c = Matrix::zeros(n);
    f(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
    Ok(c)
}

// Shared precondition of the slice-level kernels.
pub(crate) fn check_slices(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    let len = matrix::dense::square_len_or_panic(n);
    assert_eq!(a.len(), len, "A: expected {}x{}={} elements", n, n, len);
    assert_eq!(b.len(), len, "B: expected {}x{}={} elements", n, n, len);
    assert_eq!(c.len(), len, "C: expected {}x{}={} elements", n, n, len);
}
