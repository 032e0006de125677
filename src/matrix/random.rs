//! Seeded random matrices.
//!
//! Uses ChaCha8, whose output stream is fixed for a given seed regardless of
//! platform or process, so the same `(n, seed)` always reproduces the same
//! matrix. Values won't match generators from other ecosystems (Mersenne
//! Twister and friends) for the same seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use super::Matrix;

/// Generate an n×n matrix with entries drawn uniformly from `[0.0, 1.0)`.
///
/// Draw order is row-major: row 0 columns 0..n, then row 1, and so on.
/// `n = 0` gives an empty matrix.
///
/// ```
/// use matmul_loops::random_matrix;
///
/// let a = random_matrix(4, 42);
/// assert_eq!(a, random_matrix(4, 42));
/// assert!(a.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
/// ```
pub fn random_matrix(n: usize, seed: u64) -> Matrix {
    trace!(n, seed, "generating random matrix");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Matrix::from_fn(n, |_, _| rng.random::<f64>())
}
