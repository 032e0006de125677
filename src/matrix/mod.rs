//! The square matrix type, its random generator, and the naive loop orders.
//!
//! The naive kernels work on raw row-major slices so the loop nesting is
//! the only thing that differs between them. The [`Matrix`] wrappers in
//! the crate root add the dimension checks and allocate the result.

pub mod dense;
pub mod naive_ijk;
pub mod naive_ikj;
pub mod naive_kij;
pub mod random;
pub mod transpose;

pub use dense::Matrix;
