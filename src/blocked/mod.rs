//! Cache-blocked GEMM.
//!
//! Splits the i/j/k iteration space into cubes of `block_size` on each
//! axis so the pieces of A, B and C being touched stay resident in cache
//! while they're reused.
//!
//! Available implementations:
//! - `gemm_tiled`: scalar tiles, i-j-k order inside each tile

pub mod gemm_tiled;

/// Tile edge used when the caller doesn't pick one.
pub const DEFAULT_BLOCK_SIZE: usize = 64;
