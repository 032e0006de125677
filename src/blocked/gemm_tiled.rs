//! Blocked GEMM with scalar tiles.

/// Cache-blocked matrix multiplication.
///
/// Three block loops step through rows (`ii`), columns (`jj`) and the
/// reduction axis (`kk`) in that nesting, `block_size` at a time. Inside each
/// block a plain i-j-k triple loop runs over the clipped sub-ranges, so a
/// block that hangs off the edge just stops at `n`.
///
/// Because `kk` is the innermost block loop, each `c[i][j]` still receives
/// its terms in k order; only the partial sums are split at block edges.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Edge length of all three matrices
/// * `block_size` - Tile edge, need not divide `n`
///
/// # Panics
///
/// Panics if any slice isn't n² long or `block_size` is 0.
pub fn matmul_blocked_tiled(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block_size: usize) {
    crate::check_slices(a, b, c, n);
    assert!(block_size > 0, "block_size must be positive");

    for ii in (0..n).step_by(block_size) {
        let i_end = (ii + block_size).min(n);

        for jj in (0..n).step_by(block_size) {
            let j_end = (jj + block_size).min(n);

            for kk in (0..n).step_by(block_size) {
                let k_end = (kk + block_size).min(n);

                multiply_block(a, b, c, n, ii..i_end, jj..j_end, kk..k_end);
            }
        }
    }
}

// One tile: C[i_range, j_range] += A[i_range, k_range] * B[k_range, j_range]
fn multiply_block(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    n: usize,
    i_range: std::ops::Range<usize>,
    j_range: std::ops::Range<usize>,
    k_range: std::ops::Range<usize>,
) {
    for i in i_range {
        for j in j_range.clone() {
            for k in k_range.clone() {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}
