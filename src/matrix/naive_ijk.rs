/// Matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. The innermost loop walks a row of A
/// (stride 1) but a column of B (stride `n`), so every step of `k` lands on
/// a different cache line of B. Worst locality of the three naive orders.
///
/// Each `c[i][j]` is accumulated in place, summing `k` from 0 up.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, accumulated into (C += A * B)
/// * `n` - Edge length of all three matrices
///
/// # Panics
///
/// Panics if any slice isn't n² long.
pub fn matmul_naive_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    crate::check_slices(a, b, c, n);

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}
