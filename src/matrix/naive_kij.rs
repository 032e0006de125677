/// Matrix multiplication using k-i-j loop order.
///
/// Same stride-1 inner loop as i-k-j, but the reduction index is outermost:
/// each pass over `k` adds one rank-1 update `A[:, k] * B[k, :]` to the whole
/// of C. C gets swept n times, so it only stays in cache for small n.
///
/// Summation order per element is still k = 0, 1, ..., n-1, the same as
/// i-k-j; only the order in which elements are visited differs.
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
pub fn matmul_naive_kij(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    crate::check_slices(a, b, c, n);

    for k in 0..n {
        let b_row = &b[k * n..(k + 1) * n];
        for i in 0..n {
            let aik = a[i * n + k];
            let c_row = &mut c[i * n..(i + 1) * n];
            for (c_ij, b_kj) in c_row.iter_mut().zip(b_row) {
                *c_ij += aik * b_kj;
            }
        }
    }
}
