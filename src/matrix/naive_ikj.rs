/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// By swapping the j and k loops, the innermost loop now walks a row of B
/// and a row of C, both stride 1. `A[i][k]` doesn't change inside that loop
/// so it's loaded once into a register.
///
/// Best locality of the naive orders on large matrices.
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
pub fn matmul_naive_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    crate::check_slices(a, b, c, n);

    for i in 0..n {
        let c_row = &mut c[i * n..(i + 1) * n];
        for k in 0..n {
            let aik = a[i * n + k];
            let b_row = &b[k * n..(k + 1) * n];
            for (c_ij, b_kj) in c_row.iter_mut().zip(b_row) {
                *c_ij += aik * b_kj;
            }
        }
    }
}
