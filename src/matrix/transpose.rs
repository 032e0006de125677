/// Transpose a square matrix: dst = src^T
///
/// Both slices are n×n, row-major. Column j of `src` becomes row j of `dst`.
///
/// # Panics
///
/// Panics if either slice isn't n² long or n² overflows `usize`.
///
/// # Example
///
/// ```
/// use matmul_loops::matrix::transpose::transpose;
///
/// let src = vec![1.0, 2.0,
///                3.0, 4.0];
/// let mut dst = vec![0.0; 4];
///
/// transpose(&src, &mut dst, 2);
///
/// assert_eq!(dst, vec![1.0, 3.0,
///                      2.0, 4.0]);
/// ```
pub fn transpose(src: &[f64], dst: &mut [f64], n: usize) {
    let len = crate::matrix::dense::square_len_or_panic(n);
    assert_eq!(src.len(), len, "src: expected {}x{}={} elements", n, n, len);
    assert_eq!(dst.len(), len, "dst: expected {}x{}={} elements", n, n, len);

    for i in 0..n {
        for j in 0..n {
            dst[j * n + i] = src[i * n + j];
        }
    }
}
