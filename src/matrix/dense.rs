//! Dense n×n matrix stored as one contiguous row-major buffer.

use std::ops::{Index, IndexMut};

use crate::error::{MatmulError, Result};
use crate::matrix::transpose::transpose;

/// A square matrix of `f64` values.
///
/// Element `(i, j)` lives at `data[i * n + j]`. The buffer always holds
/// exactly `n * n` values; every constructor enforces that.
///
/// ```
/// use matmul_loops::Matrix;
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.n(), 2);
/// assert_eq!(m[(1, 0)], 3.0);
/// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

/// Element count of an n×n matrix, or `None` if n² overflows `usize`.
pub fn square_len(n: usize) -> Option<usize> {
    n.checked_mul(n)
}

// Constructors that can't return an error panic instead of wrapping.
pub(crate) fn square_len_or_panic(n: usize) -> usize {
    square_len(n).unwrap_or_else(|| panic!("{}x{} matrix size overflows usize", n, n))
}

impl Matrix {
    /// All-zero n×n matrix.
    ///
    /// # Panics
    ///
    /// Panics if n² overflows `usize`.
    pub fn zeros(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0.0; square_len_or_panic(n)],
        }
    }

    /// n×n identity.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Wraps a row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatmulError::LengthMismatch`] if `data.len() != n * n`,
    /// including when n² doesn't fit in `usize`.
    pub fn from_vec(n: usize, data: Vec<f64>) -> Result<Self> {
        if square_len(n) != Some(data.len()) {
            return Err(MatmulError::LengthMismatch {
                n,
                len: data.len(),
            });
        }
        Ok(Matrix { n, data })
    }

    /// Builds a matrix from nested rows, validating that the input is
    /// rectangular and square.
    ///
    /// # Errors
    ///
    /// - [`MatmulError::RaggedRow`] if some row differs in length from row 0
    /// - [`MatmulError::NotSquare`] if the rows are uniform but not n long
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        let cols = rows.first().map_or(0, Vec::len);

        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatmulError::RaggedRow {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
        }
        if cols != n {
            return Err(MatmulError::NotSquare { rows: n, cols });
        }

        let data = rows.into_iter().flatten().collect();
        Ok(Matrix { n, data })
    }

    /// Fills element `(i, j)` with `f(i, j)`, row by row.
    ///
    /// # Panics
    ///
    /// Panics if n² overflows `usize`.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(square_len_or_panic(n));
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Matrix { n, data }
    }

    /// Edge length.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of stored elements (n²).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.n, "row {} out of range for {}x{}", i, self.n, self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Copies the matrix out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        if self.n == 0 {
            return Vec::new();
        }
        self.data.chunks(self.n).map(<[f64]>::to_vec).collect()
    }

    pub fn transpose(&self) -> Matrix {
        let mut out = Matrix::zeros(self.n);
        transpose(&self.data, &mut out.data, self.n);
        out
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// Returns [`MatmulError::DimensionMismatch`] if the sizes differ.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_size(other)?;
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(x, y)| x + y)
            .collect();
        Ok(Matrix { n: self.n, data })
    }

    /// Largest absolute element-wise difference, or `None` when the sizes
    /// differ. Two empty matrices differ by `0.0`.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.n != other.n {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(x, y)| (x - y).abs())
                .fold(0.0, f64::max),
        )
    }

    /// True when the sizes match and every element is within `tol`.
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.max_abs_diff(other).is_some_and(|d| d <= tol)
    }

    pub(crate) fn check_same_size(&self, other: &Matrix) -> Result<()> {
        if self.n != other.n {
            return Err(MatmulError::DimensionMismatch {
                left: self.n,
                right: other.n,
            });
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.n && j < self.n,
            "index ({}, {}) out of range for {}x{}",
            i,
            j,
            self.n,
            self.n
        );
        &self.data[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        assert!(
            i < self.n && j < self.n,
            "index ({}, {}) out of range for {}x{}",
            i,
            j,
            self.n,
            self.n
        );
        &mut self.data[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_layout() {
        let m = Matrix::identity(3);
        assert_eq!(
            m.as_slice(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        let err = Matrix::from_vec(3, vec![0.0; 8]).unwrap_err();
        assert_eq!(err, MatmulError::LengthMismatch { n: 3, len: 8 });
    }

    #[test]
    fn test_from_vec_rejects_overflowing_size() {
        let n = 1usize << (usize::BITS / 2);
        let err = Matrix::from_vec(n, Vec::new()).unwrap_err();
        assert_eq!(err, MatmulError::LengthMismatch { n, len: 0 });

        let err = Matrix::from_vec(usize::MAX, vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            MatmulError::LengthMismatch {
                n: usize::MAX,
                len: 1
            }
        );
    }

    #[test]
    #[should_panic(expected = "matrix size overflows usize")]
    fn test_zeros_overflowing_size_panics() {
        Matrix::zeros(1usize << (usize::BITS / 2));
    }

    #[test]
    fn test_square_len() {
        assert_eq!(square_len(0), Some(0));
        assert_eq!(square_len(3), Some(9));
        assert_eq!(square_len(usize::MAX), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            MatmulError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err();
        assert_eq!(err, MatmulError::NotSquare { rows: 2, cols: 3 });
    }

    #[test]
    fn test_empty_matrix() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert_eq!(m.n(), 0);
        assert!(m.is_empty());
        assert!(m.to_rows().is_empty());
        assert_eq!(m, Matrix::zeros(0));
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let m = Matrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.to_rows(), rows);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = Matrix::zeros(2);
        assert_eq!(m.get(1, 1), Some(0.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        let t = m.transpose();
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(t[(i, j)], m[(j, i)]);
            }
        }
    }

    #[test]
    fn test_add_checks_size() {
        let a = Matrix::identity(2);
        let sum = a.add(&a).unwrap();
        assert_eq!(sum.as_slice(), &[2.0, 0.0, 0.0, 2.0]);

        let err = a.add(&Matrix::zeros(3)).unwrap_err();
        assert_eq!(err, MatmulError::DimensionMismatch { left: 2, right: 3 });
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Matrix::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mut b = a.clone();
        b[(1, 1)] = 4.5;
        assert_eq!(a.max_abs_diff(&b), Some(0.5));
        assert!(a.approx_eq(&b, 0.5));
        assert!(!a.approx_eq(&b, 0.4));
        assert_eq!(a.max_abs_diff(&Matrix::zeros(3)), None);
    }
}
