//! Packed symmetric matrix storage for kernel (Gram) matrices
//!
//! A symmetric N×N matrix is stored as the lower triangle including the
//! diagonal, N(N+1)/2 entries in a flat vector. Layout is column-major over
//! triangular blocks: the block for column `j` holds rows `0..=j`
//! contiguously and starts at flat offset `j*(j+1)/2`. Halving both the
//! storage and the kernel evaluations is what makes the O(N²) Gram-matrix
//! build the only quadratic cost of training.

use crate::core::{Result, SvmError};
use crate::kernel::Kernel;

/// Symmetric matrix in packed triangular storage
#[derive(Debug, Clone, PartialEq)]
pub struct PackedMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PackedMatrix {
    /// Build the kernel matrix for a set of training points.
    ///
    /// Entry (i, j) is `kernel(points[i], points[j])`, with `dcost` added on
    /// the diagonal. Only the triangle i ≤ j is evaluated; symmetry supplies
    /// the rest.
    pub fn from_kernel<K: Kernel + ?Sized>(
        kernel: &K,
        dcost: f64,
        points: &[Vec<f64>],
    ) -> Result<Self> {
        if points.is_empty() {
            return Err(SvmError::EmptyTrainingSet);
        }

        let dim = points[0].len();
        for point in points {
            if point.len() != dim {
                return Err(SvmError::DimensionMismatch {
                    expected: dim,
                    actual: point.len(),
                });
            }
        }
        kernel.check_dim(dim)?;

        let n = points.len();
        let mut data = Vec::with_capacity(n * (n + 1) / 2);
        for j in 0..n {
            for i in 0..=j {
                let mut entry = kernel.compute(&points[i], &points[j]);
                if i == j {
                    entry += dcost;
                }
                data.push(entry);
            }
        }

        Ok(Self { n, data })
    }

    /// Wrap an existing packed triangle.
    ///
    /// `data` must hold exactly n(n+1)/2 entries in column-major triangular
    /// order.
    pub fn from_packed(n: usize, data: Vec<f64>) -> Result<Self> {
        let expected = n * (n + 1) / 2;
        if data.len() != expected {
            return Err(SvmError::DimensionMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Matrix dimension N
    pub fn n(&self) -> usize {
        self.n
    }

    /// The packed triangle, column-major blocks
    pub fn as_packed(&self) -> &[f64] {
        &self.data
    }

    /// Flat offset of logical entry (i, j) for i <= j
    fn offset(i: usize, j: usize) -> usize {
        j * (j + 1) / 2 + i
    }

    /// Logical entry (row, col), resolving symmetry.
    ///
    /// # Panics
    /// Panics if row or col is out of bounds
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "Index out of bounds");
        // Entries below the diagonal live under the transposed column block
        if row <= col {
            self.data[Self::offset(row, col)]
        } else {
            self.data[Self::offset(col, row)]
        }
    }

    /// Matrix-vector product over the packed triangle.
    ///
    /// Row scans read (i, j) from the column-j block for j >= i and from the
    /// column-i block for j < i, so the full symmetric product costs O(N²)
    /// with only the triangle materialized.
    ///
    /// # Panics
    /// Panics if `v.len() != self.n()`
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.n, "Vectors must have same length");

        let mut result = Vec::with_capacity(self.n);
        for i in 0..self.n {
            let mut sum = 0.0;
            for (j, &vj) in v.iter().enumerate() {
                let entry = if j < i {
                    self.data[Self::offset(j, i)]
                } else {
                    self.data[Self::offset(i, j)]
                };
                sum += entry * vj;
            }
            result.push(sum);
        }
        result
    }
}
