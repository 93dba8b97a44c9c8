//! Reciprocal kernel implementation
//!
//! The reciprocal kernel is defined as:
//! K(x, y) = Π_i 1 / (x_i + y_i + 2*a_i)
//!
//! with one shift parameter a_i per feature dimension. Each factor is the
//! closed form of ∫ exp(-(x_i + a_i)s) * exp(-(y_i + a_i)s) ds over s in
//! [0, ∞), i.e. the inner product of exponential basis functions over a
//! continuous spectral parameter. The empty product is 1.
//!
//! The kernel is only well defined where every denominator is non-zero;
//! shifts are normally chosen so that x_i + y_i + 2*a_i > 0 over the data
//! range.

use crate::core::{Result, SvmError};
use crate::kernel::Kernel;

/// Reciprocal kernel: K(x, y) = Π_i 1 / (x_i + y_i + 2*a_i)
#[derive(Debug, Clone)]
pub struct ReciprocalKernel {
    /// One shift per feature dimension
    shifts: Vec<f64>,
}

impl ReciprocalKernel {
    /// Create a new reciprocal kernel with one shift per feature dimension
    pub fn new(shifts: Vec<f64>) -> Self {
        Self { shifts }
    }

    /// Get the shift parameters
    pub fn shifts(&self) -> &[f64] {
        &self.shifts
    }
}

impl Kernel for ReciprocalKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        x.iter()
            .zip(y.iter())
            .zip(self.shifts.iter())
            .map(|((xi, yi), ai)| 1.0 / (xi + yi + 2.0 * ai))
            .product()
    }

    fn check_dim(&self, dim: usize) -> Result<()> {
        if self.shifts.len() != dim {
            return Err(SvmError::DimensionMismatch {
                expected: dim,
                actual: self.shifts.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reciprocal_kernel_single_dim() {
        let kernel = ReciprocalKernel::new(vec![1.0]);

        // 1 / (0.5 + 1.5 + 2*1.0) = 1/4
        assert_relative_eq!(kernel.compute(&[0.5], &[1.5]), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_reciprocal_kernel_product_over_dims() {
        let kernel = ReciprocalKernel::new(vec![1.0, 0.5]);

        // dim 0: 1 / (1 + 1 + 2) = 1/4
        // dim 1: 1 / (2 + 1 + 1) = 1/4
        let expected = 0.25 * 0.25;
        assert_relative_eq!(
            kernel.compute(&[1.0, 2.0], &[1.0, 1.0]),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_reciprocal_kernel_empty_product() {
        let kernel = ReciprocalKernel::new(vec![]);

        // Base case: no dimensions, product is 1
        assert_eq!(kernel.compute(&[], &[]), 1.0);
    }

    #[test]
    fn test_reciprocal_kernel_symmetry() {
        let kernel = ReciprocalKernel::new(vec![2.0, 3.0]);
        let x = [0.5, 1.0];
        let y = [1.5, 0.25];

        assert_eq!(kernel.compute(&x, &y), kernel.compute(&y, &x));
    }

    #[test]
    fn test_reciprocal_kernel_check_dim() {
        let kernel = ReciprocalKernel::new(vec![1.0, 2.0]);

        assert!(kernel.check_dim(2).is_ok());
        assert!(matches!(
            kernel.check_dim(3),
            Err(SvmError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }
}
