//! MLP (sigmoid-like) kernel implementation
//!
//! The MLP kernel is defined as:
//! K(x, y) = tanh(g * <x, y> − t)
//!
//! where g scales the dot product and t shifts it before the hyperbolic
//! tangent. It mimics the activation of a single perceptron layer; like the
//! classic sigmoid kernel it is not positive semi-definite for all
//! parameter choices, so regularization matters more than for the radial or
//! polynomial variants.

use crate::kernel::linear::dot_dense;
use crate::kernel::Kernel;

/// MLP kernel: K(x, y) = tanh(gain * x^T * y − offset)
#[derive(Debug, Clone, Copy)]
pub struct MlpKernel {
    /// Scaling factor for the dot product (must be positive)
    pub gain: f64,
    /// Shift subtracted before the hyperbolic tangent
    pub offset: f64,
}

impl MlpKernel {
    /// Create a new MLP kernel
    ///
    /// # Arguments
    /// * `gain` - Scaling factor for the dot product (must be positive)
    /// * `offset` - Shift subtracted inside the tanh
    ///
    /// # Panics
    /// Panics if gain is not positive
    pub fn new(gain: f64, offset: f64) -> Self {
        assert!(gain > 0.0, "Gain must be positive, got: {}", gain);
        Self { gain, offset }
    }
}

impl Kernel for MlpKernel {
    fn compute(&self, x: &[f64], y: &[f64]) -> f64 {
        (self.gain * dot_dense(x, y) - self.offset).tanh()
    }
}
