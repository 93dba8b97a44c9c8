//! Kernel trait definition

use crate::core::Result;

/// Kernel function trait
///
/// A kernel function K(x, y) computes an inner product between two feature
/// vectors in some (possibly implicit) feature space. Valid kernels are
/// symmetric in their arguments. Implementations must be deterministic and
/// free of shared mutable state so they can be evaluated concurrently.
pub trait Kernel: Send + Sync {
    /// Compute kernel value K(x, y)
    ///
    /// Both vectors are expected to share the training-set dimension;
    /// trailing entries past the shorter input do not contribute.
    fn compute(&self, x: &[f64], y: &[f64]) -> f64;

    /// Validate the kernel's per-dimension parameters against the data
    /// dimension.
    ///
    /// Kernels without per-dimension parameters accept any dimension; ones
    /// that carry a parameter per feature (e.g. the reciprocal kernel)
    /// override this with an arity check. Called before kernel-matrix
    /// construction and batch evaluation.
    fn check_dim(&self, dim: usize) -> Result<()> {
        let _ = dim;
        Ok(())
    }
}
