//! Core type definitions for LS-SVM regression

use crate::core::error::{Result, SvmError};
use crate::core::traits::Dataset;
use serde::{Deserialize, Serialize};

/// A regression training set: points paired index-for-index with target values.
///
/// Construction validates the pairing so downstream code can rely on
/// `points.len() == values.len()`, a non-empty set, and a uniform feature
/// dimension across all points.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSet {
    points: Vec<Vec<f64>>,
    values: Vec<f64>,
}

impl TrainingSet {
    /// Create a new training set from points and their target values
    pub fn new(points: Vec<Vec<f64>>, values: Vec<f64>) -> Result<Self> {
        if points.is_empty() {
            return Err(SvmError::EmptyTrainingSet);
        }
        if points.len() != values.len() {
            return Err(SvmError::LengthMismatch {
                points: points.len(),
                values: values.len(),
            });
        }

        let dim = points[0].len();
        for point in &points {
            if point.len() != dim {
                return Err(SvmError::DimensionMismatch {
                    expected: dim,
                    actual: point.len(),
                });
            }
        }

        Ok(Self { points, values })
    }

    /// All training points
    pub fn points(&self) -> &[Vec<f64>] {
        &self.points
    }

    /// All target values
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl Dataset for TrainingSet {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn dim(&self) -> usize {
        self.points[0].len()
    }

    fn point(&self, i: usize) -> &[f64] {
        &self.points[i]
    }

    fn targets(&self) -> &[f64] {
        &self.values
    }
}

/// Configuration for the LS-SVM trainer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Cost hyperparameter; the kernel-matrix diagonal is regularized by
    /// `0.5 / cost`
    pub cost: f64,
    /// Relative tolerance on the squared residual norm for the CG solves
    pub epsilon: f64,
    /// Maximum number of CG iterations per solve
    pub max_iterations: usize,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            cost: 1.0,
            epsilon: 1e-6,
            max_iterations: 1000,
        }
    }
}

/// Result of LS-SVM training: dual weights, support vectors, and bias.
///
/// In the least-squares formulation every training point is a support
/// vector. The solution is an immutable value; it may be shared read-only by
/// any number of prediction calls, and `project` returns a fresh solution
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvmSolution {
    /// Dual weight per training point, same indexing as the training set
    alpha: Vec<f64>,
    /// The training points retained for evaluation
    support_vectors: Vec<Vec<f64>>,
    /// Additive constant of the fitted function
    bias: f64,
}

impl SvmSolution {
    /// Create a new solution
    ///
    /// # Panics
    /// Panics if `alpha` and `support_vectors` have different lengths
    pub fn new(alpha: Vec<f64>, support_vectors: Vec<Vec<f64>>, bias: f64) -> Self {
        assert_eq!(
            alpha.len(),
            support_vectors.len(),
            "Dual weights and support vectors must have same length"
        );
        Self {
            alpha,
            support_vectors,
            bias,
        }
    }

    /// Dual weights
    pub fn alpha(&self) -> &[f64] {
        &self.alpha
    }

    /// Support vectors
    pub fn support_vectors(&self) -> &[Vec<f64>] {
        &self.support_vectors
    }

    /// Bias term
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Number of support vectors
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    /// Whether the solution holds no support vectors
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// Sum of the dual weights
    ///
    /// Exactly zero for an ideal LS-SVM solution; CG tolerance can leave a
    /// small drift, which `project` removes.
    pub fn alpha_sum(&self) -> f64 {
        self.alpha.iter().sum()
    }

    /// Return a new solution with the dual weights recentered so that their
    /// sum is exactly zero. Support vectors and bias are unchanged.
    pub fn project(&self) -> SvmSolution {
        let mean = self.alpha_sum() / self.alpha.len() as f64;
        let alpha = self.alpha.iter().map(|a| a - mean).collect();
        SvmSolution {
            alpha,
            support_vectors: self.support_vectors.clone(),
            bias: self.bias,
        }
    }
}
