//! High-level API for LS-SVM regression
//!
//! This module provides a user-friendly interface for common regression
//! tasks: fitting, prediction, and model evaluation.
//!
//! # Quick Start
//!
//! ```rust
//! use lssvr::api::LsSvr;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let points = vec![vec![0.0], vec![1.0], vec![2.0]];
//! let values = vec![0.0, 1.0, 2.0];
//!
//! let model = LsSvr::new()
//!     .with_cost(1000.0)
//!     .with_epsilon(1e-9)
//!     .fit_raw(&points, &values)?;
//!
//! assert!((model.predict(&[0.5]) - 0.5).abs() < 0.01);
//! # Ok(())
//! # }
//! ```

use crate::core::{Dataset, RegressionModel, Result, SvmSolution, TrainerConfig};
use crate::kernel::{Kernel, LinearKernel};
use crate::optimizer::{LsSvmTrainer, TrainedLsSvm};

/// High-level LS-SVM regression interface with builder pattern
pub struct LsSvr<K: Kernel = LinearKernel> {
    kernel: K,
    config: TrainerConfig,
}

impl LsSvr<LinearKernel> {
    /// Create a new regressor with linear kernel and default parameters
    pub fn new() -> Self {
        Self {
            kernel: LinearKernel::new(),
            config: TrainerConfig::default(),
        }
    }
}

impl Default for LsSvr<LinearKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel> LsSvr<K> {
    /// Create a regressor with a custom kernel
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            config: TrainerConfig::default(),
        }
    }

    /// Set the cost hyperparameter (diagonal regularization is 0.5 / cost)
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.config.cost = cost;
        self
    }

    /// Set the CG convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Set the CG iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Fit on a dataset
    pub fn fit<D: Dataset>(self, dataset: &D) -> Result<FittedModel<K>> {
        let trainer = LsSvmTrainer::new(self.kernel, self.config);
        let model = trainer.train(dataset)?;
        Ok(FittedModel { model })
    }

    /// Fit on raw points and target values
    pub fn fit_raw(self, points: &[Vec<f64>], values: &[f64]) -> Result<FittedModel<K>> {
        let trainer = LsSvmTrainer::new(self.kernel, self.config);
        let model = trainer.train_set(points, values)?;
        Ok(FittedModel { model })
    }
}

/// Fitted LS-SVM model with a high-level prediction interface
pub struct FittedModel<K: Kernel> {
    model: TrainedLsSvm<K>,
}

impl<K: Kernel> FittedModel<K> {
    /// Evaluate the fitted function at a single point
    pub fn predict(&self, point: &[f64]) -> f64 {
        self.model.predict(point)
    }

    /// Evaluate the fitted function at multiple points, order-preserving
    pub fn predict_batch(&self, points: &[Vec<f64>]) -> Vec<f64> {
        self.model.predict_batch(points)
    }

    /// Return a model whose dual weights sum exactly to zero
    pub fn project(&self) -> FittedModel<K> {
        FittedModel {
            model: self.model.project(),
        }
    }

    /// The underlying solution
    pub fn solution(&self) -> &SvmSolution {
        self.model.solution()
    }

    /// Compute residual metrics against a dataset's target values
    pub fn evaluate<D: Dataset>(&self, dataset: &D) -> RegressionMetrics {
        let residuals: Vec<f64> = (0..dataset.len())
            .map(|i| self.predict(dataset.point(i)) - dataset.targets()[i])
            .collect();
        RegressionMetrics::from_residuals(&residuals, dataset.targets())
    }

    /// Get model information
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            n_support_vectors: self.model.n_support_vectors(),
            bias: self.model.bias(),
            alpha_sum: self.model.solution().alpha_sum(),
        }
    }

    /// Get the underlying trained model
    pub fn inner(&self) -> &TrainedLsSvm<K> {
        &self.model
    }
}

/// Residual statistics for a fitted model
#[derive(Debug, Clone)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}

impl RegressionMetrics {
    fn from_residuals(residuals: &[f64], targets: &[f64]) -> Self {
        let n = residuals.len() as f64;
        let mse = residuals.iter().map(|r| r * r).sum::<f64>() / n;
        let mae = residuals.iter().map(|r| r.abs()).sum::<f64>() / n;

        let mean = targets.iter().sum::<f64>() / n;
        let total_ss: f64 = targets.iter().map(|y| (y - mean) * (y - mean)).sum();
        let residual_ss: f64 = residuals.iter().map(|r| r * r).sum();
        let r_squared = if total_ss == 0.0 {
            // Constant targets: perfect iff the residuals vanish
            if residual_ss == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - residual_ss / total_ss
        };

        Self {
            mse,
            rmse: mse.sqrt(),
            mae,
            r_squared,
        }
    }
}

/// Model information
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub n_support_vectors: usize,
    pub bias: f64,
    /// Residual drift of the dual weights off the zero-sum plane
    pub alpha_sum: f64,
}

/// Convenience functions for quick operations
pub mod quick {
    use super::*;
    use crate::kernel::RadialKernel;

    /// Fit a linear LS-SVM with default parameters
    pub fn fit_linear(points: &[Vec<f64>], values: &[f64]) -> Result<FittedModel<LinearKernel>> {
        LsSvr::new().fit_raw(points, values)
    }

    /// Fit a radial-kernel LS-SVM with the given width and cost
    pub fn fit_radial(
        points: &[Vec<f64>],
        values: &[f64],
        width: f64,
        cost: f64,
    ) -> Result<FittedModel<RadialKernel>> {
        LsSvr::with_kernel(RadialKernel::new(width))
            .with_cost(cost)
            .fit_raw(points, values)
    }
}
