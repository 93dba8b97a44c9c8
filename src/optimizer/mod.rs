//! LS-SVM training and the trained regression model
//!
//! Training solves the least-squares SVM dual problem with two
//! conjugate-gradient solves against the same regularized kernel matrix:
//! one with an all-ones right-hand side (giving `nu`) and one with the
//! target values (giving `v`). The equality constraint on the dual weights
//! is eliminated algebraically through the bias,
//! `b = (nu·values) / sum(nu)`, after which the weights follow as
//! `alpha = v − b·nu`. No bordered system is ever inverted.

use crate::core::{Dataset, RegressionModel, Result, SvmError, SvmSolution, TrainerConfig};
use crate::kernel::Kernel;
use crate::linalg::{dot, zip_with, PackedMatrix};
use crate::solver::cg;
use log::debug;
use std::sync::Arc;

/// LS-SVM trainer combining a kernel function and solver configuration
pub struct LsSvmTrainer<K: Kernel> {
    kernel: Arc<K>,
    config: TrainerConfig,
}

impl<K: Kernel> LsSvmTrainer<K> {
    /// Create a new trainer with the given kernel and configuration
    pub fn new(kernel: K, config: TrainerConfig) -> Self {
        Self {
            kernel: Arc::new(kernel),
            config,
        }
    }

    /// Create a new trainer with default configuration
    pub fn with_kernel(kernel: K) -> Self {
        Self::new(kernel, TrainerConfig::default())
    }

    /// Get the trainer configuration
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    /// Get the kernel
    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    /// Train on a dataset
    pub fn train<D: Dataset>(&self, dataset: &D) -> Result<TrainedLsSvm<K>> {
        let points: Vec<Vec<f64>> = (0..dataset.len())
            .map(|i| dataset.point(i).to_vec())
            .collect();
        self.train_set(&points, dataset.targets())
    }

    /// Train on raw points and target values
    pub fn train_set(&self, points: &[Vec<f64>], values: &[f64]) -> Result<TrainedLsSvm<K>> {
        if points.is_empty() {
            return Err(SvmError::EmptyTrainingSet);
        }
        if points.len() != values.len() {
            return Err(SvmError::LengthMismatch {
                points: points.len(),
                values: values.len(),
            });
        }
        self.validate_config()?;

        let n = points.len();
        let dcost = 0.5 / self.config.cost;
        debug!("training LS-SVM on {} points, dcost {:.6e}", n, dcost);

        let matrix = PackedMatrix::from_kernel(self.kernel.as_ref(), dcost, points)?;

        // Two solves against the same matrix: ones-vector and target values.
        // Both start from a zero guess, so p0 = r0 = b.
        let ones = vec![1.0; n];
        let nu = self.run_cg(&matrix, &ones)?;
        let v = self.run_cg(&matrix, values)?;

        let nu_sum: f64 = nu.iter().sum();
        if nu_sum == 0.0 {
            return Err(SvmError::NumericalBreakdown(
                "sum of the ones-solve is zero, bias is undefined".to_string(),
            ));
        }

        let bias = dot(&nu, values) / nu_sum;
        let alpha = zip_with(|vi, ni| vi - bias * ni, &v, &nu);
        debug!("trained: bias {:.6}, {} support vectors", bias, n);

        let solution = SvmSolution::new(alpha, points.to_vec(), bias);
        Ok(TrainedLsSvm {
            kernel: Arc::clone(&self.kernel),
            solution,
        })
    }

    fn run_cg(&self, matrix: &PackedMatrix, rhs: &[f64]) -> Result<Vec<f64>> {
        let solution = cg::solve(
            vec![0.0; rhs.len()],
            rhs.to_vec(),
            rhs.to_vec(),
            matrix,
            self.config.epsilon,
            self.config.max_iterations,
        )?;
        Ok(solution.x)
    }

    fn validate_config(&self) -> Result<()> {
        if self.config.cost <= 0.0 {
            return Err(SvmError::InvalidParameter(format!(
                "Cost must be positive, got: {}",
                self.config.cost
            )));
        }
        if self.config.epsilon <= 0.0 {
            return Err(SvmError::InvalidParameter(format!(
                "Epsilon must be positive, got: {}",
                self.config.epsilon
            )));
        }
        if self.config.max_iterations == 0 {
            return Err(SvmError::InvalidParameter(
                "Max iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// A trained LS-SVM regression model
pub struct TrainedLsSvm<K: Kernel> {
    kernel: Arc<K>,
    solution: SvmSolution,
}

impl<K: Kernel> TrainedLsSvm<K> {
    /// The underlying solution (dual weights, support vectors, bias)
    pub fn solution(&self) -> &SvmSolution {
        &self.solution
    }

    /// Return a model whose dual weights are recentered to sum exactly to
    /// zero. Kernel and bias are unchanged; `self` is not modified.
    pub fn project(&self) -> TrainedLsSvm<K> {
        TrainedLsSvm {
            kernel: Arc::clone(&self.kernel),
            solution: self.solution.project(),
        }
    }
}

impl<K: Kernel> RegressionModel for TrainedLsSvm<K> {
    /// Evaluate the fitted function: Σ_k alpha_k * K(point, sv_k) + bias
    ///
    /// # Panics
    /// Panics if the query dimension differs from the support vectors'
    fn predict(&self, point: &[f64]) -> f64 {
        let svs = self.solution.support_vectors();
        if let Some(first) = svs.first() {
            assert_eq!(
                point.len(),
                first.len(),
                "Query dimension must match support vectors"
            );
        }

        let weighted: f64 = self
            .solution
            .alpha()
            .iter()
            .zip(svs.iter())
            .map(|(a, sv)| a * self.kernel.compute(point, sv))
            .sum();
        weighted + self.solution.bias()
    }

    fn n_support_vectors(&self) -> usize {
        self.solution.len()
    }

    fn bias(&self) -> f64 {
        self.solution.bias()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TrainingSet;
    use crate::kernel::{LinearKernel, RadialKernel};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn line_config() -> TrainerConfig {
        TrainerConfig {
            cost: 1000.0,
            epsilon: 1e-9,
            max_iterations: 100,
        }
    }

    #[test]
    fn test_trainer_creation() {
        let trainer = LsSvmTrainer::with_kernel(LinearKernel::new());
        assert_eq!(trainer.config().cost, 1.0);
        assert_eq!(trainer.config().epsilon, 1e-6);
    }

    #[test]
    fn test_train_linear_fit() {
        let trainer = LsSvmTrainer::new(LinearKernel::new(), line_config());
        let points = vec![vec![0.0], vec![1.0], vec![2.0]];
        let values = vec![0.0, 1.0, 2.0];

        let model = trainer
            .train_set(&points, &values)
            .expect("Training should succeed");

        // Low regularization on a 1-D line recovers the line almost exactly
        assert_relative_eq!(model.predict(&[0.5]), 0.5, epsilon = 1e-2);
        assert_relative_eq!(model.predict(&[1.0]), 1.0, epsilon = 1e-2);
        assert_eq!(model.n_support_vectors(), 3);
    }

    #[test]
    fn test_train_from_dataset() {
        let set = TrainingSet::new(vec![vec![0.0], vec![1.0], vec![2.0]], vec![0.0, 1.0, 2.0])
            .expect("Valid training set");
        let trainer = LsSvmTrainer::new(LinearKernel::new(), line_config());

        let model = trainer.train(&set).expect("Training should succeed");
        assert_relative_eq!(model.predict(&[1.5]), 1.5, epsilon = 1e-2);
    }

    #[test]
    fn test_alpha_sum_near_zero_and_projection() {
        let trainer = LsSvmTrainer::new(RadialKernel::new(2.0), TrainerConfig::default());
        let points = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let values = vec![0.0, 0.8, 0.9, 0.1];

        let model = trainer
            .train_set(&points, &values)
            .expect("Training should succeed");

        // CG leaves only a small drift off the zero-sum plane
        assert_abs_diff_eq!(model.solution().alpha_sum(), 0.0, epsilon = 1e-2);

        let projected = model.project();
        assert_abs_diff_eq!(projected.solution().alpha_sum(), 0.0, epsilon = 1e-12);
        assert_eq!(projected.bias(), model.bias());
    }

    #[test]
    fn test_predict_batch_order() {
        let trainer = LsSvmTrainer::new(LinearKernel::new(), line_config());
        let model = trainer
            .train_set(&[vec![0.0], vec![1.0], vec![2.0]], &[0.0, 1.0, 2.0])
            .expect("Training should succeed");

        let queries = vec![vec![2.0], vec![0.0], vec![1.0]];
        let predictions = model.predict_batch(&queries);
        assert_eq!(predictions.len(), 3);
        assert!(predictions[0] > predictions[2]);
        assert!(predictions[2] > predictions[1]);
    }

    #[test]
    fn test_train_empty_set() {
        let trainer = LsSvmTrainer::with_kernel(LinearKernel::new());
        let result = trainer.train_set(&[], &[]);
        assert!(matches!(result, Err(SvmError::EmptyTrainingSet)));
    }

    #[test]
    fn test_train_length_mismatch() {
        let trainer = LsSvmTrainer::with_kernel(LinearKernel::new());
        let result = trainer.train_set(&[vec![0.0], vec![1.0]], &[1.0]);
        assert!(matches!(
            result,
            Err(SvmError::LengthMismatch {
                points: 2,
                values: 1
            })
        ));
    }

    #[test]
    fn test_train_invalid_cost() {
        let config = TrainerConfig {
            cost: 0.0,
            ..TrainerConfig::default()
        };
        let trainer = LsSvmTrainer::new(LinearKernel::new(), config);
        let result = trainer.train_set(&[vec![0.0]], &[1.0]);
        assert!(matches!(result, Err(SvmError::InvalidParameter(_))));
    }

    #[test]
    fn test_train_invalid_iteration_cap() {
        let config = TrainerConfig {
            max_iterations: 0,
            ..TrainerConfig::default()
        };
        let trainer = LsSvmTrainer::new(LinearKernel::new(), config);
        let result = trainer.train_set(&[vec![0.0]], &[1.0]);
        assert!(matches!(result, Err(SvmError::InvalidParameter(_))));
    }

    #[test]
    #[should_panic(expected = "Query dimension must match support vectors")]
    fn test_predict_dimension_mismatch() {
        let trainer = LsSvmTrainer::new(LinearKernel::new(), line_config());
        let model = trainer
            .train_set(&[vec![0.0, 1.0], vec![1.0, 0.0]], &[0.0, 1.0])
            .expect("Training should succeed");
        model.predict(&[0.5]);
    }
}
