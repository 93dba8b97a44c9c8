//! Core traits for LS-SVM regression

/// Dataset abstraction for regression training data
pub trait Dataset: Send + Sync {
    /// Number of points in the dataset
    fn len(&self) -> usize;

    /// Number of features (dimensionality)
    fn dim(&self) -> usize;

    /// Get a single point by index
    ///
    /// # Panics
    /// Panics if index >= len()
    fn point(&self, i: usize) -> &[f64];

    /// Target values, indexed consistently with the points
    fn targets(&self) -> &[f64];

    /// Check if the dataset is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trained regression model
pub trait RegressionModel: Send + Sync {
    /// Evaluate the fitted function at a single point
    fn predict(&self, point: &[f64]) -> f64;

    /// Evaluate the fitted function at a batch of points, order-preserving
    fn predict_batch(&self, points: &[Vec<f64>]) -> Vec<f64> {
        points.iter().map(|p| self.predict(p)).collect()
    }

    /// Number of support vectors in the model
    fn n_support_vectors(&self) -> usize;

    /// Bias term of the fitted function
    fn bias(&self) -> f64;
}
