//! Error types for LS-SVM regression

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvmError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Training set mismatch: {points} points but {values} target values")]
    LengthMismatch { points: usize, values: usize },

    #[error("Empty training set")]
    EmptyTrainingSet,

    #[error("Numerical breakdown: {0}")]
    NumericalBreakdown(String),
}

pub type Result<T> = std::result::Result<T, SvmError>;
