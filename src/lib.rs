//! Rust implementation of Least-Squares Support Vector Regression (LS-SVM)
//!
//! Based on "Least Squares Support Vector Machine Classifiers" by
//! Suykens and Vandewalle, solved via conjugate-gradient iteration.

pub mod api;
pub mod core;
pub mod kernel;
pub mod linalg;
pub mod optimizer;
pub mod solver;

// Re-export main types for convenience
pub use crate::api::{FittedModel, LsSvr, ModelInfo, RegressionMetrics};
pub use crate::core::traits::*;
pub use crate::core::types::*;
pub use crate::kernel::{
    Kernel, LinearKernel, MlpKernel, PolynomialKernel, RadialKernel, ReciprocalKernel,
    SplineKernel,
};
pub use crate::linalg::PackedMatrix;
pub use crate::optimizer::{LsSvmTrainer, TrainedLsSvm};
pub use crate::solver::CgSolution;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
