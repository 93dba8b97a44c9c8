//! Dense vector utilities for the CG solver and trainer

pub mod packed;

pub use self::packed::PackedMatrix;

/// Dot product of two equal-length vectors
///
/// # Panics
/// Panics if the vectors have different lengths
pub fn dot(x: &[f64], y: &[f64]) -> f64 {
    assert_eq!(x.len(), y.len(), "Vectors must have same length");
    x.iter().zip(y.iter()).map(|(a, b)| a * b).sum()
}

/// Multiply every element of a vector by a scalar
pub fn scale(c: f64, v: &[f64]) -> Vec<f64> {
    v.iter().map(|x| c * x).collect()
}

/// Combine two equal-length vectors position-wise with a binary function
///
/// # Panics
/// Panics if the vectors have different lengths
pub fn zip_with<F>(f: F, x: &[f64], y: &[f64]) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    assert_eq!(x.len(), y.len(), "Vectors must have same length");
    x.iter().zip(y.iter()).map(|(&a, &b)| f(a, b)).collect()
}
