//! Kernel functions for LS-SVM regression

pub mod linear;
pub mod mlp;
pub mod polynomial;
pub mod radial;
pub mod reciprocal;
pub mod spline;
pub mod traits;

pub use self::linear::*;
pub use self::mlp::*;
pub use self::polynomial::*;
pub use self::radial::*;
pub use self::reciprocal::*;
pub use self::spline::*;
pub use self::traits::*;
