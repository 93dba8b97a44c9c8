//! Iterative solvers for the LS-SVM linear systems

pub mod cg;

pub use self::cg::{solve, CgSolution};
