//! Conjugate-gradient solver for packed symmetric positive (semi-)definite
//! systems
//!
//! Solves K·x ≈ b via the standard CG recurrence without ever forming K
//! beyond its packed triangle. Convergence is measured on the squared
//! residual norm relative to the *initial* residual: after each iteration's
//! update, the solve stops once `r·r < epsilon * (r0·r0)`. The returned
//! estimate always includes the update of the iteration that triggered
//! convergence. Exhausting the iteration cap is not an error; the best
//! estimate is returned with `converged == false`.

use crate::core::{Result, SvmError};
use crate::linalg::{dot, zip_with, PackedMatrix};
use log::{debug, trace};

/// Outcome of a CG solve
#[derive(Debug, Clone)]
pub struct CgSolution {
    /// Solution estimate
    pub x: Vec<f64>,
    /// Iterations actually performed
    pub iterations: usize,
    /// Squared norm of the final residual
    pub residual_norm_sq: f64,
    /// Whether the relative-residual test was met within the cap
    pub converged: bool,
}

/// Per-iteration solver state
struct CgState {
    x: Vec<f64>,
    p: Vec<f64>,
    r: Vec<f64>,
    delta: f64,
}

/// Solve `K·x ≈ b` by conjugate-gradient iteration.
///
/// The caller supplies the initial guess `x0`, search direction `p0`, and
/// residual `r0` (for a zero initial guess, `p0 = r0 = b`). `epsilon` is the
/// relative tolerance on the squared residual norm and `max_iterations`
/// bounds the work.
///
/// # Errors
/// Returns `SvmError::NumericalBreakdown` when `p·K·p` vanishes, which
/// happens for degenerate (insufficiently positive-definite) matrices. The
/// usual remedy is more diagonal regularization.
pub fn solve(
    x0: Vec<f64>,
    p0: Vec<f64>,
    r0: Vec<f64>,
    matrix: &PackedMatrix,
    epsilon: f64,
    max_iterations: usize,
) -> Result<CgSolution> {
    let n = matrix.n();
    for v in [&x0, &p0, &r0] {
        if v.len() != n {
            return Err(SvmError::DimensionMismatch {
                expected: n,
                actual: v.len(),
            });
        }
    }

    let delta_initial = dot(&r0, &r0);
    let threshold = epsilon * delta_initial;

    let mut state = CgState {
        x: x0,
        p: p0,
        r: r0,
        delta: delta_initial,
    };
    let mut iterations = 0;
    let mut converged = false;

    while iterations < max_iterations {
        let kp = matrix.mul_vec(&state.p);
        let pkp = dot(&state.p, &kp);
        if pkp == 0.0 {
            return Err(SvmError::NumericalBreakdown(
                "conjugate-gradient denominator p·K·p is zero".to_string(),
            ));
        }

        let step = state.delta / pkp;
        let x = zip_with(|xi, pi| xi + step * pi, &state.x, &state.p);
        let r = zip_with(|ri, ki| ri - step * ki, &state.r, &kp);
        let delta_next = dot(&r, &r);
        let p = zip_with(|ri, pi| ri + (delta_next / state.delta) * pi, &r, &state.p);

        state = CgState {
            x,
            p,
            r,
            delta: delta_next,
        };
        iterations += 1;
        trace!("cg iteration {}: residual {:.3e}", iterations, delta_next);

        // The new residual is tested against the initial one; the update
        // that produced it is already part of the returned state
        if delta_next < threshold {
            converged = true;
            break;
        }
    }

    debug!(
        "cg finished after {} iterations, residual {:.3e}, converged: {}",
        iterations, state.delta, converged
    );

    Ok(CgSolution {
        x: state.x,
        iterations,
        residual_norm_sq: state.delta,
        converged,
    })
}
