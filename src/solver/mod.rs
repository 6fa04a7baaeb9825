//! Conjugate gradient for dense symmetric positive-definite systems.
//!
//! The solver is a small state machine over the iterate `x`, the gradient
//! `g = A x - b` and the search direction `d`. Each pass of the loop runs the
//! three updates in a fixed order:
//!
//! ```text
//! g = A x0 - b
//! d = -g
//!
//! for k in 0..=n:
//!     if k > 0:
//!         beta = (gᵀ A d) / (dᵀ A d)
//!         d    = beta * d - g
//!     alpha = -(gᵀ d) / (dᵀ A d)
//!     x     = x + alpha * d
//!     g     = A x - b
//!     if ||g||_2 < tol:
//!         converged; break
//! ```
//!
//! The direction is refreshed *before* the step, from the gradient left by the
//! previous pass, and the gradient is recomputed from scratch rather than
//! updated by recurrence. At most `n + 1` passes are made for an `n×n` system.
//!
//! # Example
//!
//! ```
//! use conjugate_gradient::solver::ConjugateGradient;
//! use nalgebra::{DMatrix, DVector};
//!
//! let a = DMatrix::from_row_slice(2, 2, &[4.0, 1.0, 1.0, 3.0]);
//! let b = DVector::from_vec(vec![1.0, 2.0]);
//!
//! let solver = ConjugateGradient::new(&a, DVector::zeros(2), &b)?;
//! let (x, converged) = solver.solve(1e-10).into_parts();
//!
//! assert!(converged);
//! assert!((x[0] - 1.0 / 11.0).abs() < 1e-9);
//! assert!((x[1] - 7.0 / 11.0).abs() < 1e-9);
//! # Ok::<(), conjugate_gradient::errors::CgError>(())
//! ```

/// Solve outcome and diagnostics.
pub mod report;
/// Iteration state and the per-step updates.
pub mod state;

pub use report::{SolveReport, SolveStatus};
pub use state::{ConjugateGradient, DirectionPhase};

use crate::errors::CgError;
use crate::math::{Matrix, Scalar, Vector};

/// Builds a solver for `A x = b` from `x0` and runs it to completion.
///
/// Unlike [`ConjugateGradient::solve`], this also rejects a tolerance that is
/// not positive and finite, since such a tolerance can never be met.
pub fn conjugate_gradient(
    a: &Matrix,
    x0: Vector,
    b: &Vector,
    tolerance: Scalar,
) -> Result<SolveReport, CgError> {
    if !tolerance.is_finite() || tolerance <= 0.0 {
        return Err(CgError::InvalidTolerance(tolerance));
    }
    Ok(ConjugateGradient::new(a, x0, b)?.solve(tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_tolerance() {
        let a = Matrix::identity(2, 2);
        let b = Vector::from_vec(vec![1.0, 1.0]);

        for tol in [0.0, -1.0e-6, Scalar::NAN, Scalar::INFINITY] {
            let result = conjugate_gradient(&a, Vector::zeros(2), &b, tol);
            assert!(matches!(result, Err(CgError::InvalidTolerance(_))), "tol = {tol}");
        }
    }

    #[test]
    fn identity_system_solves_in_one_step() {
        let a = Matrix::identity(3, 3);
        let b = Vector::from_vec(vec![1.0, -2.0, 3.0]);

        let report = conjugate_gradient(&a, Vector::zeros(3), &b, 1e-12).unwrap();

        assert!(report.converged());
        assert_eq!(report.iterations(), 1);
        assert!((report.solution() - &b).norm() < 1e-12);
    }
}
