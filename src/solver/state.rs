use std::time::Instant;

use tracing::{debug, trace, warn};

use super::report::{SolveReport, SolveStatus};
use crate::errors::CgError;
use crate::math::{axpy, dot, gradient, inner, norm, Matrix, Scalar, Vector};

/// Where the direction recurrence stands.
///
/// The very first direction is `-g₀`, set at construction. The first call to
/// [`ConjugateGradient::update_direction`] keeps it and moves to
/// [`DirectionPhase::Iterating`]; every later call blends in the previous
/// direction through `beta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionPhase {
    /// `d = -g₀` has not been consumed by a step yet.
    AwaitingFirstDirection,
    /// At least one step has been taken.
    Iterating,
}

/// Conjugate gradient iteration state for a dense SPD system `A x = b`.
///
/// `A` and `b` are borrowed for the lifetime of the solver and never
/// modified. The iterate `x` is owned and updated in place; the gradient and
/// direction are independent vectors owned by the solver.
///
/// Symmetry and positive-definiteness of `A` are not checked. A matrix that
/// violates them yields non-finite values or a solve that never converges.
#[derive(Debug, Clone)]
pub struct ConjugateGradient<'a> {
    a: &'a Matrix,
    b: &'a Vector,
    x: Vector,
    grad: Vector,
    dir: Vector,
    phase: DirectionPhase,
}

impl<'a> ConjugateGradient<'a> {
    /// Prepares a solve of `A x = b` starting from `x0`.
    ///
    /// Computes `g₀ = A x₀ - b` and `d₀ = -g₀`.
    ///
    /// # Errors
    ///
    /// Returns [`CgError::NotSquare`] or [`CgError::DimensionMismatch`] if the
    /// operands do not describe an `n×n` system.
    pub fn new(a: &'a Matrix, x0: Vector, b: &'a Vector) -> Result<Self, CgError> {
        let (rows, cols) = a.shape();
        if rows != cols {
            return Err(CgError::NotSquare { rows, cols });
        }
        if x0.len() != rows {
            return Err(CgError::DimensionMismatch {
                what: "x0",
                expected: rows,
                found: x0.len(),
            });
        }
        if b.len() != rows {
            return Err(CgError::DimensionMismatch {
                what: "b",
                expected: rows,
                found: b.len(),
            });
        }

        let grad = gradient(a, &x0, b);
        let dir = -&grad;

        Ok(Self {
            a,
            b,
            x: x0,
            grad,
            dir,
            phase: DirectionPhase::AwaitingFirstDirection,
        })
    }

    /// Shape of the system matrix.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        self.a.shape()
    }

    /// Current iterate.
    #[must_use]
    pub const fn solution(&self) -> &Vector {
        &self.x
    }

    /// Current gradient `A x - b`.
    #[must_use]
    pub const fn gradient(&self) -> &Vector {
        &self.grad
    }

    /// Current search direction.
    #[must_use]
    pub const fn direction(&self) -> &Vector {
        &self.dir
    }

    /// Current phase of the direction recurrence.
    #[must_use]
    pub const fn phase(&self) -> DirectionPhase {
        self.phase
    }

    /// `‖g‖₂` for the current iterate.
    #[must_use]
    pub fn gradient_norm(&self) -> Scalar {
        norm(&self.grad)
    }

    /// True iff `‖g‖₂ < tol`.
    #[must_use]
    pub fn converged(&self, tol: Scalar) -> bool {
        self.gradient_norm() < tol
    }

    /// Step length along the current direction: `-(gᵀ d) / (dᵀ A d)`.
    #[must_use]
    pub fn alpha(&self) -> Scalar {
        let num = dot(&self.grad, &self.dir);
        let denom = inner(&self.dir, self.a, &self.dir);
        -num / denom
    }

    /// Conjugacy coefficient: `(gᵀ A d) / (dᵀ A d)`.
    #[must_use]
    pub fn beta(&self) -> Scalar {
        let num = inner(&self.grad, self.a, &self.dir);
        let denom = inner(&self.dir, self.a, &self.dir);
        num / denom
    }

    /// Refreshes the search direction to `beta·d - g`.
    ///
    /// The first call leaves `d = -g₀` untouched and only advances the phase.
    pub fn update_direction(&mut self) {
        match self.phase {
            DirectionPhase::AwaitingFirstDirection => {
                self.phase = DirectionPhase::Iterating;
            }
            DirectionPhase::Iterating => {
                let beta = self.beta();
                self.dir = &self.dir * beta - &self.grad;
            }
        }
    }

    /// Advances the iterate: `x ← x + alpha·d`.
    pub fn update_solution(&mut self) {
        let alpha = self.alpha();
        axpy(alpha, &self.dir, &mut self.x);
    }

    /// Recomputes `g = A x - b` from the current iterate.
    pub fn update_gradient(&mut self) {
        self.grad = gradient(self.a, &self.x, self.b);
    }

    /// One full pass: direction, then solution, then gradient.
    ///
    /// On a state whose gradient is exactly zero, alpha is `0 / 0` and the
    /// iterate becomes NaN; [`Self::solve`] never steps a converged state.
    pub fn step(&mut self) {
        self.update_direction();
        self.update_solution();
        self.update_gradient();
    }

    /// Runs the iteration until `‖g‖₂ < tol` or `n + 1` passes have been made.
    ///
    /// Returns immediately, with no updates, if `x₀` already satisfies the
    /// tolerance. The final iterate is returned in every case.
    #[must_use]
    pub fn solve(mut self, tol: Scalar) -> SolveReport {
        let start = Instant::now();
        let (max_iterations, _) = self.dims();

        debug!("CG: n={max_iterations}, tol={tol:.2e}, max_iter={}", max_iterations + 1);

        if self.converged(tol) {
            debug!("CG: initial guess already converged, ||g|| = {:.6e}", self.gradient_norm());
            return self.finish(0, SolveStatus::Converged, start);
        }

        for k in 0..=max_iterations {
            self.step();

            let g_norm = self.gradient_norm();
            trace!("CG iter {k}: ||g|| = {g_norm:.6e}");

            if self.converged(tol) {
                debug!("CG converged at iteration {k}: ||g|| = {g_norm:.6e}");
                return self.finish(k + 1, SolveStatus::Converged, start);
            }
        }

        let g_norm = self.gradient_norm();
        let status = if g_norm.is_finite() && self.x.iter().all(|v| v.is_finite()) {
            warn!(
                "CG: non-convergence after {} iterations, ||g|| = {g_norm:.6e} >= tol = {tol:.2e}",
                max_iterations + 1,
            );
            SolveStatus::Exhausted
        } else {
            warn!(
                "CG: non-finite state after {} iterations; matrix may not be SPD",
                max_iterations + 1,
            );
            SolveStatus::Degenerate
        };

        self.finish(max_iterations + 1, status, start)
    }

    fn finish(self, iterations: usize, status: SolveStatus, start: Instant) -> SolveReport {
        let residual_norm = self.gradient_norm();
        SolveReport {
            solution: self.x,
            status,
            iterations,
            residual_norm,
            elapsed: start.elapsed(),
        }
    }
}
