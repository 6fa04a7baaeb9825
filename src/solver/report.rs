use std::time::Duration;

use crate::math::{Scalar, Vector};

/// How a solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The gradient norm dropped below the tolerance.
    Converged,
    /// The iteration budget ran out with finite, but too large, residuals.
    Exhausted,
    /// The budget ran out and the iterate or gradient holds NaN/∞, which is
    /// what a singular or indefinite matrix produces.
    Degenerate,
}

/// Result of running [`super::ConjugateGradient::solve`].
///
/// The last iterate is always returned, whether or not the solve converged;
/// check [`SolveReport::converged`] before trusting it.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub(crate) solution: Vector,
    pub(crate) status: SolveStatus,
    pub(crate) iterations: usize,
    pub(crate) residual_norm: Scalar,
    pub(crate) elapsed: Duration,
}

impl SolveReport {
    /// True if the gradient norm is below the tolerance.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    /// Termination status.
    #[must_use]
    pub const fn status(&self) -> SolveStatus {
        self.status
    }

    /// Final iterate.
    #[must_use]
    pub const fn solution(&self) -> &Vector {
        &self.solution
    }

    /// Number of direction/solution/gradient update passes performed.
    #[must_use]
    pub const fn iterations(&self) -> usize {
        self.iterations
    }

    /// `‖A x − b‖₂` at the final iterate.
    #[must_use]
    pub const fn residual_norm(&self) -> Scalar {
        self.residual_norm
    }

    /// Wall time spent inside the solve.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Consumes the report, yielding the final iterate.
    #[must_use]
    pub fn into_solution(self) -> Vector {
        self.solution
    }

    /// Consumes the report, yielding `(solution, converged)`.
    #[must_use]
    pub fn into_parts(self) -> (Vector, bool) {
        let converged = self.converged();
        (self.solution, converged)
    }
}
