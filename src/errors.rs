//! Shared error types used across submodules.

use thiserror::Error;

use crate::math::Scalar;

/// Top-level error type for the crate.
///
/// Non-convergence is deliberately absent: a solve that runs out of
/// iterations is reported through [`crate::solver::SolveReport`], not here.
#[derive(Debug, Error)]
pub enum CgError {
    /// Raised when the system matrix is not square.
    #[error("matrix must be square: {rows}x{cols}")]
    NotSquare {
        /// Row count of the offending matrix.
        rows: usize,
        /// Column count of the offending matrix.
        cols: usize,
    },
    /// Raised when a vector length disagrees with the matrix dimension.
    #[error("{what} length {found} does not match matrix dimension {expected}")]
    DimensionMismatch {
        /// Which operand was mismatched (`"x0"`, `"b"`).
        what: &'static str,
        /// Matrix dimension `n`.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// Raised when the convergence tolerance is not a positive finite value.
    #[error("tolerance must be positive and finite, got {0}")]
    InvalidTolerance(Scalar),
    /// Raised when a matrix factorisation needed by the demo is unavailable.
    #[error("decomposition failed: {0}")]
    Decomposition(String),
    /// Raised when a sampling distribution is configured with bad parameters.
    #[error("invalid distribution: {0}")]
    Distribution(#[from] rand_distr::NormalError),
}
