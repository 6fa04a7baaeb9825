//! Random SPD systems and the end-to-end demo run behind `cg-demo`.
//!
//! The matrix is built as `U · diag(σ) · Uᵀ`, where `U` is the left singular
//! basis of a matrix with uniform `[0, 1)` entries and `σᵢ = 1 + U(0, 1)`, so
//! every eigenvalue lies in `[1, 2)` and the condition number stays below 2.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::info;

use crate::errors::CgError;
use crate::math::{gradient, norm, Matrix, Scalar, Vector};
use crate::solver::{conjugate_gradient, SolveReport};

/// Mean of the right-hand-side entries.
pub const RHS_MEAN: Scalar = 5.0;
/// Standard deviation of the right-hand-side entries.
pub const RHS_STD_DEV: Scalar = 2.0;
/// Tolerance used when comparing `A x̂` against `b`.
pub const RESIDUAL_CHECK_EPSILON: Scalar = 1.0e-6;
/// Iteration cap for the SVD that supplies the orthogonal basis.
pub const SVD_MAX_ITERATIONS: usize = 1000;

/// Parameters for one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    /// Row (and column) count of the generated matrix.
    pub dimension: usize,
    /// RNG seed; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Stopping tolerance on `‖A x − b‖₂`.
    pub tolerance: Scalar,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            dimension: 10,
            seed: None,
            tolerance: 1.0e-6,
        }
    }
}

impl DemoConfig {
    /// Default configuration for an `n×n` system.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// Fixes the RNG seed for reproducible runs.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the stopping tolerance.
    #[must_use]
    pub const fn with_tolerance(mut self, tolerance: Scalar) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn rng(&self) -> ChaCha8Rng {
        self.seed
            .map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64)
    }
}

/// Generates a random `n×n` symmetric positive-definite matrix.
///
/// # Errors
///
/// Returns [`CgError::Decomposition`] if the SVD does not converge within
/// [`SVD_MAX_ITERATIONS`].
pub fn random_spd_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Matrix, CgError> {
    if n == 0 {
        return Ok(Matrix::zeros(0, 0));
    }

    let m = Matrix::from_fn(n, n, |_, _| rng.random::<Scalar>());
    let sigmas = Vector::from_fn(n, |_, _| 1.0 + rng.random::<Scalar>());

    let u = left_singular_basis(m, SVD_MAX_ITERATIONS)?;

    Ok(&u * Matrix::from_diagonal(&sigmas) * u.transpose())
}

fn left_singular_basis(m: Matrix, max_iterations: usize) -> Result<Matrix, CgError> {
    m.try_svd(true, false, Scalar::EPSILON, max_iterations)
        .and_then(|svd| svd.u)
        .ok_or_else(|| {
            CgError::Decomposition(format!("SVD did not converge in {max_iterations} iterations"))
        })
}

/// Draws a length-`n` right-hand side with `Normal(5, 2)` entries.
///
/// # Errors
///
/// Returns [`CgError::Distribution`] if the normal distribution is rejected.
pub fn random_rhs<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vector, CgError> {
    let normal = Normal::new(RHS_MEAN, RHS_STD_DEV)?;
    Ok(Vector::from_fn(n, |_, _| normal.sample(&mut *rng)))
}

/// Everything produced by one demo run.
#[derive(Debug, Clone)]
pub struct DemoOutcome {
    /// Generated system matrix.
    pub matrix: Matrix,
    /// Generated right-hand side.
    pub rhs: Vector,
    /// Solver result, including the final iterate.
    pub report: SolveReport,
    /// Independently recomputed `‖A x̂ − b‖₂`.
    pub residual_norm: Scalar,
    /// Whether `A x̂` equals `b` within [`RESIDUAL_CHECK_EPSILON`].
    pub matches_rhs: bool,
}

/// Generates a system from `config`, solves it from `x0 = 0` and checks the
/// residual.
///
/// # Errors
///
/// Propagates generation failures and [`CgError::InvalidTolerance`].
pub fn run(config: &DemoConfig) -> Result<DemoOutcome, CgError> {
    let mut rng = config.rng();
    let n = config.dimension;

    let matrix = random_spd_matrix(n, &mut rng)?;
    let rhs = random_rhs(n, &mut rng)?;

    info!("solving {n}x{n} SPD system, tol = {:.2e}", config.tolerance);
    let report = conjugate_gradient(&matrix, Vector::zeros(n), &rhs, config.tolerance)?;

    let bhat = &matrix * report.solution();
    let residual_norm = norm(&gradient(&matrix, report.solution(), &rhs));
    let matches_rhs = approx::relative_eq!(&bhat, &rhs, epsilon = RESIDUAL_CHECK_EPSILON);

    info!(
        "status = {:?} after {} iterations, ||A x - b|| = {residual_norm:.3e}",
        report.status(),
        report.iterations(),
    );

    Ok(DemoOutcome {
        matrix,
        rhs,
        report,
        residual_norm,
        matches_rhs,
    })
}
