//! Shared generators for the integration test suite.

#![allow(dead_code)]

use conjugate_gradient::math::{Matrix, Vector};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG so every failure is reproducible.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniform `[-1, 1)` vector.
pub fn random_vector(n: usize, rng: &mut impl Rng) -> Vector {
    Vector::from_fn(n, |_, _| rng.random_range(-1.0..1.0))
}

/// `Mᵀ M + eps·I` for a uniform `[-1, 1)` matrix `M`; SPD for any `eps > 0`.
pub fn gram_plus_shift(n: usize, eps: f64, rng: &mut impl Rng) -> Matrix {
    let m = Matrix::from_fn(n, n, |_, _| rng.random_range(-1.0..1.0));
    m.transpose() * &m + Matrix::identity(n, n) * eps
}

/// SPD matrix with eigenvalues drawn uniformly from `[lo, hi)`.
pub fn spd_with_spectrum(n: usize, lo: f64, hi: f64, rng: &mut impl Rng) -> Matrix {
    let m = Matrix::from_fn(n, n, |_, _| rng.random_range(-1.0..1.0));
    let q = m.qr().q();
    let eigenvalues = Vector::from_fn(n, |_, _| rng.random_range(lo..hi));
    let a = &q * Matrix::from_diagonal(&eigenvalues) * q.transpose();
    // Symmetrize away rounding from the two products.
    (&a + a.transpose()) * 0.5
}

/// `‖A x − b‖₂`, computed independently of the solver.
pub fn residual_norm(a: &Matrix, x: &Vector, b: &Vector) -> f64 {
    (a * x - b).norm()
}
