//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::{DMatrix, DVector};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Dense real vector.
pub type Vector = DVector<Scalar>;
/// Dense real matrix.
pub type Matrix = DMatrix<Scalar>;

/// Euclidean inner product `xᵀ y`.
#[must_use]
pub fn dot(x: &Vector, y: &Vector) -> Scalar {
    x.dot(y)
}

/// Bilinear form `xᵀ A y`.
#[must_use]
pub fn inner(x: &Vector, a: &Matrix, y: &Vector) -> Scalar {
    x.dot(&(a * y))
}

/// Matrix-vector product `A x`.
#[must_use]
pub fn matvec(a: &Matrix, x: &Vector) -> Vector {
    a * x
}

/// In-place `y ← y + alpha · x`.
pub fn axpy(alpha: Scalar, x: &Vector, y: &mut Vector) {
    y.axpy(alpha, x, 1.0);
}

/// Euclidean (L2) norm.
#[must_use]
pub fn norm(x: &Vector) -> Scalar {
    x.norm()
}

/// Gradient of the quadratic form `½ xᵀA x − bᵀx`, i.e. the residual `A x − b`.
#[must_use]
pub fn gradient(a: &Matrix, x: &Vector, b: &Vector) -> Vector {
    matvec(a, x) - b
}
