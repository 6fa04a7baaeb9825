//! Convenience re-exports for solving dense SPD systems.

pub use crate::demo::{random_rhs, random_spd_matrix, DemoConfig, DemoOutcome};
pub use crate::errors::CgError;
pub use crate::math::{Matrix, Scalar, Vector};
pub use crate::solver::{
    conjugate_gradient, ConjugateGradient, DirectionPhase, SolveReport, SolveStatus,
};
