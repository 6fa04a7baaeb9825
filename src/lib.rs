#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(clippy::all, clippy::cargo, clippy::nursery, missing_docs)]
#![doc = include_str!("../README.md")]

/// Dense linear-algebra primitives shared by the solver (dot, axpy, norms).
pub mod math;
/// Conjugate gradient state machine and solve driver.
pub mod solver;
/// Random SPD system generation and the end-to-end demo run.
pub mod demo;
/// Error types shared between modules.
pub mod errors;

/// Common exports for downstream crates.
pub mod prelude;
