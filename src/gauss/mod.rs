//! Direct solution of dense systems by Gaussian elimination
//!
//! The pipeline runs in three stages over an augmented matrix `[A | b]`:
//! - [`pivot`](PivotStrategy): optional row/column exchange before each step
//! - forward elimination: zeroes the entries below the diagonal
//! - back substitution: solves the resulting upper-triangular system
//!
//! [`gauss_solve`] drives the stages and returns a [`GaussSolution`] holding
//! the solution vector and the column permutation recorded by full pivoting.

mod eliminate;
mod pivot;
mod solver;
mod substitute;

use thiserror::Error;

pub use pivot::PivotStrategy;
pub use solver::{gauss_solve, GaussSolution};

/// Errors that can occur while solving by Gaussian elimination
#[derive(Error, Debug)]
pub enum GaussError {
    #[error("matrix is singular or nearly singular at elimination step {step}")]
    SingularMatrix { step: usize },
    #[error("matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}
