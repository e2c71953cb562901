//! Dense Gaussian elimination with selectable pivoting strategies
//!
//! This crate solves dense linear systems `Ax = b` by Gaussian elimination
//! on the augmented matrix, with three pivoting disciplines trading
//! robustness for cost:
//!
//! - **No pivoting**: fastest, fails on any (near-)zero diagonal pivot
//! - **Partial pivoting**: row exchanges, the usual default
//! - **Full pivoting**: row and column exchanges, most robust; the column
//!   permutation is returned so the caller can restore variable order
//!
//! A residual evaluator is included to check solution quality against the
//! original (unpivoted) system.
//!
//! # Example
//!
//! ```
//! use gauss::{evaluate_residual, gauss_solve, PivotStrategy};
//! use ndarray::array;
//!
//! let a = array![[9.0, -6.0, 6.0], [2.0, -1.0, 4.0], [7.0, -8.0, 19.0]];
//! let b = array![100.0, 200.0, 100.0];
//!
//! let solution = gauss_solve(&a, &b, PivotStrategy::Full).unwrap();
//!
//! // Full pivoting permutes columns; undo that before interpreting x.
//! let x = solution.reordered();
//! let report = evaluate_residual(&a, &b, &x).unwrap();
//! assert!(report.relative_residual < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`gauss`](crate::gauss): the elimination pipeline (pivoting, forward
//!   elimination, back substitution) and the [`gauss_solve`] entry point
//! - [`residual`]: solution-quality metrics against the original system
//! - [`traits`]: the [`RealField`] scalar abstraction (`f32`, `f64`)
//!
//! The `rayon` feature parallelizes the independent row updates inside each
//! elimination step; results are identical to the sequential path.

pub mod gauss;
pub mod residual;
pub mod traits;

// Re-export main types
pub use gauss::{gauss_solve, GaussError, GaussSolution, PivotStrategy};
pub use residual::{evaluate_residual, ResidualReport};
pub use traits::RealField;
