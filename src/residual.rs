//! Solution-quality metrics against the original system
//!
//! Elimination mutates its working copy, so correctness is checked against
//! the caller's untouched `A` and `b`. The solution must already be in
//! original variable order: apply
//! [`GaussSolution::reordered`](crate::GaussSolution::reordered) first when
//! full pivoting was used.

use crate::gauss::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Quality metrics for a candidate solution of `Ax = b`
#[derive(Debug, Clone)]
pub struct ResidualReport<T> {
    /// `||A*x - b||_2 / ||b||_2`, or the absolute residual norm when `b` is
    /// negligible.
    pub relative_residual: T,
    /// `max_i |x_i|`
    pub solution_inf_norm: T,
}

/// Compute the relative residual and infinity norm for a candidate
/// solution. Pure: nothing is mutated.
pub fn evaluate_residual<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    x: &Array1<T>,
) -> Result<ResidualReport<T>, GaussError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    if x.len() != n {
        return Err(GaussError::DimensionMismatch {
            expected: n,
            got: x.len(),
        });
    }

    let residual = a.dot(x) - b;
    let residual_norm = vector_norm(&residual);
    let b_norm = vector_norm(b);

    let tiny = T::from_f64(1e-15).unwrap();
    let relative_residual = if b_norm > tiny {
        residual_norm / b_norm
    } else {
        residual_norm
    };

    Ok(ResidualReport {
        relative_residual,
        solution_inf_norm: inf_norm(x),
    })
}

#[inline]
fn vector_norm<T: RealField>(v: &Array1<T>) -> T {
    v.iter().fold(T::zero(), |acc, &vi| acc + vi * vi).sqrt()
}

#[inline]
fn inf_norm<T: RealField>(v: &Array1<T>) -> T {
    v.iter().fold(T::zero(), |acc, &vi| acc.max(vi.abs()))
}
