//! Gaussian elimination driver
//!
//! Validates the system, builds the augmented matrix, runs forward
//! elimination under the selected pivot strategy, and back-substitutes.

use super::eliminate::forward_eliminate;
use super::pivot::PivotStrategy;
use super::substitute::back_substitute;
use super::GaussError;
use crate::traits::RealField;
use ndarray::{s, Array1, Array2};

/// Result of a Gaussian elimination solve
#[derive(Debug, Clone)]
pub struct GaussSolution<T: RealField> {
    /// Solution vector. In pivoted column order when [`PivotStrategy::Full`]
    /// was used; call [`reordered`](GaussSolution::reordered) to restore
    /// original variable order.
    pub x: Array1<T>,
    /// Column occupancy record: `mark[i]` is the original column index now
    /// sitting at position `i`. Identity unless full pivoting exchanged
    /// columns.
    pub mark: Vec<usize>,
}

impl<T: RealField> GaussSolution<T> {
    /// Undo full pivoting's column exchanges: `out[mark[i]] = x[i]`.
    ///
    /// For `None`/`Partial` strategies `mark` is the identity and this is a
    /// plain copy. The reordered vector is what [`evaluate_residual`]
    /// expects.
    ///
    /// [`evaluate_residual`]: crate::residual::evaluate_residual
    pub fn reordered(&self) -> Array1<T> {
        let mut out = Array1::zeros(self.x.len());
        for (i, &col) in self.mark.iter().enumerate() {
            out[col] = self.x[i];
        }
        out
    }
}

/// Solve `Ax = b` by Gaussian elimination with the given pivot strategy.
///
/// `a` and `b` are borrowed and never mutated; elimination works on an
/// internal augmented copy, so the same system can be solved repeatedly
/// (e.g. to compare strategies). The computation is deterministic:
/// identical inputs and strategy give bit-identical results.
///
/// # Errors
///
/// - [`GaussError::DimensionMismatch`] when `a` is not square or `b` has
///   the wrong length; detected before any work.
/// - [`GaussError::SingularMatrix`] when no acceptable pivot exists at some
///   step. A failure under `PivotStrategy::None` may still be solvable
///   under `Partial` or `Full`; retrying is the caller's decision.
pub fn gauss_solve<T: RealField>(
    a: &Array2<T>,
    b: &Array1<T>,
    strategy: PivotStrategy,
) -> Result<GaussSolution<T>, GaussError> {
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

    log::debug!("gauss_solve: n = {}, strategy = {:?}", n, strategy);

    // Augmented matrix [A | b]
    let mut ab = Array2::zeros((n, n + 1));
    ab.slice_mut(s![.., ..n]).assign(a);
    ab.slice_mut(s![.., n]).assign(b);

    let mut mark: Vec<usize> = (0..n).collect();

    forward_eliminate(&mut ab, &mut mark, strategy)?;
    let x = back_substitute(&ab)?;

    Ok(GaussSolution { x, mark })
}
