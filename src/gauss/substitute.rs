//! Back substitution on the eliminated system
//!
//! Solves the upper-triangular system left behind by forward elimination,
//! from the last equation up to the first.

use super::GaussError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve `U x = c` where `ab = [U | c]` is upper triangular.
///
/// `x[i] = (ab[i][n] - sum_{j>i} ab[i][j] * x[j]) / ab[i][i]`.
///
/// Forward elimination only guards pivots for steps `0..n-1`, so the final
/// diagonal entry is first inspected here; a below-tolerance diagonal fails
/// with [`GaussError::SingularMatrix`] carrying the row index.
pub(crate) fn back_substitute<T: RealField>(ab: &Array2<T>) -> Result<Array1<T>, GaussError> {
    let n = ab.nrows();
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = ab[[i, n]];
        for j in (i + 1)..n {
            sum -= ab[[i, j]] * x[j];
        }

        let diag = ab[[i, i]];
        if diag.abs() < T::pivot_tolerance() {
            return Err(GaussError::SingularMatrix { step: i });
        }
        x[i] = sum / diag;
    }

    Ok(x)
}
