//! Forward elimination on the augmented matrix
//!
//! Reduces `[A | b]` to upper-triangular form in place. Each step `k`
//! applies the selected pivot exchange, checks the pivot against the
//! scalar's tolerance, and subtracts a multiple of row `k` from every row
//! below it.

use super::pivot::{apply_full_pivot, apply_partial_pivot, PivotStrategy};
use super::GaussError;
use crate::traits::RealField;
use ndarray::{Array2, Axis};

/// Run elimination steps `0..n-1`, mutating `ab` (and `mark`, under full
/// pivoting) in place.
///
/// After a successful return, `ab[[i, k]]` is zero up to rounding for every
/// `i > k`. Fails with [`GaussError::SingularMatrix`] when the pivot left at
/// `[k, k]` after the exchange is below tolerance; for `Partial`/`Full`
/// that means the whole candidate region was (near-)zero.
pub(crate) fn forward_eliminate<T: RealField>(
    ab: &mut Array2<T>,
    mark: &mut [usize],
    strategy: PivotStrategy,
) -> Result<(), GaussError> {
    let n = ab.nrows();

    for k in 0..n.saturating_sub(1) {
        match strategy {
            PivotStrategy::None => {}
            PivotStrategy::Partial => apply_partial_pivot(ab, k),
            PivotStrategy::Full => apply_full_pivot(ab, mark, k),
        }

        let pivot = ab[[k, k]];
        if pivot.abs() < T::pivot_tolerance() {
            return Err(GaussError::SingularMatrix { step: k });
        }

        eliminate_below(ab, k, pivot);
    }

    Ok(())
}

/// Subtract `(row[k] / pivot) * row_k` from every row below `k`, touching
/// columns `k..=n` (the augmented column included).
///
/// The row updates are mutually independent, so the `rayon` feature fans
/// them out across threads; both paths perform the same float operations in
/// the same order per row.
fn eliminate_below<T: RealField>(ab: &mut Array2<T>, k: usize, pivot: T) {
    let (upper, mut lower) = ab.view_mut().split_at(Axis(0), k + 1);
    let pivot_row = upper.row(k);
    let ncols = pivot_row.len();

    #[cfg(feature = "rayon")]
    {
        use ndarray::parallel::prelude::*;
        lower
            .axis_iter_mut(Axis(0))
            .into_par_iter()
            .for_each(|mut row| {
                let m = row[k] / pivot;
                for j in k..ncols {
                    row[j] -= m * pivot_row[j];
                }
            });
    }

    #[cfg(not(feature = "rayon"))]
    for mut row in lower.axis_iter_mut(Axis(0)) {
        let m = row[k] / pivot;
        for j in k..ncols {
            row[j] -= m * pivot_row[j];
        }
    }
}
