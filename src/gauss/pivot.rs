//! Pivot selection and application
//!
//! Before each elimination step `k` the selected strategy may exchange rows
//! (and, for full pivoting, columns) of the augmented matrix so that the
//! divisor at `[k, k]` has the largest available magnitude. Column
//! exchanges reorder the unknowns, so full pivoting also updates the `mark`
//! permutation that records which original column sits at each position.

use crate::traits::RealField;
use ndarray::Array2;

/// Pivoting discipline applied before each elimination step.
///
/// Fixed for the duration of one solve call. Cheaper strategies fail on
/// more matrices: `None` requires every leading principal minor to be
/// nonsingular, `Partial` handles anything nonsingular in practice, and
/// `Full` additionally minimizes element growth at `O(n^2)` extra scan cost
/// per step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotStrategy {
    /// Use the diagonal entry as-is.
    None,
    /// Exchange rows to maximize the pivot magnitude within column `k`.
    Partial,
    /// Exchange rows and columns to maximize the pivot magnitude within the
    /// remaining unreduced submatrix.
    Full,
}

/// Swap the row with the largest magnitude in column `k` (rows `k..n`) into
/// row `k`. Ties keep the lowest row index.
pub(crate) fn apply_partial_pivot<T: RealField>(ab: &mut Array2<T>, k: usize) {
    let n = ab.nrows();
    let mut max_row = k;
    let mut max_val = ab[[k, k]].abs();

    for i in (k + 1)..n {
        let val = ab[[i, k]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }

    if max_row != k {
        log::trace!("step {k}: partial pivot swaps rows {k} and {max_row}");
        swap_rows(ab, k, max_row);
    }
}

/// Swap the entry with the largest magnitude in the submatrix rows `k..n` ×
/// columns `k..n` into position `[k, k]`, exchanging a row and/or a column.
/// A column exchange swaps the matching entries of `mark`. Ties keep the
/// first occurrence in row-major scan order.
///
/// The augmented column is never a pivot candidate but does move with row
/// exchanges.
pub(crate) fn apply_full_pivot<T: RealField>(ab: &mut Array2<T>, mark: &mut [usize], k: usize) {
    let n = ab.nrows();
    let mut max_row = k;
    let mut max_col = k;
    let mut max_val = ab[[k, k]].abs();

    for i in k..n {
        for j in k..n {
            let val = ab[[i, j]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
                max_col = j;
            }
        }
    }

    if max_row != k {
        log::trace!("step {k}: full pivot swaps rows {k} and {max_row}");
        swap_rows(ab, k, max_row);
    }
    if max_col != k {
        log::trace!("step {k}: full pivot swaps columns {k} and {max_col}");
        swap_cols(ab, k, max_col);
        mark.swap(k, max_col);
    }
}

fn swap_rows<T: RealField>(ab: &mut Array2<T>, r1: usize, r2: usize) {
    for j in 0..ab.ncols() {
        let tmp = ab[[r1, j]];
        ab[[r1, j]] = ab[[r2, j]];
        ab[[r2, j]] = tmp;
    }
}

fn swap_cols<T: RealField>(ab: &mut Array2<T>, c1: usize, c2: usize) {
    for i in 0..ab.nrows() {
        let tmp = ab[[i, c1]];
        ab[[i, c1]] = ab[[i, c2]];
        ab[[i, c2]] = tmp;
    }
}
