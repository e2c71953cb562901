//! Validation tests for the Gaussian elimination pipeline
//!
//! These tests drive the public API end to end: solve a system, undo any
//! column permutation, and check the solution against the original system
//! via the residual evaluator.

use approx::assert_relative_eq;
use gauss::{evaluate_residual, gauss_solve, GaussError, PivotStrategy};
use ndarray::{Array1, Array2, array};

/// Check that `mark` is a bijection on `[0, n)`
fn assert_is_permutation(mark: &[usize]) {
    let mut sorted = mark.to_vec();
    sorted.sort_unstable();
    let identity: Vec<usize> = (0..mark.len()).collect();
    assert_eq!(sorted, identity, "mark {:?} is not a permutation", mark);
}

/// Solve, reorder, and return the relative residual against the original system
fn solve_and_residual(a: &Array2<f64>, b: &Array1<f64>, strategy: PivotStrategy) -> f64 {
    let solution = gauss_solve(a, b, strategy).expect("solve should succeed");
    assert_is_permutation(&solution.mark);
    let x = solution.reordered();
    let report = evaluate_residual(a, b, &x).expect("residual should succeed");
    report.relative_residual
}

/// A deterministic diagonally dominant test system: solvable under every
/// pivot strategy, including no pivoting at all.
fn diagonally_dominant_system(n: usize) -> (Array2<f64>, Array1<f64>) {
    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        if i == j {
            n as f64 + 2.0
        } else {
            1.0 / (1.0 + (i + 2 * j) as f64)
        }
    });
    let b = Array1::from_shape_fn(n, |i| (i as f64) - 3.0);
    (a, b)
}

#[test]
fn test_full_pivoting_reference_system() {
    let a = array![[9.0, -6.0, 6.0], [2.0, -1.0, 4.0], [7.0, -8.0, 19.0]];
    let b = array![100.0, 200.0, 100.0];

    let solution = gauss_solve(&a, &b, PivotStrategy::Full).unwrap();
    assert_is_permutation(&solution.mark);
    // The largest entry is a[2][2] = 19, so step 0 must exchange columns
    assert_ne!(solution.mark, vec![0, 1, 2]);

    let x = solution.reordered();
    let report = evaluate_residual(&a, &b, &x).unwrap();
    assert!(
        report.relative_residual < 1e-9,
        "relative residual {} too large",
        report.relative_residual
    );
    assert!(report.solution_inf_norm > 0.0);

    // Componentwise check that the reordering convention is the right one
    let ax = a.dot(&x);
    for i in 0..3 {
        assert_relative_eq!(ax[i], b[i], epsilon = 1e-9);
    }
}

#[test]
fn test_all_strategies_agree_on_diagonally_dominant_system() {
    let (a, b) = diagonally_dominant_system(8);

    let none = gauss_solve(&a, &b, PivotStrategy::None).unwrap().reordered();
    let partial = gauss_solve(&a, &b, PivotStrategy::Partial)
        .unwrap()
        .reordered();
    let full = gauss_solve(&a, &b, PivotStrategy::Full).unwrap().reordered();

    for i in 0..8 {
        assert_relative_eq!(none[i], partial[i], epsilon = 1e-10);
        assert_relative_eq!(partial[i], full[i], epsilon = 1e-10);
    }
}

#[test]
fn test_residuals_below_tolerance_for_every_strategy() {
    let (a, b) = diagonally_dominant_system(12);
    for strategy in [
        PivotStrategy::None,
        PivotStrategy::Partial,
        PivotStrategy::Full,
    ] {
        let residual = solve_and_residual(&a, &b, strategy);
        assert!(
            residual < 1e-9,
            "{:?}: relative residual {} too large",
            strategy,
            residual
        );
    }
}

#[test]
fn test_mark_is_identity_without_full_pivoting() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![5.0, 11.0];

    let partial = gauss_solve(&a, &b, PivotStrategy::Partial).unwrap();
    assert_eq!(partial.mark, vec![0, 1]);

    let none = gauss_solve(&a, &b, PivotStrategy::None).unwrap();
    assert_eq!(none.mark, vec![0, 1]);
}

#[test]
fn test_singular_matrix_rejected_under_every_strategy() {
    // Rank-1 matrix: no pivot discipline can save it
    let a = array![[1.0, 2.0], [2.0, 4.0]];
    let b = array![1.0, 2.0];

    for strategy in [
        PivotStrategy::None,
        PivotStrategy::Partial,
        PivotStrategy::Full,
    ] {
        let result = gauss_solve(&a, &b, strategy);
        assert!(
            matches!(result, Err(GaussError::SingularMatrix { .. })),
            "{:?} should report a singular matrix",
            strategy
        );
    }
}

#[test]
fn test_leading_zero_pivot_requires_row_exchange() {
    let a = array![[0.0, 2.0], [3.0, 1.0]];
    let b = array![4.0, 5.0];

    let err = gauss_solve(&a, &b, PivotStrategy::None).unwrap_err();
    assert!(matches!(err, GaussError::SingularMatrix { step: 0 }));

    for strategy in [PivotStrategy::Partial, PivotStrategy::Full] {
        let residual = solve_and_residual(&a, &b, strategy);
        assert!(residual < 1e-12, "{:?} residual {}", strategy, residual);
    }
}

#[test]
fn test_ill_scaled_system_solved_by_pivoting() {
    // A tiny leading pivot ruins unpivoted elimination's accuracy; row
    // exchanges keep the multipliers bounded.
    let a = array![[1e-13, 1.0], [1.0, 1.0]];
    let b = array![1.0, 2.0];

    let residual = solve_and_residual(&a, &b, PivotStrategy::Partial);
    assert!(residual < 1e-9, "partial residual {}", residual);

    let residual = solve_and_residual(&a, &b, PivotStrategy::Full);
    assert!(residual < 1e-9, "full residual {}", residual);
}

#[test]
fn test_solution_values_match_known_system() {
    // x = [2, 3, -1]
    let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
    let b = array![8.0, -11.0, -3.0];

    let x = gauss_solve(&a, &b, PivotStrategy::Partial)
        .unwrap()
        .reordered();
    assert_relative_eq!(x[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-10);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-10);
}

#[test]
fn test_f32_systems_are_supported() {
    let a = array![[4.0_f32, 1.0], [1.0, 3.0]];
    let b = array![1.0_f32, 2.0];

    let solution = gauss_solve(&a, &b, PivotStrategy::Partial).unwrap();
    let report = evaluate_residual(&a, &b, &solution.reordered()).unwrap();
    assert!(report.relative_residual < 1e-5);
}

#[test]
fn test_repeated_solves_reuse_borrowed_inputs() {
    // The solver clones into its augmented matrix, so the caller needs no
    // defensive copies between calls.
    let (a, b) = diagonally_dominant_system(5);
    let first = gauss_solve(&a, &b, PivotStrategy::Full).unwrap();
    let second = gauss_solve(&a, &b, PivotStrategy::Full).unwrap();
    assert_eq!(first.x, second.x);
    assert_eq!(first.mark, second.mark);
}
