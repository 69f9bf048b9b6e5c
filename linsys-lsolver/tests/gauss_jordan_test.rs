use linsys_lsolver::{
    algorithms::{GaussJordan, SolveAlgorithm},
    ops, solve, DenseMatrix, LinsysCoreError,
};

// Helper for float comparison in tests
fn assert_approx_eq_vec(a: &[f64], b: &[f64], tolerance: f64) {
    assert_eq!(a.len(), b.len(), "Vector lengths differ");
    for i in 0..a.len() {
        let diff = (a[i] - b[i]).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            b[i],
            a[i],
            diff
        );
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn diagonally_dominant_4x4() -> DenseMatrix {
    DenseMatrix::from_rows(&[
        vec![10.0, 2.0, -1.0, 3.0],
        vec![1.0, 12.0, 4.0, -2.0],
        vec![2.0, -3.0, 15.0, 1.0],
        vec![-1.0, 2.0, 3.0, 9.0],
    ])
    .unwrap()
}

#[test]
fn test_solve_identity_4x4() {
    init_logger();
    let a: DenseMatrix = DenseMatrix::identity(4);
    let x = solve(&a, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(x, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_solve_zero_leading_pivot_2x2() {
    init_logger();
    // 0x + 1y = 2, 1x + 1y = 3
    let a = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![1.0, 1.0]]).unwrap();
    let x = solve(&a, &[2.0, 3.0]).unwrap();
    assert_approx_eq_vec(&x, &[1.0, 2.0], 1e-12);
}

#[test]
fn test_solve_permutation_like_4x4() {
    init_logger();
    let a = DenseMatrix::from_rows(&[
        vec![0.0, 2.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0, 0.0],
    ])
    .unwrap();
    let expected = [1.0, 2.0, 3.0, 4.0];
    let b = ops::mat_vec(&a, &expected).unwrap();
    assert_eq!(b, vec![7.0, 1.0, 4.0, 2.0]);

    let result = GaussJordan::default().solve(&a, &b).unwrap();
    assert_approx_eq_vec(&result.x, &expected, 1e-12);
    assert!(result.metadata.row_swaps > 0);
}

#[test]
fn test_known_solution_round_trip() {
    init_logger();
    let a = diagonally_dominant_4x4();
    let expected = [1.0, -2.0, 3.0, 0.5];
    let b = ops::mat_vec(&a, &expected).unwrap();

    let x = solve(&a, &b).unwrap();
    assert_approx_eq_vec(&x, &expected, 1e-9);

    // A x must reproduce b
    let ax = ops::mat_vec(&a, &x).unwrap();
    assert_approx_eq_vec(&ax, &b, 1e-6);
}

#[test]
fn test_solve_does_not_mutate_inputs() {
    let a = diagonally_dominant_4x4();
    let b = vec![1.0, 2.0, 3.0, 4.0];
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = solve(&a, &b).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_identical_rows_are_singular() {
    init_logger();
    let a = DenseMatrix::from_rows(&[
        vec![1.0, 2.0, 3.0, 4.0],
        vec![1.0, 2.0, 3.0, 4.0],
        vec![0.0, 1.0, 0.0, 2.0],
        vec![5.0, 0.0, 1.0, 1.0],
    ])
    .unwrap();
    assert!(matches!(
        solve(&a, &[1.0, 1.0, 1.0, 1.0]),
        Err(LinsysCoreError::SingularMatrix { .. })
    ));
}

#[test]
fn test_zero_row_is_singular() {
    let a = DenseMatrix::from_rows(&[
        vec![2.0, 1.0, 0.0],
        vec![0.0, 0.0, 0.0],
        vec![1.0, 3.0, 4.0],
    ])
    .unwrap();
    assert!(matches!(
        solve(&a, &[1.0, 0.0, 2.0]),
        Err(LinsysCoreError::SingularMatrix { .. })
    ));
}

#[test]
fn test_zero_column_is_singular_with_and_without_determinant_check() {
    let a = DenseMatrix::from_rows(&[vec![0.0, 1.0], vec![0.0, 2.0]]).unwrap();
    for algorithm in [
        GaussJordan::with_params(1e-10, false),
        GaussJordan::with_params(1e-10, true),
    ] {
        match algorithm.solve(&a, &[1.0, 2.0]) {
            Err(LinsysCoreError::SingularMatrix { pivot, .. }) => assert_eq!(pivot, 0),
            other => panic!("Expected SingularMatrix, got {:?}", other.map(|r| r.x)),
        }
    }
}

#[test]
fn test_near_singular_caught_only_by_tolerance() {
    // det is tiny but not exactly zero; the per-pivot check must still reject it
    let a = DenseMatrix::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0 + 1e-12]]).unwrap();
    let checked = GaussJordan::with_params(1e-10, true);
    assert!(matches!(
        checked.solve(&a, &[2.0, 2.0]),
        Err(LinsysCoreError::SingularMatrix { pivot: 1, .. })
    ));
}

#[test]
fn test_non_square_matrix_is_dimension_mismatch() {
    let a: DenseMatrix = DenseMatrix::zeros(3, 4);
    match solve(&a, &[1.0, 2.0, 3.0]) {
        Err(LinsysCoreError::DimensionMismatch(msg)) => assert!(msg.contains("square")),
        other => panic!("Expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_vector_length_is_dimension_mismatch() {
    let a: DenseMatrix = DenseMatrix::identity(4);
    match solve(&a, &[1.0, 2.0, 3.0]) {
        Err(LinsysCoreError::DimensionMismatch(msg)) => {
            assert!(msg.contains("RHS vector b length (3)"))
        }
        other => panic!("Expected DimensionMismatch, got {:?}", other),
    }
}

#[test]
fn test_empty_system_is_dimension_mismatch() {
    let a: DenseMatrix = DenseMatrix::zeros(0, 0);
    assert!(matches!(
        solve(&a, &[]),
        Err(LinsysCoreError::DimensionMismatch(_))
    ));
}

#[test]
fn test_concurrent_solves_share_algorithm() {
    let algorithm = GaussJordan::default();
    let a = diagonally_dominant_4x4();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|k| {
                let a = &a;
                let algorithm = &algorithm;
                scope.spawn(move || {
                    let expected: Vec<f64> = (0..4).map(|i| (i + k) as f64).collect();
                    let b = ops::mat_vec(a, &expected).unwrap();
                    let x = algorithm.solve(a, &b).unwrap().x;
                    (expected, x)
                })
            })
            .collect();
        for handle in handles {
            let (expected, x) = handle.join().unwrap();
            assert_approx_eq_vec(&x, &expected, 1e-9);
        }
    });
}
