use linsys_lsolver::{
    algorithms::{GaussJordan, SolveAlgorithm},
    ops, DenseMatrix,
};
use std::time::Instant;

/// Creates a dense n x n matrix with a pentadiagonal pattern.
/// Diagonals:
/// - Main: 4.0
/// - Adjacent (+1, -1): -1.0
/// - Outer (+2, -2): -0.5
fn create_pentadiagonal_matrix(n: usize) -> DenseMatrix {
    let mut a = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for (offset, value) in [(-2i64, -0.5), (-1, -1.0), (0, 4.0), (1, -1.0), (2, -0.5)] {
            let j = i as i64 + offset;
            if j >= 0 && (j as usize) < n {
                if let Some(cell) = a.get_mut(i, j as usize) {
                    *cell = value;
                }
            }
        }
    }
    a
}

/// Creates a vector b of size n with b[i] = sin(i / n).
fn create_sin_vector(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64 / n as f64).sin()).collect()
}

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let n = 300;
    log::info!("Setting up {}x{} pentadiagonal matrix A and sin vector b...", n, n);
    let a = create_pentadiagonal_matrix(n);
    let b = create_sin_vector(n);

    let algorithm = GaussJordan::default();
    log::info!("Running Gauss-Jordan solver...");
    log::info!("  Size: {}", n);
    log::info!("  Tolerance: {}", algorithm.tolerance);

    let start_time = Instant::now();
    let x_result = algorithm.solve(&a, &b);
    let duration = start_time.elapsed();

    match x_result {
        Ok(result) => {
            log::info!("Solver finished successfully!");
            log::info!("  Row swaps: {}", result.metadata.row_swaps);
            log::info!("  Smallest pivot: {:.6e}", result.metadata.smallest_pivot);
            log::info!("  Final residual norm: {:.6e}", result.metadata.residual_norm);
            log::info!("  Time elapsed: {:?}", duration);
            match ops::max_abs_residual(&a, &result.x, &b) {
                Ok(r) => log::debug!("Recomputed residual: {:.6e}", r),
                Err(e) => log::error!("Residual check failed: {:?}", e),
            }
        }
        Err(e) => {
            log::error!("Solver failed: {:?}", e);
        }
    }
}
