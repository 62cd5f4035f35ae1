#![cfg(test)]

use log::info;
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::evd::EVDDecomposable;

use crate::error::SpectralError;
use crate::laplacian::{degrees, laplacian, spectral_embedding};

/// Path graph on n vertices: 0 - 1 - ... - n-1.
fn path_graph(n: usize) -> DenseMatrix<f64> {
    let mut g: DenseMatrix<f64> = DenseMatrix::zeros(n, n);
    for i in 0..n - 1 {
        g.set((i, i + 1), 1.0);
        g.set((i + 1, i), 1.0);
    }
    g
}

#[test]
fn test_laplacian_structure() {
    crate::init();
    info!("Test: Laplacian rows sum to zero, diagonal equals degree");

    let g = path_graph(5);
    let l = laplacian(&g);
    let d = degrees(&g);

    for i in 0..5 {
        assert_eq!(*l.get((i, i)), d[i]);
        let row_sum: f64 = (0..5).map(|j| *l.get((i, j))).sum();
        assert!(row_sum.abs() < 1e-12, "row {} sums to {}", i, row_sum);
        for j in 0..5 {
            assert_eq!(*l.get((i, j)), *l.get((j, i)));
        }
    }

    info!("✓ Laplacian structure verified");
}

#[test]
fn test_spectrum_of_connected_graph() {
    crate::init();
    info!("Test: eigenvalues nonnegative with exactly one zero");

    let g = path_graph(6);
    let evd = laplacian(&g).evd(true).unwrap();

    let mut eigenvalues = evd.d.clone();
    eigenvalues.sort_by(|a, b| a.total_cmp(b));

    for &v in &eigenvalues {
        assert!(v > -1e-9, "negative eigenvalue {}", v);
    }
    let zeros = eigenvalues.iter().filter(|v| v.abs() < 1e-8).count();
    assert_eq!(zeros, 1, "connected graph must have one zero eigenvalue");

    info!("✓ Spectrum: min={:.3e}, second={:.6}", eigenvalues[0], eigenvalues[1]);
}

#[test]
fn test_embedding_drops_constant_eigenvector() {
    crate::init();
    info!("Test: embedding columns orthogonal to the constant vector");

    let n = 6;
    let g = path_graph(n);
    let e = spectral_embedding(&g, 3).unwrap();
    assert_eq!(e.shape(), (n, 3));

    // Every kept eigenvector is orthogonal to the all-ones kernel vector of
    // a connected graph, so its entries sum to ~0. The constant eigenvector
    // would sum to sqrt(n) in magnitude instead.
    for col in 0..3 {
        let sum: f64 = (0..n).map(|row| *e.get((row, col))).sum();
        assert!(sum.abs() < 1e-6, "column {} sums to {}", col, sum);
        let norm: f64 = (0..n).map(|row| e.get((row, col)).powi(2)).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6, "column {} not unit norm", col);
    }

    info!("✓ Trivial eigenvector excluded from embedding");
}

#[test]
fn test_embedding_rejects_bad_inputs() {
    crate::init();

    let g = path_graph(4);
    assert!(matches!(
        spectral_embedding(&g, 0),
        Err(SpectralError::InvalidParameter(_))
    ));
    // k = n would need n + 1 eigenpairs.
    assert!(matches!(
        spectral_embedding(&g, 4),
        Err(SpectralError::InvalidParameter(_))
    ));
    assert!(spectral_embedding(&g, 3).is_ok());

    let rect: DenseMatrix<f64> = DenseMatrix::zeros(2, 3);
    assert!(matches!(
        spectral_embedding(&rect, 1),
        Err(SpectralError::InvalidArgument(_))
    ));
}
