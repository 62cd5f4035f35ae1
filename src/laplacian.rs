//! Combinatorial graph Laplacian and its eigenvector embedding.
//!
//! L = D − G where D is the diagonal degree matrix. For a connected graph L
//! is symmetric positive semi-definite with a single zero eigenvalue whose
//! eigenvector is constant; the embedding drops that trivial vector and
//! keeps the eigenvectors of the next k smallest eigenvalues as columns.
//!
//! The full dense symmetric decomposition costs O(n³) and dominates the
//! pipeline for non-trivial n.

use log::{debug, trace};
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linalg::traits::evd::EVDDecomposable;

use crate::error::{Result, SpectralError};

/// Per-vertex degrees: row sums of the adjacency matrix.
pub fn degrees(g: &DenseMatrix<f64>) -> Vec<f64> {
    let (n, _) = g.shape();
    (0..n)
        .map(|i| (0..n).map(|j| *g.get((i, j))).sum())
        .collect()
}

/// Assemble L = diag(degrees) − G.
pub fn laplacian(g: &DenseMatrix<f64>) -> DenseMatrix<f64> {
    let (n, _) = g.shape();
    let d = degrees(g);
    let mut l: DenseMatrix<f64> = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            let v = if i == j {
                d[i] - *g.get((i, j))
            } else {
                -*g.get((i, j))
            };
            l.set((i, j), v);
        }
    }
    l
}

/// Embed the vertices of a connected n-vertex graph into k dimensions using
/// the eigenvectors of the 2nd through (k+1)-th smallest Laplacian
/// eigenvalues, in ascending eigenvalue order.
///
/// Requires `1 <= k <= n - 1` so that k + 1 eigenpairs exist. Eigenvector
/// signs (and the basis inside eigenvalue-equal blocks) are solver
/// artifacts; callers must not rely on them.
pub fn spectral_embedding(g: &DenseMatrix<f64>, k: usize) -> Result<DenseMatrix<f64>> {
    let (n, ncols) = g.shape();
    if n == 0 || n != ncols {
        return Err(SpectralError::InvalidArgument(format!(
            "adjacency matrix must be square and non-empty, got {}x{}",
            n, ncols
        )));
    }
    if k == 0 || k > n - 1 {
        return Err(SpectralError::InvalidParameter(format!(
            "embedding width k={} must be in 1..={} for {} vertices",
            k,
            n - 1,
            n
        )));
    }

    let l = laplacian(g);
    trace!("Laplacian assembled: {}x{}", n, n);

    let evd = l
        .evd(true)
        .map_err(|err| SpectralError::Decomposition(err.to_string()))?;

    // The solver does not guarantee ordering; sort eigenpairs ascending by
    // eigenvalue (stable, so equal eigenvalues keep solver order).
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| evd.d[a].total_cmp(&evd.d[b]));

    debug!(
        "Eigendecomposition done: smallest eigenvalues {:?}",
        order
            .iter()
            .take(k.min(3) + 1)
            .map(|&i| evd.d[i])
            .collect::<Vec<_>>()
    );

    // Skip the trivial constant eigenvector and take the next k columns.
    let mut e: DenseMatrix<f64> = DenseMatrix::zeros(n, k);
    for (col, &src) in order[1..=k].iter().enumerate() {
        for row in 0..n {
            e.set((row, col), *evd.V.get((row, src)));
        }
    }

    Ok(e)
}
