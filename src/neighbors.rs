//! M-nearest-neighbour indexing over a dense points matrix.
//!
//! For every point the index holds the `m` closest other points by Euclidean
//! distance, ascending. Self-distance is treated as infinite so a point can
//! never rank as its own neighbour, and equal distances resolve by original
//! index order (stable sort) so repeated runs agree exactly.

use log::{debug, trace};
use rayon::prelude::*;
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Result, SpectralError};

/// Compute the n×m neighbour index for an n×d points matrix.
///
/// Row i of the result lists the indices of the `m` points closest to point
/// i, nearest first. Requires `1 <= m <= n - 1`: a point cannot ask for more
/// neighbours than other points exist.
pub fn compute_neighbors(x: &DenseMatrix<f64>, m: usize) -> Result<DenseMatrix<usize>> {
    let (n, d) = x.shape();
    if n == 0 || d == 0 {
        return Err(SpectralError::InvalidArgument(format!(
            "points matrix must be non-empty, got {}x{}",
            n, d
        )));
    }
    if m == 0 || m > n - 1 {
        return Err(SpectralError::InvalidParameter(format!(
            "neighbour count m={} must be in 1..={} for {} points",
            m,
            n - 1,
            n
        )));
    }

    debug!(
        "Computing {}-nearest-neighbour index for {} points ({} dims)",
        m, n, d
    );

    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..d).map(|j| *x.get((i, j))).collect())
        .collect();

    // Full pairwise distance rows; the diagonal is +inf so the stable
    // argsort below never selects the point itself.
    let neighbor_rows: Vec<Vec<usize>> = (0..n)
        .into_par_iter()
        .map(|i| {
            let dist: Vec<f64> = (0..n)
                .map(|j| {
                    if i == j {
                        f64::INFINITY
                    } else {
                        euclidean_dist(&rows[i], &rows[j])
                    }
                })
                .collect();

            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| dist[a].total_cmp(&dist[b]));
            order.truncate(m);
            order
        })
        .collect();

    let mut s: DenseMatrix<usize> = DenseMatrix::zeros(n, m);
    for (i, nbrs) in neighbor_rows.iter().enumerate() {
        for (u, &j) in nbrs.iter().enumerate() {
            s.set((i, u), j);
        }
    }

    trace!("Neighbour index ready: {}x{}", n, m);
    Ok(s)
}

/// Euclidean distance between two points of equal dimensionality.
pub fn euclidean_dist(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}
