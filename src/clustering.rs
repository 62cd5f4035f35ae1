//! Seeded k-means assignment over the spectral embedding.
//!
//! Thin wrapper around smartcore's k-means. The seed is always explicit so
//! that repeated calls with identical inputs produce identical labelings;
//! k-means remains a local-search heuristic, so different seeds may land in
//! different local optima.

use log::debug;
use smartcore::cluster::kmeans::{KMeans, KMeansParameters};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Result, SpectralError};

/// Fixed default seed for reproducible labelings.
pub const DEFAULT_SEED: u64 = 128;

/// Default Lloyd-iteration cap for the k-means fit.
pub const DEFAULT_MAX_ITER: usize = 100;

/// Partition the rows of an n×k embedding into `k` clusters.
///
/// Returns one label per row, each in `0..k`. Label values carry no
/// semantic meaning; only the induced partition matters.
pub fn assign_clusters(
    e: &DenseMatrix<f64>,
    k: usize,
    max_iter: usize,
    seed: u64,
) -> Result<Vec<usize>> {
    let (n, dims) = e.shape();
    if n == 0 || dims == 0 {
        return Err(SpectralError::InvalidArgument(format!(
            "embedding must be non-empty, got {}x{}",
            n, dims
        )));
    }
    if k == 0 || k > n {
        return Err(SpectralError::InvalidParameter(format!(
            "cluster count k={} must be in 1..={} for {} rows",
            k, n, n
        )));
    }

    // smartcore's k-means requires k >= 2; a single cluster needs no fit.
    if k == 1 {
        debug!("Single cluster requested, assigning all {} rows label 0", n);
        return Ok(vec![0; n]);
    }

    debug!(
        "Fitting k-means: n={}, dims={}, k={}, max_iter={}, seed={}",
        n, dims, k, max_iter, seed
    );

    let params = KMeansParameters {
        k,
        max_iter,
        seed: Some(seed),
    };

    let model: KMeans<f64, usize, DenseMatrix<f64>, Vec<usize>> = KMeans::fit(e, params)
        .map_err(|err| SpectralError::Decomposition(err.to_string()))?;

    model
        .predict(e)
        .map_err(|err| SpectralError::Decomposition(err.to_string()))
}
