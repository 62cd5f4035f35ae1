//! End-to-end orchestration: validation, stage sequencing, legacy fallback.
//!
//! `SpectralBuilder::fit` is the typed entry point: it validates the input,
//! runs neighbours → graph → embedding → k-means and returns a
//! [`SpectralModel`] or a [`SpectralError`]. The free function
//! [`spectral_clustering`] preserves the legacy contract where any failure
//! is reported on the log and collapsed to an empty label vector.

use log::{debug, info, warn};
use smartcore::linalg::basic::arrays::{Array, Array2};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::clustering::{self, DEFAULT_MAX_ITER, DEFAULT_SEED};
use crate::error::{Result, SpectralError};
use crate::graph;
use crate::laplacian;
use crate::neighbors;

/// Tunable parameters for one pipeline run.
#[derive(Clone, Debug)]
pub struct SpectralParams {
    /// Target cluster count k.
    pub clusters: usize,
    /// Neighbours per point when building the similarity graph.
    pub neighbors: usize,
    /// Seed for the k-means stage.
    pub seed: u64,
    /// Lloyd-iteration cap for the k-means stage.
    pub kmeans_max_iter: usize,
}

impl Default for SpectralParams {
    fn default() -> Self {
        Self {
            clusters: 2,
            neighbors: 6,
            seed: DEFAULT_SEED,
            kmeans_max_iter: DEFAULT_MAX_ITER,
        }
    }
}

/// Output of a successful run. Keeps the intermediate adjacency and
/// embedding so callers can inspect the graph the labels came from.
#[derive(Clone, Debug)]
pub struct SpectralModel {
    /// One cluster label per input row, each in `0..clusters`.
    pub labels: Vec<usize>,
    /// The n×k eigenvector embedding the labels were fitted on.
    pub embedding: DenseMatrix<f64>,
    /// The repaired n×n 0/1 adjacency matrix.
    pub adjacency: DenseMatrix<f64>,
    /// Parameters this model was fitted with.
    pub params: SpectralParams,
}

/// Builder-style configuration for the pipeline.
#[derive(Clone, Debug, Default)]
pub struct SpectralBuilder {
    params: SpectralParams,
}

impl SpectralBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clusters(mut self, k: usize) -> Self {
        self.params.clusters = k;
        self
    }

    pub fn with_neighbors(mut self, m: usize) -> Self {
        self.params.neighbors = m;
        self
    }

    /// Override the fixed default seed for the k-means stage.
    pub fn with_seed(mut self, seed: u64) -> Self {
        info!("Setting clustering seed: {}", seed);
        self.params.seed = seed;
        self
    }

    pub fn with_kmeans_max_iter(mut self, max_iter: usize) -> Self {
        self.params.kmeans_max_iter = max_iter;
        self
    }

    /// Run the full pipeline on row-major points.
    ///
    /// Validation happens before any stage runs: rows must be non-empty and
    /// rectangular, and `1 <= clusters <= n`. Stage-level preconditions
    /// (neighbour count range, embedding width) are checked by the stages
    /// themselves and propagate unchanged.
    pub fn fit(&self, rows: &[Vec<f64>]) -> Result<SpectralModel> {
        let x = dense_from_rows(rows)?;
        let (n, d) = x.shape();
        let k = self.params.clusters;
        if k == 0 || k > n {
            return Err(SpectralError::InvalidParameter(format!(
                "cluster count k={} must be in 1..={} for {} points",
                k, n, n
            )));
        }

        info!(
            "Spectral clustering: n={}, d={}, k={}, m={}, seed={}",
            n, d, k, self.params.neighbors, self.params.seed
        );

        let s = neighbors::compute_neighbors(&x, self.params.neighbors)?;
        let g = graph::neighbor_graph(&s)?;
        let e = laplacian::spectral_embedding(&g, k)?;
        let labels =
            clustering::assign_clusters(&e, k, self.params.kmeans_max_iter, self.params.seed)?;

        debug!("Assigned {} points to {} clusters", labels.len(), k);

        Ok(SpectralModel {
            labels,
            embedding: e,
            adjacency: g,
            params: self.params.clone(),
        })
    }
}

/// Legacy entry point: cluster `rows` into `k` groups using an `m`-neighbour
/// graph, or return an empty vector if anything fails.
///
/// Any validation or computation error is emitted as a free-text diagnostic
/// on the log and never reaches the caller. Use [`SpectralBuilder::fit`]
/// when the failure reason matters.
pub fn spectral_clustering(rows: &[Vec<f64>], k: usize, m: usize) -> Vec<usize> {
    match SpectralBuilder::new()
        .with_clusters(k)
        .with_neighbors(m)
        .fit(rows)
    {
        Ok(model) => model.labels,
        Err(err) => {
            warn!("Spectral clustering failed, returning empty labels: {}", err);
            Vec::new()
        }
    }
}

/// Convert row-major points into a dense matrix, rejecting ragged input.
fn dense_from_rows(rows: &[Vec<f64>]) -> Result<DenseMatrix<f64>> {
    let n = rows.len();
    if n == 0 {
        return Err(SpectralError::InvalidArgument(
            "points matrix is empty".into(),
        ));
    }
    let d = rows[0].len();
    if d == 0 {
        return Err(SpectralError::InvalidArgument(
            "points need at least one feature".into(),
        ));
    }
    if rows.iter().any(|r| r.len() != d) {
        return Err(SpectralError::InvalidArgument(
            "ragged rows: all points must share one dimensionality".into(),
        ));
    }
    // Axis 0: the flattened values are row-major, one point per row.
    Ok(DenseMatrix::from_iterator(
        rows.iter().flatten().copied(),
        n,
        d,
        0,
    ))
}
