//! Mutual neighbour graph assembly and connectivity repair.
//!
//! Two points are adjacent when either lists the other in its neighbour
//! index (the mutual-or rule). The resulting 0/1 matrix is symmetric with a
//! zero diagonal. If the graph falls apart into p > 1 connected components,
//! a repair pass adds exactly p − 1 bridge edges so the Laplacian downstream
//! has a single zero eigenvalue.

use std::collections::VecDeque;

use log::{debug, trace, warn};
use smartcore::linalg::basic::arrays::{Array, Array2, MutArray};
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::{Result, SpectralError};

/// Build the symmetric adjacency matrix for an n×m neighbour index and
/// repair it into a single connected component if necessary.
pub fn neighbor_graph(s: &DenseMatrix<usize>) -> Result<DenseMatrix<f64>> {
    let (n, m) = s.shape();
    if n == 0 || m == 0 {
        return Err(SpectralError::InvalidArgument(format!(
            "neighbour index must be non-empty, got {}x{}",
            n, m
        )));
    }

    let mut g: DenseMatrix<f64> = DenseMatrix::zeros(n, n);
    for i in 0..n {
        for u in 0..m {
            let j = *s.get((i, u));
            if j >= n {
                return Err(SpectralError::InvalidArgument(format!(
                    "neighbour index {} out of range for {} vertices",
                    j, n
                )));
            }
            if j == i {
                // The diagonal stays zero no matter what the index holds.
                continue;
            }
            g.set((i, j), 1.0);
            g.set((j, i), 1.0);
        }
    }

    let (ncomp, labels) = connected_components(&g);
    if ncomp == 1 {
        debug!("Neighbour graph connected: {} vertices", n);
        return Ok(g);
    }

    warn!(
        "Neighbour graph split into {} components; adding {} bridge edges",
        ncomp,
        ncomp - 1
    );

    // Bridge rule: for each component label l, find the first vertex whose
    // label exceeds l and connect it to the vertex immediately before it.
    // The endpoints are positional, not distance-based; downstream
    // eigenvectors depend on exactly these edges, so the rule is fixed.
    for label in 0..ncomp - 1 {
        if let Some(j) = labels.iter().position(|&l| l > label) {
            let i = j - 1;
            g.set((i, j), 1.0);
            g.set((j, i), 1.0);
            trace!("Bridged label {} with edge ({}, {})", label, i, j);
        }
    }

    debug_assert_eq!(connected_components(&g).0, 1);
    Ok(g)
}

/// Label the connected components of an undirected adjacency matrix.
///
/// Vertices are scanned in ascending index order and labels are assigned in
/// discovery order, so the component containing vertex 0 gets label 0. The
/// repair pass in [`neighbor_graph`] relies on this ordering.
pub fn connected_components(g: &DenseMatrix<f64>) -> (usize, Vec<usize>) {
    let (n, _) = g.shape();
    let mut labels = vec![usize::MAX; n];
    let mut next = 0usize;

    for start in 0..n {
        if labels[start] != usize::MAX {
            continue;
        }
        labels[start] = next;
        let mut queue = VecDeque::from([start]);
        while let Some(v) = queue.pop_front() {
            for u in 0..n {
                if *g.get((v, u)) != 0.0 && labels[u] == usize::MAX {
                    labels[u] = next;
                    queue.push_back(u);
                }
            }
        }
        next += 1;
    }

    (next, labels)
}
