//! spectramap — spectral clustering over mutual nearest-neighbour graphs.
//!
//! The crate implements one batch pipeline over a dense points matrix:
//!
//! 1. [`neighbors`] — M-nearest-neighbour index per point (Euclidean,
//!    self-distance treated as infinite, ties broken by original index).
//! 2. [`graph`] — symmetric 0/1 adjacency under the mutual-or rule, repaired
//!    into a single connected component when necessary.
//! 3. [`laplacian`] — combinatorial Laplacian L = D − G and the eigenvector
//!    embedding built from its 2nd…(k+1)-th smallest eigenpairs.
//! 4. [`clustering`] — seeded k-means over the embedding, yielding one label
//!    per input point.
//!
//! [`pipeline`] sequences the stages. `SpectralBuilder::fit` is the typed
//! entry point and returns a [`pipeline::SpectralModel`]; the free function
//! [`spectral_clustering`] keeps the legacy contract where any failure is
//! logged and collapsed to an empty label vector.
//!
//! Each stage validates its inputs eagerly and fails with a typed
//! [`SpectralError`] before any numeric work starts. Given identical inputs
//! and the same seed, the pipeline produces identical labels.

pub mod clustering;
pub mod error;
pub mod graph;
pub mod laplacian;
pub mod neighbors;
pub mod pipeline;

#[cfg(test)]
mod tests;

pub use error::{Result, SpectralError};
pub use pipeline::{spectral_clustering, SpectralBuilder, SpectralModel, SpectralParams};

/// Initialise the logger once; used by the test suite and the demos.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}
