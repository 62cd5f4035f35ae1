//! Typed failures raised by the pipeline stages.
//!
//! Components fail eagerly with one of these variants before any numeric
//! work starts. Only the legacy entry point (`pipeline::spectral_clustering`)
//! swallows them; everything else propagates with `?`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpectralError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectralError {
    /// An input matrix has the wrong shape or contents: empty, non-square
    /// where squareness is required, ragged rows, or an out-of-range index.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric parameter (cluster count k, neighbour count m) is outside
    /// its valid range relative to the data size.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The eigendecomposition or the k-means fit failed to converge or
    /// rejected its input.
    #[error("decomposition failed: {0}")]
    Decomposition(String),
}
