#![cfg(test)]

use log::info;
use smartcore::linalg::basic::arrays::Array2;
use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::clustering::{assign_clusters, DEFAULT_MAX_ITER, DEFAULT_SEED};
use crate::error::SpectralError;

fn tight_groups() -> DenseMatrix<f64> {
    DenseMatrix::from_2d_vec(&vec![
        vec![0.0, 0.0],
        vec![0.1, 0.0],
        vec![0.0, 0.1],
        vec![10.0, 10.0],
        vec![10.1, 10.0],
        vec![10.0, 10.1],
    ])
    .unwrap()
}

#[test]
fn test_assignment_is_deterministic() {
    crate::init();
    info!("Test: identical seed yields identical labels");

    let e = tight_groups();
    let first = assign_clusters(&e, 2, DEFAULT_MAX_ITER, DEFAULT_SEED).unwrap();
    let second = assign_clusters(&e, 2, DEFAULT_MAX_ITER, DEFAULT_SEED).unwrap();

    assert_eq!(first, second);
    info!("✓ Deterministic labels: {:?}", first);
}

#[test]
fn test_separated_groups_partition() {
    crate::init();
    info!("Test: obvious groups map to distinct labels");

    let e = tight_groups();
    let labels = assign_clusters(&e, 2, DEFAULT_MAX_ITER, DEFAULT_SEED).unwrap();

    assert_eq!(labels.len(), 6);
    assert!(labels.iter().all(|&l| l < 2));
    assert_eq!(labels[0], labels[1]);
    assert_eq!(labels[0], labels[2]);
    assert_eq!(labels[3], labels[4]);
    assert_eq!(labels[3], labels[5]);
    assert_ne!(labels[0], labels[3]);

    info!("✓ Partition recovered: {:?}", labels);
}

#[test]
fn test_single_cluster_collapses_labels() {
    crate::init();

    let e = tight_groups();
    let labels = assign_clusters(&e, 1, DEFAULT_MAX_ITER, DEFAULT_SEED).unwrap();
    assert_eq!(labels.len(), 6);
    assert!(labels.iter().all(|&l| l == 0));
}

#[test]
fn test_cluster_count_bounds() {
    crate::init();

    let e = tight_groups();
    assert!(matches!(
        assign_clusters(&e, 0, DEFAULT_MAX_ITER, DEFAULT_SEED),
        Err(SpectralError::InvalidParameter(_))
    ));
    assert!(matches!(
        assign_clusters(&e, 7, DEFAULT_MAX_ITER, DEFAULT_SEED),
        Err(SpectralError::InvalidParameter(_))
    ));
}
