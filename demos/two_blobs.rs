//! Minimal end-to-end run: two separated point clouds, k = 2, m = 3.
//!
//! Run with: `RUST_LOG=info cargo run --example two_blobs`

use spectramap::{spectral_clustering, SpectralBuilder};

fn main() {
    spectramap::init();

    let mut rows = Vec::new();
    for i in 0..5 {
        let t = i as f64 * 0.1;
        rows.push(vec![t, -t]);
        rows.push(vec![10.0 + t, 10.0 - t]);
    }

    // Legacy path: empty labels signal failure.
    let labels = spectral_clustering(&rows, 2, 3);
    println!("legacy labels:  {:?}", labels);

    // Typed path: inspect the graph the labels came from.
    match SpectralBuilder::new()
        .with_clusters(2)
        .with_neighbors(3)
        .with_seed(128)
        .fit(&rows)
    {
        Ok(model) => {
            println!("builder labels: {:?}", model.labels);
        }
        Err(err) => {
            eprintln!("clustering failed: {err}");
        }
    }
}
