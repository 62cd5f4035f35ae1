
mod test_clustering;
mod test_laplacian;
