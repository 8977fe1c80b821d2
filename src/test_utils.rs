/// Shared test fixtures for the biclustering strategies
use ndarray::Array2;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;

/// 20x20 matrix with two planted biclusters on the diagonal (5.0) over a
/// 0.1 background. Rows and columns 0-9 form the first, 10-19 the second.
pub fn make_block_diagonal() -> Array2<f64> {
    Array2::from_shape_fn((20, 20), |(i, j)| if (i < 10) == (j < 10) { 5.0 } else { 0.1 })
}

/// 20x20 checkerboard of constant blocks {100, 10; 1, 20} plus uniform
/// noise in [0, 0.1). Same row/column split as `make_block_diagonal`.
/// Rows of the first block lean on the first column block and vice versa,
/// so the joint (dhillon) embedding separates cleanly too.
pub fn make_checkerboard(seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Array2::random_using((20, 20), Uniform::new(0.0, 0.1), &mut rng);
    let blocks = [[100.0, 10.0], [1.0, 20.0]];
    Array2::from_shape_fn((20, 20), |(i, j)| blocks[i / 10][j / 10]) + noise
}

/// True when the first `block_size` labels agree, the rest agree, and the
/// two halves carry different labels.
pub fn check_block_labels(labels: &[usize], block_size: usize) -> bool {
    if labels.len() != block_size * 2 {
        return false;
    }
    let label_a = labels[0];
    let label_b = labels[block_size];

    let block0_consistent = labels[..block_size].iter().all(|&l| l == label_a);
    let block1_consistent = labels[block_size..].iter().all(|&l| l == label_b);

    block0_consistent && block1_consistent && label_a != label_b
}
