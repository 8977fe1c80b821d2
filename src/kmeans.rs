//! Seeded k-means built on linfa-clustering.

use linfa::prelude::{Fit, Predict};
use linfa::DatasetBase;
use linfa_clustering::KMeans;
use log::debug;
use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::SeedableRng;

use crate::error::{BiclusterError, Result};

const MAX_ITER: u64 = 300;
const TOL: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct KMeansOutput {
    pub centroids: Array2<f64>,
    /// 0-indexed cluster of each point, in `[0, n_clusters)`
    pub labels: Array1<usize>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
}

/// Cluster the rows of `points` into `n_clusters` groups, keeping the best of
/// `n_init` k-means++ restarts. The same `seed` always yields the same result.
pub fn kmeans(
    points: ArrayView2<f64>,
    n_clusters: usize,
    seed: u64,
    n_init: usize,
) -> Result<KMeansOutput> {
    let n_points = points.nrows();
    if n_clusters == 0 || n_clusters > n_points {
        return Err(BiclusterError::InvalidArgument(format!(
            "cannot form {} clusters from {} points",
            n_clusters, n_points
        )));
    }

    let dataset = DatasetBase::from(points.to_owned());
    let rng = StdRng::seed_from_u64(seed);
    let model = KMeans::params_with_rng(n_clusters, rng)
        .n_runs(n_init)
        .max_n_iterations(MAX_ITER)
        .tolerance(TOL)
        .fit(&dataset)?;

    let labels: Array1<usize> = model.predict(dataset.records());
    let centroids = model.centroids().to_owned();
    let inertia = points
        .outer_iter()
        .zip(labels.iter())
        .map(|(p, &l)| {
            p.iter()
                .zip(centroids.row(l).iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
        })
        .sum::<f64>();
    debug!(
        "k-means: {} points, {} clusters, inertia {:.6}",
        n_points, n_clusters, inertia
    );

    Ok(KMeansOutput {
        centroids,
        labels,
        inertia,
    })
}
