//! Singular vector selection and projection clustering for the checkerboard method.

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

use crate::error::{BiclusterError, Result};
use crate::kmeans::kmeans;

/// Distance between `v` and its best piecewise-constant approximation with
/// `n_clusters` levels, the levels found by 1-D k-means.
fn piecewise_residual(v: ArrayView1<f64>, n_clusters: usize, seed: u64, n_init: usize) -> Result<f64> {
    let points = v.to_owned().insert_axis(Axis(1));
    let fitted = kmeans(points.view(), n_clusters, seed, n_init)?;
    let residual = v
        .iter()
        .zip(fitted.labels.iter())
        .map(|(&x, &l)| {
            let d = x - fitted.centroids[(l, 0)];
            d * d
        })
        .sum::<f64>()
        .sqrt();
    Ok(residual)
}

/// Piecewise-constant approximation residual of every row of `vectors`.
/// Rows are fitted independently and in parallel.
pub fn piecewise_residuals(
    vectors: ArrayView2<f64>,
    n_clusters: usize,
    seed: u64,
    n_init: usize,
) -> Result<Array1<f64>> {
    let rows: Vec<ArrayView1<f64>> = vectors.outer_iter().collect();
    let residuals = rows
        .par_iter()
        .map(|v| piecewise_residual(*v, n_clusters, seed, n_init))
        .collect::<Result<Vec<f64>>>()?;
    Ok(Array1::from(residuals))
}

/// Return the `k` rows of `vectors` best approximated by a piecewise-constant
/// vector, ordered from best to worst. Rows are returned unmodified.
pub fn fit_best_piecewise(
    vectors: ArrayView2<f64>,
    k: usize,
    n_clusters: usize,
    seed: u64,
    n_init: usize,
) -> Result<Array2<f64>> {
    if k > vectors.nrows() {
        return Err(BiclusterError::InvalidArgument(format!(
            "asked for {} best vectors out of {}",
            k,
            vectors.nrows()
        )));
    }
    let residuals = piecewise_residuals(vectors, n_clusters, seed, n_init)?;
    let mut order: Vec<usize> = (0..residuals.len()).collect();
    // stable, so ties keep singular value order
    order.sort_by(|&a, &b| residuals[a].total_cmp(&residuals[b]));
    order.truncate(k);
    debug!("best piecewise vectors {:?}, residuals {}", order, residuals);
    Ok(vectors.select(Axis(0), &order))
}

/// Project `data` onto the columns of `vectors` and cluster the projected rows.
/// Only the labels are kept.
pub fn project_and_cluster(
    data: ArrayView2<f64>,
    vectors: ArrayView2<f64>,
    n_clusters: usize,
    seed: u64,
    n_init: usize,
) -> Result<Array1<usize>> {
    if data.ncols() != vectors.nrows() {
        return Err(BiclusterError::InvalidArgument(format!(
            "cannot project {}x{} data onto {}x{} vectors",
            data.nrows(),
            data.ncols(),
            vectors.nrows(),
            vectors.ncols()
        )));
    }
    let projected = data.dot(&vectors);
    Ok(kmeans(projected.view(), n_clusters, seed, n_init)?.labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::are_equivalent_classifications;
    use ndarray::array;

    fn candidates() -> Array2<f64> {
        array![
            // noisy ramp
            [0.0, 0.13, 0.29, 0.41, 0.58, 0.7, 0.86, 1.0],
            // two clean levels
            [1.0, 1.0, 1.0, 1.0, -1.0, -1.0, -1.0, -1.0],
            // two levels, slightly jittered
            [0.9, 1.1, 1.0, 0.95, -1.05, -1.0, -0.9, -1.0],
            // spike
            [0.0, 0.0, 3.0, 0.0, 0.2, 0.0, -0.4, 0.1]
        ]
    }

    #[test]
    fn test_fit_best_piecewise_picks_step_vectors() {
        let vectors = candidates();
        let best = fit_best_piecewise(vectors.view(), 2, 2, 0, 5).unwrap();
        assert_eq!(best.nrows(), 2);
        assert_eq!(best.row(0), vectors.row(1));
        assert_eq!(best.row(1), vectors.row(2));
    }

    #[test]
    fn test_fit_best_piecewise_returns_inputs_in_residual_order() {
        let vectors = candidates();
        let residuals = piecewise_residuals(vectors.view(), 2, 3, 4).unwrap();
        let best = fit_best_piecewise(vectors.view(), 4, 2, 3, 4).unwrap();

        let mut previous = f64::NEG_INFINITY;
        for row in best.outer_iter() {
            let source = vectors
                .outer_iter()
                .position(|v| v == row)
                .expect("returned vector must be one of the inputs");
            assert!(residuals[source] >= previous);
            previous = residuals[source];
        }
        assert!(residuals[1] < 1e-12);
    }

    #[test]
    fn test_fit_best_piecewise_too_many() {
        let vectors = candidates();
        assert!(fit_best_piecewise(vectors.view(), 5, 2, 0, 1).is_err());
    }

    #[test]
    fn test_project_and_cluster() {
        let data = array![
            [5.0, 5.0, 0.0, 0.0],
            [5.0, 4.8, 0.1, 0.0],
            [0.0, 0.1, 5.0, 5.0],
            [0.2, 0.0, 4.9, 5.0],
            [5.1, 5.0, 0.0, 0.2]
        ];
        let vectors = array![[0.5], [0.5], [-0.5], [-0.5]];
        let labels = project_and_cluster(data.view(), vectors.view(), 2, 0, 3).unwrap();
        assert_eq!(labels.len(), 5);
        assert!(are_equivalent_classifications(
            labels.as_slice().unwrap(),
            &[0, 0, 1, 1, 0]
        ));

        let wrong = array![[1.0], [1.0]];
        assert!(project_and_cluster(data.view(), wrong.view(), 2, 0, 3).is_err());
    }
}
