//! Spectral biclustering (Kluger et al., 2003).
//!
//! Rows and columns are partitioned independently; the biclusters are the
//! full cross product of the two partitions, i.e. a checkerboard.

use log::{debug, info};
use ndarray::{Array1, ArrayView2};

use crate::bicluster::{BiclusterSet, Biclustering};
use crate::error::{BiclusterError, Result};
use crate::params::SpectralBiclusteringParams;
use crate::piecewise::{fit_best_piecewise, project_and_cluster};
use crate::preprocess::{bistochastic_preprocess, log_preprocess, scale_preprocess};
use crate::strategy::{BiclusterStrategy, Preprocessed};
use crate::svd::truncated_svd;
use crate::util::{all_finite, compact_labels};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    Bistochastic { maxiter: usize, tol: f64 },
    Scale,
    Log,
}

impl Normalization {
    /// Scale and bistochastic normalizations leave a trivial leading
    /// singular pair that carries no cluster structure.
    pub fn discards_leading(&self) -> bool {
        !matches!(self, Normalization::Log)
    }

    fn name(&self) -> &'static str {
        match self {
            Normalization::Bistochastic { .. } => "bistochastic",
            Normalization::Scale => "scale",
            Normalization::Log => "log",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralBicluster {
    pub normalization: Normalization,
}

impl SpectralBicluster {
    pub fn new(normalization: Normalization) -> Self {
        Self { normalization }
    }
}

impl BiclusterStrategy for SpectralBicluster {
    fn preprocess(&self, x: ArrayView2<f64>) -> Preprocessed {
        match self.normalization {
            Normalization::Bistochastic { maxiter, tol } => Preprocessed {
                matrix: bistochastic_preprocess(x, maxiter, tol),
                row_diag: None,
                col_diag: None,
            },
            Normalization::Scale => {
                let (matrix, row_diag, col_diag) = scale_preprocess(x);
                Preprocessed {
                    matrix,
                    row_diag: Some(row_diag),
                    col_diag: Some(col_diag),
                }
            }
            Normalization::Log => Preprocessed {
                matrix: log_preprocess(x),
                row_diag: None,
                col_diag: None,
            },
        }
    }

    fn fit(&self, x: ArrayView2<f64>, params: &SpectralBiclusteringParams) -> Result<Biclustering> {
        let (n_row_clusters, n_col_clusters) = params.n_clusters.row_col();
        let seed = params.seed();
        info!(
            "{} biclustering of {}x{} matrix into {}x{} checkerboard",
            self.normalization.name(),
            x.nrows(),
            x.ncols(),
            n_row_clusters,
            n_col_clusters
        );

        let normalized = self.preprocess(x).matrix;
        if !all_finite(normalized.view()) {
            return Err(BiclusterError::NonFinite("normalized"));
        }

        let mut n_sv = params.n_singular_vectors;
        if self.normalization.discards_leading() {
            n_sv += 1;
        }
        let mut sv = truncated_svd(normalized.view(), n_sv, params.maxiter)?;
        if self.normalization.discards_leading() {
            sv = sv.skip_first();
        }

        // rows of `ut` / `vt` are the candidate vectors
        let ut = sv.u.t();
        let best_ut = fit_best_piecewise(ut, params.n_best_vectors, n_row_clusters, seed, params.n_init)?;
        let best_vt = fit_best_piecewise(
            sv.vt.view(),
            params.n_best_vectors,
            n_col_clusters,
            seed,
            params.n_init,
        )?;

        let row_vector = project_and_cluster(
            normalized.view(),
            best_vt.t(),
            n_row_clusters,
            seed,
            params.n_init,
        )?;
        let col_vector = project_and_cluster(
            normalized.t(),
            best_ut.t(),
            n_col_clusters,
            seed,
            params.n_init,
        )?;

        let (row_labels, n_row_found) = compact_labels(&row_vector.to_vec());
        let (col_labels, n_col_found) = compact_labels(&col_vector.to_vec());
        debug!(
            "found {} row clusters and {} column clusters",
            n_row_found, n_col_found
        );

        let biclusters =
            BiclusterSet::checkerboard(&row_labels, &col_labels, n_row_clusters, n_col_clusters);

        Ok(Biclustering {
            biclusters,
            row_labels: Some(Array1::from(row_labels)),
            column_labels: Some(Array1::from(col_labels)),
        })
    }
}
