//! Closed set of biclustering strategies selected by [`Method`].

use ndarray::{Array1, Array2, ArrayView2};

use crate::bicluster::Biclustering;
use crate::error::Result;
use crate::params::{Method, SpectralBiclusteringParams};
use crate::spectral_bicluster::{Normalization, SpectralBicluster};
use crate::spectral_cocluster::SpectralCocluster;

/// Normalized data plus the diagonal scalings, when the normalization has them.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub matrix: Array2<f64>,
    pub row_diag: Option<Array1<f64>>,
    pub col_diag: Option<Array1<f64>>,
}

/// Common interface of the spectral strategies
pub trait BiclusterStrategy {
    fn preprocess(&self, x: ArrayView2<f64>) -> Preprocessed;

    fn fit(&self, x: ArrayView2<f64>, params: &SpectralBiclusteringParams) -> Result<Biclustering>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Joint row/column partition
    Bipartition(SpectralCocluster),
    /// Independent row and column partitions
    Checkerboard(SpectralBicluster),
}

impl Strategy {
    pub fn from_params(params: &SpectralBiclusteringParams) -> Self {
        match params.method {
            Method::Dhillon => Strategy::Bipartition(SpectralCocluster),
            Method::Bistochastic => Strategy::Checkerboard(SpectralBicluster::new(
                Normalization::Bistochastic {
                    maxiter: params.bistochastic_maxiter,
                    tol: params.bistochastic_tol,
                },
            )),
            Method::Scale => Strategy::Checkerboard(SpectralBicluster::new(Normalization::Scale)),
            Method::Log => Strategy::Checkerboard(SpectralBicluster::new(Normalization::Log)),
        }
    }

    pub fn is_checkerboard(&self) -> bool {
        matches!(self, Strategy::Checkerboard(_))
    }
}

impl BiclusterStrategy for Strategy {
    fn preprocess(&self, x: ArrayView2<f64>) -> Preprocessed {
        match self {
            Strategy::Bipartition(s) => s.preprocess(x),
            Strategy::Checkerboard(s) => s.preprocess(x),
        }
    }

    fn fit(&self, x: ArrayView2<f64>, params: &SpectralBiclusteringParams) -> Result<Biclustering> {
        match self {
            Strategy::Bipartition(s) => s.fit(x, params),
            Strategy::Checkerboard(s) => s.fit(x, params),
        }
    }
}
