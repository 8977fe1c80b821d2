/*
 * File: /src/estimator.rs
 * Created Date: Wednesday, October 14th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 2:05:51 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Spectral biclustering estimator
 */

//! # Spectral biclustering estimator
//!
//! For the Spectral Co-Clustering algorithm (Dhillon, 2001) use
//! `Method::Dhillon`. For Spectral Biclustering (Kluger, 2003) use one of
//! `Method::Scale`, `Method::Bistochastic` or `Method::Log`.
//!
//! ```no_run
//! use ndarray::Array2;
//! use spectral_bicluster::estimator::SpectralBiclustering;
//! use spectral_bicluster::params::Method;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = Array2::<f64>::ones((30, 20));
//! let mut model = SpectralBiclustering::builder()
//!     .n_clusters((3, 2))
//!     .method(Method::Log)
//!     .random_state(0)
//!     .build()?;
//! let fitted = model.fit(&data)?;
//! println!("{} biclusters", fitted.biclusters.len());
//! # Ok(())
//! # }
//! ```

use log::info;
use ndarray::{Array1, ArrayBase, ArrayView2, Data, Dimension, Ix2};

use crate::bicluster::{BiclusterSet, Biclustering};
use crate::error::{BiclusterError, Result};
use crate::params::{Method, NClusters, SpectralBiclusteringParams};
use crate::strategy::{BiclusterStrategy, Strategy};

pub struct SpectralBiclustering {
    params: SpectralBiclusteringParams,
    strategy: Strategy,
    fitted: Option<Biclustering>,
}

impl SpectralBiclustering {
    /// Validate `params` and pick the strategy. No data is touched.
    pub fn new(params: SpectralBiclusteringParams) -> Result<Self> {
        params.check()?;
        let strategy = Strategy::from_params(&params);
        Ok(Self {
            params,
            strategy,
            fitted: None,
        })
    }

    pub fn builder() -> SpectralBiclusteringBuilder {
        SpectralBiclusteringBuilder::new()
    }

    pub fn params(&self) -> &SpectralBiclusteringParams {
        &self.params
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    /// Bicluster `x` and keep the result, replacing any earlier fit.
    ///
    /// `x` must be 2-dimensional.
    pub fn fit<S, D>(&mut self, x: &ArrayBase<S, D>) -> Result<&Biclustering>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let result = self.fit_biclustering(x)?;
        let fitted: &Biclustering = self.fitted.insert(result);
        Ok(fitted)
    }

    /// Like [`fit`](Self::fit) but leaves the estimator untouched.
    pub fn fit_biclustering<S, D>(&self, x: &ArrayBase<S, D>) -> Result<Biclustering>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let x: ArrayView2<f64> = x
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| BiclusterError::Dimensionality(x.ndim()))?;
        info!(
            "[method: {}] fitting {}x{} matrix",
            self.params.method,
            x.nrows(),
            x.ncols()
        );
        let result = self.strategy.fit(x, &self.params)?;
        info!(
            "[method: {}] found {} biclusters",
            self.params.method,
            result.biclusters.len()
        );
        Ok(result)
    }

    pub fn fitted(&self) -> Option<&Biclustering> {
        self.fitted.as_ref()
    }

    pub fn biclusters(&self) -> Option<&BiclusterSet> {
        self.fitted.as_ref().map(|f| &f.biclusters)
    }

    /// `rows[i, r]` is true if bicluster `i` contains row `r`.
    pub fn rows(&self) -> Option<ArrayView2<'_, bool>> {
        self.fitted.as_ref().map(|f| f.rows())
    }

    pub fn columns(&self) -> Option<ArrayView2<'_, bool>> {
        self.fitted.as_ref().map(|f| f.columns())
    }

    /// Only available for checkerboard methods.
    pub fn row_labels(&self) -> Option<&Array1<usize>> {
        self.fitted.as_ref().and_then(|f| f.row_labels.as_ref())
    }

    pub fn column_labels(&self) -> Option<&Array1<usize>> {
        self.fitted.as_ref().and_then(|f| f.column_labels.as_ref())
    }
}

/// Builder for [`SpectralBiclustering`]
pub struct SpectralBiclusteringBuilder {
    params: SpectralBiclusteringParams,
}

impl SpectralBiclusteringBuilder {
    pub fn new() -> Self {
        Self {
            params: SpectralBiclusteringParams::default(),
        }
    }

    pub fn n_clusters(mut self, n_clusters: impl Into<NClusters>) -> Self {
        self.params.n_clusters = n_clusters.into();
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.params.method = method;
        self
    }

    pub fn n_singular_vectors(mut self, n: usize) -> Self {
        self.params.n_singular_vectors = n;
        self
    }

    pub fn n_best_vectors(mut self, n: usize) -> Self {
        self.params.n_best_vectors = n;
        self
    }

    pub fn maxiter(mut self, maxiter: usize) -> Self {
        self.params.maxiter = Some(maxiter);
        self
    }

    pub fn n_init(mut self, n_init: usize) -> Self {
        self.params.n_init = n_init;
        self
    }

    pub fn random_state(mut self, seed: u64) -> Self {
        self.params.random_state = Some(seed);
        self
    }

    pub fn bistochastic(mut self, maxiter: usize, tol: f64) -> Self {
        self.params.bistochastic_maxiter = maxiter;
        self.params.bistochastic_tol = tol;
        self
    }

    pub fn build(self) -> Result<SpectralBiclustering> {
        SpectralBiclustering::new(self.params)
    }
}

impl Default for SpectralBiclusteringBuilder {
    fn default() -> Self {
        Self::new()
    }
}
