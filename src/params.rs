/*
 * File: /src/params.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 11:47:30 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Estimator parameters and eager validation
 */
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BiclusterError, Result};

/// Seed used when `random_state` is left unset.
pub const DEFAULT_SEED: u64 = 42;

/// Normalization and singular-vector post-processing scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Spectral co-clustering (Dhillon, 2001)
    Dhillon,
    /// Spectral biclustering (Kluger, 2003) variants
    Bistochastic,
    Scale,
    Log,
}

impl FromStr for Method {
    type Err = BiclusterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dhillon" => Ok(Method::Dhillon),
            "bistochastic" => Ok(Method::Bistochastic),
            "scale" => Ok(Method::Scale),
            "log" => Ok(Method::Log),
            other => Err(BiclusterError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Method::Dhillon => "dhillon",
            Method::Bistochastic => "bistochastic",
            Method::Scale => "scale",
            Method::Log => "log",
        };
        write!(f, "{}", name)
    }
}

/// Number of clusters: one count for both axes, or (rows, columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NClusters {
    Single(usize),
    Pair(usize, usize),
}

impl NClusters {
    /// (row clusters, column clusters)
    pub fn row_col(&self) -> (usize, usize) {
        match *self {
            NClusters::Single(k) => (k, k),
            NClusters::Pair(r, c) => (r, c),
        }
    }
}

impl From<usize> for NClusters {
    fn from(k: usize) -> Self {
        NClusters::Single(k)
    }
}

impl From<(usize, usize)> for NClusters {
    fn from((r, c): (usize, usize)) -> Self {
        NClusters::Pair(r, c)
    }
}

impl TryFrom<&[usize]> for NClusters {
    type Error = BiclusterError;

    /// A sequence of counts must hold exactly two entries.
    fn try_from(counts: &[usize]) -> Result<Self> {
        match *counts {
            [r, c] => Ok(NClusters::Pair(r, c)),
            _ => Err(BiclusterError::InvalidClusterPair(counts.len())),
        }
    }
}

/// Parameters of [`SpectralBiclustering`](crate::estimator::SpectralBiclustering).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralBiclusteringParams {
    pub n_clusters: NClusters,
    pub method: Method,
    /// Number of singular vectors to check. Not used by dhillon.
    pub n_singular_vectors: usize,
    /// Number of best singular vectors the data is projected onto. Not used by dhillon.
    pub n_best_vectors: usize,
    /// Iteration limit forwarded to the SVD
    pub maxiter: Option<usize>,
    /// k-means restarts for every internal clustering call
    pub n_init: usize,
    pub random_state: Option<u64>,
    pub bistochastic_maxiter: usize,
    pub bistochastic_tol: f64,
}

impl Default for SpectralBiclusteringParams {
    fn default() -> Self {
        Self {
            n_clusters: NClusters::Single(3),
            method: Method::Bistochastic,
            n_singular_vectors: 6,
            n_best_vectors: 3,
            maxiter: None,
            n_init: 10,
            random_state: None,
            bistochastic_maxiter: 1000,
            bistochastic_tol: 1e-5,
        }
    }
}

impl SpectralBiclusteringParams {
    /// Fail-fast configuration checks, run before any data is touched.
    pub fn check(&self) -> Result<()> {
        match self.n_clusters {
            NClusters::Pair(..) if self.method == Method::Dhillon => {
                return Err(BiclusterError::PairedClustersWithDhillon)
            }
            NClusters::Single(0) | NClusters::Pair(0, _) | NClusters::Pair(_, 0) => {
                return Err(BiclusterError::ZeroClusters)
            }
            _ => {}
        }
        if self.n_best_vectors > self.n_singular_vectors {
            return Err(BiclusterError::BestVectorsExceedSingular {
                best: self.n_best_vectors,
                singular: self.n_singular_vectors,
            });
        }
        if self.method != Method::Dhillon && self.n_best_vectors == 0 {
            return Err(BiclusterError::InvalidArgument(
                "n_best_vectors must be positive".to_string(),
            ));
        }
        if self.n_init == 0 {
            return Err(BiclusterError::ZeroInit);
        }
        Ok(())
    }

    pub fn seed(&self) -> u64 {
        self.random_state.unwrap_or(DEFAULT_SEED)
    }
}
