/*
 * File: /src/error.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 10:21:04 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Error type shared by estimator, strategies and scoring
 */
use std::error::Error;
use std::fmt;

use linfa_clustering::KMeansError;
use ndarray::ShapeError;
use ndarray_npy::ReadNpyError;

/// Errors raised by configuration checks, fitting and scoring.
#[derive(Debug)]
pub enum BiclusterError {
    /// `method` is not one of dhillon / bistochastic / scale / log
    UnknownMethod(String),
    /// Separate row/column cluster counts requested for the dhillon method
    PairedClustersWithDhillon,
    /// Cluster counts given as a sequence whose length is not 2
    InvalidClusterPair(usize),
    ZeroClusters,
    ZeroInit,
    BestVectorsExceedSingular { best: usize, singular: usize },
    /// Input array is not 2-dimensional
    Dimensionality(usize),
    TooManySingularVectors { requested: usize, max: usize },
    SvdFailed(String),
    /// A matrix feeding the decomposition holds NaN or infinite entries
    NonFinite(&'static str),
    KMeans(KMeansError),
    Shape(ShapeError),
    InconsistentBiclusters(String),
    EmptyBiclusterSet,
    Io(std::io::Error),
    Npy(ReadNpyError),
    InvalidArgument(String),
}

impl fmt::Display for BiclusterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BiclusterError::UnknownMethod(m) => write!(f, "unknown method: {}", m),
            BiclusterError::PairedClustersWithDhillon => write!(
                f,
                "different number of row and column clusters not supported when method is dhillon"
            ),
            BiclusterError::InvalidClusterPair(n) => {
                write!(f, "unsupported number of clusters: expected 2 counts, got {}", n)
            }
            BiclusterError::ZeroClusters => write!(f, "number of clusters must be positive"),
            BiclusterError::ZeroInit => write!(f, "n_init must be positive"),
            BiclusterError::BestVectorsExceedSingular { best, singular } => write!(
                f,
                "n_best_vectors ({}) > n_singular_vectors ({})",
                best, singular
            ),
            BiclusterError::Dimensionality(ndim) => {
                write!(f, "data array must be 2 dimensional, got {} dimensions", ndim)
            }
            BiclusterError::TooManySingularVectors { requested, max } => write!(
                f,
                "requested {} singular vectors but at most {} are available",
                requested, max
            ),
            BiclusterError::SvdFailed(msg) => write!(f, "SVD computation failed: {}", msg),
            BiclusterError::NonFinite(stage) => {
                write!(f, "non-finite values in {} matrix", stage)
            }
            BiclusterError::KMeans(e) => write!(f, "k-means failed: {}", e),
            BiclusterError::Shape(e) => write!(f, "shape error: {}", e),
            BiclusterError::InconsistentBiclusters(msg) => {
                write!(f, "inconsistent bicluster sets: {}", msg)
            }
            BiclusterError::EmptyBiclusterSet => write!(f, "cannot score empty bicluster sets"),
            BiclusterError::Io(e) => write!(f, "io error: {}", e),
            BiclusterError::Npy(e) => write!(f, "failed to read npy matrix: {}", e),
            BiclusterError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl Error for BiclusterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BiclusterError::KMeans(e) => Some(e),
            BiclusterError::Shape(e) => Some(e),
            BiclusterError::Io(e) => Some(e),
            BiclusterError::Npy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<KMeansError> for BiclusterError {
    fn from(e: KMeansError) -> Self {
        BiclusterError::KMeans(e)
    }
}

impl From<ShapeError> for BiclusterError {
    fn from(e: ShapeError) -> Self {
        BiclusterError::Shape(e)
    }
}

impl From<std::io::Error> for BiclusterError {
    fn from(e: std::io::Error) -> Self {
        BiclusterError::Io(e)
    }
}

impl From<ReadNpyError> for BiclusterError {
    fn from(e: ReadNpyError) -> Self {
        BiclusterError::Npy(e)
    }
}

pub type Result<T> = std::result::Result<T, BiclusterError>;
