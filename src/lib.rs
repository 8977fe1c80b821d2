/*
 * File: /src/lib.rs
 * Created Date: Monday, January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 4:31:09 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-15		Zihan	Spectral co-clustering / biclustering crate layout
 */

//! Spectral biclustering of 2-d data matrices.
//!
//! Two families are provided behind one estimator:
//! Spectral Co-Clustering (Dhillon, 2001), which partitions rows and columns
//! jointly, and Spectral Biclustering (Kluger, 2003), which partitions rows
//! and columns independently and reports their checkerboard cross product.
//! [`scoring::consensus_score`] compares two sets of biclusters.

pub mod assignment;
pub mod bicluster;
pub mod config;
pub mod error;
pub mod estimator;
pub mod kmeans;
pub mod params;
pub mod piecewise;
pub mod preprocess;
pub mod scoring;
pub mod spectral_bicluster;
pub mod spectral_cocluster;
pub mod strategy;
pub mod submatrix;
pub mod svd;
pub mod util;

#[cfg(test)]
pub(crate) mod test_utils;

pub use bicluster::{BiclusterSet, Biclustering, Indicator};
pub use error::{BiclusterError, Result};
pub use estimator::{SpectralBiclustering, SpectralBiclusteringBuilder};
pub use params::{Method, NClusters, SpectralBiclusteringParams};
pub use scoring::{consensus_score, consensus_score_with, BiclusterSimilarity, Jaccard};
pub use submatrix::Submatrix;
