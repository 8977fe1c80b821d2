// src/spectral_cocluster.rs
//! Spectral co-clustering (Dhillon, 2001).
//!
//! Rows and columns are treated as the two vertex sets of a bipartite graph
//! and partitioned jointly: every row and every column lands in exactly one
//! of `n_clusters` biclusters.

use log::{debug, info};
use ndarray::{concatenate, s, ArrayView2, Axis};

use crate::bicluster::{BiclusterSet, Biclustering};
use crate::error::{BiclusterError, Result};
use crate::kmeans::kmeans;
use crate::params::{NClusters, SpectralBiclusteringParams};
use crate::preprocess::scale_preprocess;
use crate::strategy::{BiclusterStrategy, Preprocessed};
use crate::svd::truncated_svd;
use crate::util::all_finite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpectralCocluster;

impl SpectralCocluster {
    /// 1 + ceil(log2(n_clusters)) singular vectors; the first is discarded later.
    pub fn n_singular_vectors(n_clusters: usize) -> usize {
        1 + (n_clusters as f64).log2().ceil() as usize
    }
}

impl BiclusterStrategy for SpectralCocluster {
    fn preprocess(&self, x: ArrayView2<f64>) -> Preprocessed {
        let (matrix, row_diag, col_diag) = scale_preprocess(x);
        Preprocessed {
            matrix,
            row_diag: Some(row_diag),
            col_diag: Some(col_diag),
        }
    }

    fn fit(&self, x: ArrayView2<f64>, params: &SpectralBiclusteringParams) -> Result<Biclustering> {
        let n_clusters = match params.n_clusters {
            NClusters::Single(k) => k,
            NClusters::Pair(..) => return Err(BiclusterError::PairedClustersWithDhillon),
        };
        let (n_rows, n_cols) = x.dim();
        info!(
            "dhillon co-clustering of {}x{} matrix into {} biclusters",
            n_rows, n_cols, n_clusters
        );

        if n_clusters == 1 {
            return Ok(Biclustering {
                biclusters: BiclusterSet::from_joint_labels(&vec![0; n_rows], &vec![0; n_cols], 1),
                row_labels: None,
                column_labels: None,
            });
        }

        // Step 1: 二部图归一化
        let Preprocessed {
            matrix: normalized,
            row_diag,
            col_diag,
        } = self.preprocess(x);
        let (row_diag, col_diag) = row_diag.zip(col_diag).ok_or_else(|| {
            BiclusterError::InvalidArgument("scale normalization lost its diagonal factors".to_string())
        })?;
        if !all_finite(normalized.view()) {
            return Err(BiclusterError::NonFinite("scale-normalized"));
        }

        // Step 2: 奇异向量, 第一对只反映度数归一化
        let n_sv = Self::n_singular_vectors(n_clusters);
        let sv = truncated_svd(normalized.view(), n_sv, params.maxiter)?.skip_first();

        // Step 3: z = [D_r^{-1/2} U; D_c^{-1/2} V]
        let z_rows = &sv.u * &row_diag.view().insert_axis(Axis(1));
        let z_cols = &sv.vt.t() * &col_diag.view().insert_axis(Axis(1));
        let z = concatenate(Axis(0), &[z_rows.view(), z_cols.view()])?;
        debug!("embedding of shape {:?}", z.dim());

        // Step 4: 对行和列一起进行k-means聚类
        let fitted = kmeans(z.view(), n_clusters, params.seed(), params.n_init)?;
        let row_labels = fitted.labels.slice(s![..n_rows]).to_vec();
        let col_labels = fitted.labels.slice(s![n_rows..]).to_vec();

        Ok(Biclustering {
            biclusters: BiclusterSet::from_joint_labels(&row_labels, &col_labels, n_clusters),
            row_labels: None,
            column_labels: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{check_block_labels, make_block_diagonal, make_checkerboard};
    use crate::params::Method;

    fn params(n_clusters: usize) -> SpectralBiclusteringParams {
        SpectralBiclusteringParams {
            n_clusters: NClusters::Single(n_clusters),
            method: Method::Dhillon,
            n_init: 5,
            random_state: Some(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_n_singular_vectors() {
        assert_eq!(SpectralCocluster::n_singular_vectors(1), 1);
        assert_eq!(SpectralCocluster::n_singular_vectors(2), 2);
        assert_eq!(SpectralCocluster::n_singular_vectors(3), 3);
        assert_eq!(SpectralCocluster::n_singular_vectors(4), 3);
        assert_eq!(SpectralCocluster::n_singular_vectors(5), 4);
    }

    #[test]
    fn test_block_diagonal_recovered() {
        let x = make_block_diagonal();
        let result = SpectralCocluster.fit(x.view(), &params(2)).unwrap();
        let set = &result.biclusters;
        assert_eq!(set.len(), 2);
        assert!(result.row_labels.is_none());

        let row_labels: Vec<usize> = (0..20)
            .map(|r| (0..2).position(|c| set.rows()[(c, r)]).unwrap())
            .collect();
        let col_labels: Vec<usize> = (0..20)
            .map(|j| (0..2).position(|c| set.columns()[(c, j)]).unwrap())
            .collect();
        assert!(check_block_labels(&row_labels, 10));
        assert!(check_block_labels(&col_labels, 10));
    }

    #[test]
    fn test_hard_partition() {
        let x = make_checkerboard(4);
        let result = SpectralCocluster.fit(x.view(), &params(3)).unwrap();
        let set = &result.biclusters;
        assert_eq!(set.len(), 3);
        for r in 0..set.n_rows() {
            assert_eq!(set.rows().column(r).iter().filter(|&&m| m).count(), 1);
        }
        for j in 0..set.n_cols() {
            assert_eq!(set.columns().column(j).iter().filter(|&&m| m).count(), 1);
        }
    }

    #[test]
    fn test_single_cluster() {
        let x = make_block_diagonal();
        let result = SpectralCocluster.fit(x.view(), &params(1)).unwrap();
        assert_eq!(result.biclusters.len(), 1);
        assert_eq!(result.biclusters.get_shape(0), (20, 20));
    }

    #[test]
    fn test_zero_row_is_rejected() {
        let mut x = make_block_diagonal();
        x.row_mut(3).fill(0.0);
        assert!(matches!(
            SpectralCocluster.fit(x.view(), &params(2)),
            Err(BiclusterError::NonFinite(_))
        ));
    }

    #[test]
    fn test_pair_rejected() {
        let x = make_block_diagonal();
        let mut p = params(2);
        p.n_clusters = NClusters::Pair(2, 2);
        assert!(matches!(
            SpectralCocluster.fit(x.view(), &p),
            Err(BiclusterError::PairedClustersWithDhillon)
        ));
    }
}
