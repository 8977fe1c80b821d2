//! Truncated SVD on top of nalgebra's implicit-shift decomposition.

use log::debug;
use nalgebra::SVD;
use ndarray::{Array1, Array2, ArrayView2, Axis};

use crate::error::{BiclusterError, Result};
use crate::util::{clone_to_dmatrix, dmatrix_to_array2};

/// Off-diagonal threshold for the capped iteration. Anything near machine
/// epsilon stalls on rank-deficient input.
const CONVERGENCE_EPS: f64 = 1e-12;

/// Leading singular triplets of a matrix, ordered by decreasing singular value.
#[derive(Debug, Clone)]
pub struct SingularVectors {
    /// n_rows × k
    pub u: Array2<f64>,
    /// length k
    pub s: Array1<f64>,
    /// k × n_cols
    pub vt: Array2<f64>,
}

impl SingularVectors {
    pub fn rank(&self) -> usize {
        self.s.len()
    }

    /// Drop the leading triplet.
    pub fn skip_first(self) -> Self {
        let k = self.rank();
        if k == 0 {
            return self;
        }
        let keep: Vec<usize> = (1..k).collect();
        SingularVectors {
            u: self.u.select(Axis(1), &keep),
            s: self.s.select(Axis(0), &keep),
            vt: self.vt.select(Axis(0), &keep),
        }
    }
}

/// Compute the top `k` singular triplets of `matrix`.
///
/// `k` must be below `min(n_rows, n_cols)`. `max_iterations` bounds the
/// implicit-shift iterations; `None` lets nalgebra iterate until convergence.
/// Signs of the returned vectors are arbitrary.
pub fn truncated_svd(
    matrix: ArrayView2<f64>,
    k: usize,
    max_iterations: Option<usize>,
) -> Result<SingularVectors> {
    let (n_rows, n_cols) = matrix.dim();
    let max_rank = n_rows.min(n_cols).saturating_sub(1);
    if k > max_rank {
        return Err(BiclusterError::TooManySingularVectors {
            requested: k,
            max: max_rank,
        });
    }

    let dmatrix = clone_to_dmatrix(matrix);
    let svd = match max_iterations {
        None => SVD::new(dmatrix, true, true),
        // max_niter == 0 means no limit
        Some(max_niter) => SVD::try_new(dmatrix, true, true, CONVERGENCE_EPS, max_niter)
            .ok_or_else(|| {
                BiclusterError::SvdFailed(format!(
                    "did not converge within {} iterations",
                    max_niter
                ))
            })?,
    };
    let u = svd
        .u
        .ok_or_else(|| BiclusterError::SvdFailed("failed to compute U matrix".to_string()))?;
    let v_t = svd
        .v_t
        .ok_or_else(|| BiclusterError::SvdFailed("failed to compute V^T matrix".to_string()))?;

    let values: Vec<f64> = svd.singular_values.iter().copied().collect();
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order.truncate(k);

    let u = dmatrix_to_array2(&u).select(Axis(1), &order);
    let vt = dmatrix_to_array2(&v_t).select(Axis(0), &order);
    let s: Array1<f64> = order.iter().map(|&i| values[i]).collect();
    debug!(
        "truncated SVD of {}x{} matrix, k = {}, leading singular value {:?}",
        n_rows,
        n_cols,
        k,
        s.get(0)
    );

    Ok(SingularVectors { u, s, vt })
}
