//! Matrix normalizations applied before the singular value decomposition.
//!
//! - `scale_preprocess`: D_r^{-1/2} X D_c^{-1/2} (bipartite graph Laplacian scaling)
//! - `bistochastic_preprocess`: repeated scaling until rows and columns each
//!   sum to a constant
//! - `log_preprocess`: log interactions, double centered
//!
//! Zero row or column sums are not guarded here; the resulting infinities and
//! NaNs propagate to the caller.

use log::debug;
use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Shift `x` by a constant so that its minimum is at least `min_value`.
/// Returns an unchanged copy when the minimum already satisfies the bound.
pub fn make_nonnegative(x: ArrayView2<f64>, min_value: f64) -> Array2<f64> {
    let min = x.iter().copied().fold(f64::INFINITY, f64::min);
    if min < min_value {
        let shift = min_value - min;
        // clamp absorbs rounding in `min + (min_value - min)`
        x.mapv(|v| (v + shift).max(min_value))
    } else {
        x.to_owned()
    }
}

/// Scale rows and columns independently:
///   row_diag = 1 / sqrt(X.sum(axis=1))
///   col_diag = 1 / sqrt(X.sum(axis=0))
///   An       = diag(row_diag) * X * diag(col_diag)
///
/// Returns `(An, row_diag, col_diag)`.
pub fn scale_preprocess(x: ArrayView2<f64>) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let x = make_nonnegative(x, 0.0);
    let row_diag = x.sum_axis(Axis(1)).mapv(|s| 1.0 / s.sqrt());
    let col_diag = x.sum_axis(Axis(0)).mapv(|s| 1.0 / s.sqrt());
    let an = &x * &row_diag.view().insert_axis(Axis(1)) * &col_diag.view().insert_axis(Axis(0));
    (an, row_diag, col_diag)
}

/// Normalize rows and columns of `x` simultaneously so that all rows sum to
/// one constant and all columns sum to another.
///
/// Stops once the Frobenius norm between successive iterates drops below
/// `tol`, or after `maxiter` rounds, and returns the last iterate.
pub fn bistochastic_preprocess(x: ArrayView2<f64>, maxiter: usize, tol: f64) -> Array2<f64> {
    let mut x_scaled = make_nonnegative(x, 0.0);
    let mut dist = f64::INFINITY;
    let mut n_iter = 0;
    for _ in 0..maxiter {
        let (x_new, _, _) = scale_preprocess(x_scaled.view());
        dist = frobenius_norm(&(&x_scaled - &x_new));
        x_scaled = x_new;
        n_iter += 1;
        if dist < tol {
            break;
        }
    }
    debug!(
        "bistochastic normalization stopped after {} iterations (residual {:.3e})",
        n_iter, dist
    );
    x_scaled
}

/// Kluger's log-interaction normalization:
///   L = log(X + shift),  min(X + shift) = 1
///   K = L - row_mean(L) - col_mean(L) + mean(L)
///
/// Every row and every column of the result has zero mean.
pub fn log_preprocess(x: ArrayView2<f64>) -> Array2<f64> {
    let l = make_nonnegative(x, 1.0).mapv(f64::ln);
    if l.is_empty() {
        return l;
    }
    let (n_rows, n_cols) = l.dim();
    let row_avg = l.sum_axis(Axis(1)) / n_cols as f64;
    let col_avg = l.sum_axis(Axis(0)) / n_rows as f64;
    let avg = l.sum() / (n_rows * n_cols) as f64;
    &l - &row_avg.insert_axis(Axis(1)) - &col_avg.insert_axis(Axis(0)) + avg
}

pub(crate) fn frobenius_norm(x: &Array2<f64>) -> f64 {
    x.iter().map(|v| v * v).sum::<f64>().sqrt()
}
