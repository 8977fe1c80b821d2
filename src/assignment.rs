//! Rectangular linear assignment (Hungarian / Kuhn–Munkres).

use ndarray::ArrayView2;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix as WeightMatrix;

use crate::error::{BiclusterError, Result};

// Kuhn–Munkres needs exact arithmetic, so costs are fixed-point.
const COST_SCALE: f64 = 1e9;

/// Minimum-cost one-to-one pairing between the rows and columns of `cost`.
///
/// Exactly `min(n_rows, n_cols)` pairs `(row, col)` are returned, sorted by
/// row. Rows or columns on the larger side are left unmatched.
pub fn linear_assignment(cost: ArrayView2<f64>) -> Result<Vec<(usize, usize)>> {
    let (n_rows, n_cols) = cost.dim();
    if n_rows == 0 || n_cols == 0 {
        return Ok(Vec::new());
    }
    if cost.iter().any(|c| !c.is_finite()) {
        return Err(BiclusterError::NonFinite("assignment cost"));
    }

    // kuhn_munkres requires rows <= columns
    let transposed = n_rows > n_cols;
    let oriented = if transposed { cost.reversed_axes() } else { cost };
    let (r, c) = oriented.dim();
    let weights: Vec<i64> = oriented
        .iter()
        .map(|&v| (v * COST_SCALE).round() as i64)
        .collect();
    let weights = WeightMatrix::from_vec(r, c, weights)
        .map_err(|e| BiclusterError::InvalidArgument(format!("{:?}", e)))?;

    let (_, assignment) = kuhn_munkres_min(&weights);
    let mut pairs: Vec<(usize, usize)> = assignment
        .into_iter()
        .enumerate()
        .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
        .collect();
    pairs.sort_unstable();
    Ok(pairs)
}
