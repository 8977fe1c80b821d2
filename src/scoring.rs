/*
 * File: ./src/scoring.rs
 * Created Date: Monday, May 26th 2025
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 3:30:12 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	Consensus score between bicluster sets
**/
// src/scoring.rs
use log::debug;
use ndarray::Array2;

use crate::assignment::linear_assignment;
use crate::bicluster::{BiclusterSet, Indicator};
use crate::error::{BiclusterError, Result};

/// Similarity between two biclusters, each given as (rows, columns) indicators.
pub trait BiclusterSimilarity: Send + Sync {
    fn similarity(
        &self,
        a_rows: Indicator,
        a_cols: Indicator,
        b_rows: Indicator,
        b_cols: Indicator,
    ) -> f64;
}

/// Jaccard coefficient on the matrix cells covered by the two biclusters.
///
/// A bicluster covers the rectangle rows × columns, so the cell intersection
/// is |rows_a ∩ rows_b| · |cols_a ∩ cols_b| and no cell set is materialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaccard;

impl BiclusterSimilarity for Jaccard {
    fn similarity(
        &self,
        a_rows: Indicator,
        a_cols: Indicator,
        b_rows: Indicator,
        b_cols: Indicator,
    ) -> f64 {
        let intersection = a_rows.intersection_count(&b_rows) * a_cols.intersection_count(&b_cols);
        let a_size = a_rows.count() * a_cols.count();
        let b_size = b_rows.count() * b_cols.count();
        let union = a_size + b_size - intersection;
        // two empty biclusters
        if union == 0 {
            return 0.0;
        }
        intersection as f64 / union as f64
    }
}

impl<F> BiclusterSimilarity for F
where
    F: Fn(Indicator<'_>, Indicator<'_>, Indicator<'_>, Indicator<'_>) -> f64 + Send + Sync,
{
    fn similarity(
        &self,
        a_rows: Indicator,
        a_cols: Indicator,
        b_rows: Indicator,
        b_cols: Indicator,
    ) -> f64 {
        self(a_rows, a_cols, b_rows, b_cols)
    }
}

fn check_dimensions(a: &BiclusterSet, b: &BiclusterSet) -> Result<()> {
    if a.n_rows() != b.n_rows() || a.n_cols() != b.n_cols() {
        return Err(BiclusterError::InconsistentBiclusters(format!(
            "biclusters over {}x{} and {}x{} matrices",
            a.n_rows(),
            a.n_cols(),
            b.n_rows(),
            b.n_cols()
        )));
    }
    Ok(())
}

/// `result[i, j]` is the similarity of bicluster `i` of `a` and bicluster `j` of `b`.
pub fn pairwise_similarity<S>(a: &BiclusterSet, b: &BiclusterSet, similarity: &S) -> Result<Array2<f64>>
where
    S: BiclusterSimilarity + ?Sized,
{
    check_dimensions(a, b)?;
    Ok(Array2::from_shape_fn((a.len(), b.len()), |(i, j)| {
        similarity.similarity(
            a.row_indicator(i),
            a.column_indicator(i),
            b.row_indicator(j),
            b.column_indicator(j),
        )
    }))
}

/// Similarity of two bicluster sets using the Jaccard coefficient.
///
/// See [`consensus_score_with`].
pub fn consensus_score(a: &BiclusterSet, b: &BiclusterSet) -> Result<f64> {
    consensus_score_with(a, b, &Jaccard)
}

/// Similarity of two bicluster sets.
///
/// Biclusters are paired one-to-one by maximizing total similarity (Hungarian
/// algorithm); the score is the matched similarity sum divided by the size of
/// the larger set. Unmatched biclusters contribute nothing. The result lies in
/// `[0, 1]`.
///
/// Reference: Hochreiter, Bodenhofer, et al., 2010. FABIA: factor analysis for
/// bicluster acquisition.
pub fn consensus_score_with<S>(a: &BiclusterSet, b: &BiclusterSet, similarity: &S) -> Result<f64>
where
    S: BiclusterSimilarity + ?Sized,
{
    if a.is_empty() && b.is_empty() {
        return Err(BiclusterError::EmptyBiclusterSet);
    }
    let matrix = pairwise_similarity(a, b, similarity)?;
    let cost = matrix.mapv(|s| 1.0 - s);
    let pairs = linear_assignment(cost.view())?;
    let matched: f64 = pairs.iter().map(|&(i, j)| matrix[(i, j)]).sum();
    let score = matched / a.len().max(b.len()) as f64;
    debug!(
        "consensus score {:.4} over {} matched pairs ({} vs {} biclusters)",
        score,
        pairs.len(),
        a.len(),
        b.len()
    );
    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn set(rows: Array2<bool>, cols: Array2<bool>) -> BiclusterSet {
        BiclusterSet::new(rows, cols).unwrap()
    }

    fn jaccard_of(a: &BiclusterSet, i: usize, b: &BiclusterSet, j: usize) -> f64 {
        Jaccard.similarity(
            a.row_indicator(i),
            a.column_indicator(i),
            b.row_indicator(j),
            b.column_indicator(j),
        )
    }

    #[test]
    fn test_jaccard_values() {
        // 2x2 rectangle vs 2x3 rectangle sharing 1 row and 2 columns
        let a = set(
            array![[true, true, false, false]],
            array![[true, true, false]],
        );
        let b = set(
            array![[false, true, true, false]],
            array![[true, true, true]],
        );
        // intersection 1*2 = 2, sizes 4 and 6 -> 2 / 8
        assert!((jaccard_of(&a, 0, &b, 0) - 0.25).abs() < 1e-12);
        assert!((jaccard_of(&a, 0, &a, 0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_jaccard_disjoint() {
        // shared rows but no shared columns
        let a = set(array![[true, true]], array![[true, false]]);
        let b = set(array![[true, true]], array![[false, true]]);
        assert_eq!(jaccard_of(&a, 0, &b, 0), 0.0);

        let empty = set(array![[false, false]], array![[false, false]]);
        assert_eq!(jaccard_of(&empty, 0, &empty, 0), 0.0);
    }

    #[test]
    fn test_consensus_identical() {
        let a = BiclusterSet::checkerboard(&[0, 0, 1, 1, 2], &[1, 0, 1], 3, 2);
        assert!((consensus_score(&a, &a).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_consensus_symmetric() {
        let a = BiclusterSet::checkerboard(&[0, 0, 1, 1, 1, 0], &[0, 1, 1, 0], 2, 2);
        let b = BiclusterSet::from_joint_labels(&[0, 1, 1, 2, 2, 0], &[2, 1, 0, 0], 3);
        let ab = consensus_score(&a, &b).unwrap();
        let ba = consensus_score(&b, &a).unwrap();
        assert!((ab - ba).abs() < 1e-12);
        assert!((0.0..=1.0).contains(&ab));
    }

    #[test]
    fn test_consensus_rectangular() {
        // b holds the first two biclusters of a exactly
        let a = set(
            array![[true, true, false, false], [false, false, true, true], [true, false, true, false]],
            array![[true, false], [false, true], [true, true]],
        );
        let b = set(
            array![[true, true, false, false], [false, false, true, true]],
            array![[true, false], [false, true]],
        );
        let score = consensus_score(&a, &b).unwrap();
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
        assert!((consensus_score(&b, &a).unwrap() - score).abs() < 1e-12);
    }

    #[test]
    fn test_consensus_against_empty_set() {
        let a = BiclusterSet::from_joint_labels(&[0, 1], &[0, 1], 2);
        let none = set(Array2::from_elem((0, 2), false), Array2::from_elem((0, 2), false));
        assert_eq!(consensus_score(&a, &none).unwrap(), 0.0);
        assert!(matches!(
            consensus_score(&none, &none),
            Err(BiclusterError::EmptyBiclusterSet)
        ));
    }

    #[test]
    fn test_mismatched_dimensions() {
        let a = BiclusterSet::from_joint_labels(&[0, 1], &[0, 1], 2);
        let b = BiclusterSet::from_joint_labels(&[0, 1, 1], &[0, 1], 2);
        assert!(matches!(
            consensus_score(&a, &b),
            Err(BiclusterError::InconsistentBiclusters(_))
        ));
    }

    fn row_overlap(a_rows: Indicator, _a_cols: Indicator, b_rows: Indicator, _b_cols: Indicator) -> f64 {
        a_rows.intersection_count(&b_rows) as f64 / a_rows.union_count(&b_rows).max(1) as f64
    }

    #[test]
    fn test_custom_similarity() {
        let a = BiclusterSet::from_joint_labels(&[0, 0, 1, 1], &[0, 1, 0], 2);
        let b = BiclusterSet::from_joint_labels(&[1, 1, 0, 0], &[1, 1, 1], 2);
        // rows agree up to permutation, columns do not
        assert!((consensus_score_with(&a, &b, &row_overlap).unwrap() - 1.0).abs() < 1e-12);
        assert!(consensus_score(&a, &b).unwrap() < 1.0);

        let m = pairwise_similarity(&a, &b, &row_overlap).unwrap();
        assert_eq!(m.dim(), (2, 2));
        assert_eq!(m[(0, 1)], 1.0);
    }
}
