/*
 * File: /src/util.rs
 * Created Date: Tuesday, June 18th 2024
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 5:40:11 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	compact_labels, dmatrix_to_array2
**/
use std::collections::{BTreeMap, BTreeSet, HashMap};
extern crate nalgebra as na;
use na::DMatrix;
use ndarray::{Array2, ArrayView2};

/// 检查两个分类结果是否等价 (same partition up to label permutation)
pub fn are_equivalent_classifications(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut a_to_b_map = HashMap::new();
    let mut b_to_a_map = HashMap::new();

    for (&a_class, &b_class) in a.iter().zip(b.iter()) {
        let a_mapped = a_to_b_map.entry(a_class).or_insert(b_class);
        let b_mapped = b_to_a_map.entry(b_class).or_insert(a_class);

        if a_mapped != &b_class || b_mapped != &a_class {
            return false;
        }
    }

    true
}

/// Re-index labels onto `0..n_unique`, ordered by label value.
/// Returns the new labels and the number of distinct labels.
pub fn compact_labels(labels: &[usize]) -> (Vec<usize>, usize) {
    let index: BTreeMap<usize, usize> = labels
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .enumerate()
        .map(|(new, old)| (old, new))
        .collect();
    let compact = labels.iter().map(|l| index[l]).collect();
    (compact, index.len())
}

pub fn clone_to_dmatrix<T>(array_view: ArrayView2<T>) -> DMatrix<T>
where
    T: Clone,
    T: na::Scalar,
{
    let nrows = array_view.ncols();
    let ncols = array_view.nrows();
    let elements = array_view.iter().cloned().collect::<Vec<T>>();
    DMatrix::from_vec(nrows, ncols, elements).transpose()
}

pub fn dmatrix_to_array2<T>(matrix: &DMatrix<T>) -> Array2<T>
where
    T: na::Scalar,
{
    Array2::from_shape_fn((matrix.nrows(), matrix.ncols()), |(i, j)| {
        matrix[(i, j)].clone()
    })
}

pub fn all_finite(matrix: ArrayView2<f64>) -> bool {
    matrix.iter().all(|v| v.is_finite())
}
