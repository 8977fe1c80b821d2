/*
 * File: /src/bicluster.rs
 * Created Date: Tuesday, October 13th 2026
 * Author: Zihan
 * -----
 * Last Modified: Thursday, 15th October 2026 9:02:17 am
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-13		Zihan	Indicator matrices for bicluster sets
 */

//! Bicluster membership types shared by the estimator and the consensus scorer.
//!
//! A bicluster set is stored as two boolean matrices: `rows` with shape
//! `(n_biclusters, n_rows)` and `columns` with shape `(n_biclusters, n_cols)`.
//! Row `i` of each pairs to form bicluster `i`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::{BiclusterError, Result};
use crate::submatrix::Submatrix;

/// Boolean membership vector over all rows (or all columns) of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct Indicator<'a>(ArrayView1<'a, bool>);

impl<'a> Indicator<'a> {
    pub fn new(view: ArrayView1<'a, bool>) -> Self {
        Indicator(view)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.0.iter().filter(|&&m| m).count()
    }

    pub fn intersection_count(&self, other: &Indicator) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(&a, &b)| a && b)
            .count()
    }

    pub fn union_count(&self, other: &Indicator) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(&a, &b)| a || b)
            .count()
    }

    /// Positions of the members, ascending.
    pub fn indices(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn contains(&self, idx: usize) -> bool {
        self.0.get(idx).copied().unwrap_or(false)
    }

    pub fn view(&self) -> ArrayView1<'a, bool> {
        self.0
    }
}

impl<'a> PartialEq for Indicator<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// An ordered collection of biclusters.
#[derive(Debug, Clone, PartialEq)]
pub struct BiclusterSet {
    rows: Array2<bool>,
    columns: Array2<bool>,
}

impl BiclusterSet {
    /// Pair up row and column indicator matrices. Both must hold the same
    /// number of biclusters.
    pub fn new(rows: Array2<bool>, columns: Array2<bool>) -> Result<Self> {
        if rows.nrows() != columns.nrows() {
            return Err(BiclusterError::InconsistentBiclusters(format!(
                "{} row indicators but {} column indicators",
                rows.nrows(),
                columns.nrows()
            )));
        }
        Ok(Self { rows, columns })
    }

    /// One bicluster per label where rows and columns share a single
    /// label space (joint partition).
    pub fn from_joint_labels(row_labels: &[usize], col_labels: &[usize], n_clusters: usize) -> Self {
        let rows = Array2::from_shape_fn((n_clusters, row_labels.len()), |(c, r)| {
            row_labels[r] == c
        });
        let columns = Array2::from_shape_fn((n_clusters, col_labels.len()), |(c, j)| {
            col_labels[j] == c
        });
        Self { rows, columns }
    }

    /// Cross product of a row partition and a column partition. Bicluster
    /// `r * n_col_clusters + c` covers rows labelled `r` and columns labelled `c`.
    pub fn checkerboard(
        row_labels: &[usize],
        col_labels: &[usize],
        n_row_clusters: usize,
        n_col_clusters: usize,
    ) -> Self {
        let n_biclusters = n_row_clusters * n_col_clusters;
        let rows = Array2::from_shape_fn((n_biclusters, row_labels.len()), |(b, r)| {
            row_labels[r] == b / n_col_clusters
        });
        let columns = Array2::from_shape_fn((n_biclusters, col_labels.len()), |(b, j)| {
            col_labels[j] == b % n_col_clusters
        });
        Self { rows, columns }
    }

    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of rows of the matrix the biclusters refer to.
    pub fn n_rows(&self) -> usize {
        self.rows.ncols()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.ncols()
    }

    pub fn rows(&self) -> ArrayView2<'_, bool> {
        self.rows.view()
    }

    pub fn columns(&self) -> ArrayView2<'_, bool> {
        self.columns.view()
    }

    /// # Panics
    /// If `i >= self.len()`.
    pub fn row_indicator(&self, i: usize) -> Indicator<'_> {
        Indicator::new(self.rows.row(i))
    }

    /// # Panics
    /// If `i >= self.len()`.
    pub fn column_indicator(&self, i: usize) -> Indicator<'_> {
        Indicator::new(self.columns.row(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Indicator<'_>, Indicator<'_>)> + '_ {
        self.rows
            .outer_iter()
            .zip(self.columns.outer_iter())
            .map(|(r, c)| (Indicator::new(r), Indicator::new(c)))
    }

    /// Row and column indices of bicluster `i`.
    pub fn get_indices(&self, i: usize) -> (Vec<usize>, Vec<usize>) {
        (
            self.row_indicator(i).indices(),
            self.column_indicator(i).indices(),
        )
    }

    /// Number of rows and columns in bicluster `i`.
    pub fn get_shape(&self, i: usize) -> (usize, usize) {
        (self.row_indicator(i).count(), self.column_indicator(i).count())
    }

    /// The block of `data` covered by bicluster `i`. `None` if `data` is
    /// smaller than the matrix the biclusters were fitted on.
    pub fn get_submatrix<'a, T>(&self, i: usize, data: &'a Array2<T>) -> Option<Submatrix<'a, T>> {
        let (rows, cols) = self.get_indices(i);
        Submatrix::from_indices(data, &rows, &cols)
    }
}

/// Output of a single `fit` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Biclustering {
    pub biclusters: BiclusterSet,
    /// Only set for checkerboard results.
    pub row_labels: Option<Array1<usize>>,
    pub column_labels: Option<Array1<usize>>,
}

impl Biclustering {
    pub fn rows(&self) -> ArrayView2<'_, bool> {
        self.biclusters.rows()
    }

    pub fn columns(&self) -> ArrayView2<'_, bool> {
        self.biclusters.columns()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_indicator_counts() {
        let a = array![true, true, false, true];
        let b = array![false, true, true, true];
        let ia = Indicator::new(a.view());
        let ib = Indicator::new(b.view());
        assert_eq!(ia.count(), 3);
        assert_eq!(ia.intersection_count(&ib), 2);
        assert_eq!(ia.union_count(&ib), 4);
        assert_eq!(ia.indices(), vec![0, 1, 3]);
        assert!(ia.contains(3));
        assert!(!ia.contains(2));
        assert!(!ia.contains(10));
    }

    #[test]
    fn test_new_rejects_mismatched_counts() {
        let rows = Array2::from_elem((2, 4), true);
        let cols = Array2::from_elem((3, 5), true);
        assert!(matches!(
            BiclusterSet::new(rows, cols),
            Err(BiclusterError::InconsistentBiclusters(_))
        ));
    }

    #[test]
    fn test_joint_labels_partition() {
        let set = BiclusterSet::from_joint_labels(&[0, 1, 1, 0], &[1, 0, 2], 3);
        assert_eq!(set.len(), 3);
        assert_eq!(set.n_rows(), 4);
        assert_eq!(set.n_cols(), 3);
        for r in 0..4 {
            assert_eq!(set.rows().column(r).iter().filter(|&&m| m).count(), 1);
        }
        assert_eq!(set.get_indices(0), (vec![0, 3], vec![1]));
        assert_eq!(set.get_indices(2), (vec![], vec![2]));
    }

    #[test]
    fn test_checkerboard_cross_product() {
        let row_labels = [0, 1, 0, 1, 1];
        let col_labels = [2, 0, 1, 2];
        let set = BiclusterSet::checkerboard(&row_labels, &col_labels, 2, 3);
        assert_eq!(set.len(), 6);
        for r in 0..2 {
            for c in 0..3 {
                let (rows, cols) = set.get_indices(r * 3 + c);
                let expected_rows: Vec<usize> =
                    (0..5).filter(|&i| row_labels[i] == r).collect();
                let expected_cols: Vec<usize> =
                    (0..4).filter(|&j| col_labels[j] == c).collect();
                assert_eq!(rows, expected_rows);
                assert_eq!(cols, expected_cols);
            }
        }
        assert_eq!(set.get_shape(3), (3, 1));
    }

    #[test]
    fn test_get_submatrix() {
        let data = Array2::from_shape_fn((4, 3), |(i, j)| (i * 3 + j) as f64);
        let set = BiclusterSet::from_joint_labels(&[0, 1, 1, 0], &[1, 0, 1], 2);
        let sub = set.get_submatrix(0, &data).unwrap();
        assert_eq!(sub.shape(), (2, 1));
        assert_eq!(sub[(1, 0)], 10.0);

        let small = Array2::<f64>::zeros((2, 2));
        assert!(set.get_submatrix(0, &small).is_none());
    }
}
