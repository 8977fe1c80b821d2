/*
 * File: /src/Submatrix.rs
 * Created Date: Monday January 22nd 2024
 * Author: Zihan
 * -----
 * Last Modified: Wednesday, 14th October 2026 3:12:40 pm
 * Modified By: the developer formerly known as Zihan at <wzh4464@gmail.com>
 * -----
 * HISTORY:
 * Date      		By   	Comments
 * ----------		------	---------------------------------------------------------
 * 2026-10-14		Zihan	View the block covered by one bicluster
**/

/// Index-based view over the cells a bicluster covers.
/// No data is copied until `to_owned` is called.
use ndarray::{Array2, ArrayView2, Axis};
use std::ops::Index;

///
/// # Example
/// ```
/// use spectral_bicluster::submatrix::Submatrix;
/// use ndarray::Array2;
/// let a = Array2::from_shape_vec((3, 3), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
/// let b = Submatrix::from_indices(&a, &[0, 2], &[1, 2]).unwrap();
///
/// assert_eq!(b[(1, 1)], 9);
/// assert_eq!(b[(0, 0)], 2);
/// ```
/// b = [[2, 3],
///     [8, 9]]
#[derive(Debug, Clone)]
pub struct Submatrix<'a, T> {
    data: ArrayView2<'a, T>,
    row_indices: Vec<usize>,
    col_indices: Vec<usize>,
}

impl<'a, T> Submatrix<'a, T> {
    /// Returns `None` when an index falls outside `matrix`.
    pub fn new(
        matrix: ArrayView2<'a, T>,
        row_indices: Vec<usize>,
        col_indices: Vec<usize>,
    ) -> Option<Self> {
        let (n_rows, n_cols) = matrix.dim();
        if row_indices.iter().any(|&r| r >= n_rows) || col_indices.iter().any(|&c| c >= n_cols) {
            return None;
        }
        Some(Submatrix {
            data: matrix,
            row_indices,
            col_indices,
        })
    }

    pub fn from_indices(
        matrix: &'a Array2<T>,
        row_indices: &[usize],
        col_indices: &[usize],
    ) -> Option<Self> {
        Self::new(matrix.view(), row_indices.to_vec(), col_indices.to_vec())
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.row_indices.get(row).and_then(|&r| {
            self.col_indices
                .get(col)
                .and_then(|&c| self.data.get((r, c)))
        })
    }

    pub fn row_indices(&self) -> &[usize] {
        &self.row_indices
    }

    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.row_indices.len(), self.col_indices.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_indices.is_empty() || self.col_indices.is_empty()
    }
}

impl<'a, T: Clone> Submatrix<'a, T> {
    /// Copy the selected block out of the parent matrix.
    pub fn to_owned(&self) -> Array2<T> {
        self.data
            .select(Axis(0), &self.row_indices)
            .select(Axis(1), &self.col_indices)
    }
}

impl<'a, T> Index<(usize, usize)> for Submatrix<'a, T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        &self.data[(self.row_indices[row], self.col_indices[col])]
    }
}

// impl Display
/// # Example
/// ```log
/// [2, 3]
/// [8, 9]
/// ```
impl<'a, T> std::fmt::Display for Submatrix<'a, T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.row_indices.len() {
            let row: Vec<String> = (0..self.col_indices.len())
                .map(|j| self[(i, j)].to_string())
                .collect();
            writeln!(f, "[{}]", row.join(", "))?;
        }
        Ok(())
    }
}
