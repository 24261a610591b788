use ndarray::{Array2, ArrayView1, ArrayView2};

use crate::error::{Error, Result};

/// A dense, validated feature matrix: `n_rows` samples by `n_features` columns.
///
/// Every `FeatureMatrix` is non-empty, rectangular and holds only finite
/// values.
///
/// # Example
///
/// ```
/// use kmeans_core::FeatureMatrix;
///
/// let m = FeatureMatrix::from_rows(&[[20.0, 1000.0], [22.0, 1100.0]]).unwrap();
/// assert_eq!(m.n_rows(), 2);
/// assert_eq!(m.n_features(), 2);
///
/// // Ragged rows are rejected
/// let ragged = vec![vec![1.0, 2.0], vec![3.0]];
/// assert!(FeatureMatrix::from_rows(&ragged).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    data: Array2<f64>,
}

impl FeatureMatrix {
    /// Builds a matrix from row slices.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if there are no rows, the first row is empty,
    /// any row's length differs from the first, or any value is NaN/infinite.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::invalid_input("feature matrix has no rows"));
        }
        let dim = rows[0].as_ref().len();
        if dim == 0 {
            return Err(Error::invalid_input("feature rows must have at least one column"));
        }

        let mut flat = Vec::with_capacity(n * dim);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != dim {
                return Err(Error::invalid_input(format!(
                    "row {} has {} features, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            flat.extend_from_slice(row);
        }

        let data = Array2::from_shape_vec((n, dim), flat)
            .map_err(|e| Error::invalid_input(e.to_string()))?;
        Self::from_array(data)
    }

    /// Wraps an existing array after checking it is non-empty and finite.
    pub fn from_array(data: Array2<f64>) -> Result<Self> {
        let (n, dim) = data.dim();
        if n == 0 {
            return Err(Error::invalid_input("feature matrix has no rows"));
        }
        if dim == 0 {
            return Err(Error::invalid_input("feature rows must have at least one column"));
        }
        if let Some(((i, j), _)) = data.indexed_iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::invalid_input(format!(
                "value at row {}, column {} is not finite",
                i, j
            )));
        }
        Ok(Self { data })
    }

    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.data.ncols()
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    pub fn row(&self, index: usize) -> ArrayView1<'_, f64> {
        self.data.row(index)
    }

    /// Copies the matrix back out as one `Vec` per row.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.data
    }
}
