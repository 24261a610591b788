//! Mapping engine output back to something a caller can display.
//!
//! Nothing here mutates caller-owned data: rows are paired with their labels
//! in a new structure, and centroids are unscaled into a new matrix.

use crate::error::{Error, Result};
use crate::ml::matrix::FeatureMatrix;
use crate::ml::preprocessing::StandardScaler;

/// One input record together with the cluster it was assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRow<T> {
    pub row: T,
    pub cluster: usize,
}

/// Converts centroids from standardized space back to original feature units.
pub fn unscale_centroids(
    centroids: &FeatureMatrix,
    scaler: &StandardScaler,
) -> Result<FeatureMatrix> {
    scaler.inverse_transform(centroids)
}

/// Pairs each row with its cluster id.
///
/// `rows` can be anything the caller wants to present: the raw feature
/// vectors, or whole records of which only some columns were clustered.
///
/// # Errors
///
/// `Error::InvalidInput` if `rows` and `labels` differ in length.
///
/// # Example
///
/// ```
/// use kmeans_core::label_rows;
///
/// let people = vec![("ana", 20.0, 1000.0), ("budi", 60.0, 5000.0)];
/// let labeled = label_rows(&people, &[1, 0]).unwrap();
///
/// assert_eq!(labeled[0].row.0, "ana");
/// assert_eq!(labeled[0].cluster, 1);
/// ```
pub fn label_rows<T: Clone>(rows: &[T], labels: &[usize]) -> Result<Vec<LabeledRow<T>>> {
    if rows.len() != labels.len() {
        return Err(Error::invalid_input(format!(
            "{} rows but {} labels",
            rows.len(),
            labels.len()
        )));
    }
    Ok(rows
        .iter()
        .zip(labels)
        .map(|(row, &cluster)| LabeledRow {
            row: row.clone(),
            cluster,
        })
        .collect())
}

/// Number of rows in each of the `k` clusters.
pub fn cluster_sizes(labels: &[usize], k: usize) -> Result<Vec<usize>> {
    let mut sizes = vec![0_usize; k];
    for (i, &label) in labels.iter().enumerate() {
        match sizes.get_mut(label) {
            Some(size) => *size += 1,
            None => {
                return Err(Error::invalid_input(format!(
                    "row {} has label {}, expected a value below {}",
                    i, label, k
                )))
            }
        }
    }
    Ok(sizes)
}
