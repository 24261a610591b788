//! End-to-end clustering of raw feature rows: standardize, cluster, then
//! report labels and centroids in the original units.

use log::debug;

use crate::error::Result;
use crate::ml::classic::{kmeans, KMeansConfig};
use crate::ml::matrix::FeatureMatrix;
use crate::ml::preprocessing::StandardScaler;
use crate::ml::report::{cluster_sizes, label_rows, unscale_centroids, LabeledRow};

/// Everything a host needs to render one clustering run.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusteringReport {
    rows: Vec<LabeledRow<Vec<f64>>>,
    centroids: FeatureMatrix,
    cluster_sizes: Vec<usize>,
    inertia: f64,
    n_iter: usize,
    converged: bool,
}

impl ClusteringReport {
    /// Input rows, unscaled, each with its cluster id.
    pub fn rows(&self) -> &[LabeledRow<Vec<f64>>] {
        &self.rows
    }

    pub fn labels(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.cluster).collect()
    }

    /// K x D centroid table in original feature units.
    pub fn centroids(&self) -> &FeatureMatrix {
        &self.centroids
    }

    pub fn cluster_sizes(&self) -> &[usize] {
        &self.cluster_sizes
    }

    /// Within-cluster sum of squares, measured in standardized space.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn converged(&self) -> bool {
        self.converged
    }
}

/// Clusters raw feature rows and reports the result in original units.
///
/// The rows are standardized before clustering so that no feature dominates
/// the distance because of its magnitude; centroids are mapped back through
/// the same scaler.
///
/// # Errors
///
/// `Error::InvalidInput` for empty, ragged or non-finite rows;
/// `Error::InvalidConfiguration` when `config` does not fit the data.
///
/// # Example
///
/// ```
/// use kmeans_core::{cluster_features, KMeansConfig};
///
/// let rows = [[20.0, 1000.0], [22.0, 1100.0], [60.0, 5000.0], [62.0, 5200.0]];
/// let report = cluster_features(&rows, &KMeansConfig::new(2)).unwrap();
///
/// assert_eq!(report.cluster_sizes(), &[2, 2]);
/// let labels = report.labels();
/// assert_eq!(labels[0], labels[1]);
/// assert_ne!(labels[1], labels[2]);
/// ```
pub fn cluster_features<R: AsRef<[f64]>>(
    rows: &[R],
    config: &KMeansConfig,
) -> Result<ClusteringReport> {
    let matrix = FeatureMatrix::from_rows(rows)?;
    config.validate(matrix.n_rows())?;

    let (scaler, scaled) = StandardScaler::fit_transform(&matrix)?;
    let fit = kmeans(&scaled, config)?;
    debug!(
        "clustered {} rows into {} clusters (inertia {})",
        matrix.n_rows(),
        config.k,
        fit.inertia()
    );

    let centroids = unscale_centroids(fit.centroids(), &scaler)?;
    let cluster_sizes = cluster_sizes(fit.labels(), config.k)?;
    let rows = label_rows(&matrix.to_rows(), fit.labels())?;

    Ok(ClusteringReport {
        rows,
        centroids,
        cluster_sizes,
        inertia: fit.inertia(),
        n_iter: fit.n_iter(),
        converged: fit.converged(),
    })
}
