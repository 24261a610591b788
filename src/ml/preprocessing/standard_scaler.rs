use log::debug;
use ndarray::{Array1, ArrayView1, Axis};

use crate::error::{Error, Result};
use crate::ml::matrix::FeatureMatrix;

/// Fitted per-column standardization: `z = (x - mean) / std`.
///
/// The standard deviation is the population one (divides by `n`). A column
/// whose values are all equal has no spread to scale by; such columns are
/// stored with `std == 0` and transform to all zeros. Inverse-transforming a
/// degenerate column yields its mean.
///
/// # Example
///
/// ```
/// use kmeans_core::{FeatureMatrix, StandardScaler};
///
/// let data = FeatureMatrix::from_rows(&[[1.0, 10.0], [3.0, 10.0]]).unwrap();
/// let (scaler, scaled) = StandardScaler::fit_transform(&data).unwrap();
///
/// assert_eq!(scaler.mean().to_vec(), vec![2.0, 10.0]);
/// assert_eq!(scaled.to_rows(), vec![vec![-1.0, 0.0], vec![1.0, 0.0]]);
///
/// let restored = scaler.inverse_transform(&scaled).unwrap();
/// assert_eq!(restored, data);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl StandardScaler {
    /// Computes the per-column mean and standard deviation of `data`.
    ///
    /// Empty and ragged inputs are already rejected when the
    /// [`FeatureMatrix`] is built, so fitting itself cannot fail.
    pub fn fit(data: &FeatureMatrix) -> Self {
        let view = data.view();
        let n = view.nrows() as f64;
        let mean = view.sum_axis(Axis(0)) / n;

        let mut std = Array1::zeros(mean.len());
        for (j, column) in view.axis_iter(Axis(1)).enumerate() {
            let m = mean[j];
            let var = column.iter().map(|&x| (x - m).powi(2)).sum::<f64>() / n;
            if is_constant(var, m, n) {
                debug!("column {} has zero variance; it will scale to 0", j);
            } else {
                std[j] = var.sqrt();
            }
        }

        Self { mean, std }
    }

    /// Standardizes `data` with the fitted statistics.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `data` has a different number of columns than
    /// the scaler was fitted on, or if scaling overflows.
    pub fn transform(&self, data: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.check_width(data)?;
        let mut out = data.view().to_owned();
        for ((mut column, &mean), &std) in out
            .axis_iter_mut(Axis(1))
            .zip(self.mean.iter())
            .zip(self.std.iter())
        {
            if std == 0.0 {
                column.fill(0.0);
            } else {
                column.mapv_inplace(|x| (x - mean) / std);
            }
        }
        FeatureMatrix::from_array(out)
    }

    /// Maps standardized values back to original units: `x = z * std + mean`.
    pub fn inverse_transform(&self, data: &FeatureMatrix) -> Result<FeatureMatrix> {
        self.check_width(data)?;
        let mut out = data.view().to_owned();
        for ((mut column, &mean), &std) in out
            .axis_iter_mut(Axis(1))
            .zip(self.mean.iter())
            .zip(self.std.iter())
        {
            column.mapv_inplace(|z| z * std + mean);
        }
        FeatureMatrix::from_array(out)
    }

    /// Fits on `data` and returns the scaler together with the scaled copy.
    pub fn fit_transform(data: &FeatureMatrix) -> Result<(Self, FeatureMatrix)> {
        let scaler = Self::fit(data);
        let scaled = scaler.transform(data)?;
        Ok((scaler, scaled))
    }

    pub fn mean(&self) -> ArrayView1<'_, f64> {
        self.mean.view()
    }

    /// Per-column standard deviation; `0.0` marks a constant column.
    pub fn std(&self) -> ArrayView1<'_, f64> {
        self.std.view()
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    fn check_width(&self, data: &FeatureMatrix) -> Result<()> {
        if data.n_features() != self.n_features() {
            return Err(Error::invalid_input(format!(
                "scaler was fitted on {} features, got {}",
                self.n_features(),
                data.n_features()
            )));
        }
        Ok(())
    }
}

/// A column is constant when its variance is indistinguishable from the
/// rounding noise of summing `n` copies of its mean.
fn is_constant(var: f64, mean: f64, n: f64) -> bool {
    var <= (n * f64::EPSILON * mean.abs()).powi(2)
}
