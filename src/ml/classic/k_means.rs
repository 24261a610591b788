//! Seeded k-means clustering (Lloyd's algorithm).
//!
//! Every run is a pure function of the data and its [`KMeansConfig`]: the
//! random generator is a `ChaCha20Rng` seeded from `config.seed`, so the same
//! inputs always produce the same labels and centroids.

use log::{debug, trace, warn};
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::{index, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{Error, Result};
use crate::ml::matrix::FeatureMatrix;

/// Smallest cluster count accepted by the engine.
pub const MIN_CLUSTERS: usize = 2;
/// Upper end of the cluster-count range offered to interactive users.
pub const MAX_SUGGESTED_CLUSTERS: usize = 10;
pub const DEFAULT_CLUSTERS: usize = 3;
pub const DEFAULT_SEED: u64 = 42;

/// How the initial centroids are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Init {
    /// K distinct rows drawn uniformly at random.
    #[default]
    RandomRows,
    /// k-means++: each further centroid is drawn with probability
    /// proportional to its squared distance from the nearest chosen one.
    KMeansPlusPlus,
}

/// Configuration options for k-means clustering.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansConfig {
    /// Number of clusters to find.
    pub k: usize,
    /// Maximum number of update iterations per run.
    pub max_iterations: usize,
    /// Convergence tolerance. A run stops once no centroid moves farther
    /// than this (Euclidean distance) in one update.
    pub tolerance: f64,
    /// Seed for the random generator driving initialization and re-seeding.
    pub seed: u64,
    pub init: Init,
    /// Number of independent runs; the one with the lowest inertia wins.
    pub n_init: usize,
}

impl Default for KMeansConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTERS)
    }
}

impl KMeansConfig {
    /// Create a new config with default values for max_iterations (300),
    /// tolerance (1e-4), seed (42), random-row initialization and one run.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iterations: 300,
            tolerance: 1e-4,
            seed: DEFAULT_SEED,
            init: Init::default(),
            n_init: 1,
        }
    }

    /// Customize the maximum number of iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Customize the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    pub fn with_n_init(mut self, n_init: usize) -> Self {
        self.n_init = n_init;
        self
    }

    /// Checks the configuration against a dataset of `n_samples` rows.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfiguration` if `k < 2`, `k > n_samples`,
    /// `max_iterations == 0`, `tolerance` is negative or NaN, or `n_init == 0`.
    pub fn validate(&self, n_samples: usize) -> Result<()> {
        if self.k < MIN_CLUSTERS {
            return Err(Error::invalid_configuration(format!(
                "k must be at least {}, got {}",
                MIN_CLUSTERS, self.k
            )));
        }
        if self.k > n_samples {
            return Err(Error::invalid_configuration(format!(
                "k = {} exceeds the number of samples ({})",
                self.k, n_samples
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::invalid_configuration(
                "max_iterations must be at least 1",
            ));
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::invalid_configuration(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        if self.n_init == 0 {
            return Err(Error::invalid_configuration("n_init must be at least 1"));
        }
        Ok(())
    }
}

/// Outcome of a k-means run.
///
/// `labels[i]` is the cluster of row `i`, and `centroids` row `c` is the mean
/// of the rows labelled `c`. Every cluster holds at least one row.
#[derive(Debug, Clone, PartialEq)]
pub struct KMeansFit {
    labels: Vec<usize>,
    centroids: FeatureMatrix,
    inertia: f64,
    inertia_history: Vec<f64>,
    n_iter: usize,
    converged: bool,
}

impl KMeansFit {
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// K x D centroid matrix, in the same feature space as the fitted data.
    pub fn centroids(&self) -> &FeatureMatrix {
        &self.centroids
    }

    pub fn k(&self) -> usize {
        self.centroids.n_rows()
    }

    /// Within-cluster sum of squared distances of the final partition.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Objective value after each update step, in iteration order.
    /// Never increases from one entry to the next.
    pub fn inertia_history(&self) -> &[f64] {
        &self.inertia_history
    }

    /// Number of update iterations performed (at most `max_iterations`).
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether the run stopped on tolerance rather than the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn into_parts(self) -> (Vec<usize>, FeatureMatrix) {
        (self.labels, self.centroids)
    }

    /// Assigns each row of `data` to its nearest fitted centroid.
    /// Exact ties go to the lowest cluster index.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `data` has a different number of features
    /// than the centroids.
    pub fn predict(&self, data: &FeatureMatrix) -> Result<Vec<usize>> {
        if data.n_features() != self.centroids.n_features() {
            return Err(Error::invalid_input(format!(
                "model was fitted on {} features, got {}",
                self.centroids.n_features(),
                data.n_features()
            )));
        }
        let centroids = self.centroids.view();
        Ok(data
            .view()
            .outer_iter()
            .map(|point| nearest_centroid(point, centroids).0)
            .collect())
    }
}

/// Runs k-means clustering on `data`.
///
/// Each of the `config.n_init` runs draws from one generator seeded with
/// `config.seed`, so a single run with a given seed is identical to the first
/// of several. The run with the lowest inertia is returned; earlier runs win
/// ties.
///
/// # Errors
///
/// `Error::InvalidConfiguration` when `config` fails
/// [`KMeansConfig::validate`] for this dataset.
///
/// # Example
///
/// ```
/// use kmeans_core::{kmeans, FeatureMatrix, KMeansConfig};
///
/// let data = FeatureMatrix::from_rows(&[
///     [1.0, 2.0],
///     [1.5, 1.8],
///     [5.0, 8.0],
///     [8.0, 8.0],
/// ])
/// .unwrap();
///
/// let config = KMeansConfig::new(2).with_seed(7);
/// let fit = kmeans(&data, &config).unwrap();
///
/// assert_eq!(fit.labels().len(), 4);
/// assert_eq!(fit.labels()[0], fit.labels()[1]);
/// assert_ne!(fit.labels()[0], fit.labels()[3]);
/// ```
pub fn kmeans(data: &FeatureMatrix, config: &KMeansConfig) -> Result<KMeansFit> {
    config.validate(data.n_rows())?;

    let mut rng = ChaCha20Rng::seed_from_u64(config.seed);
    let mut best: Option<KMeansFit> = None;

    for run in 0..config.n_init {
        let fit = run_once(data.view(), config, &mut rng)?;
        debug!(
            "k-means run {} finished: inertia {}, {} iterations, converged {}",
            run, fit.inertia, fit.n_iter, fit.converged
        );
        best = match best {
            Some(current) if current.inertia <= fit.inertia => Some(current),
            _ => Some(fit),
        };
    }

    best.ok_or_else(|| Error::invalid_configuration("n_init must be at least 1"))
}

/// Partitions `data` into `k` clusters and returns `(labels, centroids)`.
///
/// Shorthand for [`kmeans`] with random-row initialization and one run.
pub fn fit_predict(
    data: &FeatureMatrix,
    k: usize,
    seed: u64,
    max_iterations: usize,
    tolerance: f64,
) -> Result<(Vec<usize>, FeatureMatrix)> {
    let config = KMeansConfig::new(k)
        .with_seed(seed)
        .with_max_iterations(max_iterations)
        .with_tolerance(tolerance);
    Ok(kmeans(data, &config)?.into_parts())
}

fn run_once(
    data: ArrayView2<'_, f64>,
    config: &KMeansConfig,
    rng: &mut ChaCha20Rng,
) -> Result<KMeansFit> {
    let k = config.k;
    let mut centroids = match config.init {
        Init::RandomRows => random_rows(data, k, rng),
        Init::KMeansPlusPlus => kmeans_plus_plus(data, k, rng),
    };
    debug!("initialized {} centroids with {:?}", k, config.init);

    let mut labels = vec![0_usize; data.nrows()];
    let mut inertia_history = Vec::new();
    let mut n_iter = 0;
    let mut converged = false;

    while n_iter < config.max_iterations {
        n_iter += 1;

        // 1. Assignment step: assign each point to the nearest centroid
        for (label, point) in labels.iter_mut().zip(data.outer_iter()) {
            *label = nearest_centroid(point, centroids.view()).0;
        }

        // 2. Update step: recompute centroids from the new assignments
        let updated = update_centroids(data, &mut labels, centroids.view(), rng);

        let max_shift = centroids
            .outer_iter()
            .zip(updated.outer_iter())
            .map(|(old, new)| distance_sq(old, new).sqrt())
            .fold(0.0_f64, f64::max);
        centroids = updated;

        let objective = inertia(data, &labels, centroids.view());
        trace!(
            "iteration {}: inertia {}, max centroid shift {}",
            n_iter,
            objective,
            max_shift
        );
        inertia_history.push(objective);

        if max_shift <= config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!("converged after {} iterations", n_iter);
    } else {
        warn!(
            "k-means stopped at max_iterations = {} without converging",
            config.max_iterations
        );
    }

    let inertia = inertia_history.last().copied().unwrap_or(0.0);
    Ok(KMeansFit {
        labels,
        centroids: FeatureMatrix::from_array(centroids)?,
        inertia,
        inertia_history,
        n_iter,
        converged,
    })
}

/// Initialize centroids by sampling k distinct rows
fn random_rows(data: ArrayView2<'_, f64>, k: usize, rng: &mut ChaCha20Rng) -> Array2<f64> {
    let chosen = index::sample(rng, data.nrows(), k).into_vec();
    data.select(Axis(0), &chosen)
}

fn kmeans_plus_plus(data: ArrayView2<'_, f64>, k: usize, rng: &mut ChaCha20Rng) -> Array2<f64> {
    let n = data.nrows();
    let mut chosen = Vec::with_capacity(k);
    chosen.push(rng.gen_range(0..n));

    let mut closest: Vec<f64> = data
        .outer_iter()
        .map(|point| distance_sq(point, data.row(chosen[0])))
        .collect();

    while chosen.len() < k {
        let total: f64 = closest.iter().sum();
        let weighted = if total > 0.0 && total.is_finite() {
            let target = rng.gen::<f64>() * total;
            let mut acc = 0.0;
            let mut pick = None;
            for (i, &d) in closest.iter().enumerate() {
                if d > 0.0 {
                    acc += d;
                    pick = Some(i);
                    if acc > target {
                        break;
                    }
                }
            }
            pick
        } else {
            None
        };

        // All remaining rows coincide with a chosen centroid: fall back to a
        // uniform pick among the rows not yet chosen.
        let next = match weighted {
            Some(i) => i,
            None => {
                let remaining: Vec<usize> = (0..n).filter(|i| !chosen.contains(i)).collect();
                match remaining.choose(rng) {
                    Some(&i) => i,
                    None => break,
                }
            }
        };

        chosen.push(next);
        let centroid = data.row(next);
        for (d, point) in closest.iter_mut().zip(data.outer_iter()) {
            *d = d.min(distance_sq(point, centroid));
        }
    }

    data.select(Axis(0), &chosen)
}

/// Recomputes every centroid as the mean of its rows.
///
/// A cluster left without rows takes over one random row from a cluster that
/// has more than one; that row is relabelled and becomes the new centroid.
/// `labels` is updated in place so it stays consistent with the returned
/// centroids.
fn update_centroids(
    data: ArrayView2<'_, f64>,
    labels: &mut [usize],
    previous: ArrayView2<'_, f64>,
    rng: &mut ChaCha20Rng,
) -> Array2<f64> {
    let k = previous.nrows();
    let mut sums = Array2::<f64>::zeros(previous.raw_dim());
    let mut counts = vec![0_usize; k];
    for (point, &label) in data.outer_iter().zip(labels.iter()) {
        let mut sum = sums.row_mut(label);
        sum += &point;
        counts[label] += 1;
    }

    for cluster in 0..k {
        if counts[cluster] > 0 {
            continue;
        }
        let donors: Vec<usize> = (0..labels.len())
            .filter(|&i| counts[labels[i]] > 1)
            .collect();
        let Some(&row) = donors.choose(rng) else {
            continue;
        };
        warn!("cluster {} is empty; re-seeding it with row {}", cluster, row);

        let point = data.row(row);
        let donor = labels[row];
        let mut donor_sum = sums.row_mut(donor);
        donor_sum -= &point;
        counts[donor] -= 1;

        let mut sum = sums.row_mut(cluster);
        sum += &point;
        counts[cluster] = 1;
        labels[row] = cluster;
    }

    for (cluster, mut sum) in sums.outer_iter_mut().enumerate() {
        if counts[cluster] == 0 {
            // No donor was available; keep the previous position.
            sum.assign(&previous.row(cluster));
        } else {
            sum /= counts[cluster] as f64;
        }
    }
    sums
}

/// Index and squared distance of the closest centroid; lowest index on ties.
fn nearest_centroid(point: ArrayView1<'_, f64>, centroids: ArrayView2<'_, f64>) -> (usize, f64) {
    let mut best_cluster = 0;
    let mut best_dist = f64::INFINITY;
    for (cluster_idx, centroid) in centroids.outer_iter().enumerate() {
        let dist = distance_sq(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_cluster = cluster_idx;
        }
    }
    (best_cluster, best_dist)
}

fn inertia(data: ArrayView2<'_, f64>, labels: &[usize], centroids: ArrayView2<'_, f64>) -> f64 {
    data.outer_iter()
        .zip(labels.iter())
        .map(|(point, &label)| distance_sq(point, centroids.row(label)))
        .sum()
}

/// Compute the squared Euclidean distance between two points of the same dimension.
/// Using squared distance to avoid unnecessary sqrt computations during comparisons.
fn distance_sq(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (&x, &y)| acc + (x - y).powi(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use proptest::prelude::*;

    fn matrix<R: AsRef<[f64]>>(rows: &[R]) -> FeatureMatrix {
        FeatureMatrix::from_rows(rows).unwrap()
    }

    fn two_groups() -> FeatureMatrix {
        matrix(&[
            [1.0, 2.0],
            [1.5, 1.8],
            [1.2, 2.2],
            [8.0, 8.0],
            [8.5, 7.5],
            [7.8, 8.3],
        ])
    }

    #[test]
    fn test_invalid_k() {
        let data = matrix(&[[1.0, 2.0], [2.0, 3.0]]);

        let too_many = KMeansConfig::new(5);
        assert!(matches!(
            kmeans(&data, &too_many),
            Err(Error::InvalidConfiguration(_))
        ));

        let too_few = KMeansConfig::new(1);
        assert!(matches!(
            kmeans(&data, &too_few),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_iteration_and_tolerance_settings() {
        assert!(KMeansConfig::new(2).with_max_iterations(0).validate(4).is_err());
        assert!(KMeansConfig::new(2).with_tolerance(-1e-3).validate(4).is_err());
        assert!(KMeansConfig::new(2).with_tolerance(f64::NAN).validate(4).is_err());
        assert!(KMeansConfig::new(2).with_n_init(0).validate(4).is_err());
        assert!(KMeansConfig::new(2).with_tolerance(0.0).validate(4).is_ok());
        assert!(KMeansConfig::new(4).validate(4).is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = KMeansConfig::default();
        assert_eq!(config.k, DEFAULT_CLUSTERS);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.max_iterations, 300);
        assert_eq!(config.init, Init::RandomRows);
        assert_eq!(config.n_init, 1);
    }

    #[test]
    fn test_basic_run() {
        let data = two_groups();
        let config = KMeansConfig::new(2).with_max_iterations(50).with_tolerance(1e-4);
        let fit = kmeans(&data, &config).unwrap();

        assert_eq!(fit.labels().len(), 6);
        assert_eq!(fit.k(), 2);
        assert_eq!(fit.centroids().n_features(), 2);
        assert!(fit.converged());

        let labels = fit.labels();
        assert!(labels[..3].iter().all(|&l| l == labels[0]));
        assert!(labels[3..].iter().all(|&l| l == labels[3]));
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn test_scenario_grouping_and_centroids() {
        let data = matrix(&[[20.0, 1000.0], [22.0, 1100.0], [60.0, 5000.0], [62.0, 5200.0]]);
        let (labels, centroids) = fit_predict(&data, 2, 42, 100, 1e-4).unwrap();

        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);

        let low = centroids.row(labels[0]);
        let high = centroids.row(labels[2]);
        assert_relative_eq!(low[0], 21.0, max_relative = 1e-12);
        assert_relative_eq!(low[1], 1050.0, max_relative = 1e-12);
        assert_relative_eq!(high[0], 61.0, max_relative = 1e-12);
        assert_relative_eq!(high[1], 5100.0, max_relative = 1e-12);
    }

    #[test]
    fn test_k_equals_n() {
        let data = matrix(&[[0.0, 0.0], [1.0, 5.0], [-3.0, 2.0], [4.0, -1.0]]);
        for init in [Init::RandomRows, Init::KMeansPlusPlus] {
            let config = KMeansConfig::new(4).with_init(init).with_max_iterations(100);
            let fit = kmeans(&data, &config).unwrap();

            assert!(fit.converged());
            assert_eq!(fit.n_iter(), 1);
            assert_eq!(fit.inertia(), 0.0);

            let mut seen = fit.labels().to_vec();
            seen.sort_unstable();
            assert_eq!(seen, vec![0, 1, 2, 3]);
            for (i, &label) in fit.labels().iter().enumerate() {
                assert_eq!(fit.centroids().row(label), data.row(i));
            }
        }
    }

    #[test]
    fn test_empty_cluster_is_reseeded() {
        // Two identical rows become identical initial centroids; the second
        // one loses every row in the first assignment.
        let data = matrix(&[[0.0, 0.0], [0.0, 0.0], [5.0, 5.0]]);
        for seed in 0..20 {
            let fit = kmeans(&data, &KMeansConfig::new(3).with_seed(seed)).unwrap();

            let mut counts = vec![0; 3];
            for &label in fit.labels() {
                counts[label] += 1;
            }
            assert_eq!(counts, vec![1, 1, 1], "seed {}", seed);
            assert!(fit.centroids().view().iter().all(|v| v.is_finite()));
        }
    }

    #[test]
    fn test_update_reseeds_from_multi_member_cluster() {
        let data = array![[0.0, 0.0], [1.0, 0.0], [9.0, 9.0]];
        let previous = array![[0.5, 0.0], [9.0, 9.0], [100.0, 100.0]];
        let mut labels = vec![0, 0, 1];
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        let updated = update_centroids(data.view(), &mut labels, previous.view(), &mut rng);

        // Only cluster 0 had a spare row to give away.
        assert_eq!(labels[2], 1);
        assert!(labels[0] == 2 || labels[1] == 2);
        let moved = if labels[0] == 2 { 0 } else { 1 };
        assert_eq!(updated.row(2), data.row(moved));
        assert_eq!(updated.row(0), data.row(1 - moved));
        assert_eq!(updated.row(1), data.row(2));
    }

    #[test]
    fn test_max_iterations_bound() {
        let data = two_groups();
        let config = KMeansConfig::new(3).with_max_iterations(1).with_tolerance(0.0);
        let fit = kmeans(&data, &config).unwrap();
        assert_eq!(fit.n_iter(), 1);
        assert_eq!(fit.inertia_history().len(), 1);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let data = two_groups();
        for init in [Init::RandomRows, Init::KMeansPlusPlus] {
            let config = KMeansConfig::new(3).with_seed(11).with_init(init);
            let first = kmeans(&data, &config).unwrap();
            let second = kmeans(&data, &config).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_kmeans_plus_plus_picks_distinct_rows() {
        let data = matrix(&[[0.0], [0.0], [0.0], [10.0]]);
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let centroids = kmeans_plus_plus(data.view(), 3, &mut rng);
        assert_eq!(centroids.nrows(), 3);
        // the far point is either drawn first or holds all the weight afterwards
        assert!(centroids.column(0).iter().any(|&v| v == 10.0));
    }

    #[test]
    fn test_more_restarts_never_worse() {
        let data = matrix(&[
            [0.0, 0.0],
            [0.5, 0.2],
            [4.0, 4.0],
            [4.2, 3.9],
            [9.0, 0.0],
            [9.1, 0.4],
            [0.2, 9.0],
            [0.0, 9.3],
        ]);
        for seed in 0..10 {
            let single = kmeans(&data, &KMeansConfig::new(4).with_seed(seed)).unwrap();
            let multi =
                kmeans(&data, &KMeansConfig::new(4).with_seed(seed).with_n_init(5)).unwrap();
            assert!(multi.inertia() <= single.inertia());
        }
    }

    #[test]
    fn test_predict_nearest_and_tie_break() {
        let fit = KMeansFit {
            labels: vec![0, 1],
            centroids: matrix(&[[1.0, 0.0], [-1.0, 0.0]]),
            inertia: 0.0,
            inertia_history: vec![0.0],
            n_iter: 1,
            converged: true,
        };
        let points = matrix(&[[0.0, 0.0], [-2.0, 1.0], [3.0, 3.0]]);
        assert_eq!(fit.predict(&points).unwrap(), vec![0, 1, 0]);

        let wrong_width = matrix(&[[0.0, 0.0, 0.0]]);
        assert!(matches!(
            fit.predict(&wrong_width),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_predict_matches_training_labels() {
        let data = two_groups();
        let fit = kmeans(&data, &KMeansConfig::new(2)).unwrap();
        assert_eq!(fit.predict(&data).unwrap(), fit.labels());
    }

    fn dataset() -> impl Strategy<Value = (Vec<Vec<f64>>, usize, u64)> {
        (2usize..30, 1usize..4).prop_flat_map(|(n, d)| {
            (
                prop::collection::vec(prop::collection::vec(-100.0f64..100.0, d), n),
                2..=n,
                any::<u64>(),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_labels_cover_rows((rows, k, seed) in dataset()) {
            let data = FeatureMatrix::from_rows(&rows).unwrap();
            let fit = kmeans(&data, &KMeansConfig::new(k).with_seed(seed)).unwrap();

            prop_assert_eq!(fit.labels().len(), rows.len());
            prop_assert!(fit.labels().iter().all(|&l| l < k));
            prop_assert_eq!(fit.centroids().n_rows(), k);
            prop_assert_eq!(fit.centroids().n_features(), rows[0].len());
        }

        #[test]
        fn prop_deterministic((rows, k, seed) in dataset()) {
            let data = FeatureMatrix::from_rows(&rows).unwrap();
            let config = KMeansConfig::new(k).with_seed(seed).with_init(Init::KMeansPlusPlus);
            prop_assert_eq!(kmeans(&data, &config).unwrap(), kmeans(&data, &config).unwrap());
        }

        #[test]
        fn prop_objective_non_increasing((rows, k, seed) in dataset()) {
            let data = FeatureMatrix::from_rows(&rows).unwrap();
            let config = KMeansConfig::new(k).with_seed(seed).with_max_iterations(25);
            let fit = kmeans(&data, &config).unwrap();

            prop_assert!(fit.n_iter() <= 25);
            for pair in fit.inertia_history().windows(2) {
                prop_assert!(pair[1] <= pair[0] + 1e-9 * pair[0].max(1.0));
            }
        }
    }
}
