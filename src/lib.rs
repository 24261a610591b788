//! Seeded K-Means clustering over standardized numeric features.
//!
//! The crate is split the way a clustering run flows:
//!
//! - [`StandardScaler`] standardizes raw feature columns and can undo it.
//! - [`kmeans`] / [`fit_predict`] partition the scaled rows into `k` clusters.
//! - [`unscale_centroids`] and [`label_rows`] turn the result back into
//!   original units and per-row labels.
//!
//! [`cluster_features`] chains all three. Every entry point is a pure
//! function of its inputs; nothing is cached between calls.
//!
//! ```
//! use kmeans_core::{cluster_features, KMeansConfig};
//!
//! let rows = vec![
//!     vec![25.0, 40_000.0],
//!     vec![27.0, 42_000.0],
//!     vec![45.0, 90_000.0],
//!     vec![47.0, 95_000.0],
//!     vec![65.0, 30_000.0],
//!     vec![67.0, 28_000.0],
//! ];
//! let report = cluster_features(&rows, &KMeansConfig::new(3)).unwrap();
//!
//! assert_eq!(report.rows().len(), 6);
//! assert_eq!(report.centroids().n_rows(), 3);
//! ```

pub mod error;
pub mod ml;

pub use error::{Error, Result};
pub use ml::*;
