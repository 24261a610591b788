pub mod classic;
pub mod matrix;
pub mod pipeline;
pub mod preprocessing;
pub mod report;

pub use classic::*;
pub use matrix::FeatureMatrix;
pub use pipeline::{cluster_features, ClusteringReport};
pub use preprocessing::StandardScaler;
pub use report::{cluster_sizes, label_rows, unscale_centroids, LabeledRow};
