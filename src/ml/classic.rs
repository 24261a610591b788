pub mod k_means;

// Re-export public types and functions
pub use k_means::{
    fit_predict, kmeans, Init, KMeansConfig, KMeansFit, DEFAULT_CLUSTERS, DEFAULT_SEED,
    MAX_SUGGESTED_CLUSTERS, MIN_CLUSTERS,
};
