//! Feature preprocessing applied before clustering.
//!
//! Distance-based methods such as k-means are sensitive to feature magnitude:
//! an income column in the thousands would otherwise swamp an age column in
//! the tens. Standardizing every column to zero mean and unit variance puts
//! the features on an equal footing.

pub mod standard_scaler;

pub use standard_scaler::StandardScaler;
