//! Distance metrics and matrices.
//!
//! Provides the Manhattan/Euclidean point metric used by the model builder
//! and a dense distance matrix over a node sequence.

mod matrix;
mod metric;

pub use matrix::DistanceMatrix;
pub use metric::{distance, distance_by_name, Geography};
