//! Distance matrices.
//!
//! Provides a validated dense distance matrix for picking locations.

mod matrix;

pub use matrix::DistanceMatrix;
