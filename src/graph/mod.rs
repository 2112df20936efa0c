//! Weighted graph over picking locations.
//!
//! A [`WeightedGraph`] is built once from an ordered label set and a square
//! distance matrix and answers weight lookups between any two distinct labels.

use std::fmt::Display;
use std::hash::Hash;

mod weighted;

pub use weighted::{build_graph, build_graph_with, WeightedGraph};

/// A location label.
///
/// Any cloneable, totally ordered, hashable and printable type qualifies.
pub trait Location: Clone + Eq + Hash + Ord + Display {}

impl<T: Clone + Eq + Hash + Ord + Display> Location for T {}

/// Construction options for [`WeightedGraph`].
///
/// # Examples
///
/// ```
/// use warehouse_route::graph::GraphOptions;
///
/// let strict = GraphOptions::default().with_symmetry_tolerance(1e-9);
/// assert_eq!(strict.symmetry_tolerance, Some(1e-9));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphOptions {
    /// When set, reject matrices with `|m[i][j] - m[j][i]|` above this value.
    pub symmetry_tolerance: Option<f64>,
}

impl GraphOptions {
    /// Enables the symmetry check with the given tolerance.
    pub fn with_symmetry_tolerance(mut self, tol: f64) -> Self {
        self.symmetry_tolerance = Some(tol);
        self
    }
}
