//! Complete weighted graph over labeled locations.

use std::collections::HashMap;

use super::{GraphOptions, Location};
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};

/// An undirected, complete weighted graph over a set of distinct labels.
///
/// Labels keep their input order; that order defines each label's index
/// into the underlying [`DistanceMatrix`]. The graph is immutable after
/// construction and only reads the off-diagonal entries.
///
/// # Examples
///
/// ```
/// use warehouse_route::graph::WeightedGraph;
/// use warehouse_route::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 7.0],
///     vec![7.0, 0.0],
/// ])
/// .unwrap();
/// let graph = WeightedGraph::new(vec!["dock", "aisle-3"], dm).unwrap();
/// assert_eq!(graph.weight(&"dock", &"aisle-3"), Ok(7.0));
/// assert!(graph.weight(&"dock", &"dock").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<L> {
    labels: Vec<L>,
    index: HashMap<L, usize>,
    distances: DistanceMatrix,
}

impl<L: Location> WeightedGraph<L> {
    /// Builds a graph with default [`GraphOptions`].
    pub fn new(labels: Vec<L>, distances: DistanceMatrix) -> Result<Self> {
        Self::with_options(labels, distances, &GraphOptions::default())
    }

    /// Builds a graph from labels and a matrix whose row/column order
    /// matches `labels`.
    pub fn with_options(
        labels: Vec<L>,
        distances: DistanceMatrix,
        options: &GraphOptions,
    ) -> Result<Self> {
        if labels.is_empty() {
            return Err(RouteError::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(RouteError::DuplicateLocation(label.to_string()));
            }
        }

        if distances.size() != labels.len() {
            return Err(RouteError::malformed(format!(
                "matrix is {0}x{0} but there are {1} locations",
                distances.size(),
                labels.len()
            )));
        }

        if let Some(tol) = options.symmetry_tolerance {
            if let Some((i, j)) = distances.asymmetric_pair(tol) {
                return Err(RouteError::malformed(format!(
                    "weights between {} and {} differ ({} vs {})",
                    labels[i],
                    labels[j],
                    distances.get(i, j),
                    distances.get(j, i)
                )));
            }
        }

        Ok(Self {
            labels,
            index,
            distances,
        })
    }

    /// Returns the weight between two distinct locations.
    ///
    /// Fails with [`RouteError::UnknownLocation`] if either label is absent
    /// and with [`RouteError::InvalidSelfLookup`] if `a == b`.
    pub fn weight(&self, a: &L, b: &L) -> Result<f64> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        if i == j {
            return Err(RouteError::InvalidSelfLookup(a.to_string()));
        }
        Ok(self.distances.get(i, j))
    }

    /// Position of `label` in the construction order.
    pub fn index_of(&self, label: &L) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns `true` if `label` is one of the graph's locations.
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    /// Labels in construction order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Underlying distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Iterates every unordered pair `(a, b, weight)` once, with `a` before
    /// `b` in construction order.
    pub fn edges(&self) -> impl Iterator<Item = (&L, &L, f64)> + '_ {
        let n = self.labels.len();
        (0..n).flat_map(move |i| {
            ((i + 1)..n).map(move |j| (&self.labels[i], &self.labels[j], self.distances.get(i, j)))
        })
    }

    fn require(&self, label: &L) -> Result<usize> {
        self.index_of(label)
            .ok_or_else(|| RouteError::UnknownLocation(label.to_string()))
    }
}

/// Builds a graph from labels and nested matrix rows.
///
/// Shorthand for [`DistanceMatrix::from_rows`] followed by
/// [`WeightedGraph::new`]. An empty label set is reported as
/// [`RouteError::EmptyGraph`] before the matrix is inspected.
pub fn build_graph<L: Location>(labels: Vec<L>, rows: Vec<Vec<f64>>) -> Result<WeightedGraph<L>> {
    build_graph_with(labels, rows, &GraphOptions::default())
}

/// [`build_graph`] with explicit options.
pub fn build_graph_with<L: Location>(
    labels: Vec<L>,
    rows: Vec<Vec<f64>>,
    options: &GraphOptions,
) -> Result<WeightedGraph<L>> {
    if labels.is_empty() {
        return Err(RouteError::EmptyGraph);
    }
    WeightedGraph::with_options(labels, DistanceMatrix::from_rows(rows)?, options)
}
