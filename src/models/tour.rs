//! Tour and tour-leg types.

use serde::{Deserialize, Serialize};

/// A closed route over locations: starts and ends at the same location.
///
/// Tours are produced by the constructive heuristics and cannot be modified
/// afterwards. They store labels only, so they outlive the graph they were
/// built from.
///
/// # Examples
///
/// ```
/// use warehouse_route::graph::build_graph;
/// use warehouse_route::constructive::nearest_neighbor;
///
/// let graph = build_graph(
///     vec!["A", "B", "C"],
///     vec![vec![0.0, 1.0, 4.0], vec![1.0, 0.0, 2.0], vec![4.0, 2.0, 0.0]],
/// )
/// .unwrap();
/// let tour = nearest_neighbor(&graph, &"A").unwrap();
/// assert_eq!(tour.stops(), &["A", "B", "C", "A"]);
/// assert_eq!(tour.start(), &"A");
/// assert_eq!(tour.num_locations(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tour<L> {
    stops: Vec<L>,
}

impl<L> Tour<L> {
    /// Wraps an already-closed stop sequence. Callers guarantee
    /// `stops.len() >= 2` and `stops.first() == stops.last()`.
    pub(crate) fn from_closed(stops: Vec<L>) -> Self {
        debug_assert!(stops.len() >= 2);
        Self { stops }
    }

    /// All stops in visiting order, including the closing return to start.
    pub fn stops(&self) -> &[L] {
        &self.stops
    }

    /// The start (and end) location.
    pub fn start(&self) -> &L {
        &self.stops[0]
    }

    /// Number of stops including the closing return (N + 1).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a tour holds at least its start twice.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Number of distinct locations visited (N).
    pub fn num_locations(&self) -> usize {
        self.stops.len() - 1
    }

    /// Consumes the tour, returning its stops.
    pub fn into_stops(self) -> Vec<L> {
        self.stops
    }
}

/// One traversed edge of a tour, with its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourLeg<L> {
    /// Location the leg departs from.
    pub from: L,
    /// Location the leg arrives at.
    pub to: L,
    /// Travel cost of the leg.
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_accessors() {
        let t = Tour::from_closed(vec!["A", "C", "B", "A"]);
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
        assert_eq!(t.num_locations(), 3);
        assert_eq!(t.start(), &"A");
        assert_eq!(t.stops(), &["A", "C", "B", "A"]);
        assert_eq!(t.clone().into_stops(), vec!["A", "C", "B", "A"]);
    }

    #[test]
    fn test_single_location_tour() {
        let t = Tour::from_closed(vec!["A", "A"]);
        assert_eq!(t.num_locations(), 1);
        assert_eq!(t.start(), &"A");
    }

    #[test]
    fn test_tour_serializes_as_sequence() {
        let t = Tour::from_closed(vec!["A".to_string(), "B".to_string(), "A".to_string()]);
        let json = serde_json::to_string(&t).expect("serialize");
        assert_eq!(json, r#"["A","B","A"]"#);
    }

    #[test]
    fn test_leg_equality() {
        let a = TourLeg {
            from: "A",
            to: "B",
            weight: 3.5,
        };
        assert_eq!(a.clone(), a);
    }
}
