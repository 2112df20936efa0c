//! Nearest-neighbor constructive heuristic.
//!
//! Builds a single closed tour greedily: starting from the given location,
//! always walk to the nearest unvisited location, then return to the start.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in the graph's label order and only a strictly
//! shorter distance replaces the current choice, so among equally near
//! locations the one with the lowest label index wins.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.

use crate::error::{Result, RouteError};
use crate::graph::{Location, WeightedGraph};
use crate::models::Tour;

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// The result visits every location exactly once and returns to `start`,
/// so it has `graph.len() + 1` stops. A single-location graph yields
/// `[start, start]`.
///
/// # Errors
///
/// * [`RouteError::EmptyGraph`] if the graph has no locations
/// * [`RouteError::UnknownStart`] if `start` is not in the graph
///
/// # Examples
///
/// ```
/// use warehouse_route::graph::build_graph;
/// use warehouse_route::constructive::nearest_neighbor;
///
/// let graph = build_graph(
///     vec!["dock", "a1", "a2", "a3"],
///     vec![
///         vec![0.0, 1.0, 2.0, 3.0],
///         vec![1.0, 0.0, 1.0, 2.0],
///         vec![2.0, 1.0, 0.0, 1.0],
///         vec![3.0, 2.0, 1.0, 0.0],
///     ],
/// )
/// .unwrap();
///
/// let tour = nearest_neighbor(&graph, &"dock").unwrap();
/// assert_eq!(tour.stops(), &["dock", "a1", "a2", "a3", "dock"]);
/// ```
pub fn nearest_neighbor<L: Location>(graph: &WeightedGraph<L>, start: &L) -> Result<Tour<L>> {
    if graph.is_empty() {
        return Err(RouteError::EmptyGraph);
    }
    let first = graph
        .index_of(start)
        .ok_or_else(|| RouteError::UnknownStart(start.to_string()))?;

    let n = graph.len();
    let labels = graph.labels();
    let distances = graph.distances();

    let mut visited = vec![false; n];
    visited[first] = true;

    let mut stops = Vec::with_capacity(n + 1);
    stops.push(labels[first].clone());
    let mut current = first;

    let unvisited = |visited: &[bool]| (0..n).filter(|&i| !visited[i]).collect::<Vec<_>>();

    while let Some(next) = distances.nearest_neighbor(current, unvisited(&visited)) {
        visited[next] = true;
        stops.push(labels[next].clone());
        current = next;
    }

    stops.push(labels[first].clone());
    Ok(Tour::from_closed(stops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_graph;

    fn line_graph() -> WeightedGraph<&'static str> {
        // Points on a line at x = 0, 1, 2, 3
        build_graph(
            vec!["P0", "P1", "P2", "P3"],
            vec![
                vec![0.0, 1.0, 2.0, 3.0],
                vec![1.0, 0.0, 1.0, 2.0],
                vec![2.0, 1.0, 0.0, 1.0],
                vec![3.0, 2.0, 1.0, 0.0],
            ],
        )
        .expect("valid graph")
    }

    #[test]
    fn test_nn_visits_in_line_order() {
        let tour = nearest_neighbor(&line_graph(), &"P0").expect("tour");
        assert_eq!(tour.stops(), &["P0", "P1", "P2", "P3", "P0"]);
    }

    #[test]
    fn test_nn_from_middle() {
        // From P2: P1 and P3 tie at 1.0, P1 has the lower index.
        let tour = nearest_neighbor(&line_graph(), &"P2").expect("tour");
        assert_eq!(tour.stops(), &["P2", "P1", "P0", "P3", "P2"]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let g = build_graph(
            vec!["depot", "far", "near"],
            vec![
                vec![0.0, 10.0, 1.0],
                vec![10.0, 0.0, 9.0],
                vec![1.0, 9.0, 0.0],
            ],
        )
        .expect("valid graph");
        let tour = nearest_neighbor(&g, &"depot").expect("tour");
        assert_eq!(tour.stops(), &["depot", "near", "far", "depot"]);
    }

    #[test]
    fn test_nn_tie_breaks_by_label_order() {
        let g = build_graph(
            vec!["S", "X", "Y"],
            vec![
                vec![0.0, 5.0, 5.0],
                vec![5.0, 0.0, 2.0],
                vec![5.0, 2.0, 0.0],
            ],
        )
        .expect("valid graph");
        let tour = nearest_neighbor(&g, &"S").expect("tour");
        assert_eq!(tour.stops(), &["S", "X", "Y", "S"]);
    }

    #[test]
    fn test_nn_single_location() {
        let g = build_graph(vec!["A"], vec![vec![0.0]]).expect("valid graph");
        let tour = nearest_neighbor(&g, &"A").expect("tour");
        assert_eq!(tour.stops(), &["A", "A"]);
    }

    #[test]
    fn test_nn_unknown_start() {
        let err = nearest_neighbor(&line_graph(), &"P9").unwrap_err();
        assert_eq!(err, RouteError::UnknownStart("P9".into()));
    }

    #[test]
    fn test_nn_is_deterministic() {
        let g = line_graph();
        let a = nearest_neighbor(&g, &"P1").expect("tour");
        let b = nearest_neighbor(&g, &"P1").expect("tour");
        assert_eq!(a, b);
    }

    #[test]
    fn test_nn_zero_weights() {
        let g = build_graph(
            vec!["A", "B", "C"],
            vec![vec![0.0; 3], vec![0.0; 3], vec![0.0; 3]],
        )
        .expect("valid graph");
        let tour = nearest_neighbor(&g, &"C").expect("tour");
        assert_eq!(tour.stops(), &["C", "A", "B", "C"]);
    }
}
