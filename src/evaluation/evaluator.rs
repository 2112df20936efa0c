//! Tour evaluator that computes per-leg weights and total travel cost.

use crate::error::{Result, RouteError};
use crate::graph::{Location, WeightedGraph};
use crate::models::TourLeg;

/// Evaluates stop sequences against a graph.
///
/// The evaluator is a pure cost accumulator: it does not check that a
/// sequence is closed or visits every location, so it also prices partial
/// or externally supplied tours.
///
/// Consecutive identical stops are rejected with
/// [`RouteError::InvalidSelfLookup`], except in a single-location graph
/// where the closed tour `[start, start]` costs zero.
///
/// # Examples
///
/// ```
/// use warehouse_route::graph::build_graph;
/// use warehouse_route::evaluation::TourEvaluator;
///
/// let graph = build_graph(
///     vec!["A", "B", "C"],
///     vec![vec![0.0, 3.0, 4.0], vec![3.0, 0.0, 5.0], vec![4.0, 5.0, 0.0]],
/// )
/// .unwrap();
/// let evaluator = TourEvaluator::new(&graph);
/// assert_eq!(evaluator.total_distance(&["A", "B", "C", "A"]), Ok(12.0));
/// assert_eq!(evaluator.legs(&["B", "C"]).unwrap()[0].weight, 5.0);
/// ```
pub struct TourEvaluator<'a, L> {
    graph: &'a WeightedGraph<L>,
}

impl<'a, L: Location> TourEvaluator<'a, L> {
    /// Creates a new evaluator over `graph`.
    pub fn new(graph: &'a WeightedGraph<L>) -> Self {
        Self { graph }
    }

    /// Sum of the weights between consecutive stops.
    ///
    /// Sequences with fewer than two stops cost `0.0` once every stop is
    /// known to the graph.
    pub fn total_distance(&self, stops: &[L]) -> Result<f64> {
        self.check_members(stops)?;
        let mut total = 0.0;
        for pair in stops.windows(2) {
            total += self.leg_weight(&pair[0], &pair[1])?;
        }
        Ok(total)
    }

    /// One [`TourLeg`] per consecutive pair of stops.
    pub fn legs(&self, stops: &[L]) -> Result<Vec<TourLeg<L>>> {
        self.check_members(stops)?;
        stops
            .windows(2)
            .map(|pair| {
                Ok(TourLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    weight: self.leg_weight(&pair[0], &pair[1])?,
                })
            })
            .collect()
    }

    fn check_members(&self, stops: &[L]) -> Result<()> {
        match stops.iter().find(|s| !self.graph.contains(s)) {
            Some(unknown) => Err(RouteError::UnknownLocation(unknown.to_string())),
            None => Ok(()),
        }
    }

    fn leg_weight(&self, from: &L, to: &L) -> Result<f64> {
        if from == to && self.graph.len() == 1 {
            return Ok(0.0);
        }
        self.graph.weight(from, to)
    }
}

/// Total travel cost of `stops` over `graph`.
///
/// See [`TourEvaluator::total_distance`].
pub fn total_distance<L: Location>(graph: &WeightedGraph<L>, stops: &[L]) -> Result<f64> {
    TourEvaluator::new(graph).total_distance(stops)
}

/// Per-leg view of `stops` over `graph`, as consumed by renderers.
///
/// See [`TourEvaluator::legs`].
pub fn tour_legs<L: Location>(graph: &WeightedGraph<L>, stops: &[L]) -> Result<Vec<TourLeg<L>>> {
    TourEvaluator::new(graph).legs(stops)
}
