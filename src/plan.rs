//! Serializable request/response types for a full route computation.
//!
//! [`plan_route`] is the single entry point shared by the command-line
//! tool and the FFI/WASM bindings: build the graph, run nearest-neighbor
//! from the requested start, and price the result.

use serde::{Deserialize, Serialize};

use crate::constructive::nearest_neighbor;
use crate::error::Result;
use crate::evaluation::TourEvaluator;
use crate::graph::{build_graph_with, GraphOptions, WeightedGraph};
use crate::models::{Tour, TourLeg};

/// Input for [`plan_route`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Location labels; their order fixes the matrix row/column order.
    pub locations: Vec<String>,
    /// Square matrix of pairwise travel costs.
    pub distances: Vec<Vec<f64>>,
    /// Location the tour starts and ends at.
    pub start: String,
    /// Reject asymmetric matrices beyond this tolerance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry_tolerance: Option<f64>,
}

impl RouteRequest {
    /// The six-point warehouse layout, starting at `A`.
    pub fn warehouse_sample() -> Self {
        Self {
            locations: ["A", "B", "C", "D", "E", "F"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            distances: vec![
                vec![0.0, 10.0, 15.0, 20.0, 10.0, 25.0],
                vec![10.0, 0.0, 35.0, 25.0, 17.0, 30.0],
                vec![15.0, 35.0, 0.0, 30.0, 15.0, 28.0],
                vec![20.0, 25.0, 30.0, 0.0, 18.0, 12.0],
                vec![10.0, 17.0, 15.0, 18.0, 0.0, 20.0],
                vec![25.0, 30.0, 28.0, 12.0, 20.0, 0.0],
            ],
            start: "A".to_string(),
            symmetry_tolerance: None,
        }
    }

    /// Graph construction options implied by this request.
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            symmetry_tolerance: self.symmetry_tolerance,
        }
    }

    /// Builds the weighted graph described by this request.
    pub fn build_graph(&self) -> Result<WeightedGraph<String>> {
        build_graph_with(
            self.locations.clone(),
            self.distances.clone(),
            &self.graph_options(),
        )
    }
}

/// Output of [`plan_route`]: the tour, its legs and its cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Stops in visiting order, starting and ending at the start location.
    pub tour: Vec<String>,
    /// One entry per consecutive pair of stops.
    pub legs: Vec<TourLeg<String>>,
    /// Sum of all leg weights.
    pub total_distance: f64,
}

impl RoutePlan {
    /// Prices `tour` over `graph`.
    pub fn from_tour(graph: &WeightedGraph<String>, tour: &Tour<String>) -> Result<Self> {
        let legs = TourEvaluator::new(graph).legs(tour.stops())?;
        let total_distance = legs.iter().map(|leg| leg.weight).sum();
        Ok(Self {
            tour: tour.stops().to_vec(),
            legs,
            total_distance,
        })
    }
}

/// Builds the graph, constructs a nearest-neighbor tour and prices it.
///
/// # Examples
///
/// ```
/// use warehouse_route::plan::{plan_route, RouteRequest};
///
/// let plan = plan_route(&RouteRequest::warehouse_sample()).unwrap();
/// assert_eq!(plan.tour.join(" -> "), "A -> B -> E -> C -> F -> D -> A");
/// assert_eq!(plan.total_distance, 102.0);
/// ```
pub fn plan_route(request: &RouteRequest) -> Result<RoutePlan> {
    let graph = request.build_graph()?;
    let tour = nearest_neighbor(&graph, &request.start)?;
    RoutePlan::from_tour(&graph, &tour)
}
