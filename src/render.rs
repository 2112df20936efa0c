//! Text and Graphviz renderings of a planned route.
//!
//! Renderers only read a [`RoutePlan`] and the graph's edge list; they never
//! recompute the tour.

use std::collections::HashSet;
use std::fmt::Write;

use crate::graph::WeightedGraph;
use crate::plan::RoutePlan;

/// Two-line human-readable summary of a plan.
///
/// ```
/// use warehouse_route::plan::{plan_route, RouteRequest};
/// use warehouse_route::render::render_text;
///
/// let plan = plan_route(&RouteRequest::warehouse_sample()).unwrap();
/// assert_eq!(
///     render_text(&plan),
///     "Optimized Picking Route: A -> B -> E -> C -> F -> D -> A\nTotal Distance: 102.00\n"
/// );
/// ```
pub fn render_text(plan: &RoutePlan) -> String {
    format!(
        "Optimized Picking Route: {}\nTotal Distance: {:.2}\n",
        plan.tour.join(" -> "),
        plan.total_distance
    )
}

/// Graphviz `graph` drawing every location and edge, with the tour's legs
/// highlighted in red.
pub fn render_dot(graph: &WeightedGraph<String>, plan: &RoutePlan) -> String {
    let on_tour: HashSet<(&str, &str)> = plan
        .legs
        .iter()
        .flat_map(|leg| {
            [
                (leg.from.as_str(), leg.to.as_str()),
                (leg.to.as_str(), leg.from.as_str()),
            ]
        })
        .collect();

    let mut out = String::new();
    out.push_str("graph warehouse {\n");
    let _ = writeln!(
        out,
        "  label=\"Warehouse Picking Route: Total Distance = {:.2}\";",
        plan.total_distance
    );
    out.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    for label in graph.labels() {
        let _ = writeln!(out, "  {};", quote(label));
    }
    for (a, b, w) in graph.edges() {
        let style = if on_tour.contains(&(a.as_str(), b.as_str())) {
            "color=red, penwidth=2"
        } else {
            "color=grey"
        };
        let _ = writeln!(
            out,
            "  {} -- {} [label=\"{}\", {}];",
            quote(a),
            quote(b),
            w,
            style
        );
    }
    out.push_str("}\n");
    out
}

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}
