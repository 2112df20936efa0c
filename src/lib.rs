//! # warehouse-route
//!
//! Picking-route construction for warehouses: a complete weighted graph over
//! labeled picking locations, a nearest-neighbor tour heuristic, and tour
//! cost evaluation.
//!
//! ## Modules
//!
//! - [`graph`] — Location labels and the immutable `WeightedGraph`
//! - [`distance`] — Validated dense distance matrix
//! - [`models`] — Tour and tour-leg types
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`evaluation`] — Tour cost and per-leg weights
//! - [`plan`] — Serializable request/plan types shared by the CLI and bindings
//! - [`render`] — Text and Graphviz output of a plan
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use warehouse_route::constructive::nearest_neighbor;
//! use warehouse_route::evaluation::total_distance;
//! use warehouse_route::graph::build_graph;
//!
//! let graph = build_graph(
//!     vec!["A", "B", "C"],
//!     vec![vec![0.0, 2.0, 9.0], vec![2.0, 0.0, 6.0], vec![9.0, 6.0, 0.0]],
//! )?;
//! let tour = nearest_neighbor(&graph, &"A")?;
//! assert_eq!(tour.stops(), &["A", "B", "C", "A"]);
//! assert_eq!(total_distance(&graph, tour.stops())?, 17.0);
//! # Ok::<(), warehouse_route::error::RouteError>(())
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod models;
pub mod plan;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, RouteError};
