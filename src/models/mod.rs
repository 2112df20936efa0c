//! Domain model types for picking routes.
//!
//! A [`Tour`] is the ordered, closed sequence of locations a picker walks;
//! a [`TourLeg`] is one step of it together with its travel cost.

mod tour;

pub use tour::{Tour, TourLeg};
