//! Tour cost evaluation.

mod evaluator;

pub use evaluator::{total_distance, tour_legs, TourEvaluator};
