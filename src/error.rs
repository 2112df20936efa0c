//! Error types for graph construction and tour computation.

use thiserror::Error;

/// Errors raised while building a graph or computing a tour over it.
///
/// Every error is detected synchronously at the offending call. Labels are
/// carried in their `Display` form so the error type stays independent of
/// the location type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// The distance matrix has the wrong shape or an invalid entry.
    #[error("malformed distance matrix: {reason}")]
    MalformedMatrix {
        /// What was wrong with the matrix.
        reason: String,
    },

    /// A label appears more than once in the location set.
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// A lookup or tour entry references a label absent from the graph.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// The requested start location is not in the graph.
    #[error("unknown start location: {0}")]
    UnknownStart(String),

    /// The location set is empty.
    #[error("graph has no locations")]
    EmptyGraph,

    /// A weight was requested between a location and itself.
    #[error("invalid self lookup: {0}")]
    InvalidSelfLookup(String),
}

impl RouteError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        RouteError::MalformedMatrix {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RouteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            RouteError::malformed("expected 3 rows, got 2").to_string(),
            "malformed distance matrix: expected 3 rows, got 2"
        );
        assert_eq!(
            RouteError::UnknownStart("Z".into()).to_string(),
            "unknown start location: Z"
        );
        assert_eq!(RouteError::EmptyGraph.to_string(), "graph has no locations");
    }
}
