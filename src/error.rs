//! Error types for route optimization.

use thiserror::Error;

/// Errors reported by the optimization engine.
///
/// A returned route whose length exceeds the available range is *not* an
/// error: the engine always reports its best-found tour and the caller
/// decides feasibility (see [`RouteSolution::is_feasible`](crate::optimizer::RouteSolution::is_feasible)).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Empty location set, non-positive range, or malformed coordinates.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Algorithm identifier outside the supported set.
    #[error("unknown algorithm: {0:?} (expected one of SA, GA, ACO, PSO)")]
    UnknownAlgorithm(String),

    /// A strategy configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl RouteError {
    /// Prefixes an input error with the offending location index.
    pub(crate) fn at_location(self, index: usize) -> Self {
        match self {
            RouteError::InvalidInput(msg) => {
                RouteError::InvalidInput(format!("location {index}: {msg}"))
            }
            other => other,
        }
    }
}

/// Result type alias for route optimization.
pub type Result<T> = std::result::Result<T, RouteError>;
