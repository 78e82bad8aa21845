//! Strategy selection and the single optimization entry point.
//!
//! # Key Types
//!
//! - [`Algorithm`]: the closed set of search strategies
//! - [`OptimizerConfig`]: per-strategy parameters plus the run seed
//! - [`RouteOptimizer`]: validates input, builds the distance matrix once,
//!   dispatches to the chosen strategy
//! - [`RouteSolution`]: ordered stop indices and closed-tour distance

mod algorithm;
mod config;
mod solver;

pub use algorithm::Algorithm;
pub use config::OptimizerConfig;
pub use solver::{optimize, RouteOptimizer, RouteSolution};
