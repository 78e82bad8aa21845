//! Range-constrained route optimization for electric vehicles.
//!
//! Given stop coordinates and the vehicle's effective range, finds a short
//! closed tour visiting every stop once using one of four metaheuristics:
//!
//! - **Simulated Annealing (SA)**: swap-neighborhood trajectory search with
//!   geometric cooling.
//! - **Genetic Algorithm (GA)**: fitness-proportional selection, ordered
//!   crossover and swap mutation.
//! - **Ant Colony Optimization (ACO)**: pheromone-guided probabilistic tour
//!   construction.
//! - **Particle Swarm Optimization (PSO)**: real-valued velocities decoded
//!   into permutations by priority.
//!
//! All strategies share one [`DistanceMatrix`](distance::DistanceMatrix)
//! and one tour-length function, so distances are comparable across them.
//! Range is never a search constraint: the caller compares
//! [`RouteSolution::distance`](optimizer::RouteSolution) with the range.
//!
//! # Quick Start
//!
//! ```
//! use u_evroute::distance::Location;
//! use u_evroute::optimizer::optimize;
//! use u_evroute::range::{effective_range, RangeConditions};
//!
//! let stops = [
//!     Location::new(0.0, 0.0),
//!     Location::new(4.0, 0.0),
//!     Location::new(4.0, 3.0),
//!     Location::new(0.0, 3.0),
//! ];
//! let range = effective_range(120.0, &RangeConditions::new(60.0, 200.0, 30.0));
//! let solution = optimize(&stops, range, "SA").unwrap();
//! assert_eq!(solution.route.len(), 4);
//! ```

pub mod aco;
pub mod budget;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod optimizer;
pub mod pso;
pub mod random;
pub mod range;
pub mod sa;

pub use error::{Result, RouteError};
pub use optimizer::{optimize, Algorithm, OptimizerConfig, RouteOptimizer, RouteSolution};
