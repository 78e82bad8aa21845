//! Input validation, dispatch and the uniform solution shape.

use super::algorithm::Algorithm;
use super::config::OptimizerConfig;
use crate::aco::AcoRunner;
use crate::distance::{DistanceMatrix, Location};
use crate::error::{Result, RouteError};
use crate::evaluation::is_permutation;
use crate::ga::GaRunner;
use crate::pso::PsoRunner;
use crate::random::rng_from_seed;
use crate::sa::SaRunner;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Best tour found by a strategy.
///
/// `route` is a permutation of `0..n` naming indices into the caller's
/// location list; `distance` is the closed-tour length of that order.
/// A single location yields `route = [0]`, `distance = 0.0`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteSolution {
    pub route: Vec<usize>,
    pub distance: f64,
    pub algorithm: Algorithm,
}

impl RouteSolution {
    /// Whether the tour fits within `effective_range`.
    pub fn is_feasible(&self, effective_range: f64) -> bool {
        self.distance <= effective_range
    }

    /// Reorders `items` (indexed like the input locations) into tour order.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than the largest index in the route.
    pub fn ordered<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.route.iter().map(|&i| items[i].clone()).collect()
    }
}

/// Runs one of the four strategies against a location set.
///
/// The distance matrix is built once per call and shared read-only with
/// the strategy. All randomness comes from a single RNG seeded from
/// [`OptimizerConfig::seed`].
///
/// # Examples
///
/// ```
/// use u_evroute::distance::Location;
/// use u_evroute::optimizer::{Algorithm, OptimizerConfig, RouteOptimizer};
///
/// let square = [
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
///     Location::new(0.0, 1.0),
/// ];
/// let optimizer = RouteOptimizer::new(OptimizerConfig::default().with_seed(42));
/// let solution = optimizer
///     .optimize(&square, 100.0, Algorithm::SimulatedAnnealing)
///     .unwrap();
/// assert_eq!(solution.route.len(), 4);
/// assert!(solution.is_feasible(100.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteOptimizer {
    config: OptimizerConfig,
}

impl RouteOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes the visiting order with the given strategy.
    ///
    /// `effective_range` is validated but never constrains the search.
    pub fn optimize(
        &self,
        locations: &[Location],
        effective_range: f64,
        algorithm: Algorithm,
    ) -> Result<RouteSolution> {
        self.optimize_with_cancel(locations, effective_range, algorithm, None)
    }

    /// Like [`optimize`](Self::optimize), taking the strategy by identifier.
    ///
    /// Unknown identifiers are rejected before any input is inspected.
    pub fn optimize_named(
        &self,
        locations: &[Location],
        effective_range: f64,
        algorithm: &str,
    ) -> Result<RouteSolution> {
        let algorithm: Algorithm = algorithm.parse()?;
        self.optimize(locations, effective_range, algorithm)
    }

    /// Optimizes with an optional cancellation token.
    ///
    /// Raising the flag stops the strategy at its next iteration boundary;
    /// the best tour found so far is still returned.
    pub fn optimize_with_cancel(
        &self,
        locations: &[Location],
        effective_range: f64,
        algorithm: Algorithm,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RouteSolution> {
        validate_input(locations, effective_range)?;

        let started = Instant::now();
        info!(
            event = "optimize_start",
            algorithm = %algorithm,
            locations = locations.len(),
            effective_range
        );

        let matrix = DistanceMatrix::from_locations(locations);
        let mut rng = rng_from_seed(self.config.seed);
        let (route, distance) = self.dispatch(&matrix, algorithm, &mut rng, cancel)?;

        debug_assert!(is_permutation(&route, locations.len()));

        info!(
            event = "optimize_end",
            algorithm = %algorithm,
            distance,
            feasible = distance <= effective_range,
            duration_ms = started.elapsed().as_millis() as u64
        );

        Ok(RouteSolution {
            route,
            distance,
            algorithm,
        })
    }

    fn dispatch<R: Rng>(
        &self,
        matrix: &DistanceMatrix,
        algorithm: Algorithm,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<(Vec<usize>, f64)> {
        let config = &self.config;
        Ok(match algorithm {
            Algorithm::SimulatedAnnealing => {
                let r = SaRunner::run_with_cancel(matrix, &config.sa, rng, cancel)?;
                (r.best, r.best_length)
            }
            Algorithm::Genetic => {
                let r = GaRunner::run_with_cancel(matrix, &config.ga, rng, cancel)?;
                (r.best, r.best_length)
            }
            Algorithm::AntColony => {
                let r = AcoRunner::run_with_cancel(matrix, &config.aco, rng, cancel)?;
                (r.best, r.best_length)
            }
            Algorithm::ParticleSwarm => {
                let r = PsoRunner::run_with_cancel(matrix, &config.pso, rng, cancel)?;
                (r.best, r.best_length)
            }
        })
    }
}

/// Optimizes with default parameters and a fresh seed.
///
/// `algorithm` is one of `SA`, `GA`, `ACO`, `PSO` (case-insensitive).
///
/// # Examples
///
/// ```
/// use u_evroute::distance::Location;
/// use u_evroute::optimizer::optimize;
///
/// let points = [Location::new(0.0, 0.0), Location::new(3.0, 4.0)];
/// let solution = optimize(&points, 50.0, "GA").unwrap();
/// assert!((solution.distance - 10.0).abs() < 1e-12);
/// ```
pub fn optimize(
    locations: &[Location],
    effective_range: f64,
    algorithm: &str,
) -> Result<RouteSolution> {
    RouteOptimizer::default().optimize_named(locations, effective_range, algorithm)
}

fn validate_input(locations: &[Location], effective_range: f64) -> Result<()> {
    if locations.is_empty() {
        return Err(RouteError::InvalidInput(
            "at least one location is required".into(),
        ));
    }
    if !effective_range.is_finite() || effective_range <= 0.0 {
        return Err(RouteError::InvalidInput(format!(
            "effective range must be positive and finite, got {effective_range}"
        )));
    }
    for (i, location) in locations.iter().enumerate() {
        location.validate().map_err(|e| e.at_location(i))?;
    }
    Ok(())
}
