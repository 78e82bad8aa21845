//! ACO colony loop.

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::budget::StopCondition;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use crate::random::{rng_from_seed, weighted_index};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, trace};

/// Floor for edge and tour lengths so coincident stops stay finite.
const HEURISTIC_EPSILON: f64 = 1e-10;

/// Result of an ACO run.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// Shortest tour built by any ant in any iteration.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_length: f64,

    /// Number of colony iterations completed.
    pub iterations: usize,

    /// Whether the run was stopped by cancellation or deadline.
    pub cancelled: bool,

    /// Best length after each completed iteration.
    pub length_history: Vec<f64>,

    /// Pheromone trail at the end of the run.
    pub pheromone: PheromoneMatrix,
}

/// Executes Ant Colony Optimization on a distance matrix.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO, drawing all randomness from `rng`.
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult> {
        Self::run_with_cancel(matrix, config, rng, None)
    }

    /// Runs ACO with an optional cancellation token, checked between iterations.
    pub fn run_with_cancel<R: Rng>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<AcoResult> {
        config.validate().map_err(RouteError::InvalidConfig)?;

        let n = matrix.size();
        if n <= 1 {
            return Ok(AcoResult {
                best: vec![0],
                best_length: 0.0,
                iterations: 0,
                cancelled: false,
                length_history: Vec::new(),
                pheromone: PheromoneMatrix::new(n),
            });
        }

        let stop = StopCondition::new(cancel, config.time_limit_ms);
        let eval = RouteEvaluator::new(matrix);
        let mut pheromone = PheromoneMatrix::new(n);

        let mut best: Option<Vec<usize>> = None;
        let mut best_length = f64::INFINITY;
        let mut iterations = 0usize;
        let mut cancelled = false;
        let mut length_history = Vec::with_capacity(config.iterations);

        debug!(
            event = "aco_start",
            locations = n,
            ants = config.ants,
            iterations = config.iterations
        );

        for _ in 0..config.iterations {
            if stop.should_stop() {
                cancelled = true;
                break;
            }

            // One seed per ant keeps results independent of build order
            let seeds: Vec<u64> = (0..config.ants).map(|_| rng.random()).collect();
            let tours = build_tours(matrix, &pheromone, config, &seeds);

            let mut scored = Vec::with_capacity(tours.len());
            for tour in tours {
                let length = eval.length(&tour);
                if length < best_length {
                    best_length = length;
                    best = Some(tour.clone());
                    trace!(event = "aco_new_best", iteration = iterations, best_length);
                }
                scored.push((tour, length));
            }

            // Barrier: every ant of this iteration is done before the trail changes
            pheromone.evaporate(config.evaporation);
            for (tour, length) in &scored {
                pheromone.deposit(tour, config.deposit / length.max(HEURISTIC_EPSILON));
            }

            iterations += 1;
            length_history.push(best_length);
        }

        // Only a stop before the first iteration leaves no tour behind
        let (best, best_length) = match best {
            Some(tour) => (tour, best_length),
            None => {
                let tour: Vec<usize> = (0..n).collect();
                let length = eval.length(&tour);
                (tour, length)
            }
        };

        debug!(event = "aco_end", iterations, best_length, cancelled);

        Ok(AcoResult {
            best,
            best_length,
            iterations,
            cancelled,
            length_history,
            pheromone,
        })
    }
}

/// Builds one tour per seed against a frozen pheromone trail.
fn build_tours(
    matrix: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    seeds: &[u64],
) -> Vec<Vec<usize>> {
    let build = |&seed: &u64| {
        let mut ant_rng = rng_from_seed(Some(seed));
        construct_tour(matrix, pheromone, config, &mut ant_rng)
    };

    #[cfg(feature = "parallel")]
    {
        if config.parallel {
            return seeds.par_iter().map(build).collect();
        }
    }

    seeds.iter().map(build).collect()
}

/// Walks one ant from a random start city until every city is visited.
///
/// From city `i`, unvisited city `j` is chosen with probability
/// proportional to `tau(i, j)^alpha * (1 / d(i, j))^beta`.
fn construct_tour<R: Rng>(
    matrix: &DistanceMatrix,
    pheromone: &PheromoneMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<usize> {
    let n = matrix.size();
    let mut visited = vec![false; n];
    let mut current = rng.random_range(0..n);
    let mut route = Vec::with_capacity(n);
    route.push(current);
    visited[current] = true;

    let mut candidates = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    while route.len() < n {
        candidates.clear();
        weights.clear();
        for next in 0..n {
            if visited[next] {
                continue;
            }
            let trail = pheromone.get(current, next).powf(config.alpha);
            let visibility =
                (1.0 / (matrix.get(current, next) + HEURISTIC_EPSILON)).powf(config.beta);
            candidates.push(next);
            weights.push(trail * visibility);
        }

        if candidates.is_empty() {
            break;
        }

        let next = candidates[weighted_index(&weights, rng)];
        route.push(next);
        visited[next] = true;
        current = next;
    }

    route
}
