//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::operators::{order_crossover, swap_mutation};
use crate::budget::StopCondition;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use crate::random::{random_permutation, weighted_index};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::debug;

/// Keeps zero-length tours from dividing by zero.
const FITNESS_EPSILON: f64 = 1e-10;

/// Fitness of a tour of the given length: `1 / (length + ε)`.
///
/// Shorter tours are fitter.
#[inline]
pub fn fitness(length: f64) -> f64 {
    1.0 / (length + FITNESS_EPSILON)
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest tour of the final population.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_length: f64,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was stopped by cancellation or deadline.
    pub cancelled: bool,

    /// Shortest tour length in the population, initially and after each generation.
    ///
    /// Without elitism this is not guaranteed to be monotonic.
    pub length_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_evroute::distance::{DistanceMatrix, Location};
/// use u_evroute::ga::{GaConfig, GaRunner};
/// use u_evroute::random::rng_from_seed;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(1.0, 0.0),
///     Location::new(1.0, 1.0),
/// ]);
/// let mut rng = rng_from_seed(Some(42));
/// let result = GaRunner::run(&dm, &GaConfig::default(), &mut rng).unwrap();
/// assert_eq!(result.best.len(), 3);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, drawing all randomness from `rng`.
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        Self::run_with_cancel(matrix, config, rng, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If the flag is raised (or `time_limit_ms` elapses), the GA stops
    /// before the next generation and answers from the current population.
    pub fn run_with_cancel<R: Rng>(
        matrix: &DistanceMatrix,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate().map_err(RouteError::InvalidConfig)?;

        let n = matrix.size();
        if n <= 1 {
            return Ok(GaResult {
                best: vec![0],
                best_length: 0.0,
                generations: 0,
                cancelled: false,
                length_history: vec![0.0],
            });
        }

        let stop = StopCondition::new(cancel, config.time_limit_ms);
        let eval = RouteEvaluator::new(matrix);

        // 1. Initialize population
        let mut population: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_permutation(n, rng))
            .collect();

        let mut lengths = evaluate_population(&eval, &population, config.parallel);
        let mut length_history = Vec::with_capacity(config.generations + 1);
        length_history.push(shortest(&lengths));

        debug!(
            event = "ga_start",
            locations = n,
            population = config.population_size,
            generations = config.generations
        );

        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for _ in 0..config.generations {
            if stop.should_stop() {
                cancelled = true;
                break;
            }

            // Fitness-proportional selection with replacement
            let weights: Vec<f64> = lengths.iter().map(|&l| fitness(l)).collect();
            let parents: Vec<usize> = (0..config.population_size)
                .map(|_| weighted_index(&weights, rng))
                .collect();

            // Pairwise ordered crossover, then per-child mutation
            let mut next_gen = Vec::with_capacity(config.population_size);
            for pair in parents.chunks_exact(2) {
                let (mut child1, mut child2) =
                    order_crossover(&population[pair[0]], &population[pair[1]], rng);

                if rng.random::<f64>() < config.mutation_rate {
                    swap_mutation(&mut child1, rng);
                }
                if rng.random::<f64>() < config.mutation_rate {
                    swap_mutation(&mut child2, rng);
                }

                next_gen.push(child1);
                next_gen.push(child2);
            }

            population = next_gen;
            lengths = evaluate_population(&eval, &population, config.parallel);
            length_history.push(shortest(&lengths));
            generations += 1;
        }

        // 3. Fittest of the final population; first wins on ties
        let best_idx = fittest(&lengths);
        let best = population.swap_remove(best_idx);
        let best_length = lengths[best_idx];

        debug!(event = "ga_end", generations, best_length, cancelled);

        Ok(GaResult {
            best,
            best_length,
            generations,
            cancelled,
            length_history,
        })
    }
}

/// Tour length of every individual.
fn evaluate_population(
    eval: &RouteEvaluator<'_>,
    population: &[Vec<usize>],
    parallel: bool,
) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population.par_iter().map(|tour| eval.length(tour)).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    population.iter().map(|tour| eval.length(tour)).collect()
}

/// Index of the highest-fitness (shortest) tour.
fn fittest(lengths: &[f64]) -> usize {
    let mut best_idx = 0;
    for (i, &l) in lengths.iter().enumerate().skip(1) {
        if fitness(l) > fitness(lengths[best_idx]) {
            best_idx = i;
        }
    }
    best_idx
}

fn shortest(lengths: &[f64]) -> f64 {
    lengths.iter().copied().fold(f64::INFINITY, f64::min)
}

// ============================================================================
// Tests
// ============================================================================
