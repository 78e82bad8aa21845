//! PSO swarm loop.

use super::config::PsoConfig;
use super::particle::Particle;
use crate::budget::StopCondition;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a PSO run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// Swarm-best tour.
    pub best: Vec<usize>,

    /// Length of `best`.
    pub best_length: f64,

    /// Number of swarm iterations completed.
    pub iterations: usize,

    /// Whether the run was stopped by cancellation or deadline.
    pub cancelled: bool,

    /// Swarm-best length at initialization and after each iteration.
    pub length_history: Vec<f64>,
}

/// Executes Particle Swarm Optimization on a distance matrix.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO, drawing all randomness from `rng`.
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &PsoConfig,
        rng: &mut R,
    ) -> Result<PsoResult> {
        Self::run_with_cancel(matrix, config, rng, None)
    }

    /// Runs PSO with an optional cancellation token, checked between iterations.
    pub fn run_with_cancel<R: Rng>(
        matrix: &DistanceMatrix,
        config: &PsoConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<PsoResult> {
        config.validate().map_err(RouteError::InvalidConfig)?;

        let n = matrix.size();
        if n <= 1 {
            return Ok(PsoResult {
                best: vec![0],
                best_length: 0.0,
                iterations: 0,
                cancelled: false,
                length_history: vec![0.0],
            });
        }

        let stop = StopCondition::new(cancel, config.time_limit_ms);
        let eval = RouteEvaluator::new(matrix);

        let mut swarm: Vec<Particle> = (0..config.particles)
            .map(|_| Particle::random(&eval, rng))
            .collect();

        // First particle with the shortest personal best seeds the swarm best
        let mut seed_idx = 0;
        for (i, p) in swarm.iter().enumerate().skip(1) {
            if p.best_length < swarm[seed_idx].best_length {
                seed_idx = i;
            }
        }
        let mut global_best = swarm[seed_idx].best_position.clone();
        let mut global_best_length = swarm[seed_idx].best_length;

        let mut length_history = Vec::with_capacity(config.iterations + 1);
        length_history.push(global_best_length);
        let mut iterations = 0usize;
        let mut cancelled = false;

        debug!(
            event = "pso_start",
            locations = n,
            particles = config.particles,
            iterations = config.iterations,
            initial_best = global_best_length
        );

        for _ in 0..config.iterations {
            if stop.should_stop() {
                cancelled = true;
                break;
            }

            for particle in swarm.iter_mut() {
                particle.update_velocity(&global_best, config, rng);
                particle.update_position(&eval);

                if particle.best_length < global_best_length {
                    global_best.clone_from(&particle.best_position);
                    global_best_length = particle.best_length;
                    trace!(
                        event = "pso_new_best",
                        iteration = iterations,
                        best_length = global_best_length
                    );
                }
            }

            iterations += 1;
            length_history.push(global_best_length);
        }

        debug!(
            event = "pso_end",
            iterations,
            best_length = global_best_length,
            cancelled
        );

        Ok(PsoResult {
            best: global_best,
            best_length: global_best_length,
            iterations,
            cancelled,
            length_history,
        })
    }
}
