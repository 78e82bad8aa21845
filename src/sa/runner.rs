//! SA execution loop.

use super::config::SaConfig;
use crate::budget::StopCondition;
use crate::distance::DistanceMatrix;
use crate::error::{Result, RouteError};
use crate::evaluation::RouteEvaluator;
use crate::random::{distinct_pair, random_permutation};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult {
    /// The best tour found.
    pub best: Vec<usize>,

    /// Length of the best tour.
    pub best_length: f64,

    /// Total number of neighbor evaluations.
    pub iterations: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Whether the run was stopped by cancellation or deadline.
    pub cancelled: bool,

    /// Best length at the start and after every iteration.
    pub length_history: Vec<f64>,
}

impl SaResult {
    fn trivial(initial_temperature: f64) -> Self {
        Self {
            best: vec![0],
            best_length: 0.0,
            iterations: 0,
            final_temperature: initial_temperature,
            accepted_moves: 0,
            improving_moves: 0,
            cancelled: false,
            length_history: vec![0.0],
        }
    }
}

/// Executes Simulated Annealing on a distance matrix.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA, drawing all randomness from `rng`.
    pub fn run<R: Rng>(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        Self::run_with_cancel(matrix, config, rng, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The flag (and `time_limit_ms`) is checked before each iteration; the
    /// best tour found so far is returned when either fires.
    pub fn run_with_cancel<R: Rng>(
        matrix: &DistanceMatrix,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult> {
        config.validate().map_err(RouteError::InvalidConfig)?;

        let n = matrix.size();
        if n <= 1 {
            return Ok(SaResult::trivial(config.initial_temperature));
        }

        let stop = StopCondition::new(cancel, config.time_limit_ms);
        let eval = RouteEvaluator::new(matrix);

        let mut current = random_permutation(n, rng);
        let mut current_length = eval.length(&current);
        let mut best = current.clone();
        let mut best_length = current_length;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut length_history = Vec::with_capacity(config.max_iterations + 1);
        length_history.push(best_length);

        debug!(
            event = "sa_start",
            locations = n,
            initial_length = current_length,
            temperature
        );

        for _ in 0..config.max_iterations {
            if stop.should_stop() {
                cancelled = true;
                break;
            }

            temperature *= config.cooling_rate;
            if temperature < config.min_temperature {
                break;
            }

            let (i, j) = distinct_pair(n, rng);
            let mut neighbor = current.clone();
            neighbor.swap(i, j);
            let neighbor_length = eval.length(&neighbor);

            // Metropolis criterion; the uniform draw only happens for non-improving moves
            let improving = neighbor_length < current_length;
            let accept = improving
                || rng.random::<f64>() < ((current_length - neighbor_length) / temperature).exp();

            if accept {
                if improving {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                current = neighbor;
                current_length = neighbor_length;

                if current_length < best_length {
                    best.clone_from(&current);
                    best_length = current_length;
                    trace!(event = "sa_new_best", iteration = iterations, best_length);
                }
            }

            iterations += 1;
            length_history.push(best_length);
        }

        debug!(
            event = "sa_end",
            iterations,
            accepted_moves,
            improving_moves,
            best_length,
            cancelled
        );

        Ok(SaResult {
            best,
            best_length,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            length_history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Location;
    use crate::evaluation::{is_permutation, tour_length};
    use crate::random::rng_from_seed;
    use std::sync::atomic::Ordering;

    fn unit_square() -> DistanceMatrix {
        DistanceMatrix::from_locations(&[
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ])
    }

    fn ring(n: usize) -> DistanceMatrix {
        let locations: Vec<Location> = (0..n)
            .map(|k| {
                let theta = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
                Location::new(theta.cos() * 10.0, theta.sin() * 10.0)
            })
            .collect();
        DistanceMatrix::from_locations(&locations)
    }

    #[test]
    fn test_sa_unit_square() {
        let dm = unit_square();
        let mut rng = rng_from_seed(Some(42));
        let result = SaRunner::run(&dm, &SaConfig::default(), &mut rng).expect("valid config");

        assert!(is_permutation(&result.best, 4));
        assert!(
            (result.best_length - 4.0).abs() < 1e-9,
            "expected perimeter 4.0, got {}",
            result.best_length
        );
        assert_eq!(result.best_length, tour_length(&result.best, &dm));
    }

    #[test]
    fn test_sa_two_points() {
        let dm = DistanceMatrix::from_locations(&[Location::new(0.0, 0.0), Location::new(3.0, 4.0)]);
        let mut rng = rng_from_seed(Some(1));
        let result = SaRunner::run(&dm, &SaConfig::default(), &mut rng).expect("valid config");
        assert!(is_permutation(&result.best, 2));
        assert!((result.best_length - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_sa_trivial_inputs() {
        let mut rng = rng_from_seed(Some(42));
        for dm in [
            DistanceMatrix::from_locations(&[]),
            DistanceMatrix::from_locations(&[Location::new(5.0, 5.0)]),
        ] {
            let result = SaRunner::run(&dm, &SaConfig::default(), &mut rng).expect("valid config");
            assert_eq!(result.best, vec![0]);
            assert_eq!(result.best_length, 0.0);
            assert_eq!(result.iterations, 0);
        }
    }

    #[test]
    fn test_sa_stops_at_temperature_floor() {
        // 1000 * 0.5^k < 1e-10 after 44 steps
        let dm = ring(8);
        let config = SaConfig::default()
            .with_cooling_rate(0.5)
            .with_max_iterations(10_000);
        let mut rng = rng_from_seed(Some(42));
        let result = SaRunner::run(&dm, &config, &mut rng).expect("valid config");
        assert!(result.iterations < 50, "got {} iterations", result.iterations);
        assert!(result.final_temperature < config.min_temperature);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let dm = ring(10);
        let config = SaConfig::default()
            .with_cooling_rate(0.9999)
            .with_max_iterations(100);
        let mut rng = rng_from_seed(Some(42));
        let result = SaRunner::run(&dm, &config, &mut rng).expect("valid config");
        assert_eq!(result.iterations, 100);
        assert_eq!(result.length_history.len(), 101);
    }

    #[test]
    fn test_sa_history_non_increasing() {
        let dm = ring(12);
        let config = SaConfig::default()
            .with_cooling_rate(0.995)
            .with_max_iterations(3000);
        let mut rng = rng_from_seed(Some(7));
        let result = SaRunner::run(&dm, &config, &mut rng).expect("valid config");

        for window in result.length_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best length history should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.length_history.last().copied(), Some(result.best_length));
    }

    #[test]
    fn test_sa_accepts_uphill_when_hot() {
        let dm = ring(10);
        let config = SaConfig::default()
            .with_initial_temperature(1e9)
            .with_cooling_rate(0.999)
            .with_max_iterations(500);
        let mut rng = rng_from_seed(Some(42));
        let result = SaRunner::run(&dm, &config, &mut rng).expect("valid config");
        let ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(ratio > 0.95, "expected near-total acceptance, got {ratio}");
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_sa_same_seed_same_result() {
        let dm = ring(9);
        let config = SaConfig::default();
        let a = SaRunner::run(&dm, &config, &mut rng_from_seed(Some(3))).expect("valid config");
        let b = SaRunner::run(&dm, &config, &mut rng_from_seed(Some(3))).expect("valid config");
        assert_eq!(a.best, b.best);
        assert_eq!(a.best_length, b.best_length);
    }

    #[test]
    fn test_sa_cancellation() {
        let dm = ring(10);
        let cancel = Arc::new(AtomicBool::new(true));
        let mut rng = rng_from_seed(Some(42));
        let result = SaRunner::run_with_cancel(&dm, &SaConfig::default(), &mut rng, Some(cancel.clone()))
            .expect("valid config");
        assert!(result.cancelled);
        assert_eq!(result.iterations, 0);
        assert!(is_permutation(&result.best, 10));
        assert!(cancel.load(Ordering::Relaxed));
    }

    #[test]
    fn test_sa_invalid_config() {
        let dm = unit_square();
        let config = SaConfig::default().with_cooling_rate(1.5);
        let mut rng = rng_from_seed(Some(42));
        assert!(matches!(
            SaRunner::run(&dm, &config, &mut rng),
            Err(RouteError::InvalidConfig(_))
        ));
    }
}
