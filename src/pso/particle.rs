//! A single swarm member.

use super::config::PsoConfig;
use crate::evaluation::RouteEvaluator;
use crate::random::random_permutation;
use rand::Rng;

/// One particle: a tour plus a priority score per location.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current tour, derived from `velocity` after each move.
    pub position: Vec<usize>,

    /// Priority score per location index; higher scores come first in the tour.
    pub velocity: Vec<f64>,

    /// Shortest tour this particle has held.
    pub best_position: Vec<usize>,

    /// Length of `best_position`.
    pub best_length: f64,
}

impl Particle {
    /// A particle at a random tour with velocities uniform in `[-1, 1)`.
    pub fn random<R: Rng>(eval: &RouteEvaluator<'_>, rng: &mut R) -> Self {
        let n = eval.size();
        let position = random_permutation(n, rng);
        let velocity = (0..n).map(|_| rng.random_range(-1.0..1.0)).collect();
        let best_length = eval.length(&position);
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_length,
        }
    }

    /// Pulls each location's score toward its rank in the personal and
    /// swarm-best tours.
    ///
    /// For location `k` with current rank `x`, personal-best rank `p` and
    /// global-best rank `g`:
    /// `v[k] = w v[k] + c1 r1 (p - x) + c2 r2 (g - x)`, with fresh
    /// `r1, r2 ~ U[0, 1)` per location.
    pub fn update_velocity<R: Rng>(&mut self, global_best: &[usize], config: &PsoConfig, rng: &mut R) {
        let current_rank = ranks(&self.position);
        let personal_rank = ranks(&self.best_position);
        let global_rank = ranks(global_best);

        for (k, v) in self.velocity.iter_mut().enumerate() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            let x = current_rank[k] as f64;
            let cognitive = config.cognitive * r1 * (personal_rank[k] as f64 - x);
            let social = config.social * r2 * (global_rank[k] as f64 - x);
            *v = config.inertia * *v + cognitive + social;
        }
    }

    /// Re-derives the tour by sorting locations by descending score and
    /// records it as the personal best if strictly shorter.
    ///
    /// Ties keep the lower location index first.
    pub fn update_position(&mut self, eval: &RouteEvaluator<'_>) {
        let velocity = &self.velocity;
        self.position.sort_by(|&a, &b| {
            velocity[b]
                .partial_cmp(&velocity[a])
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let length = eval.length(&self.position);
        if length < self.best_length {
            self.best_position.clone_from(&self.position);
            self.best_length = length;
        }
    }
}

/// `rank[v]` = position of location `v` in `tour`.
fn ranks(tour: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; tour.len()];
    for (pos, &v) in tour.iter().enumerate() {
        rank[v] = pos;
    }
    rank
}
