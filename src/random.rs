//! Random-source helpers shared by the search strategies.
//!
//! Strategies never touch a process-wide generator: every run receives an
//! explicitly owned `&mut R: Rng`, built here from an optional seed.

use rand::Rng;
use u_numflow::random::{create_rng, shuffle};

/// Creates the run RNG. `None` draws a fresh seed from entropy.
pub fn rng_from_seed(seed: Option<u64>) -> impl Rng + Send {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}

/// Two distinct indices in `0..n`, uniformly over unordered pairs.
///
/// # Panics
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    assert!(n >= 2, "need at least two positions, got {n}");
    let a = rng.random_range(0..n);
    let mut b = rng.random_range(0..n - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

/// Roulette-wheel draw: index `i` with probability `weights[i] / total`.
///
/// Falls back to a uniform draw when the weights carry no usable mass
/// (all zero, or a non-finite sum).
///
/// # Panics
/// Panics if `weights` is empty.
pub fn weighted_index<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "cannot sample from empty weights");
    let n = weights.len();
    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last index with positive weight
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}
