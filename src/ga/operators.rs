//! Permutation operators for tour recombination and mutation.
//!
//! All operators work on `&[usize]` tours and always return valid
//! permutations of their inputs.
//!
//! - [`order_crossover`]: slice-preserving ordered crossover
//! - [`swap_mutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use crate::random::distinct_pair;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Ordered crossover with random cut points.
///
/// Draws two distinct cut points `start < end` and delegates to
/// [`order_crossover_at`]. Tours shorter than two elements are returned
/// unchanged.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let (a, b) = distinct_pair(n, rng);
    let (start, end) = if a < b { (a, b) } else { (b, a) };
    order_crossover_at(parent1, parent2, start, end)
}

/// Ordered crossover at fixed cut points.
///
/// Child 1 starts with `parent1[start..end]` verbatim, followed by every
/// gene of `parent2` not already in that slice, in `parent2` order.
/// Child 2 mirrors this with the parents swapped.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or `start > end` or
/// `end > parent1.len()`.
///
/// # Examples
///
/// ```
/// use u_evroute::ga::operators::order_crossover_at;
///
/// let (c1, c2) = order_crossover_at(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 3);
/// assert_eq!(c1, vec![1, 2, 4, 3, 0]);
/// assert_eq!(c2, vec![3, 2, 0, 1, 4]);
/// ```
pub fn order_crossover_at(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> (Vec<usize>, Vec<usize>) {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    assert!(
        start <= end && end <= parent1.len(),
        "invalid cut points {start}..{end} for length {}",
        parent1.len()
    );

    (
        ox_build_child(parent1, parent2, start, end),
        ox_build_child(parent2, parent1, start, end),
    )
}

/// Build one child: segment from `template`, remainder from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = Vec::with_capacity(n);
    let mut taken = vec![false; n];

    for &gene in &template[start..end] {
        child.push(gene);
        taken[gene] = true;
    }
    for &gene in donor {
        if !taken[gene] {
            child.push(gene);
            taken[gene] = true;
        }
    }

    child
}

// ============================================================================
// Mutation
// ============================================================================

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(tour: &mut [usize], rng: &mut R) {
    if tour.len() < 2 {
        return;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
}

// ============================================================================
// Tests
// ============================================================================
