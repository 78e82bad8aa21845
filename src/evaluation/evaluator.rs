//! Closed-tour length and route validity checks.

use crate::distance::DistanceMatrix;

/// Total length of the closed tour `route[0] -> ... -> route[n-1] -> route[0]`.
///
/// Consecutive legs are summed left to right and the closing leg is added
/// last, so the same route and matrix always produce the same bits.
/// Routes of length 0 or 1 have length `0.0`.
///
/// # Examples
///
/// ```
/// use u_evroute::distance::{DistanceMatrix, Location};
/// use u_evroute::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
/// ]);
/// assert!((tour_length(&[0, 1], &dm) - 10.0).abs() < 1e-12);
/// ```
pub fn tour_length(route: &[usize], matrix: &DistanceMatrix) -> f64 {
    let mut total = 0.0;
    for leg in route.windows(2) {
        total += matrix.get(leg[0], leg[1]);
    }
    if let (Some(&first), Some(&last)) = (route.first(), route.last()) {
        if route.len() > 1 {
            total += matrix.get(last, first);
        }
    }
    total
}

/// Checks that `route` visits every index in `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in route {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

/// Scores routes against a borrowed distance matrix.
///
/// A thin convenience wrapper over [`tour_length`] used by the search
/// strategies, which all share one matrix per run.
#[derive(Debug, Clone, Copy)]
pub struct RouteEvaluator<'a> {
    matrix: &'a DistanceMatrix,
}

impl<'a> RouteEvaluator<'a> {
    pub fn new(matrix: &'a DistanceMatrix) -> Self {
        Self { matrix }
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.matrix.size()
    }

    pub fn matrix(&self) -> &'a DistanceMatrix {
        self.matrix
    }

    /// Closed-tour length of `route`.
    #[inline]
    pub fn length(&self, route: &[usize]) -> f64 {
        tour_length(route, self.matrix)
    }
}
