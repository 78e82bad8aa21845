//! Dense distance matrix.

use super::Location;
use crate::error::Result;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once per optimization request and read-only afterwards.
/// `get(i, i)` is zero and `get(i, j) == get(j, i)`.
///
/// # Examples
///
/// ```
/// use u_evroute::distance::{DistanceMatrix, Location};
///
/// let dm = DistanceMatrix::from_locations(&[
///     Location::new(0.0, 0.0),
///     Location::new(3.0, 4.0),
/// ]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the pairwise Euclidean matrix for the given locations.
    pub fn from_locations(locations: &[Location]) -> Self {
        let n = locations.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = locations[i].distance_to(&locations[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Builds the matrix from raw coordinate tuples.
    ///
    /// Fails with [`RouteError::InvalidInput`](crate::error::RouteError::InvalidInput)
    /// if any point is not a pair of finite numbers.
    pub fn from_points<P: AsRef<[f64]>>(points: &[P]) -> Result<Self> {
        let locations = points
            .iter()
            .enumerate()
            .map(|(i, p)| Location::from_slice(p.as_ref()).map_err(|e| e.at_location(i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_locations(&locations))
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    fn square() -> Vec<Location> {
        vec![
            Location::new(0.0, 0.0),
            Location::new(1.0, 0.0),
            Location::new(1.0, 1.0),
            Location::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&square());
        assert_eq!(dm.size(), 4);
        assert!((dm.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((dm.get(0, 2) - 2f64.sqrt()).abs() < 1e-12);
        for i in 0..4 {
            assert_eq!(dm.get(i, i), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&square());
        assert!(dm.is_symmetric(0.0));
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_locations(&[]);
        assert_eq!(dm.size(), 0);
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&[[0.0, 0.0], [3.0, 4.0]]).expect("valid");
        assert!((dm.get(1, 0) - 5.0).abs() < 1e-12);

        let raw: Vec<Vec<f64>> = vec![vec![0.0, 0.0], vec![1.0, 2.0, 3.0]];
        let err = DistanceMatrix::from_points(&raw).unwrap_err();
        assert!(matches!(err, RouteError::InvalidInput(ref msg) if msg.contains("location 1")));
    }
}
