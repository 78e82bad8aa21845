//! Per-edge pheromone trail.

/// Dense n×n pheromone matrix, row-major.
///
/// Starts at all ones for every run. Edges are directed: a deposit on
/// `(a, b)` does not touch `(b, a)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// A fresh trail with every entry set to `1.0`.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for t in &mut self.data {
            *t *= keep;
        }
    }

    /// Adds `amount` to each consecutive edge `(route[k], route[k + 1])`.
    ///
    /// The closing leg back to `route[0]` receives nothing.
    pub fn deposit(&mut self, route: &[usize], amount: f64) {
        for leg in route.windows(2) {
            self.data[leg[0] * self.size + leg[1]] += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        let p = PheromoneMatrix::new(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(p.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_evaporate() {
        let mut p = PheromoneMatrix::new(2);
        p.evaporate(0.5);
        assert_eq!(p.get(0, 1), 0.5);
        p.evaporate(0.5);
        assert_eq!(p.get(1, 0), 0.25);
    }

    #[test]
    fn test_deposit_directed_consecutive_edges() {
        let mut p = PheromoneMatrix::new(3);
        p.deposit(&[0, 1, 2], 2.0);
        assert_eq!(p.get(0, 1), 3.0);
        assert_eq!(p.get(1, 2), 3.0);
        assert_eq!(p.get(1, 0), 1.0);
        assert_eq!(p.get(2, 0), 1.0, "closing leg is not reinforced");
    }

    #[test]
    fn test_deposits_accumulate() {
        let mut p = PheromoneMatrix::new(2);
        p.deposit(&[0, 1], 1.0);
        p.deposit(&[0, 1], 1.0);
        assert_eq!(p.get(0, 1), 3.0);
    }
}
