//! Search strategy identifiers.

use crate::error::RouteError;
use std::fmt;
use std::str::FromStr;

/// The four supported search strategies.
///
/// Parsed from the short identifiers `SA`, `GA`, `ACO` and `PSO`
/// (case-insensitive). Any other identifier is rejected.
///
/// # Examples
///
/// ```
/// use u_evroute::optimizer::Algorithm;
///
/// let algo: Algorithm = "aco".parse().unwrap();
/// assert_eq!(algo, Algorithm::AntColony);
/// assert_eq!(algo.to_string(), "ACO");
/// assert!("tabu".parse::<Algorithm>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Simulated annealing.
    #[cfg_attr(feature = "serde", serde(rename = "SA"))]
    SimulatedAnnealing,
    /// Genetic algorithm.
    #[cfg_attr(feature = "serde", serde(rename = "GA"))]
    Genetic,
    /// Ant-colony optimization.
    #[cfg_attr(feature = "serde", serde(rename = "ACO"))]
    AntColony,
    /// Particle-swarm optimization.
    #[cfg_attr(feature = "serde", serde(rename = "PSO"))]
    ParticleSwarm,
}

impl Algorithm {
    /// Every strategy, in identifier order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::SimulatedAnnealing,
        Algorithm::Genetic,
        Algorithm::AntColony,
        Algorithm::ParticleSwarm,
    ];

    /// Short identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::SimulatedAnnealing => "SA",
            Algorithm::Genetic => "GA",
            Algorithm::AntColony => "ACO",
            Algorithm::ParticleSwarm => "PSO",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RouteError::UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identifiers() {
        assert_eq!("SA".parse::<Algorithm>(), Ok(Algorithm::SimulatedAnnealing));
        assert_eq!("ga".parse::<Algorithm>(), Ok(Algorithm::Genetic));
        assert_eq!(" Aco ".parse::<Algorithm>(), Ok(Algorithm::AntColony));
        assert_eq!("PSO".parse::<Algorithm>(), Ok(Algorithm::ParticleSwarm));
    }

    #[test]
    fn test_parse_unknown() {
        for bad in ["", "TS", "annealing", "S A"] {
            assert_eq!(
                bad.parse::<Algorithm>(),
                Err(RouteError::UnknownAlgorithm(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_display_round_trip() {
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }
}
