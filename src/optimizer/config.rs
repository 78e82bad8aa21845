//! Facade configuration.

use crate::aco::AcoConfig;
use crate::ga::GaConfig;
use crate::pso::PsoConfig;
use crate::sa::SaConfig;

/// Parameters for every strategy plus the run seed.
///
/// Only the configuration of the dispatched strategy is used (and
/// validated) on a given call.
///
/// # Examples
///
/// ```
/// use u_evroute::optimizer::OptimizerConfig;
/// use u_evroute::aco::AcoConfig;
///
/// let config = OptimizerConfig::default()
///     .with_seed(42)
///     .with_aco(AcoConfig::default().with_ants(25));
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OptimizerConfig {
    pub sa: SaConfig,
    pub ga: GaConfig,
    pub aco: AcoConfig,
    pub pso: PsoConfig,

    /// Seed for the run RNG. `None` draws a fresh seed per call.
    pub seed: Option<u64>,
}

impl OptimizerConfig {
    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_aco(mut self, aco: AcoConfig) -> Self {
        self.aco = aco;
        self
    }

    pub fn with_pso(mut self, pso: PsoConfig) -> Self {
        self.pso = pso;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Applies the same wall-clock limit to every strategy.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.sa.time_limit_ms = Some(ms);
        self.ga.time_limit_ms = Some(ms);
        self.aco.time_limit_ms = Some(ms);
        self.pso.time_limit_ms = Some(ms);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = OptimizerConfig::default();
        assert!(config.sa.validate().is_ok());
        assert!(config.ga.validate().is_ok());
        assert!(config.aco.validate().is_ok());
        assert!(config.pso.validate().is_ok());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_time_limit_fans_out() {
        let config = OptimizerConfig::default().with_time_limit_ms(250);
        assert_eq!(config.sa.time_limit_ms, Some(250));
        assert_eq!(config.ga.time_limit_ms, Some(250));
        assert_eq!(config.aco.time_limit_ms, Some(250));
        assert_eq!(config.pso.time_limit_ms, Some(250));
    }
}
