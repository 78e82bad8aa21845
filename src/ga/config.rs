//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_evroute::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evroute::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_generations(250)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of tours in the population.
    ///
    /// Parents are recombined in pairs, so this must be even.
    pub population_size: usize,

    /// Number of generations to evolve.
    pub generations: usize,

    /// Probability that each child receives one swap mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Whether to score the population in parallel.
    ///
    /// Only takes effect with the `parallel` cargo feature.
    pub parallel: bool,

    /// Optional wall-clock limit in milliseconds.
    ///
    /// Checked at the start of each generation, so the run may overshoot
    /// by one generation's worth of work.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.01,
            parallel: true,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables parallel fitness evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if !self.population_size.is_multiple_of(2) {
            return Err(format!(
                "population_size must be even for pairwise crossover, got {}",
                self.population_size
            ));
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.generations, 100);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!(config.parallel);
        assert!(config.time_limit_ms.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(7)
            .with_mutation_rate(0.2)
            .with_parallel(false)
            .with_time_limit_ms(500);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 7);
        assert!((config.mutation_rate - 0.2).abs() < 1e-12);
        assert!(!config.parallel);
        assert_eq!(config.time_limit_ms, Some(500));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
        assert!(GaConfig::default().with_population_size(51).validate().is_err());
        assert!(GaConfig::default().with_population_size(2).validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_clamp_mutation_rate() {
        let config = GaConfig::default().with_mutation_rate(2.0);
        assert!((config.mutation_rate - 1.0).abs() < 1e-12);
        let config = GaConfig::default().with_mutation_rate(-1.0);
        assert_eq!(config.mutation_rate, 0.0);
    }

    #[test]
    fn test_validate_zero_time_limit() {
        assert!(GaConfig::default().with_time_limit_ms(0).validate().is_err());
    }
}
