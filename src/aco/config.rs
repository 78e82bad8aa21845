//! ACO configuration.

/// Configuration for Ant Colony Optimization.
///
/// # Examples
///
/// ```
/// use u_evroute::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(20)
///     .with_beta(3.0)
///     .with_evaporation(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants building a tour per iteration.
    pub ants: usize,

    /// Number of colony iterations.
    pub iterations: usize,

    /// Pheromone exponent. Higher = follow the colony's trail more.
    pub alpha: f64,

    /// Distance-heuristic exponent. Higher = greedier nearest-city moves.
    pub beta: f64,

    /// Evaporation rate `rho` in [0, 1]. Every iteration multiplies all
    /// pheromone by `1 - rho`.
    pub evaporation: f64,

    /// Deposit constant `Q`: each tour adds `Q / length` to its edges.
    pub deposit: f64,

    /// Whether ants of one iteration build their tours in parallel.
    ///
    /// Only takes effect with the `parallel` cargo feature. Results are
    /// identical either way.
    pub parallel: bool,

    /// Optional wall-clock limit, checked between iterations.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 10,
            iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            deposit: 100.0,
            parallel: true,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.ants == 0 {
            return Err("ants must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if !(0.0..=1.0).contains(&self.evaporation) {
            return Err(format!(
                "evaporation must be in [0, 1], got {}",
                self.evaporation
            ));
        }
        if !self.deposit.is_finite() || self.deposit <= 0.0 {
            return Err(format!("deposit must be positive, got {}", self.deposit));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
