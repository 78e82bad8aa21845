//! SA configuration.

/// Configuration for Simulated Annealing.
///
/// The annealing schedule is geometric: every iteration multiplies the
/// temperature by `cooling_rate` before the move is tried, and the run ends
/// once the temperature falls below `min_temperature` or `max_iterations`
/// moves have been tried.
///
/// # Examples
///
/// ```
/// use u_evroute::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of neighbor evaluations.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more uphill moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Temperature floor; the search stops once T drops below it.
    pub min_temperature: f64,

    /// Optional wall-clock limit, checked between iterations.
    pub time_limit_ms: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            min_temperature: 1e-10,
            time_limit_ms: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature.is_nan() || self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.cooling_rate.is_nan() || self.cooling_rate <= 0.0 || self.cooling_rate >= 1.0 {
            return Err(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
