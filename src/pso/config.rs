//! PSO configuration.

/// Configuration for Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_evroute::pso::PsoConfig;
///
/// let config = PsoConfig::default().with_particles(50).with_inertia(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Swarm size.
    pub particles: usize,

    /// Number of swarm iterations.
    pub iterations: usize,

    /// Inertia weight `w` applied to the previous velocity.
    pub inertia: f64,

    /// Cognitive coefficient `c1` (pull toward the particle's own best).
    pub cognitive: f64,

    /// Social coefficient `c2` (pull toward the swarm's best).
    pub social: f64,

    /// Optional wall-clock limit, checked between iterations.
    pub time_limit_ms: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particles: 30,
            iterations: 100,
            inertia: 0.7,
            cognitive: 1.4,
            social: 1.4,
            time_limit_ms: None,
        }
    }
}

impl PsoConfig {
    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.particles == 0 {
            return Err("particles must be at least 1".into());
        }
        if self.iterations == 0 {
            return Err("iterations must be at least 1".into());
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() {
                return Err(format!("{name} must be finite, got {value}"));
            }
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
        let config = PsoConfig::default();
        assert_eq!(config.particles, 30);
        assert_eq!(config.iterations, 100);
        assert!((config.inertia - 0.7).abs() < 1e-12);
        assert!((config.cognitive - 1.4).abs() < 1e-12);
        assert!((config.social - 1.4).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(PsoConfig::default().with_particles(0).validate().is_err());
        assert!(PsoConfig::default().with_iterations(0).validate().is_err());
        assert!(PsoConfig::default().with_social(f64::INFINITY).validate().is_err());
        assert!(PsoConfig::default().with_time_limit_ms(0).validate().is_err());
    }
}
