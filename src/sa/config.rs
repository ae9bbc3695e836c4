//! SA configuration.

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for the Simulated Annealing driver.
///
/// Cooling is geometric, one step per iteration:
/// after `i` iterations the temperature is
/// `initial_temperature * cooling_rate^i`. The run stops after exactly
/// `max_iterations` iterations unless cancelled or out of time.
///
/// # Examples
///
/// ```
/// use u_examsched::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_cooling_rate(0.99)
///     .with_max_iterations(5000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Initial temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1]. Typical values: 0.95–0.999.
    pub cooling_rate: f64,

    /// Number of neighbor evaluations.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Wall-clock budget, checked once per iteration.
    pub time_limit: Option<Duration>,

    /// Record the best cost every `history_interval` iterations. 0 is
    /// treated as 1.
    pub history_interval: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            max_iterations: 1000,
            seed: None,
            time_limit: None,
            history_interval: 1,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_history_interval(mut self, every: usize) -> Self {
        self.history_interval = every;
        self
    }

    /// Temperature after `iterations` cooling steps.
    pub fn temperature_at(&self, iterations: usize) -> f64 {
        self.initial_temperature * self.cooling_rate.powf(iterations as f64)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(ConfigError::InitialTemperature(self.initial_temperature));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate <= 1.0) {
            return Err(ConfigError::CoolingRate(self.cooling_rate));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }
}
