//! Exam scheduling configuration.

use crate::error::ConfigError;
use crate::models::Catalog;
use crate::sa::SaConfig;

/// The two course families of the preferred-order diagnostic.
///
/// Students taking courses from both families should sit their `first`
/// family exam no later than their `second` family exam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredOrder {
    /// Course-code prefix of the family examined first.
    pub first: String,
    /// Course-code prefix of the family examined second.
    pub second: String,
}

impl Default for PreferredOrder {
    fn default() -> Self {
        Self {
            first: "MG".into(),
            second: "CS".into(),
        }
    }
}

impl PreferredOrder {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

/// Configuration for one exam scheduling run.
///
/// # Examples
///
/// ```
/// use u_examsched::exam::ExamConfig;
///
/// let config = ExamConfig::default()
///     .with_horizon(21)
///     .with_max_iterations(2000)
///     .with_seed(7);
/// assert_eq!(config.horizon, 21);
/// assert_eq!(config.sa.max_iterations, 2000);
/// ```
#[derive(Debug, Clone)]
pub struct ExamConfig {
    /// Planning period in days. Exams are dated `1..=horizon`.
    pub horizon: u32,

    /// Annealing parameters.
    pub sa: SaConfig,

    /// Course families for the preferred-order diagnostic.
    pub preferred_order: PreferredOrder,
}

impl Default for ExamConfig {
    fn default() -> Self {
        Self {
            horizon: 14,
            sa: SaConfig::default(),
            preferred_order: PreferredOrder::default(),
        }
    }
}

impl ExamConfig {
    pub fn with_horizon(mut self, days: u32) -> Self {
        self.horizon = days;
        self
    }

    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.sa.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.sa.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.sa.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sa.seed = Some(seed);
        self
    }

    pub fn with_preferred_order(mut self, order: PreferredOrder) -> Self {
        self.preferred_order = order;
        self
    }

    /// Validates the configuration against the catalog it will run on.
    ///
    /// An empty course list is valid; rooms and teachers are required
    /// regardless.
    pub fn validate(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        if catalog.rooms().is_empty() {
            return Err(ConfigError::NoRooms);
        }
        if catalog.teachers().is_empty() {
            return Err(ConfigError::NoTeachers);
        }
        if self.horizon == 0 {
            return Err(ConfigError::ZeroHorizon);
        }
        self.sa.validate()?;
        if self.preferred_order.first.is_empty() || self.preferred_order.second.is_empty() {
            return Err(ConfigError::EmptyFamilyPrefix);
        }
        Ok(())
    }
}
