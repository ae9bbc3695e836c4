//! End-to-end exam scheduling: validate, anneal, diagnose.

use super::config::ExamConfig;
use super::problem::ExamProblem;
use super::soft::{analyze, SoftConstraintReport};
use crate::error::ConfigError;
use crate::models::{Catalog, Schedule, ScheduleRow};
use crate::sa::{SaResult, SaRunner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one scheduling run.
///
/// A positive `fitness` is not an error: it is the number of hard
/// violations the best schedule found still has.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExamOutcome {
    /// Planning period the schedule was built for.
    pub horizon: u32,

    /// Best schedule found.
    pub schedule: Schedule,

    /// Hard-constraint violations of `schedule`.
    pub fitness: u64,

    /// Soft-constraint diagnostics of `schedule`.
    pub soft: SoftConstraintReport,

    /// Iterations actually run.
    pub iterations: usize,

    /// Accepted moves, improving or not.
    pub accepted_moves: usize,

    /// Moves strictly better than the schedule they replaced.
    pub improving_moves: usize,

    /// Temperature when the search stopped.
    pub final_temperature: f64,

    /// Whether the search stopped before its iteration budget.
    pub cancelled: bool,

    /// Best fitness before the first iteration and after each one.
    pub cost_history: Vec<u64>,
}

impl ExamOutcome {
    /// Whether no student or teacher is double-booked.
    pub fn is_feasible(&self) -> bool {
        self.fitness == 0
    }

    /// Export rows of the schedule, one per course.
    pub fn rows(&self, catalog: &Catalog) -> Vec<ScheduleRow> {
        self.schedule.rows(catalog)
    }

    fn from_search(result: SaResult<Schedule>, catalog: &Catalog, config: &ExamConfig) -> Self {
        let soft = analyze(&result.best, catalog, config.horizon, &config.preferred_order);
        Self {
            horizon: config.horizon,
            schedule: result.best,
            fitness: result.best_cost,
            soft,
            iterations: result.iterations,
            accepted_moves: result.accepted_moves,
            improving_moves: result.improving_moves,
            final_temperature: result.final_temperature,
            cancelled: result.cancelled,
            cost_history: result.cost_history,
        }
    }
}

/// Runs the exam scheduling pipeline.
///
/// # Examples
///
/// ```
/// use u_examsched::exam::{ExamConfig, ExamScheduler};
/// use u_examsched::models::{Catalog, Course, Registration, Room};
///
/// let catalog = Catalog::new(
///     vec![Course::new("CS101", "Programming"), Course::new("CS102", "Data Structures")],
///     vec!["Dr. Lee".into()],
///     vec!["alice".into()],
///     vec![Room::new(1, 30)],
///     vec![Registration::new("alice", "CS101"), Registration::new("alice", "CS102")],
/// )
/// .unwrap();
///
/// let config = ExamConfig::default().with_horizon(3).with_seed(42);
/// let outcome = ExamScheduler::solve(&catalog, &config).unwrap();
/// assert_eq!(outcome.schedule.len(), 2);
/// assert_eq!(outcome.soft.entries().len(), 4);
/// ```
pub struct ExamScheduler;

impl ExamScheduler {
    /// Validates the inputs, anneals, and analyzes the best schedule.
    pub fn solve(catalog: &Catalog, config: &ExamConfig) -> Result<ExamOutcome, ConfigError> {
        Self::solve_with_cancel(catalog, config, None)
    }

    /// Like [`solve`](Self::solve), stopping early once `cancel` is set.
    pub fn solve_with_cancel(
        catalog: &Catalog,
        config: &ExamConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExamOutcome, ConfigError> {
        let mut rng = match config.sa.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::solve_with_rng(catalog, config, &mut rng, cancel)
    }

    /// Runs the pipeline with every random draw taken from `rng`.
    #[instrument(
        skip_all,
        fields(horizon = config.horizon, courses = catalog.num_courses())
    )]
    pub fn solve_with_rng<R: Rng>(
        catalog: &Catalog,
        config: &ExamConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ExamOutcome, ConfigError> {
        config.validate(catalog)?;
        info!(
            iterations = config.sa.max_iterations,
            temperature = config.sa.initial_temperature,
            cooling_rate = config.sa.cooling_rate,
            "starting search"
        );

        let problem = ExamProblem::new(catalog, config.horizon);
        let result = SaRunner::run_with_rng(&problem, &config.sa, rng, cancel)?;
        let outcome = ExamOutcome::from_search(result, catalog, config);

        info!(
            fitness = outcome.fitness,
            iterations = outcome.iterations,
            cancelled = outcome.cancelled,
            soft_total = outcome.soft.total(),
            "search finished"
        );
        Ok(outcome)
    }

    /// Solves the same catalog for several planning periods.
    ///
    /// Each run is independent. With a seed configured, run `i` uses
    /// `seed + i`. All configurations are validated before any run starts.
    /// With the `parallel` feature the runs execute on the rayon pool.
    /// Outcomes are returned in the order of `horizons`.
    pub fn solve_horizons(
        catalog: &Catalog,
        config: &ExamConfig,
        horizons: &[u32],
    ) -> Result<Vec<ExamOutcome>, ConfigError> {
        let configs: Vec<ExamConfig> = horizons
            .iter()
            .enumerate()
            .map(|(i, &horizon)| {
                let mut c = config.clone().with_horizon(horizon);
                c.sa.seed = config.sa.seed.map(|s| s.wrapping_add(i as u64));
                c
            })
            .collect();
        for c in &configs {
            c.validate(catalog)?;
        }

        #[cfg(feature = "parallel")]
        let outcomes: Result<Vec<ExamOutcome>, ConfigError> = configs
            .par_iter()
            .map(|c| Self::solve(catalog, c))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let outcomes: Result<Vec<ExamOutcome>, ConfigError> =
            configs.iter().map(|c| Self::solve(catalog, c)).collect();

        outcomes
    }
}
