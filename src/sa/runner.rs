//! SA execution loop.

use super::config::SaConfig;
use super::types::SaProblem;
use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best solution found.
    pub best: S,

    /// Cost of the best solution.
    pub best_cost: u64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of moves strictly better than the current solution.
    pub improving_moves: usize,

    /// Whether the run stopped early on the cancel flag or time limit.
    pub cancelled: bool,

    /// Best cost before the first iteration, after every
    /// `history_interval`-th iteration, and at the end of the run.
    ///
    /// With the default interval of 1 this holds `iterations + 1` entries.
    pub cost_history: Vec<u64>,
}

/// Executes the Simulated Annealing algorithm.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA optimization.
    pub fn run<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs SA with an optional cancellation token.
    ///
    /// The random source is seeded from `config.seed`, or from the thread
    /// RNG when no seed is given.
    pub fn run_with_cancel<P: SaProblem>(
        problem: &P,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs SA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored. Two runs with equally seeded generators
    /// produce identical results.
    pub fn run_with_rng<P: SaProblem, R: Rng>(
        problem: &P,
        config: &SaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SaResult<P::Solution>, ConfigError> {
        config.validate()?;
        let deadline = config.time_limit.map(|limit| Instant::now() + limit);

        let mut current = problem.initial_solution(rng);
        let mut current_cost = problem.cost(&current);
        let mut best = current.clone();
        let mut best_cost = current_cost;

        let mut temperature = config.initial_temperature;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let interval = config.history_interval.max(1);
        let capacity = (config.max_iterations / interval).min(1 << 16) + 2;
        let mut cost_history = Vec::with_capacity(capacity);
        cost_history.push(best_cost);

        while total_iterations < config.max_iterations {
            if cancel
                .as_ref()
                .is_some_and(|flag| flag.load(Ordering::Relaxed))
                || deadline.is_some_and(|d| Instant::now() >= d)
            {
                cancelled = true;
                break;
            }

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            let accept = if candidate_cost < current_cost {
                improving_moves += 1;
                true
            } else {
                metropolis(current_cost, candidate_cost, temperature, rng)
            };

            // best <= current always holds, so a new best is always accepted.
            if accept {
                if candidate_cost < best_cost {
                    best = candidate.clone();
                    best_cost = candidate_cost;
                    debug!(iteration = total_iterations + 1, best_cost, "new best");
                }
                current = candidate;
                current_cost = candidate_cost;
                accepted_moves += 1;
            }

            temperature *= config.cooling_rate;
            total_iterations += 1;
            if total_iterations % interval == 0 {
                cost_history.push(best_cost);
            }

            trace!(
                iteration = total_iterations,
                best_cost,
                current_cost,
                temperature,
                "iteration"
            );
        }

        if total_iterations % interval != 0 {
            cost_history.push(best_cost);
        }

        Ok(SaResult {
            best,
            best_cost,
            iterations: total_iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        })
    }
}

/// Metropolis test for a candidate that is not strictly better.
///
/// Accepts with probability `exp((current - candidate) / temperature)`.
/// Once the temperature underflows to zero only equal-cost moves pass,
/// which is the limit of that expression.
fn metropolis<R: Rng>(current: u64, candidate: u64, temperature: f64, rng: &mut R) -> bool {
    let delta = current as f64 - candidate as f64;
    if temperature > 0.0 {
        let probability = (delta / temperature).exp();
        rng.random_range(0.0..1.0) < probability
    } else {
        delta == 0.0
    }
}
