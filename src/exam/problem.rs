//! Exam timetabling as an [`SaProblem`].

use super::{fitness, generator};
use crate::models::{Catalog, Schedule};
use crate::sa::SaProblem;
use rand::Rng;

/// Binds a catalog and horizon to the annealing engine.
///
/// The catalog is borrowed, never global: every generator and evaluator
/// call receives it explicitly.
#[derive(Debug, Clone, Copy)]
pub struct ExamProblem<'a> {
    catalog: &'a Catalog,
    horizon: u32,
}

impl<'a> ExamProblem<'a> {
    pub fn new(catalog: &'a Catalog, horizon: u32) -> Self {
        Self { catalog, horizon }
    }
}

impl SaProblem for ExamProblem<'_> {
    type Solution = Schedule;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Schedule {
        generator::random_schedule(self.catalog, self.horizon, rng)
    }

    fn cost(&self, schedule: &Schedule) -> u64 {
        fitness::fitness(schedule, self.catalog, self.horizon)
    }

    fn neighbor<R: Rng>(&self, schedule: &Schedule, rng: &mut R) -> Schedule {
        generator::neighbor(schedule, self.catalog, self.horizon, rng)
    }
}
