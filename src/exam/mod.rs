//! Exam timetabling by simulated annealing.
//!
//! Pipeline: [`generator::random_schedule`] draws an initial schedule,
//! [`SaRunner`](crate::sa::SaRunner) anneals it with
//! [`generator::neighbor`] moves scored by [`fitness::fitness`], and
//! [`soft::analyze`] reports diagnostics on the best schedule found.
//! [`ExamScheduler`] runs the whole pipeline.
//!
//! # Hard constraints (minimized)
//!
//! - No student sits two exams in the same (day, time) slot.
//! - No teacher supervises two exams in the same slot.
//!
//! # Soft constraints (reported only)
//!
//! - Break, Consecutive Exams, Preferred Order, Faculty Meeting;
//!   see [`SoftConstraint`].
//!
//! Room capacity and teacher/subject matching are not modeled.

mod config;
pub mod fitness;
pub mod generator;
mod problem;
mod runner;
pub mod soft;

pub use config::{ExamConfig, PreferredOrder};
pub use fitness::FitnessBreakdown;
pub use problem::ExamProblem;
pub use runner::{ExamOutcome, ExamScheduler};
pub use soft::{SoftConstraint, SoftConstraintReport};
