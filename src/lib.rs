//! Exam timetabling with simulated annealing.
//!
//! Assigns every course a room, a teacher, a day and a time of day so that
//! no student and no teacher is double-booked, then reports a set of soft
//! constraints on the result.
//!
//! - **Models**: the [`Catalog`](models::Catalog) of courses, teachers,
//!   rooms, students and registrations, and the
//!   [`Schedule`](models::Schedule) being optimized.
//! - **Simulated Annealing (SA)**: a single-solution trajectory search with
//!   geometric cooling and a fixed iteration budget.
//! - **Exam**: initial-solution and neighbor generators, the hard-constraint
//!   fitness, soft-constraint diagnostics, and the
//!   [`ExamScheduler`](exam::ExamScheduler) that ties them together.
//!
//! # Architecture
//!
//! Loading catalogs and exporting or displaying results are left to the
//! caller. Every random draw comes from an explicit, seedable generator,
//! so a run is reproducible from its seed.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` on models and outcomes.
//! - `parallel`: [`ExamScheduler::solve_horizons`](exam::ExamScheduler::solve_horizons)
//!   runs its independent searches on rayon.

pub mod error;
pub mod exam;
pub mod models;
pub mod sa;

pub use error::ConfigError;
