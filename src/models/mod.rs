//! Domain models for exam timetabling.
//!
//! - [`Catalog`]: courses, teachers, rooms, students and registrations
//! - [`Schedule`]: one [`Assignment`] per course
//! - [`ExamTime`]: the time-of-day values an exam can take

mod catalog;
mod schedule;

pub use catalog::{Catalog, Course, Registration, Room};
pub use schedule::{Assignment, ExamTime, Schedule, ScheduleRow};
