//! Hard-constraint fitness.
//!
//! For every (day, time) slot of the horizon:
//!
//! - each student sitting more than one of the slot's exams adds one
//!   violation, however many exams they have there;
//! - the slot adds one more violation if any teacher supervises two of its
//!   exams.
//!
//! Slots holding fewer than two exams cannot conflict, so only occupied
//! slots are visited. Exams outside the horizon or at midday sit in no
//! slot and never conflict.

use crate::models::{Catalog, Schedule};

/// Hard-constraint violations split by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitnessBreakdown {
    /// Over-booked (student, slot) pairs.
    pub student_conflicts: u64,
    /// Slots with a teacher assigned twice.
    pub teacher_conflicts: u64,
}

impl FitnessBreakdown {
    /// The scalar objective minimized by the search.
    pub fn total(&self) -> u64 {
        self.student_conflicts + self.teacher_conflicts
    }
}

/// Scores a schedule; 0 means no student or teacher is double-booked.
pub fn fitness(schedule: &Schedule, catalog: &Catalog, horizon: u32) -> u64 {
    evaluate(schedule, catalog, horizon).total()
}

/// Scores a schedule and reports both violation terms.
///
/// # Panics
///
/// If `schedule` holds more courses than `catalog`. Schedules from
/// [`random_schedule`](super::generator::random_schedule) and
/// [`neighbor`](super::generator::neighbor) always match their catalog.
pub fn evaluate(schedule: &Schedule, catalog: &Catalog, horizon: u32) -> FitnessBreakdown {
    let mut by_slot: Vec<(usize, usize)> = schedule
        .iter()
        .filter_map(|(c, a)| a.slot_index(horizon).map(|slot| (slot, c)))
        .collect();
    by_slot.sort_unstable();

    let mut breakdown = FitnessBreakdown::default();
    let mut per_student = vec![0u32; catalog.students().len()];
    let mut touched: Vec<usize> = Vec::new();
    let mut teachers: Vec<usize> = Vec::new();

    for group in by_slot.chunk_by(|a, b| a.0 == b.0) {
        if group.len() < 2 {
            continue;
        }

        for &(_, c) in group {
            for &s in catalog.students_of(c) {
                if per_student[s] == 0 {
                    touched.push(s);
                }
                per_student[s] += 1;
            }
        }
        for s in touched.drain(..) {
            if per_student[s] > 1 {
                breakdown.student_conflicts += 1;
            }
            per_student[s] = 0;
        }

        teachers.clear();
        teachers.extend(
            group
                .iter()
                .filter_map(|&(_, c)| schedule.get(c).map(|a| a.teacher)),
        );
        teachers.sort_unstable();
        if teachers.windows(2).any(|w| w[0] == w[1]) {
            breakdown.teacher_conflicts += 1;
        }
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Assignment, Course, ExamTime, Registration, Room};

    fn catalog(courses: &[&str], teachers: usize, regs: &[(&str, &str)]) -> Catalog {
        Catalog::new(
            courses.iter().map(|c| Course::new(*c, *c)).collect(),
            (0..teachers).map(|t| format!("t{t}")).collect(),
            vec![],
            vec![Room::new(1, 100)],
            regs.iter().map(|(s, c)| Registration::new(*s, *c)),
        )
        .unwrap()
    }

    fn at(date: u32, time: ExamTime, teacher: usize) -> Assignment {
        Assignment {
            room: 0,
            teacher,
            time,
            date,
        }
    }

    #[test]
    fn test_empty_schedule_is_zero() {
        let catalog = catalog(&[], 1, &[]);
        assert_eq!(fitness(&Schedule::new(vec![]), &catalog, 10), 0);
    }

    #[test]
    fn test_student_conflict_counted_once_per_student() {
        // alice has three exams in one slot: one violation, not two.
        let catalog = catalog(
            &["A", "B", "C"],
            3,
            &[("alice", "A"), ("alice", "B"), ("alice", "C"), ("bob", "A"), ("bob", "B")],
        );
        let schedule = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Morning, 1),
            at(1, ExamTime::Morning, 2),
        ]);
        let b = evaluate(&schedule, &catalog, 2);
        assert_eq!(b.student_conflicts, 2);
        assert_eq!(b.teacher_conflicts, 0);
    }

    #[test]
    fn test_teacher_conflict_binary_per_slot() {
        let catalog = catalog(&["A", "B", "C", "D"], 2, &[]);
        let schedule = Schedule::new(vec![
            at(2, ExamTime::Afternoon, 0),
            at(2, ExamTime::Afternoon, 0),
            at(2, ExamTime::Afternoon, 1),
            at(2, ExamTime::Afternoon, 1),
        ]);
        let b = evaluate(&schedule, &catalog, 3);
        assert_eq!(b.teacher_conflicts, 1);
        assert_eq!(b.total(), 1);
    }

    #[test]
    fn test_conflicts_accumulate_across_slots() {
        let catalog = catalog(
            &["A", "B", "C", "D"],
            1,
            &[("s", "A"), ("s", "B"), ("s", "C"), ("s", "D")],
        );
        let schedule = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Morning, 0),
            at(3, ExamTime::Afternoon, 0),
            at(3, ExamTime::Afternoon, 0),
        ]);
        assert_eq!(fitness(&schedule, &catalog, 3), 4);
    }

    #[test]
    fn test_different_slots_do_not_conflict() {
        let catalog = catalog(&["A", "B"], 1, &[("s1", "A"), ("s1", "B")]);
        let schedule = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Afternoon, 0),
        ]);
        assert_eq!(fitness(&schedule, &catalog, 1), 0);
    }

    #[test]
    fn test_two_courses_one_day_scenario() {
        let catalog = catalog(
            &["A", "B"],
            1,
            &[("s1", "A"), ("s1", "B"), ("s2", "A"), ("s2", "B"), ("s3", "A"), ("s3", "B")],
        );
        let same = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Morning, 0),
        ]);
        let split = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Afternoon, 0),
        ]);
        assert_eq!(
            evaluate(&same, &catalog, 1),
            FitnessBreakdown {
                student_conflicts: 3,
                teacher_conflicts: 1,
            }
        );
        assert_eq!(fitness(&split, &catalog, 1), 0);
    }

    #[test]
    fn test_out_of_horizon_and_midday_ignored() {
        let catalog = catalog(&["A", "B", "C"], 1, &[("s", "A"), ("s", "B"), ("s", "C")]);
        let schedule = Schedule::new(vec![
            at(5, ExamTime::Morning, 0),
            at(5, ExamTime::Morning, 0),
            at(1, ExamTime::Midday, 0),
        ]);
        assert_eq!(fitness(&schedule, &catalog, 4), 0);
    }

    #[test]
    #[should_panic]
    fn test_schedule_longer_than_catalog_panics() {
        let catalog = catalog(&["A"], 1, &[("s", "A")]);
        let schedule = Schedule::new(vec![
            at(1, ExamTime::Morning, 0),
            at(1, ExamTime::Morning, 0),
        ]);
        evaluate(&schedule, &catalog, 1);
    }
}
