//! Soft-constraint diagnostics.
//!
//! Run once on the final schedule. The counts are reported alongside the
//! fitness and never influence the search.

use super::config::PreferredOrder;
use crate::models::{Catalog, ExamTime, Schedule};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four diagnostic rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SoftConstraint {
    /// No exams during the midday break.
    Break,
    /// No student sits a morning and an afternoon exam on the same day.
    ConsecutiveExams,
    /// A student's first-family exam is not dated after their
    /// second-family exam.
    PreferredOrder,
    /// Every day in the first half of the horizon holds an exam.
    FacultyMeeting,
}

impl SoftConstraint {
    pub const ALL: [SoftConstraint; 4] = [
        SoftConstraint::Break,
        SoftConstraint::ConsecutiveExams,
        SoftConstraint::PreferredOrder,
        SoftConstraint::FacultyMeeting,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SoftConstraint::Break => "Break",
            SoftConstraint::ConsecutiveExams => "Consecutive Exams",
            SoftConstraint::PreferredOrder => "Preferred Order",
            SoftConstraint::FacultyMeeting => "Faculty Meeting",
        }
    }
}

impl fmt::Display for SoftConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Violation counts per soft constraint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SoftConstraintReport {
    pub break_time: u64,
    pub consecutive_exams: u64,
    pub preferred_order: u64,
    pub faculty_meeting: u64,
}

impl SoftConstraintReport {
    pub fn get(&self, constraint: SoftConstraint) -> u64 {
        match constraint {
            SoftConstraint::Break => self.break_time,
            SoftConstraint::ConsecutiveExams => self.consecutive_exams,
            SoftConstraint::PreferredOrder => self.preferred_order,
            SoftConstraint::FacultyMeeting => self.faculty_meeting,
        }
    }

    /// `(name, count)` rows in a fixed order.
    pub fn entries(&self) -> [(&'static str, u64); 4] {
        SoftConstraint::ALL.map(|c| (c.name(), self.get(c)))
    }

    pub fn total(&self) -> u64 {
        self.break_time + self.consecutive_exams + self.preferred_order + self.faculty_meeting
    }
}

/// Evaluates all four soft constraints.
///
/// # Panics
///
/// May panic if `schedule` holds more courses than `catalog`.
pub fn analyze(
    schedule: &Schedule,
    catalog: &Catalog,
    horizon: u32,
    order: &PreferredOrder,
) -> SoftConstraintReport {
    SoftConstraintReport {
        break_time: break_violations(schedule, horizon),
        consecutive_exams: consecutive_violations(schedule, catalog, horizon),
        preferred_order: preferred_order_violations(schedule, catalog, order),
        faculty_meeting: faculty_meeting_violations(schedule, horizon),
    }
}

/// Number of exams placed at midday within the horizon.
///
/// The generators never emit [`ExamTime::Midday`], so this is zero for
/// every schedule the search produces.
pub fn break_violations(schedule: &Schedule, horizon: u32) -> u64 {
    schedule
        .iter()
        .filter(|(_, a)| a.time == ExamTime::Midday && (1..=horizon).contains(&a.date))
        .count() as u64
}

/// For every (morning exam, afternoon exam) pair on the same day, the
/// number of students registered in both courses.
pub fn consecutive_violations(schedule: &Schedule, catalog: &Catalog, horizon: u32) -> u64 {
    let mut slots: Vec<(usize, usize)> = schedule
        .iter()
        .filter_map(|(c, a)| a.slot_index(horizon).map(|slot| (slot, c)))
        .collect();
    slots.sort_unstable();

    let per_day = ExamTime::SLOTS.len();
    let mut violations = 0;
    for day in slots.chunk_by(|a, b| a.0 / per_day == b.0 / per_day) {
        let split = day.partition_point(|&(slot, _)| slot % per_day == 0);
        let (morning, afternoon) = day.split_at(split);
        for &(_, m) in morning {
            for &(_, a) in afternoon {
                violations += shared_students(catalog.students_of(m), catalog.students_of(a));
            }
        }
    }
    violations
}

/// Students whose exam in the first course family is dated after their
/// exam in the second family.
///
/// A family is every course whose code starts with the family prefix. When
/// a student takes several courses of one family, the first of them in
/// catalog order stands for the family.
pub fn preferred_order_violations(
    schedule: &Schedule,
    catalog: &Catalog,
    order: &PreferredOrder,
) -> u64 {
    let courses = catalog.courses();
    let first_date = |student: usize, prefix: &str| {
        catalog
            .courses_of(student)
            .iter()
            .find(|&&c| courses[c].code.starts_with(prefix))
            .and_then(|&c| schedule.get(c))
            .map(|a| a.date)
    };

    (0..catalog.students().len())
        .filter(|&s| {
            let first = first_date(s, order.first.as_str());
            let second = first_date(s, order.second.as_str());
            matches!((first, second), (Some(f), Some(l)) if f > l)
        })
        .count() as u64
}

/// Days in the first `ceil(horizon / 2)` days that hold no exam.
pub fn faculty_meeting_violations(schedule: &Schedule, horizon: u32) -> u64 {
    let half = horizon.div_ceil(2);
    let mut occupied: Vec<u32> = schedule
        .iter()
        .map(|(_, a)| a.date)
        .filter(|date| (1..=half).contains(date))
        .collect();
    occupied.sort_unstable();
    occupied.dedup();
    u64::from(half) - occupied.len() as u64
}

/// Size of the intersection of two sorted index lists.
fn shared_students(a: &[usize], b: &[usize]) -> u64 {
    let (mut i, mut j, mut n) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                n += 1;
                i += 1;
                j += 1;
            }
        }
    }
    n
}
