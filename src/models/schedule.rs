//! Exam assignments and the schedule that holds one per course.

use super::catalog::Catalog;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time of day an exam sits in.
///
/// Only [`ExamTime::Morning`] and [`ExamTime::Afternoon`] are ever produced
/// by the generators. [`ExamTime::Midday`] exists so the break check has a
/// value to look for; no generated schedule contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExamTime {
    /// 9 AM.
    Morning,
    /// 1 PM, the lunch break.
    Midday,
    /// 2 PM.
    Afternoon,
}

impl ExamTime {
    /// The two times the search draws from, in order of the day.
    pub const SLOTS: [ExamTime; 2] = [ExamTime::Morning, ExamTime::Afternoon];

    /// Clock hour of the exam start.
    pub fn hour(self) -> u8 {
        match self {
            ExamTime::Morning => 9,
            ExamTime::Midday => 13,
            ExamTime::Afternoon => 14,
        }
    }

    /// Position within [`ExamTime::SLOTS`], `None` for midday.
    pub fn slot_position(self) -> Option<usize> {
        match self {
            ExamTime::Morning => Some(0),
            ExamTime::Midday => None,
            ExamTime::Afternoon => Some(1),
        }
    }
}

impl fmt::Display for ExamTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExamTime::Morning => "morning",
            ExamTime::Midday => "midday",
            ExamTime::Afternoon => "afternoon",
        };
        f.write_str(s)
    }
}

/// Where, when and by whom one course is examined.
///
/// `room` and `teacher` are positions in the [`Catalog`] tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Assignment {
    pub room: usize,
    pub teacher: usize,
    pub time: ExamTime,
    /// Day index, 1-based.
    pub date: u32,
}

impl Assignment {
    /// Dense index of the (day, time) slot within a horizon, or `None` when
    /// the exam sits outside the evaluated slots.
    pub fn slot_index(&self, horizon: u32) -> Option<usize> {
        if self.date == 0 || self.date > horizon {
            return None;
        }
        let pos = self.time.slot_position()?;
        Some((self.date as usize - 1) * ExamTime::SLOTS.len() + pos)
    }
}

/// One assignment per catalog course, addressed by course position.
///
/// The course set is fixed at construction; the search only ever swaps
/// whole schedules or edits individual assignments in place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn new(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn get(&self, course: usize) -> Option<&Assignment> {
        self.assignments.get(course)
    }

    pub fn get_mut(&mut self, course: usize) -> Option<&mut Assignment> {
        self.assignments.get_mut(course)
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Iterates `(course, assignment)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Assignment)> {
        self.assignments.iter().enumerate()
    }

    /// Looks up the assignment of a course by its code.
    pub fn by_code<'a>(&'a self, catalog: &Catalog, code: &str) -> Option<&'a Assignment> {
        catalog.course_index(code).and_then(|c| self.get(c))
    }

    /// Resolves catalog positions into export rows, one per course.
    ///
    /// # Panics
    ///
    /// If the schedule was not built for `catalog`: it holds more courses
    /// than the catalog, or a room or teacher index the catalog lacks.
    pub fn rows(&self, catalog: &Catalog) -> Vec<ScheduleRow> {
        self.iter()
            .map(|(c, a)| {
                let course = &catalog.courses()[c];
                ScheduleRow {
                    course: course.code.clone(),
                    name: course.name.clone(),
                    room: catalog.rooms()[a.room].id,
                    teacher: catalog.teachers()[a.teacher].clone(),
                    date: a.date,
                    time: a.time,
                }
            })
            .collect()
    }
}

/// A flattened schedule entry for export or display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleRow {
    pub course: String,
    pub name: String,
    pub room: u32,
    pub teacher: String,
    pub date: u32,
    pub time: ExamTime,
}

impl fmt::Display for ScheduleRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} room {} day {} {} ({})",
            self.course, self.room, self.date, self.time, self.teacher
        )
    }
}
