//! Static reference data: courses, teachers, rooms, students, registrations.

use crate::error::ConfigError;
use std::collections::{HashMap, HashSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A course whose exam must be placed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    /// Unique course code, e.g. `"CS101"`.
    pub code: String,
    /// Human-readable course name.
    pub name: String,
}

impl Course {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// An exam room.
///
/// `capacity` is carried through to the output but never checked against
/// the number of registered students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Room {
    pub id: u32,
    pub capacity: u32,
}

impl Room {
    pub fn new(id: u32, capacity: u32) -> Self {
        Self { id, capacity }
    }
}

/// A (student, course-code) registration pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registration {
    pub student: String,
    pub course: String,
}

impl Registration {
    pub fn new(student: impl Into<String>, course: impl Into<String>) -> Self {
        Self {
            student: student.into(),
            course: course.into(),
        }
    }
}

/// The immutable input to a search.
///
/// Besides the raw tables, the catalog keeps a dense student/course
/// incidence index so the evaluators never touch strings in their inner
/// loops. Courses, teachers and rooms are addressed by their position in
/// the catalog.
///
/// # Examples
///
/// ```
/// use u_examsched::models::{Catalog, Course, Registration, Room};
///
/// let catalog = Catalog::new(
///     vec![Course::new("CS101", "Programming"), Course::new("MG200", "Accounting")],
///     vec!["Dr. Lee".into()],
///     vec!["alice".into(), "bob".into()],
///     vec![Room::new(1, 40)],
///     vec![Registration::new("alice", "CS101"), Registration::new("alice", "MG200")],
/// )
/// .unwrap();
///
/// assert_eq!(catalog.num_courses(), 2);
/// assert_eq!(catalog.students_of(0).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
    teachers: Vec<String>,
    students: Vec<String>,
    rooms: Vec<Room>,
    registrations: HashSet<Registration>,
    /// Student indices registered in each course, sorted, no duplicates.
    course_students: Vec<Vec<usize>>,
    /// Course indices each student is registered in, sorted, no duplicates.
    student_courses: Vec<Vec<usize>>,
    course_index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog and its registration index.
    ///
    /// Duplicate registrations collapse into one. Registrations that name a
    /// course missing from `courses` are kept in the registration set but
    /// play no part in any constraint. Students that appear only in
    /// registrations are appended to the student list.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DuplicateCourse`], [`ConfigError::DuplicateRoom`] or
    /// [`ConfigError::DuplicateTeacher`] when a key is repeated. Teachers
    /// are compared by position, so each name must appear once. Empty room
    /// or teacher lists are accepted here and rejected when a search is
    /// configured.
    pub fn new(
        courses: Vec<Course>,
        teachers: Vec<String>,
        students: Vec<String>,
        rooms: Vec<Room>,
        registrations: impl IntoIterator<Item = Registration>,
    ) -> Result<Self, ConfigError> {
        let mut course_index = HashMap::with_capacity(courses.len());
        for (idx, course) in courses.iter().enumerate() {
            if course_index.insert(course.code.clone(), idx).is_some() {
                return Err(ConfigError::DuplicateCourse(course.code.clone()));
            }
        }

        let mut room_ids = HashSet::with_capacity(rooms.len());
        for room in &rooms {
            if !room_ids.insert(room.id) {
                return Err(ConfigError::DuplicateRoom(room.id));
            }
        }

        let mut teacher_names = HashSet::with_capacity(teachers.len());
        for teacher in &teachers {
            if !teacher_names.insert(teacher.as_str()) {
                return Err(ConfigError::DuplicateTeacher(teacher.clone()));
            }
        }

        let mut students = students;
        let mut student_index: HashMap<String, usize> = HashMap::new();
        for (idx, s) in students.iter().enumerate() {
            student_index.entry(s.clone()).or_insert(idx);
        }

        let registrations: HashSet<Registration> = registrations.into_iter().collect();

        let mut course_students = vec![Vec::new(); courses.len()];
        let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(registrations.len());
        for reg in &registrations {
            let Some(&c) = course_index.get(&reg.course) else {
                continue;
            };
            let s = match student_index.get(&reg.student) {
                Some(&s) => s,
                None => {
                    students.push(reg.student.clone());
                    student_index.insert(reg.student.clone(), students.len() - 1);
                    students.len() - 1
                }
            };
            pairs.push((s, c));
        }

        let mut student_courses = vec![Vec::new(); students.len()];
        for (s, c) in pairs {
            course_students[c].push(s);
            student_courses[s].push(c);
        }
        for list in course_students.iter_mut().chain(student_courses.iter_mut()) {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self {
            courses,
            teachers,
            students,
            rooms,
            registrations,
            course_students,
            student_courses,
            course_index,
        })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn teachers(&self) -> &[String] {
        &self.teachers
    }

    pub fn students(&self) -> &[String] {
        &self.students
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn registrations(&self) -> &HashSet<Registration> {
        &self.registrations
    }

    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    /// Position of the course with the given code.
    pub fn course_index(&self, code: &str) -> Option<usize> {
        self.course_index.get(code).copied()
    }

    /// Student indices registered in course `course`.
    pub fn students_of(&self, course: usize) -> &[usize] {
        &self.course_students[course]
    }

    /// Course indices student `student` is registered in.
    pub fn courses_of(&self, student: usize) -> &[usize] {
        &self.student_courses[student]
    }

    /// Whether student `student` is registered in course `course`.
    pub fn is_registered(&self, student: usize, course: usize) -> bool {
        self.course_students[course].binary_search(&student).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(
            vec![
                Course::new("CS101", "Programming"),
                Course::new("MG200", "Accounting"),
                Course::new("CS300", "Compilers"),
            ],
            vec!["t1".into(), "t2".into()],
            vec!["alice".into(), "bob".into()],
            vec![Room::new(1, 30), Room::new(2, 60)],
            vec![
                Registration::new("alice", "CS101"),
                Registration::new("alice", "CS101"),
                Registration::new("alice", "MG200"),
                Registration::new("bob", "CS300"),
                Registration::new("carol", "CS101"),
                Registration::new("bob", "XX999"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_registration_index() {
        let catalog = sample();
        assert_eq!(catalog.students_of(0), &[0, 2]);
        assert_eq!(catalog.courses_of(0), &[0, 1]);
        assert_eq!(catalog.courses_of(1), &[2]);
        assert!(catalog.is_registered(0, 1));
        assert!(!catalog.is_registered(1, 0));
    }

    #[test]
    fn test_duplicates_collapse() {
        let catalog = sample();
        assert_eq!(catalog.registrations().len(), 5);
    }

    #[test]
    fn test_unknown_student_appended() {
        let catalog = sample();
        assert_eq!(catalog.students(), &["alice", "bob", "carol"]);
    }

    #[test]
    fn test_unknown_course_ignored_in_index() {
        let catalog = sample();
        assert!(catalog.course_index("XX999").is_none());
        assert_eq!(catalog.courses_of(1), &[2]);
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let err = Catalog::new(
            vec![Course::new("A", "a"), Course::new("A", "b")],
            vec![],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateCourse("A".into()));
    }

    #[test]
    fn test_duplicate_room_rejected() {
        let err = Catalog::new(
            vec![],
            vec![],
            vec![],
            vec![Room::new(3, 10), Room::new(3, 20)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateRoom(3));
    }

    #[test]
    fn test_duplicate_teacher_rejected() {
        let err = Catalog::new(
            vec![Course::new("A", "a"), Course::new("B", "b")],
            vec!["Dr. Lee".into(), "Dr. Lee".into()],
            vec![],
            vec![Room::new(1, 10)],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateTeacher("Dr. Lee".into()));
    }
}
