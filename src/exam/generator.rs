//! Initial-solution and neighbor generation.
//!
//! Both functions assume a catalog that passed [`ExamConfig::validate`]:
//! with at least one course, an empty room or teacher table panics on the
//! first draw.
//!
//! [`ExamConfig::validate`]: super::ExamConfig::validate

use crate::models::{Assignment, Catalog, ExamTime, Schedule};
use rand::Rng;

/// Draws an independent random assignment for every course.
///
/// Room, teacher, time and date are each sampled uniformly. No conflict
/// checking is done; the result satisfies the structural invariants only.
pub fn random_schedule<R: Rng>(catalog: &Catalog, horizon: u32, rng: &mut R) -> Schedule {
    let num_rooms = catalog.rooms().len();
    let num_teachers = catalog.teachers().len();
    let assignments = (0..catalog.num_courses())
        .map(|_| Assignment {
            room: rng.random_range(0..num_rooms),
            teacher: rng.random_range(0..num_teachers),
            time: ExamTime::SLOTS[rng.random_range(0..ExamTime::SLOTS.len())],
            date: rng.random_range(1..=horizon),
        })
        .collect();
    Schedule::new(assignments)
}

/// Copies `schedule` and moves one uniformly chosen course to a random day
/// and room. Its teacher and time are kept.
///
/// An empty schedule is returned unchanged.
pub fn neighbor<R: Rng>(
    schedule: &Schedule,
    catalog: &Catalog,
    horizon: u32,
    rng: &mut R,
) -> Schedule {
    let mut next = schedule.clone();
    if next.is_empty() {
        return next;
    }
    let course = rng.random_range(0..next.len());
    let date = rng.random_range(1..=horizon);
    let room = rng.random_range(0..catalog.rooms().len());
    if let Some(a) = next.get_mut(course) {
        a.date = date;
        a.room = room;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Room};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog(courses: usize) -> Catalog {
        Catalog::new(
            (0..courses)
                .map(|i| Course::new(format!("C{i}"), format!("Course {i}")))
                .collect(),
            vec!["t1".into(), "t2".into(), "t3".into()],
            vec![],
            vec![Room::new(1, 10), Room::new(2, 20), Room::new(3, 30)],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_random_schedule_structure() {
        let catalog = catalog(40);
        let mut rng = StdRng::seed_from_u64(42);
        let schedule = random_schedule(&catalog, 14, &mut rng);

        assert_eq!(schedule.len(), 40);
        for (_, a) in schedule.iter() {
            assert!((1..=14).contains(&a.date));
            assert!(ExamTime::SLOTS.contains(&a.time));
            assert!(a.room < 3);
            assert!(a.teacher < 3);
        }
    }

    #[test]
    fn test_random_schedule_uses_both_times() {
        let catalog = catalog(60);
        let mut rng = StdRng::seed_from_u64(7);
        let schedule = random_schedule(&catalog, 5, &mut rng);
        let mornings = schedule
            .iter()
            .filter(|(_, a)| a.time == ExamTime::Morning)
            .count();
        assert!(mornings > 0 && mornings < 60);
    }

    #[test]
    fn test_random_schedule_empty_catalog() {
        let empty = Catalog::new(vec![], vec![], vec![], vec![], vec![]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(random_schedule(&empty, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_neighbor_touches_one_course() {
        let catalog = catalog(25);
        let mut rng = StdRng::seed_from_u64(11);
        let base = random_schedule(&catalog, 21, &mut rng);

        for _ in 0..200 {
            let next = neighbor(&base, &catalog, 21, &mut rng);
            assert_eq!(next.len(), base.len());
            let changed: Vec<usize> = base
                .iter()
                .filter(|&(c, a)| next.get(c) != Some(a))
                .map(|(c, _)| c)
                .collect();
            assert!(changed.len() <= 1, "more than one course moved");
            for c in changed {
                let (old, new) = (base.get(c).unwrap(), next.get(c).unwrap());
                assert_eq!(old.teacher, new.teacher);
                assert_eq!(old.time, new.time);
                assert!((1..=21).contains(&new.date));
            }
        }
    }

    #[test]
    fn test_neighbor_empty_schedule() {
        let catalog = catalog(0);
        let mut rng = StdRng::seed_from_u64(1);
        let empty = Schedule::new(vec![]);
        assert_eq!(neighbor(&empty, &catalog, 5, &mut rng), empty);
    }
}
