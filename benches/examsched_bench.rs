//! Criterion benchmarks for exam scheduling.
//!
//! Uses synthetic catalogs with a fixed registration pattern so runs are
//! comparable across changes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_examsched::exam::fitness::fitness;
use u_examsched::exam::generator::random_schedule;
use u_examsched::exam::{ExamConfig, ExamScheduler};
use u_examsched::models::{Catalog, Course, Registration, Room};

// ===========================================================================
// Synthetic catalog: every student takes five courses spread over the list
// ===========================================================================

fn synthetic_catalog(courses: usize, students: usize) -> Catalog {
    let registrations = (0..students).flat_map(|s| {
        (0..5).map(move |k| {
            Registration::new(format!("s{s}"), format!("C{}", (s * 7 + k * 13) % courses))
        })
    });
    Catalog::new(
        (0..courses)
            .map(|c| Course::new(format!("C{c}"), format!("Course {c}")))
            .collect(),
        (0..courses / 3 + 1).map(|t| format!("t{t}")).collect(),
        (0..students).map(|s| format!("s{s}")).collect(),
        (1..=10).map(|r| Room::new(r, 50)).collect(),
        registrations,
    )
    .expect("synthetic catalog is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");

    for &(courses, students) in &[(30usize, 200usize), (100, 1000), (300, 5000)] {
        let catalog = synthetic_catalog(courses, students);
        let mut rng = StdRng::seed_from_u64(42);
        let schedule = random_schedule(&catalog, 14, &mut rng);
        group.bench_with_input(
            BenchmarkId::new(format!("c{courses}_s{students}"), courses),
            &(catalog, schedule),
            |b, (cat, sched)| b.iter(|| black_box(fitness(black_box(sched), cat, 14))),
        );
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);

    for &horizon in &[14u32, 21] {
        let catalog = synthetic_catalog(60, 500);
        let config = ExamConfig::default()
            .with_horizon(horizon)
            .with_max_iterations(1000)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(horizon),
            &(catalog, config),
            |b, (cat, cfg)| {
                b.iter(|| {
                    let outcome = ExamScheduler::solve(black_box(cat), black_box(cfg));
                    black_box(outcome)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_fitness, bench_solve);
criterion_main!(benches);
