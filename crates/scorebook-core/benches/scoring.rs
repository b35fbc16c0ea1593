use criterion::{black_box, criterion_group, criterion_main, Criterion};

use scorebook_core::case::TestCase;
use scorebook_core::container::Container;
use scorebook_core::score::Score;
use scorebook_core::suite::TestSuite;

fn scoring_case(deltas: usize) -> TestCase {
    TestCase::builder()
        .min_score(0.0)
        .max_score(deltas as f64)
        .kind("bench")
        .check(move |score: &mut Score, _: &mut dyn Container| {
            for _ in 0..deltas {
                score.increment_with(1.0, "bench", "answer");
            }
            true
        })
        .build()
        .expect("bounds are set")
}

fn bench_increment(c: &mut Criterion) {
    let mut group = c.benchmark_group("increment");

    for n in [10usize, 100, 1000] {
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| {
                let mut score = Score::new(0.0, n as f64);
                for _ in 0..n {
                    score.increment(black_box(1.0));
                }
                score.value()
            })
        });
    }

    group.finish();
}

fn bench_percentage(c: &mut Criterion) {
    let mut score = Score::new(0.0, 200.0);
    score.increment(11.0);
    score.increment(11.0);

    c.bench_function("percentage", |b| {
        b.iter(|| black_box(&score).percentage().unwrap())
    });
}

fn bench_suite_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("suite_run");

    for cases in [1usize, 10, 100] {
        group.bench_function(format!("cases={cases}"), |b| {
            let mut suite = TestSuite::new();
            for _ in 0..cases {
                suite.attach(scoring_case(10)).unwrap();
            }
            b.iter(|| suite.run())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_increment, bench_percentage, bench_suite_run);
criterion_main!(benches);
