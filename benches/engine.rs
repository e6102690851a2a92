use criterion::{black_box, criterion_group, criterion_main, Criterion};
use roshambo::analysis::{pick_probability, sample_size};
use roshambo::{analyze, Parameters};

fn bench_pick_probability(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick_probability");
    group.sample_size(20);

    // largest trial count of the reference parameterization
    let params = Parameters::default();
    let n = sample_size(0, &params);
    group.bench_function("first_offset", |b| {
        b.iter(|| black_box(pick_probability(black_box(0), n, &params)));
    });

    group.finish();
}

fn bench_full_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    group.sample_size(10);

    group.bench_function("reference", |b| {
        b.iter(|| black_box(analyze(&Parameters::default())));
    });
    group.bench_function("two_sided", |b| {
        b.iter(|| black_box(analyze(&Parameters::two_sided())));
    });

    group.finish();
}

criterion_group!(benches, bench_pick_probability, bench_full_sweep);
criterion_main!(benches);
