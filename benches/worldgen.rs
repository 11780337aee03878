use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wildmarch::{Grid, Position, VisibilityField};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("world-generation");
    group.sample_size(10);

    group.bench_function("generate 100x100", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(black_box(0xC0FFEE));
            Grid::generate(&mut rng, 100, 100).unwrap()
        })
    });

    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let grid = Grid::generate(&mut rng, 100, 100).unwrap();
    group.bench_function("visibility 100x100", |b| {
        b.iter(|| VisibilityField::compute(black_box(&grid), Position::new(50, 50), 6.0))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
