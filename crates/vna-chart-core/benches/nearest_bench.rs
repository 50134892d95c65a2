use vna_chart_core::{nearest, Datapoint, DiskMapper, DiskRect, Point, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_spiral(n: usize) -> Series {
    Series::new(
        (0..n)
            .map(|i| {
                let t = i as f64 / n as f64;
                let a = t * 20.0;
                Datapoint::new(1e6 + i as f64 * 1e3, t * a.cos(), t * a.sin())
            })
            .collect(),
    )
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    let mapper = DiskMapper { rect: DiskRect::new(145.0, 145.0, 250.0) };
    let reference = Series::empty();
    for &n in &[101usize, 1_001usize, 10_001usize] {
        let data = gen_spiral(n);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter(|| black_box(nearest(black_box(Point::new(190.0, 100.0)), &data, &reference, &mapper)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest);
criterion_main!(benches);
