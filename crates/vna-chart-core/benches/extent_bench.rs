use vna_chart_core::{compute_extent, Datapoint, ExtentMode, Series};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};

fn gen_sweep(n: usize, start: f64, stop: f64) -> Series {
    let step = (stop - start) / (n.max(2) - 1) as f64;
    Series::new(
        (0..n)
            .map(|i| {
                let a = i as f64 * 0.01;
                Datapoint::new(start + step * i as f64, 0.6 * a.cos(), 0.6 * a.sin())
            })
            .collect(),
    )
}

fn bench_extent(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_extent");
    for &n in &[101usize, 1_001usize, 10_001usize] {
        let data = gen_sweep(n, 1e6, 30e6);
        // reference covers a wider span, half of it gets filtered
        let reference = gen_sweep(n, 1e6, 60e6);
        let span = data.span().unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, _| {
            b.iter(|| {
                black_box(compute_extent(&data, &reference, &span, ExtentMode::Auto, Datapoint::inductive_equivalent))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extent);
criterion_main!(benches);
