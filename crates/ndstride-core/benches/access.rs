//! Benchmarks for element access and traversal
//!
//! Compares contiguous arrays against strided views of the same storage

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndstride_core::{SliceSpec, StridedArray};
use rand::Rng;

fn sequential(shape: &[usize]) -> StridedArray<f64> {
    let len: usize = shape.iter().product();
    StridedArray::from_vec((0..len).map(|i| i as f64).collect(), shape).unwrap()
}

fn random_indices(shape: &[usize], count: usize) -> Vec<Vec<isize>> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| {
            shape
                .iter()
                .map(|&dim| rng.random_range(0..dim) as isize)
                .collect()
        })
        .collect()
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for rank in [1usize, 2, 4] {
        let side = (1_000_000f64).powf(1.0 / rank as f64).round() as usize;
        let shape = vec![side; rank];
        let arr = sequential(&shape);
        let indices = random_indices(&shape, 1_000);

        group.bench_with_input(BenchmarkId::new("rank", rank), &indices, |bench, indices| {
            bench.iter(|| {
                for idx in indices {
                    black_box(arr.get(idx).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for side in [100usize, 1_000] {
        let arr = sequential(&[side, side]);
        let view = arr
            .slice(&[SliceSpec::step(2), SliceSpec::step(-1)])
            .unwrap();

        group.bench_with_input(BenchmarkId::new("contiguous", side), &arr, |bench, arr| {
            bench.iter(|| black_box(arr.iter().sum::<f64>()));
        });

        group.bench_with_input(BenchmarkId::new("strided_view", side), &view, |bench, view| {
            bench.iter(|| black_box(view.iter().sum::<f64>()));
        });
    }

    group.finish();
}

fn bench_slice(c: &mut Criterion) {
    let arr = sequential(&[64, 64, 64]);
    let specs = [
        SliceSpec::new(Some(1), None, Some(2)),
        SliceSpec::full(),
        SliceSpec::range(-10, -2),
    ];

    c.bench_function("slice_view", |bench| {
        bench.iter(|| black_box(arr.slice(black_box(&specs)).unwrap()));
    });
}

criterion_group!(benches, bench_get, bench_iterate, bench_slice);
criterion_main!(benches);
