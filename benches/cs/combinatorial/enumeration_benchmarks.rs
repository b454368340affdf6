use combinatorics::{
    enumerate_combinations, enumerate_permutations, enumerate_subsets, gray_code_order,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_permutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_permutations");
    for n in [4usize, 6, 8] {
        let elements: Vec<usize> = (0..n).collect();
        group.bench_with_input(BenchmarkId::new("without_replacement", n), &elements, |b, e| {
            b.iter(|| enumerate_permutations(black_box(e), e.len() as i64, false))
        });
    }
    group.finish();
}

fn bench_combinations(c: &mut Criterion) {
    let mut group = c.benchmark_group("enumerate_combinations");
    let elements: Vec<usize> = (0..12).collect();
    for length in [2i64, 4, 6] {
        group.bench_with_input(BenchmarkId::new("with_replacement", length), &length, |b, &r| {
            b.iter(|| enumerate_combinations(black_box(&elements), r, true))
        });
    }
    group.finish();
}

fn bench_subsets_and_gray_code(c: &mut Criterion) {
    let elements: Vec<usize> = (0..12).collect();
    c.bench_function("enumerate_subsets_12", |b| {
        b.iter(|| enumerate_subsets(black_box(&elements), true))
    });
    c.bench_function("gray_code_order_12", |b| b.iter(|| gray_code_order(black_box(12))));
}

criterion_group!(
    benches,
    bench_permutations,
    bench_combinations,
    bench_subsets_and_gray_code
);
criterion_main!(benches);
