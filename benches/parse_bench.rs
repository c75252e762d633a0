use benchbar::{collect, parse_bench_line};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::hint::black_box;

fn generate_bench_output(num_benchmarks: usize, runs: usize) -> String {
    let mut content = String::new();
    content.push_str("goos: linux\ngoarch: amd64\n");

    for run in 0..runs {
        for i in 0..num_benchmarks {
            content.push_str(&format!(
                "BenchmarkSuite_Op{}-8  {}  {}.{} ns/op\n",
                i,
                1_000_000 - run,
                100 + i,
                run
            ));
        }
    }

    content.push_str("PASS\n");
    content
}

fn bench_line_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_output/parse");

    for num in [100, 1_000, 10_000].iter() {
        let content = generate_bench_output(*num, 1);

        group.bench_with_input(BenchmarkId::from_parameter(num), num, |b, _| {
            b.iter(|| {
                let count = content.lines().filter_map(parse_bench_line).count();
                black_box(count);
            });
        });
    }

    group.finish();
}

fn bench_file_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_output/collect");

    for num in [100, 1_000].iter() {
        let content = generate_bench_output(*num, 3);
        let temp_file = format!("/tmp/bench_go_output_{}.txt", num);
        fs::write(&temp_file, &content).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(num), num, |b, _| {
            b.iter(|| {
                let groups = collect(&temp_file).unwrap();
                black_box(groups);
            });
        });

        fs::remove_file(&temp_file).ok();
    }

    group.finish();
}

criterion_group!(benches, bench_line_parsing, bench_file_collection);
criterion_main!(benches);
