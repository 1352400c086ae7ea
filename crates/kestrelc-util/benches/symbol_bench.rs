//! SymbolTable benchmarks
//!
//! Run with: `cargo bench --bench symbol_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kestrelc_util::SymbolTable;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_new_name", |b| {
        let mut table = SymbolTable::new();
        let mut counter = 0u64;
        b.iter(|| {
            counter += 1;
            table.add(&format!("name_{counter}"))
        })
    });

    group.finish();
}

fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("find");
    group.throughput(Throughput::Elements(1));

    let mut table = SymbolTable::new();
    for i in 0..1000 {
        table.add(&format!("sym_{i}")).unwrap();
    }

    group.bench_function("find_hit", |b| {
        b.iter(|| black_box(table.find("sym_500")))
    });

    group.bench_function("find_miss", |b| {
        b.iter(|| black_box(table.find("not_present")))
    });

    group.finish();
}

fn bench_ensure(c: &mut Criterion) {
    let mut group = c.benchmark_group("ensure");
    group.throughput(Throughput::Elements(1));

    group.bench_function("ensure_existing", |b| {
        let mut table = SymbolTable::new();
        table.ensure("+ ");
        b.iter(|| black_box(table.ensure("+ ")))
    });

    group.finish();
}

fn bench_varying_table_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("varying_table_sizes");

    for &size in &[10usize, 100, 1_000, 10_000] {
        let mut table = SymbolTable::new();
        for i in 0..size {
            table.add(&format!("sym_{i}")).unwrap();
        }
        let probe = format!("sym_{}", size / 2);

        group.bench_with_input(BenchmarkId::new("find", size), &probe, |b, name| {
            b.iter(|| black_box(table.find(name)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_add, bench_find, bench_ensure, bench_varying_table_sizes);
criterion_main!(benches);
