//! Compile-throughput benchmarks. Run with `cargo bench --package kestrelc-par`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kestrelc_objects::Vm;
use kestrelc_par::compile;

fn compile_source(source: &str) {
    let mut vm = Vm::new();
    compile(&mut vm, black_box(source)).expect("benchmark source should compile cleanly");
}

fn bench_compile_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_simple");

    let source = "var x = 1 + 2";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("var_arithmetic", |b| b.iter(|| compile_source(source)));

    group.finish();
}

fn bench_compile_class(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_class");

    let source = r#"
        class Box {
            add(a, b) { a + b }
            static of(v) { v }
        }
        var b = Box
        b.add(1, 2)
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("class_with_methods", |b| b.iter(|| compile_source(source)));

    group.finish();
}

fn bench_compile_control_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_control_flow");

    let source = r#"
        class Num {}
        var n = 10
        var result = if (n is Num) {
            n + 1
        } else {
            0
        }
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("if_else_expression", |b| b.iter(|| compile_source(source)));

    group.finish();
}

criterion_group!(benches, bench_compile_simple, bench_compile_class, bench_compile_control_flow);
criterion_main!(benches);
