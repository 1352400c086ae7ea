//! Lexer throughput benchmarks. Run with `cargo bench --package kestrelc-lex`.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use kestrelc_lex::{NewlineFilter, TokenType};

fn token_count(source: &str) -> usize {
    let mut filter = NewlineFilter::new(source);
    let mut count = 0;
    loop {
        let tok = filter.next_token();
        if tok.kind == TokenType::Eof {
            break;
        }
        count += 1;
    }
    count
}

fn bench_lexer_class_body(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "var x = 1 + 2";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("var_arithmetic", |b| b.iter(|| token_count(black_box(source))));

    let class_source = r#"
        class Box {
            add(a, b) { a + b }
            static of(v) { Box.new(v) }
        }
        Box.add(3, 4)
    "#;
    group.throughput(Throughput::Bytes(class_source.len() as u64));
    group.bench_function("class_with_methods", |b| {
        b.iter(|| token_count(black_box(class_source)))
    });

    group.finish();
}

fn bench_lexer_strings_and_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_literals");

    group.bench_function("string_literal", |b| {
        b.iter(|| token_count(black_box(r#"var s = "hello, world""#)))
    });

    group.bench_function("number_literal", |b| {
        b.iter(|| token_count(black_box("var x = 3.14159")))
    });

    group.finish();
}

fn bench_lexer_newline_heavy(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_newlines");

    let source = "var a = 1\nvar b = 2\nvar c = 3\nvar d = a +\n  b +\n  c\n";
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("mixed_continuations", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_class_body,
    bench_lexer_strings_and_numbers,
    bench_lexer_newline_heavy
);
criterion_main!(benches);
