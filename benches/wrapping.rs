//! Benchmarks for line wrapping and placeholder expansion.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use scrawl::ui::viewport::{expand_line, wrap_line};

fn bench_expand_plain(c: &mut Criterion) {
    let line = "The quick brown fox jumps over the lazy dog. ".repeat(8);
    c.bench_function("expand_plain", |b| b.iter(|| expand_line(black_box(&line))));
}

fn bench_expand_mixed(c: &mut Criterion) {
    let line = "indent\there\x1b and béyond ".repeat(8);
    c.bench_function("expand_mixed", |b| b.iter(|| expand_line(black_box(&line))));
}

fn bench_wrap_long_line(c: &mut Criterion) {
    let line = "word ".repeat(200);
    c.bench_function("wrap_long_line", |b| {
        b.iter(|| wrap_line(black_box(&line), black_box(76)))
    });
}

criterion_group!(
    benches,
    bench_expand_plain,
    bench_expand_mixed,
    bench_wrap_long_line
);
criterion_main!(benches);
