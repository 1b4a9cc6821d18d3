//! Benchmarks for timeline mapping
//!
//! Tests performance of span registration, layout derivation and timepoint
//! conversion for span sets of increasing size.

use concatrim::{Direction, Span, TimelineMapper};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SIZES: &[i64] = &[10, 100, 1_000, 10_000];

/// Spans of 400ms every second, registered in reverse order
fn spans(count: i64) -> Vec<Span> {
    (0..count)
        .rev()
        .map(|i| Span::new(i * 1000, i * 1000 + 400).unwrap())
        .collect()
}

fn mapper(count: i64) -> TimelineMapper {
    let mut mapper = TimelineMapper::new(250).unwrap();
    mapper.register_spans(spans(count)).unwrap();
    mapper
}

fn bench_register(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_spans");

    for &count in SIZES {
        let input = spans(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| {
                let mut mapper = TimelineMapper::default();
                mapper.register_spans(black_box(input.iter().copied())).unwrap();
                mapper
            })
        });
    }

    group.finish();
}

fn bench_derive_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_layout");

    for &count in SIZES {
        let base = mapper(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &base, |b, base| {
            b.iter(|| {
                let mut mapper = base.clone();
                mapper.set_padding(black_box(100)).unwrap();
                mapper.layout().duration()
            })
        });
    }

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for &count in SIZES {
        let mapper = mapper(count);
        mapper.layout();
        let last = count * 1000;

        group.bench_with_input(
            BenchmarkId::new("to_trimmed", count),
            &mapper,
            |b, mapper| {
                let mut t = 0;
                b.iter(|| {
                    t = (t + 137) % last;
                    mapper.convert(black_box(t), Direction::OriginalToTrimmed)
                })
            },
        );

        let trimmed_end = mapper.layout().duration();
        group.bench_with_input(
            BenchmarkId::new("to_original", count),
            &mapper,
            |b, mapper| {
                let mut t = 0;
                b.iter(|| {
                    t = (t + 137) % trimmed_end;
                    mapper.convert(black_box(t), Direction::TrimmedToOriginal)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_register, bench_derive_layout, bench_convert);
criterion_main!(benches);
