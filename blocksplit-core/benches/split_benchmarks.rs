//! Performance benchmarks for boundary refinement and block splitting
//!
//! Run with: cargo bench --bench split_benchmarks

use blocksplit_core::{BlockProcessor, Document, UnicodeBoundaryProvider};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Prose with one run-on sentence every `run_on_every` sentences
fn generate_text(size: usize, run_on_every: usize) -> String {
    let sentence = "The committee reviewed the quarterly energy trading figures. ";
    let run_on = "and then the desk kept trading ".repeat(200);

    let mut text = String::with_capacity(size + run_on.len());
    let mut n = 0;
    while text.len() < size {
        if n % run_on_every == 0 {
            text.push_str(&run_on);
        } else {
            text.push_str(sentence);
        }
        n += 1;
    }
    text.truncate(size);
    text
}

fn bench_document_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_document");
    let processor = BlockProcessor::with_max_block_chars(4_096).unwrap();

    for size in [102_400, 1_024_000, 4_096_000] {
        let doc = Document::new(generate_text(size, 50));

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("unicode", size), &doc, |b, doc| {
            b.iter(|| {
                let blocks = processor
                    .split_document(black_box(doc), &UnicodeBoundaryProvider)
                    .unwrap();
                black_box(blocks.len());
            });
        });
    }

    group.finish();
}

fn bench_limits(c: &mut Criterion) {
    let mut group = c.benchmark_group("limits");
    let doc = Document::new(generate_text(1_024_000, 10));

    for limit in [256, 4_096, 100_000] {
        let processor = BlockProcessor::with_max_block_chars(limit).unwrap();
        let refined = processor
            .refine_boundaries(&doc, &UnicodeBoundaryProvider)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("split_only", limit), &refined, |b, refined| {
            b.iter(|| {
                let blocks = blocksplit_core::domain::split(black_box(&doc), refined).unwrap();
                black_box(blocks.len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_document_sizes, bench_limits);
criterion_main!(benches);
