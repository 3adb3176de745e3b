//! Performance benchmarks for Jangle

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jangle::model::split_transcript;
use jangle::Document;

fn generate_document(num_blocks: usize, lines_per_block: usize) -> String {
    let mut doc = String::from("A benchmark session.\n\n");

    for i in 0..num_blocks {
        doc.push_str(&format!("Step {} computes something\nworth explaining.\n\n", i));
        for j in 0..lines_per_block {
            doc.push_str(&format!("       v{} =: {} + {}\n", j, i, j));
        }
        doc.push_str(&format!("    ┆ {}\u{a0}\n\n", i));
    }

    doc
}

fn generate_transcript(num_blocks: usize) -> String {
    let mut transcript = String::new();
    for i in 0..num_blocks {
        transcript.push_str(&format!("   \n   {}\n\u{241E}\n", i));
    }
    transcript.push_str("\u{241E}\n");
    transcript
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for num_blocks in [10, 100, 1000].iter() {
        let text = generate_document(*num_blocks, 5);
        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &text, |b, text| {
            b.iter(|| Document::parse(black_box(text)))
        });
    }

    group.finish();
}

fn bench_tangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tangle");

    for num_blocks in [10, 100, 1000].iter() {
        let doc = Document::parse(&generate_document(*num_blocks, 5));
        group.bench_with_input(BenchmarkId::new("blocks", num_blocks), &doc, |b, doc| {
            b.iter(|| black_box(doc).tangle())
        });
    }

    group.finish();
}

fn bench_weave(c: &mut Criterion) {
    let mut group = c.benchmark_group("weave");

    for num_blocks in [10, 100, 1000].iter() {
        let doc = Document::parse(&generate_document(*num_blocks, 5));
        let transcript = generate_transcript(*num_blocks);

        group.bench_with_input(
            BenchmarkId::new("blocks", num_blocks),
            &(doc, transcript),
            |b, (doc, transcript)| b.iter(|| doc.weave(black_box(transcript))),
        );
    }

    let transcript = generate_transcript(10_000);
    group.bench_function("split_10k", |b| {
        b.iter(|| split_transcript(black_box(&transcript)))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_tangle, bench_weave);

criterion_main!(benches);
