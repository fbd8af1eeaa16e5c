//! Performance benchmarks for tf-summarizer.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tf_summarizer::html::paragraph_text;
use tf_summarizer::{summarize, MatchMode, Options, Summarizer, Weighting};

const SAMPLE_TEXT: &str = "Rust is a general-purpose programming language. \
    Rust emphasizes performance, type safety, and concurrency. \
    Rust enforces memory safety without a garbage collector. \
    The borrow checker tracks the lifetime of references at compile time. \
    Software developers adopted Rust for systems programming. \
    Dr. Hoare started the project in 2006 at Mozilla Research. \
    The first stable release, Rust 1.0, was published in May 2015.";

const SAMPLE_HTML: &str = r#"
<html><body>
    <nav><a href="/">Home</a></nav>
    <article>
        <p>This is the first paragraph of the article with meaningful content.</p>
        <p>Here is a second paragraph with more content about the topic.</p>
        <p>A third paragraph gives the benchmark enough text to parse.</p>
    </article>
    <footer><p>Copyright 2024</p></footer>
</body></html>
"#;

fn bench_summarize_default(c: &mut Criterion) {
    c.bench_function("summarize_default", |b| {
        b.iter(|| summarize(black_box(SAMPLE_TEXT), 3));
    });
}

fn bench_shared_summarizer(c: &mut Criterion) {
    let summarizer = Summarizer::default();
    c.bench_function("summarize_shared", |b| {
        b.iter(|| summarizer.summarize(black_box(SAMPLE_TEXT)));
    });
}

fn bench_weighting_and_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("modes");
    for (name, weighting, match_mode) in [
        ("tf_token", Weighting::TermFrequency, MatchMode::Token),
        ("tf_substring", Weighting::TermFrequency, MatchMode::Substring),
        ("tfidf_token", Weighting::SentenceTfIdf, MatchMode::Token),
    ] {
        let summarizer = Summarizer::new(Options {
            weighting,
            match_mode,
            ..Options::default()
        });
        group.bench_function(name, |b| {
            b.iter(|| summarizer.summarize(black_box(SAMPLE_TEXT)));
        });
    }
    group.finish();
}

fn bench_document_size(c: &mut Criterion) {
    let summarizer = Summarizer::default();
    let mut group = c.benchmark_group("document_size");
    for repeats in [1usize, 10, 100] {
        let text = SAMPLE_TEXT.repeat(repeats);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(repeats), &text, |b, text| {
            b.iter(|| summarizer.summarize(black_box(text)));
        });
    }
    group.finish();
}

fn bench_paragraph_text(c: &mut Criterion) {
    c.bench_function("paragraph_text", |b| {
        b.iter(|| paragraph_text(black_box(SAMPLE_HTML)));
    });
}

criterion_group!(
    benches,
    bench_summarize_default,
    bench_shared_summarizer,
    bench_weighting_and_matching,
    bench_document_size,
    bench_paragraph_text
);
criterion_main!(benches);
