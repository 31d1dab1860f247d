//! Answer Matching Benchmarks
//!
//! Cost of the extraction heuristics on typical OCR output.
//!
//! Run with: `cargo bench --bench answer_matching`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mcq_extract_server::extraction::{extract, parse_question, resolve_answer};

const QUESTION: &str = "Which city is the capital of France?\n\
A. London\n\
B. Rome\n\
C. Paris\n\
D. Berlin\n";

/// Answer screenshots as OCR tends to return them
const ANSWERS: &[(&str, &str)] = &[
    ("marked_option", "A. London\nB. Rome\nC. Paris √\nD. Berlin"),
    ("bare_mark", "a london b rome c * d berlin"),
    ("answer_label", "The correct option is shown below. Answer: B"),
    ("no_match", "1234 5678 XYZ no marks present on this page"),
];

fn bench_resolve_answer(c: &mut Criterion) {
    let options = parse_question(QUESTION).options;

    let mut group = c.benchmark_group("resolve_answer");
    for (name, text) in ANSWERS {
        group.bench_function(*name, |b| {
            b.iter(|| resolve_answer(black_box(text), black_box(&options)))
        });
    }
    group.finish();
}

fn bench_parse_question(c: &mut Criterion) {
    c.bench_function("parse_question", |b| {
        b.iter(|| parse_question(black_box(QUESTION)))
    });
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_pair", |b| {
        b.iter(|| extract(black_box(QUESTION), black_box(ANSWERS[0].1)))
    });
}

criterion_group!(
    benches,
    bench_resolve_answer,
    bench_parse_question,
    bench_extract
);
criterion_main!(benches);
