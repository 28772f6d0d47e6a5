//! Document model performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tintcap::{Editor, StyleTag, apply_style, compact, document, reconcile};

fn reconcile_benches(c: &mut Criterion) {
    c.bench_function("reconcile_from_empty_short", |b| {
        b.iter(|| reconcile(black_box("Hello, World!"), &[]));
    });

    let long_text = "caption line\n".repeat(800);
    c.bench_function("reconcile_from_empty_10k", |b| {
        b.iter(|| reconcile(black_box(&long_text), &[]));
    });

    let prev = reconcile(&long_text, &[]);
    let edited = format!("{long_text}one more line");
    c.bench_function("reconcile_append_10k", |b| {
        b.iter(|| reconcile(black_box(&edited), black_box(&prev)));
    });
}

fn apply_style_benches(c: &mut Criterion) {
    let text = "caption line\n".repeat(800);
    let styles = reconcile(&text, &[]);
    let mid = styles.len() / 2;

    c.bench_function("apply_style_half_document", |b| {
        b.iter(|| {
            apply_style(
                black_box(&styles),
                black_box(&text),
                0,
                mid,
                StyleTag::Yellow,
            )
        });
    });
}

fn compact_benches(c: &mut Criterion) {
    let text = "caption line\n".repeat(800);
    let uniform = reconcile(&text, &[]);
    c.bench_function("compact_uniform_10k", |b| {
        b.iter(|| compact(black_box(&uniform), black_box(&text)));
    });

    let mut striped = uniform.clone();
    for (i, entry) in striped.iter_mut().enumerate() {
        if i % 4 == 0 {
            entry.style = StyleTag::Red;
        }
    }
    c.bench_function("compact_striped_10k", |b| {
        b.iter(|| compact(black_box(&striped), black_box(&text)));
    });

    c.bench_function("measure_10k", |b| {
        b.iter(|| document::measure(black_box(&text)));
    });
}

fn editor_benches(c: &mut Criterion) {
    c.bench_function("editor_sample_seed", |b| {
        b.iter(|| Editor::sample());
    });

    c.bench_function("editor_segments_cached", |b| {
        let editor = Editor::sample();
        b.iter(|| black_box(&editor).segments());
    });
}

criterion_group!(
    benches,
    reconcile_benches,
    apply_style_benches,
    compact_benches,
    editor_benches
);
criterion_main!(benches);
