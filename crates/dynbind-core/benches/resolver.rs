//! Micro-benchmarks for name composition and candidate expansion.
//!
//! Run: cargo bench -p dynbind-core

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use dynbind_core::{Platform, build_file_name, candidate_sequence};

fn bench_build_file_name(c: &mut Criterion) {
    c.bench_function("build_file_name/unix_versioned", |b| {
        b.iter(|| build_file_name(Platform::Unix, black_box("avcodec"), black_box(Some(61))))
    });
    c.bench_function("build_file_name/windows", |b| {
        b.iter(|| build_file_name(Platform::Windows, black_box("avcodec"), black_box(Some(61))))
    });
}

fn bench_candidate_sequence(c: &mut Criterion) {
    let versions = [Some(61), Some(60), None];
    c.bench_function("candidate_sequence/2x3", |b| {
        b.iter(|| candidate_sequence(black_box(&["avcodec", "avcodec-extra"]), black_box(&versions)))
    });
}

criterion_group!(benches, bench_build_file_name, bench_candidate_sequence);
criterion_main!(benches);
