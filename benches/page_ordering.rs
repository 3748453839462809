// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for page discovery and ordering.
//!
//! Measures:
//! - Numeric ordering of a large page list
//! - Ordering fallback when one page has no number
//! - Recursive scanning of a chapter tree

use criterion::{criterion_group, criterion_main, Criterion};
use manga_reader::config::ScanConfig;
use manga_reader::directory_scanner::{scan_pages, sort_by_leading_number};
use std::hint::black_box;
use std::path::{Path, PathBuf};

const PAGE_COUNT: usize = 2_000;

fn shuffled_pages() -> Vec<PathBuf> {
    // Deterministic permutation: 7919 is coprime with PAGE_COUNT.
    (0..PAGE_COUNT)
        .map(|i| PathBuf::from(format!("page{}.jpg", (i * 7919) % PAGE_COUNT)))
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_ordering");
    let pages = shuffled_pages();

    group.bench_function("sort_numbered", |b| {
        b.iter(|| {
            let mut pages = pages.clone();
            sort_by_leading_number(&mut pages, Path::new(""));
            black_box(pages);
        });
    });

    let mut with_cover = pages.clone();
    with_cover.push(PathBuf::from("cover.jpg"));
    group.bench_function("sort_fallback", |b| {
        b.iter(|| {
            let mut pages = with_cover.clone();
            sort_by_leading_number(&mut pages, Path::new(""));
            black_box(pages);
        });
    });

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_ordering");
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    for chapter in 0..10 {
        let chapter_dir = dir.path().join(format!("chapter{chapter}"));
        std::fs::create_dir_all(&chapter_dir).expect("failed to create chapter");
        for page in 0..50 {
            std::fs::write(chapter_dir.join(format!("{page:03}.png")), b"fake")
                .expect("failed to write page");
        }
    }
    let scan = ScanConfig::default();

    group.bench_function("scan_tree", |b| {
        b.iter(|| {
            let pages = scan_pages(dir.path(), &scan).expect("scan failed");
            black_box(pages);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_sort, bench_scan);
criterion_main!(benches);
