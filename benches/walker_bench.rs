//! Benchmarks for file-lookup
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::fs;

fn benchmark_matching(c: &mut Criterion) {
    use file_lookup::query::{extension_of, Matcher};

    c.bench_function("extension_of", |b| {
        b.iter(|| black_box(extension_of(black_box("archive.2024.tar.gz"))))
    });

    c.bench_function("wildcard_suffix_match", |b| {
        let matcher = Matcher::suffix(".mp*");
        b.iter(|| black_box(matcher.is_match(black_box("holiday_clip.mp4"), true)))
    });
}

fn benchmark_lookup(c: &mut Criterion) {
    use file_lookup::Search;

    // 20 dirs x 50 files
    let dir = tempfile::tempdir().expect("tempdir");
    for d in 0..20 {
        let sub = dir.path().join(format!("dir_{:02}", d));
        fs::create_dir(&sub).expect("create dir");
        for f in 0..50 {
            let ext = if f % 10 == 0 { "mp3" } else { "txt" };
            fs::write(sub.join(format!("file_{:03}.{}", f, ext)), "").expect("create file");
        }
    }

    c.bench_function("suffix_lookup_1000_entries", |b| {
        let search = Search::new(dir.path()).file_suffix(".mp3");
        b.iter(|| black_box(search.suffix_lookup().expect("lookup")))
    });

    c.bench_function("wildcard_name_lookup_1000_entries", |b| {
        let search = Search::new(dir.path()).filename("file_01*");
        b.iter(|| black_box(search.filename_lookup().expect("lookup")))
    });
}

criterion_group!(benches, benchmark_matching, benchmark_lookup);
criterion_main!(benches);
