//! Benchmark for hover resolution.
//!
//! Hover runs on every pointer rest, so resolution over a long line should
//! stay comfortably in the microsecond range.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use http_status_helper::language_server::filter::FiletypeFilter;
use http_status_helper::language_server::hover::{provide_hover, Position};

fn bench_hover_resolution(c: &mut Criterion) {
    let line = "GET /users -> 200, retries on 429 and 503, gives up after 504 id99999 21000"
        .repeat(4);
    let filter = FiletypeFilter::match_all();

    c.bench_function("hover_known_code", |b| {
        b.iter(|| {
            provide_hover(
                black_box(Position::new(0, 31)),
                black_box(&line),
                &filter,
                "plaintext",
                "notes.txt",
            )
        })
    });

    c.bench_function("hover_no_match", |b| {
        b.iter(|| {
            provide_hover(
                black_box(Position::new(0, 5)),
                black_box(&line),
                &filter,
                "plaintext",
                "notes.txt",
            )
        })
    });
}

criterion_group!(benches, bench_hover_resolution);
criterion_main!(benches);
