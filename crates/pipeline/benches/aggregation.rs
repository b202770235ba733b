//! Benchmarks for the analyses
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic table shaped like MovieLens: many users, a few thousand
//! movies, multi-tag genres.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{RatingRecord, RatingsTable};
use pipeline::analyses::*;
use pipeline::{Analysis, AnalysisPipeline};

const GENRES: [&str; 6] = [
    "Action|Adventure",
    "Comedy",
    "Drama|Romance",
    "Horror|Thriller",
    "Animation|Children's|Comedy",
    "Documentary",
];

fn synthetic_table(rows: u32) -> RatingsTable {
    let records = (0..rows)
        .map(|i| {
            let movie_id = i % 3_000;
            RatingRecord::new(
                i % 6_000,
                movie_id,
                format!("Movie {movie_id}"),
                GENRES[movie_id as usize % GENRES.len()],
                (i % 10) as f32 * 0.5 + 0.5,
                1930 + (movie_id % 70) as u16,
            )
        })
        .collect();
    RatingsTable::from_records(records)
}

fn bench_cleaning(c: &mut Criterion) {
    let table = synthetic_table(200_000);

    c.bench_function("remove_missing_values_and_duplicates", |b| {
        b.iter(|| black_box(table.remove_missing_values_and_duplicates()))
    });
}

fn bench_genre_analyses(c: &mut Criterion) {
    let table = synthetic_table(200_000);

    c.bench_function("genre_breakdown", |b| {
        let analysis = GenreBreakdownAnalysis::new(50);
        b.iter(|| black_box(analysis.run(black_box(&table))))
    });

    c.bench_function("genre_satisfaction", |b| {
        let analysis = GenreSatisfactionAnalysis::default();
        b.iter(|| black_box(analysis.run(black_box(&table))))
    });
}

fn bench_full_report(c: &mut Criterion) {
    let table = synthetic_table(200_000);
    let pipeline = AnalysisPipeline::default();

    c.bench_function("full_report", |b| {
        b.iter(|| black_box(pipeline.run(black_box(&table))))
    });
}

criterion_group!(
    benches,
    bench_cleaning,
    bench_genre_analyses,
    bench_full_report
);
criterion_main!(benches);
