//! Plain-text rendering of the report and the table profile.

use colored::Colorize;
use data_loader::{RatingsTable, TableProfile};
use pipeline::analyses::*;
use pipeline::{AnalysisError, AnalysisReport};

/// Genre groups shown in the satisfaction section
const SATISFACTION_ROWS: usize = 15;

/// Width of the longest bar in the text charts
const BAR_WIDTH: usize = 30;

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 {
        return String::new();
    }
    let len = (value / max * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}

/// Print a section header, then either the body or why it's missing
fn section<T>(title: &str, result: &Result<T, AnalysisError>, body: impl FnOnce(&T)) {
    println!("\n{}", title.bold().blue());
    match result {
        Ok(value) => body(value),
        Err(err) => println!("{} Section unavailable: {}", "!".yellow(), err),
    }
}

pub fn print_report(report: &AnalysisReport) {
    let config = &report.config;

    section("Dataset Overview", &report.overview, print_overview);

    section(
        &format!("1. Genre Breakdown (min {} movies)", config.min_threshold),
        &report.genre_breakdown,
        print_breakdown,
    );

    section(
        "2. Genre Satisfaction (Highest Ratings)",
        &report.genre_satisfaction,
        print_satisfaction,
    );

    section(
        "3. Rating Trends by Movie Release Year",
        &report.rating_by_year,
        print_rating_by_year,
    );

    section(
        &format!(
            "4. Top {} Movies (>= {} ratings)",
            config.top_n, config.min_ratings
        ),
        &report.best_rated,
        |movies| print_best_rated(movies),
    );

    section(
        &format!(
            "   Top {} Movies (>= {} ratings)",
            config.top_n, config.established_min_ratings
        ),
        &report.best_rated_established,
        |movies| print_best_rated(movies),
    );
}

fn print_overview(overview: &DatasetOverview) {
    println!("{}Total ratings: {}", "• ".green(), overview.total_ratings);
    println!("{}Unique users: {}", "• ".green(), overview.unique_users);
    println!("{}Unique movies: {}", "• ".green(), overview.unique_movies);
    match overview.rating_range {
        Some((min, max)) => println!("{}Rating range: {} - {}", "• ".green(), min, max),
        None => println!("{}Rating range: n/a", "• ".green()),
    }
}

fn print_breakdown(breakdown: &GenreBreakdown) {
    if breakdown.is_empty() {
        println!("No genres to show.");
        return;
    }

    println!("Total unique movies: {}", breakdown.unique_movies);
    let max = breakdown.entries.first().map_or(0, |e| e.movies) as f64;
    for entry in &breakdown.entries {
        println!(
            "{:<20}: {:>4} movies ({:>5.1}%) {}",
            entry.genre,
            entry.movies,
            breakdown.percentage(entry),
            bar(entry.movies as f64, max).cyan()
        );
    }
}

fn print_satisfaction(ranking: &GenreSatisfactionRanking) {
    if ranking.is_empty() {
        println!("No rated genres to show.");
        return;
    }

    println!("{:<20}  {:>6}  {:>8}", "genre", "mean", "count");
    for entry in ranking.top(SATISFACTION_ROWS) {
        println!(
            "{:<20}  {:>6.3}  {:>8}  {}",
            entry.genre,
            entry.mean_rating,
            entry.rating_count,
            bar(entry.mean_rating, 5.0).cyan()
        );
    }
    if ranking.entries.len() > SATISFACTION_ROWS {
        println!("... {} more", ranking.entries.len() - SATISFACTION_ROWS);
    }
}

fn print_rating_by_year(by_year: &RatingByYear) {
    if by_year.is_empty() {
        println!("No release years to show.");
        return;
    }

    println!("{:>6}  {:>10}  {:>17}", "year", "avg_rating", "num_unique_movies");
    for (year, stats) in by_year {
        println!(
            "{:>6}  {:>10.3}  {:>17}  {}",
            year,
            stats.avg_rating,
            stats.num_unique_movies,
            bar(stats.avg_rating, 5.0).cyan()
        );
    }
}

fn print_best_rated(movies: &[RankedMovie]) {
    if movies.is_empty() {
        println!("No movie has enough ratings.");
        return;
    }

    for (rank, movie) in movies.iter().enumerate() {
        println!(
            "{}. {} - {:.3} ({} ratings)",
            (rank + 1).to_string().green(),
            movie.title,
            movie.mean_rating,
            movie.rating_count
        );
    }
}

/// Print the raw table's shape, completeness and a short preview.
pub fn print_profile(table: &RatingsTable, profile: &TableProfile, head: usize) {
    println!("{}", "DataFrame Info:".bold().blue());
    println!("{} rows, {} columns", profile.row_count, profile.columns.len());
    println!("{:<20}  {:>9}  {:>9}", "column", "non-null", "missing");
    for column in &profile.columns {
        let missing = if column.missing > 0 {
            column.missing.to_string().yellow()
        } else {
            column.missing.to_string().normal()
        };
        println!("{:<20}  {:>9}  {:>9}", column.name, column.non_null, missing);
    }

    println!("\n{}", "Summary Statistics:".bold().blue());
    println!(
        "{:<10}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
        "column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
    );
    let fmt = |v: Option<f64>| v.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v));
    for summary in &profile.numeric {
        println!(
            "{:<10}  {:>8}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}  {:>10}",
            summary.column.to_string(),
            summary.count,
            fmt(summary.mean),
            fmt(summary.std),
            fmt(summary.min),
            fmt(summary.q25),
            fmt(summary.median),
            fmt(summary.q75),
            fmt(summary.max)
        );
    }

    println!("\n{}", format!("First {} Rows:", head).bold().blue());
    println!("{}", table.headers().join(" | "));
    for row in table.head(head) {
        let cells: Vec<String> = table
            .cells(row)
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| "NaN".to_string()))
            .collect();
        println!("{}", cells.join(" | "));
    }
}
