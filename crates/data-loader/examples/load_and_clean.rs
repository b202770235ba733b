use data_loader::RatingsTable;
use std::path::Path;
use std::time::Instant;

fn main() {
    tracing_subscriber::fmt().init();

    let data_file = Path::new("data/movie_ratings.csv");

    println!("Loading ratings from {}...\n", data_file.display());

    let start = Instant::now();
    let raw = RatingsTable::load_from_csv(data_file)
        .expect("Failed to load dataset");
    let loaded = start.elapsed();

    let cleaned = raw.remove_missing_values_and_duplicates();
    let total = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Load time: {:?}", loaded);
    println!("Load + clean time: {:?}", total);
    println!("Raw rows: {}", raw.len());
    println!("Clean rows: {}", cleaned.table.len());
    println!("Removed: {} ({} incomplete, {} duplicate)",
             cleaned.rows_removed(),
             cleaned.missing_removed,
             cleaned.duplicates_removed);
    println!("\nPerformance: {:.0} rows/second",
             raw.len() as f64 / total.as_secs_f64());
}
