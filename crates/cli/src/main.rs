use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::RatingsTable;
use pipeline::analyses::GenreGrouping;
use pipeline::{AnalysisConfig, AnalysisPipeline};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

mod render;

/// MovieDash - Movie ratings analysis
#[derive(Parser)]
#[command(name = "movie-dash")]
#[command(about = "Descriptive statistics for a movie ratings CSV", long_about = None)]
struct Cli {
    /// Path to the ratings CSV
    #[arg(short, long, default_value = "data/movie_ratings.csv")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Clean the data and print every analysis
    Report(ReportArgs),

    /// Show columns, missing values and summary statistics of the raw file
    Info {
        /// Number of rows to preview
        #[arg(long, default_value = "5")]
        head: usize,
    },
}

#[derive(Args)]
struct ReportArgs {
    /// Genres with fewer movies than this are grouped as "Other"
    #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(10..=200))]
    min_threshold: u32,

    /// Ratings a movie needs to appear among the best rated
    #[arg(long, value_enum, default_value = "50")]
    min_ratings: MinRatings,

    /// Number of best-rated movies to list
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=50))]
    top_n: u32,

    /// Group genre satisfaction by single tag or by full genre combination
    #[arg(long, value_enum, default_value = "tags")]
    grouping: Grouping,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum MinRatings {
    #[value(name = "50")]
    Fifty,
    #[value(name = "100")]
    Hundred,
    #[value(name = "150")]
    HundredFifty,
}

impl MinRatings {
    fn count(self) -> usize {
        match self {
            MinRatings::Fifty => 50,
            MinRatings::Hundred => 100,
            MinRatings::HundredFifty => 150,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Grouping {
    Tags,
    Combinations,
}

impl From<Grouping> for GenreGrouping {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Tags => GenreGrouping::Tags,
            Grouping::Combinations => GenreGrouping::Combinations,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report itself
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let raw = load_or_exit(&cli.data_file);
    eprintln!(
        "{} Loaded {} rows in {:?}",
        "✓".green(),
        raw.len(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Report(args) => handle_report(&raw, &args)?,
        Commands::Info { head } => handle_info(&raw, head),
    }

    Ok(())
}

/// Load the ratings CSV, or report why not and exit with status 1.
///
/// Nothing downstream can run without the table, so there is no caller to
/// hand the error back to.
fn load_or_exit(path: &Path) -> RatingsTable {
    match RatingsTable::load_from_csv(path) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("{} Error: {}", "✗".red(), err);
            process::exit(1);
        }
    }
}

/// Handle the 'report' command
fn handle_report(raw: &RatingsTable, args: &ReportArgs) -> Result<()> {
    let cleaned = raw.remove_missing_values_and_duplicates();

    let config = AnalysisConfig {
        min_threshold: args.min_threshold as usize,
        top_n: args.top_n as usize,
        min_ratings: args.min_ratings.count(),
        grouping: args.grouping.into(),
        ..AnalysisConfig::default()
    };
    tracing::debug!("Analysis config: {:?}", config);
    let report = AnalysisPipeline::new(config).run(&cleaned.table);

    match args.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to encode report as JSON")?;
            println!("{}", json);
        }
        Format::Text => {
            println!(
                "Removed {} rows with missing values or duplicates.\n",
                cleaned.rows_removed()
            );
            render::print_report(&report);
        }
    }
    Ok(())
}

/// Handle the 'info' command
fn handle_info(raw: &RatingsTable, head: usize) {
    render::print_profile(raw, &raw.profile(), head);

    let cleaned = raw.remove_missing_values_and_duplicates();
    println!(
        "\n{}Cleaning would remove {} rows ({} with missing values, {} duplicates)",
        "• ".cyan(),
        cleaned.rows_removed(),
        cleaned.missing_removed,
        cleaned.duplicates_removed
    );
}
