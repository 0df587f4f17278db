use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

use ratewatch::analysis::DashboardData;
use ratewatch::cache::DatasetCache;
use ratewatch::config::{GeneratorConfig, WINDOW_DAYS};
use ratewatch::export;
use ratewatch::filter::FilterSpec;
use ratewatch::report;
use ratewatch::types::{Agency, ChangeType, Sector};

#[derive(Parser)]
#[command(name = "ratewatch")]
#[command(about = "Monitor synthetic credit rating changes near investment grade", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Generation parameters plus the four dashboard filters. Filters default to
/// select-all over the generation window.
#[derive(Args)]
struct QueryArgs {
    /// Number of sample records (default: 150)
    #[arg(long)]
    count: Option<usize>,
    /// Generator seed (default: 42)
    #[arg(long)]
    seed: Option<u64>,
    /// Start of the date filter (default: 30 days ago)
    #[arg(long)]
    from: Option<NaiveDate>,
    /// End of the date filter (default: today)
    #[arg(long)]
    to: Option<NaiveDate>,
    /// Restrict to an agency (repeatable)
    #[arg(long = "agency")]
    agencies: Vec<Agency>,
    /// Restrict to a change type (repeatable)
    #[arg(long = "change-type")]
    change_types: Vec<ChangeType>,
    /// Restrict to a sector (repeatable)
    #[arg(long = "sector")]
    sectors: Vec<Sector>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard for the current filter selection
    Report {
        #[command(flatten)]
        query: QueryArgs,
        /// Emit the dashboard payload as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the filtered events to a CSV file
    Export {
        #[command(flatten)]
        query: QueryArgs,
        /// Output path (default: rating_changes_<today>.csv)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn generator_config(query: &QueryArgs, today: NaiveDate) -> GeneratorConfig {
    let mut config = GeneratorConfig::canonical(today);
    if let Some(count) = query.count {
        config.count = count;
    }
    if let Some(seed) = query.seed {
        config.seed = seed;
    }
    config
}

fn filter_spec(query: &QueryArgs, today: NaiveDate) -> FilterSpec {
    let mut spec = FilterSpec::select_all(
        query.from.unwrap_or(today - Duration::days(WINDOW_DAYS)),
        query.to.unwrap_or(today),
    );
    if !query.agencies.is_empty() {
        spec.agencies = query.agencies.iter().copied().collect();
    }
    if !query.change_types.is_empty() {
        spec.change_types = query.change_types.iter().copied().collect();
    }
    if !query.sectors.is_empty() {
        spec.sectors = query.sectors.iter().copied().collect();
    }
    spec
}

fn run_query(
    cache: &mut DatasetCache,
    query: &QueryArgs,
    today: NaiveDate,
) -> (DashboardData, FilterSpec) {
    let config = generator_config(query, today);
    let spec = filter_spec(query, today);
    let filtered = spec.apply(cache.events(&config));
    (DashboardData::from_events(filtered), spec)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let today = Utc::now().date_naive();
    let mut cache = DatasetCache::new();

    match cli.command {
        Commands::Report { query, json } => {
            let (data, spec) = run_query(&mut cache, &query, today);
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                print!("{}", report::build_report(&data, &spec));
            }
        }
        Commands::Export { query, out } => {
            let (data, _) = run_query(&mut cache, &query, today);
            let path = out.unwrap_or_else(|| PathBuf::from(export::export_file_name(today)));
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            export::write_csv(&data.events, file)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} rows to {}.", data.events.len(), path.display());
        }
    }

    Ok(())
}
