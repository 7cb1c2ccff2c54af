//! Command-line interface for museum-seed
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate every table with the default seeding profile
//! museum-seed populate --output-dir ./seed-data
//!
//! # Smaller run from a config file, four tables in parallel
//! museum-seed populate \
//!   --output-dir ./seed-data \
//!   --config seed.yaml \
//!   --seed 7 \
//!   --workers 4
//!
//! # Only two tables
//! museum-seed populate --output-dir ./seed-data --tables users,user_profiles
//!
//! # Validate a config without writing anything
//! museum-seed populate --config seed.yaml --dry-run
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use museum_seed::runner::run_populate_tasks;
use seed_core::{SeedConfig, Table};
use seed_populate_csv::PopulateArgs;

#[derive(Parser)]
#[command(name = "museum-seed")]
#[command(about = "Generates randomized CSV seed data for a museum database")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the seed CSV files, one worker per table
    Populate {
        #[command(flatten)]
        args: PopulateArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Populate { args } => run_populate(args).await,
    }
}

async fn run_populate(args: PopulateArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => SeedConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {path:?}"))?,
        None => SeedConfig::default(),
    };
    config.validate().context("Configuration rejected")?;

    let tables = if args.tables.is_empty() {
        Table::ALL.to_vec()
    } else {
        args.tables
            .iter()
            .map(|name| name.parse::<Table>().map_err(anyhow::Error::msg))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    tracing::info!(
        "Populating {} tables into {:?} (seed={})",
        tables.len(),
        args.output_dir,
        args.seed
    );

    if args.dry_run {
        for table in &tables {
            tracing::info!("Would generate {:?}", args.output_dir.join(table.file_name()));
        }
        tracing::info!("Dry-run complete - no files written");
        return Ok(());
    }

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("Failed to create output directory {:?}", args.output_dir))?;

    let report = run_populate_tasks(
        config,
        args.output_dir.clone(),
        tables,
        args.workers,
        args.seed,
    )
    .await;

    for outcome in &report.outcomes {
        if let Ok(metrics) = &outcome.result {
            tracing::info!(
                "Generated {:?}: {} rows in {:?} ({:.2} rows/sec)",
                args.output_dir.join(outcome.table.file_name()),
                metrics.rows_written,
                metrics.total_duration,
                metrics.rows_per_second()
            );
        }
    }

    if report.is_success() {
        tracing::info!(
            "Populate completed successfully: {} rows total",
            report.total_rows()
        );
        Ok(())
    } else {
        let failed: Vec<String> = report
            .failed_tables()
            .iter()
            .map(|t| t.to_string())
            .collect();
        Err(anyhow::anyhow!(
            "populate failed for tables: {}",
            failed.join(", ")
        ))
    }
}
