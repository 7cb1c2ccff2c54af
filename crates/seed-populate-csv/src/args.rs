//! CLI argument definitions for the populate command.

use clap::Args;
use std::path::PathBuf;

/// Arguments for generating the seed CSV files.
#[derive(Args, Clone, Debug)]
pub struct PopulateArgs {
    /// Output directory for CSV files (one file per table)
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Path to a YAML configuration file (defaults apply for missing fields)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Specific tables to generate (comma-separated, empty = all tables)
    #[arg(long, value_delimiter = ',')]
    pub tables: Vec<String>,

    /// Maximum number of tables generated in parallel
    #[arg(long, default_value = "4")]
    pub workers: usize,

    /// Validate configuration and report planned tasks without writing files
    #[arg(long)]
    pub dry_run: bool,
}
