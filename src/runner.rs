//! Worker-pool execution of the per-table populate tasks.
//!
//! Each selected table becomes one independent task owning its output file
//! and RNG; a semaphore caps how many generate at once. The runner always
//! waits for every task and reports per-table outcomes; one table's failure
//! neither cancels nor corrupts the others.

use anyhow::anyhow;
use seed_core::{SeedConfig, Table};
use seed_populate_csv::{populate_table, PopulateMetrics};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// Mixing constant for deriving decorrelated per-table seeds from the base
/// seed while keeping the whole run reproducible.
const SEED_STRIDE: u64 = 0x9E3779B97F4A7C15;

/// RNG seed for one table's worker.
pub fn table_seed(base: u64, table: Table) -> u64 {
    base.wrapping_add(table.index().wrapping_mul(SEED_STRIDE))
}

/// Outcome of one table task.
#[derive(Debug)]
pub struct TaskOutcome {
    pub table: Table,
    pub result: Result<PopulateMetrics, anyhow::Error>,
}

/// Per-table outcomes of one run, in task-submission order.
#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl RunReport {
    /// Whether every table generated successfully.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.result.is_ok())
    }

    /// Tables whose tasks failed.
    pub fn failed_tables(&self) -> Vec<Table> {
        self.outcomes
            .iter()
            .filter(|o| o.result.is_err())
            .map(|o| o.table)
            .collect()
    }

    /// Total rows written across all successful tables.
    pub fn total_rows(&self) -> u64 {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|m| m.rows_written)
            .sum()
    }
}

/// Generate the selected tables with at most `workers` running at once.
///
/// Join semantics: waits for all tasks (no timeout, no cancellation) and
/// surfaces every failure in the returned report. A worker panic is caught
/// at join time and recorded as that table's failure.
pub async fn run_populate_tasks(
    config: SeedConfig,
    output_dir: PathBuf,
    tables: Vec<Table>,
    workers: usize,
    seed: u64,
) -> RunReport {
    let semaphore = Arc::new(Semaphore::new(workers.max(1)));
    let config = Arc::new(config);
    let output_dir = Arc::new(output_dir);

    let mut handles = Vec::with_capacity(tables.len());
    for table in tables {
        let semaphore = semaphore.clone();
        let config = config.clone();
        let output_dir = output_dir.clone();
        let handle = tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("semaphore is never closed");
            info!("Begin populating table '{}'", table);
            tokio::task::spawn_blocking(move || {
                populate_table(table, &config, &output_dir, table_seed(seed, table))
            })
            .await
        });
        handles.push((table, handle));
    }

    let mut outcomes = Vec::with_capacity(handles.len());
    for (table, handle) in handles {
        let result = match handle.await {
            Ok(Ok(Ok(metrics))) => {
                info!(
                    "End populating table '{}': {} rows in {:?}",
                    table, metrics.rows_written, metrics.total_duration
                );
                Ok(metrics)
            }
            Ok(Ok(Err(e))) => {
                error!("Populating table '{}' failed: {}", table, e);
                Err(anyhow::Error::new(e))
            }
            Ok(Err(join_err)) | Err(join_err) => {
                error!("Worker for table '{}' panicked: {}", table, join_err);
                Err(anyhow!("worker for table '{table}' panicked: {join_err}"))
            }
        };
        outcomes.push(TaskOutcome { table, result });
    }

    RunReport { outcomes }
}
