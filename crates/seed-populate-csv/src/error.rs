//! Error types for CSV population.

use thiserror::Error;

/// Errors that can occur while generating a CSV file.
#[derive(Error, Debug)]
pub enum CsvPopulateError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Unique sampling failed (domain exhausted).
    #[error("sampling error: {0}")]
    Sample(#[from] seed_generator::SampleError),
}
