//! CSV population for the museum-seed data generator.
//!
//! One [`RowSource`] per entity type assembles randomized rows; a single
//! [`CsvTableWriter`] replaces any pre-existing output file and streams the
//! rows through a buffered CSV writer.
//!
//! # Example
//!
//! ```ignore
//! use seed_core::{SeedConfig, Table};
//! use seed_populate_csv::populate_table;
//!
//! let config = SeedConfig::default();
//! let metrics = populate_table(Table::Users, &config, "/tmp/seed".as_ref(), 42)?;
//! println!("wrote {} rows", metrics.rows_written);
//! ```

pub mod args;
mod error;
mod source;
mod tables;
mod writer;

pub use args::PopulateArgs;
pub use error::CsvPopulateError;
pub use source::RowSource;
pub use tables::{
    populate_table, ArtistRows, ExhibitionRows, MuseumRows, PaintingRows, UserProfileRows,
    UserRows,
};
pub use writer::{CsvTableWriter, PopulateMetrics, DEFAULT_BUFFER_SIZE};
