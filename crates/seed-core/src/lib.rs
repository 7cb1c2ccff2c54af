//! Core types for the museum-seed data generator.
//!
//! This crate provides the foundational types shared across the generator:
//!
//! - [`SeedConfig`] - Generation configuration (row counts, fixed field
//!   values, reference date), loadable from YAML
//! - [`Gender`], [`MaritalStatus`], [`AccessLevel`] - Categorical fields
//!   with the integer encodings the seeded database depends on
//! - [`Table`] - The registry of output tables and their file names
//! - [`vocab`] - Fixed vocabulary lists used by the row generators
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    ├─── seed-generator     (field generators + unique sampling)
//!    │
//!    └─── seed-populate-csv  (row sources + CSV writer)
//! ```

pub mod config;
pub mod table;
pub mod types;
pub mod vocab;

// Re-exports for convenience
pub use config::{sha256_hex, ConfigError, SeedConfig};
pub use table::Table;
pub use types::{AccessLevel, Gender, MaritalStatus};
