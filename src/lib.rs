//! museum-seed: synthetic CSV test-data generator.
//!
//! Generates the six seed files (users, user_profiles, artists, paintings,
//! museums, exhibitions) for load and functional testing, fanning one
//! independent worker out per table over a bounded pool. The library crates
//! do the actual work:
//!
//! - `seed-core` - configuration, categorical encodings, table registry
//! - `seed-generator` - seeded field fakers and unique sampling
//! - `seed-populate-csv` - row sources and the CSV table writer
//!
//! This crate adds the [`runner`] worker pool and the CLI binary.

pub mod runner;
