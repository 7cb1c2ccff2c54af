//! Seeded value generation for the museum-seed data generator.
//!
//! This crate provides two things:
//!
//! - [`fields`] - faked field values (names, usernames, cities, dates,
//!   lorem text) driven by a caller-supplied RNG so runs are reproducible
//!   from a seed
//! - [`sample`] / [`domains`] - the unique-sampling core: repeated random
//!   draws from a [`SampleDomain`] accepted only if unseen, with an explicit
//!   [`SampleError::DomainExhausted`] failure instead of a non-terminating
//!   loop when the request exceeds the domain
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use seed_generator::{IdPairDomain, UniqueSampler};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut sampler = UniqueSampler::new(IdPairDomain::new(1..=100, 1..=100));
//! let pairs = sampler.take(&mut rng, 10).unwrap();
//! assert_eq!(pairs.len(), 10);
//! ```

pub mod domains;
pub mod fields;
pub mod sample;

// Re-exports for convenience
pub use domains::{IdPairDomain, UsernameDomain};
pub use sample::{SampleDomain, SampleError, UniqueSampler};
