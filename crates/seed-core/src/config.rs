//! Generation configuration.
//!
//! A [`SeedConfig`] carries everything a seed run needs beyond the RNG seed:
//! row counts per table, the fixed per-run field values, and the reference
//! date that anchors all relative date ranges. Defaults reproduce the
//! standard seeding profile; tests and smaller runs load overrides from a
//! YAML file.

use crate::types::AccessLevel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error reading the configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration is structurally valid but semantically unusable.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration for one seed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Number of rows in users.csv (and user_profiles.csv).
    pub users_count: u64,
    /// Number of rows in artists.csv.
    pub artists_count: u64,
    /// Number of rows in paintings.csv.
    pub paintings_count: u64,
    /// Number of rows in museums.csv.
    pub museums_count: u64,
    /// Number of unique (artist_id, museum_id) rows in exhibitions.csv.
    pub exhibitions_count: u64,
    /// Page-size preference written to every user profile.
    pub page_preference: u32,
    /// Password digest shared by every generated user.
    pub password_hash: String,
    /// Access level shared by every generated user.
    pub access_level: AccessLevel,
    /// Anchor for all relative date ranges ("-60y".."today" and the like).
    ///
    /// Defaults to today; pin it for reproducible output across days.
    pub reference_date: NaiveDate,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users_count: 10_000,
            artists_count: 1_000_000,
            paintings_count: 1_000_000,
            museums_count: 1_000_000,
            exhibitions_count: 10_000_000,
            page_preference: 5,
            password_hash: sha256_hex("123"),
            access_level: AccessLevel::Regular,
            reference_date: chrono::Utc::now().date_naive(),
        }
    }
}

impl SeedConfig {
    /// Load a configuration from a YAML file.
    ///
    /// Missing fields fall back to their defaults, so a file may override
    /// only the counts it cares about.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SeedConfig = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Check that the configuration can actually be generated.
    ///
    /// Foreign-key columns draw from `1..=count` ranges, so the referenced
    /// tables must be non-empty, and the unique exhibition pairs must fit in
    /// the (artist, museum) ID space.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.users_count == 0 {
            return Err(ConfigError::Invalid(
                "users_count must be at least 1; every other table references user ids".into(),
            ));
        }
        if self.artists_count == 0 {
            return Err(ConfigError::Invalid(
                "artists_count must be at least 1; paintings and exhibitions reference artist ids"
                    .into(),
            ));
        }
        if self.museums_count == 0 {
            return Err(ConfigError::Invalid(
                "museums_count must be at least 1; exhibitions reference museum ids".into(),
            ));
        }
        // Overflowing u64 means the pair space is larger than any request.
        if let Some(pair_space) = self.artists_count.checked_mul(self.museums_count) {
            if self.exhibitions_count > pair_space {
                return Err(ConfigError::Invalid(format!(
                    "exhibitions_count ({}) exceeds the {} distinct (artist, museum) pairs",
                    self.exhibitions_count, pair_space
                )));
            }
        }
        Ok(())
    }
}

/// Hex-encoded SHA-256 digest of the input.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
