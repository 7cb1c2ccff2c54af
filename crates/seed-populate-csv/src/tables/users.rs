//! Rows for users.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use seed_core::SeedConfig;
use seed_generator::{UniqueSampler, UsernameDomain};

/// User rows: sequential id, unique username, and the fixed per-run
/// password hash and access level.
pub struct UserRows {
    config: SeedConfig,
    rng: StdRng,
    usernames: UniqueSampler<UsernameDomain>,
    next_id: u64,
}

impl UserRows {
    pub fn new(config: &SeedConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            usernames: UniqueSampler::new(UsernameDomain),
            next_id: 1,
        }
    }
}

impl RowSource for UserRows {
    fn columns(&self) -> &'static [&'static str] {
        &["id", "username", "password_hash", "access_level"]
    }

    fn row_count(&self) -> u64 {
        self.config.users_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let id = self.next_id;
        self.next_id += 1;
        let username = self.usernames.sample(&mut self.rng)?;

        Ok(vec![
            id.to_string(),
            username,
            self.config.password_hash.clone(),
            self.config.access_level.code().to_string(),
        ])
    }
}
