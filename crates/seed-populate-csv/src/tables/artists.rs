//! Rows for artists.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{vocab, SeedConfig};
use seed_generator::fields;

/// Artist rows with faked biographical fields and a random owning user.
pub struct ArtistRows {
    config: SeedConfig,
    rng: StdRng,
    next_id: u64,
}

impl ArtistRows {
    pub fn new(config: &SeedConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            next_id: 1,
        }
    }
}

impl RowSource for ArtistRows {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "id",
            "first_name",
            "last_name",
            "birth_date",
            "birth_place",
            "education",
            "movement",
            "user_id",
        ]
    }

    fn row_count(&self) -> u64 {
        self.config.artists_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let id = self.next_id;
        self.next_id += 1;

        let reference = self.config.reference_date;
        let first_name = fields::first_name(&mut self.rng);
        let last_name = fields::last_name(&mut self.rng);
        let birth_date = fields::date_between(
            &mut self.rng,
            fields::years_before(reference, 50),
            reference,
        );
        let birth_place = fields::city(&mut self.rng);
        let education = fields::choice(&mut self.rng, vocab::UNIVERSITIES);
        let movement = fields::choice(&mut self.rng, vocab::MOVEMENTS);
        let user_id = self.rng.gen_range(1..=self.config.users_count);

        Ok(vec![
            id.to_string(),
            first_name,
            last_name,
            birth_date.to_string(),
            birth_place,
            education.to_string(),
            movement.to_string(),
            user_id.to_string(),
        ])
    }
}
