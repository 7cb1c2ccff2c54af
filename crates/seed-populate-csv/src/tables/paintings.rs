//! Rows for paintings.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{vocab, SeedConfig};
use seed_generator::fields;
use std::ops::RangeInclusive;

const CREATION_YEARS: RangeInclusive<i32> = 1800..=2023;
const HEIGHT_METERS: RangeInclusive<f64> = 0.5..=5.0;
const PRICE_RANGE: RangeInclusive<f64> = 1000.0..=10000.0;

/// Painting rows with faked title/description and random artist/user links.
pub struct PaintingRows {
    config: SeedConfig,
    rng: StdRng,
    next_id: u64,
}

impl PaintingRows {
    pub fn new(config: &SeedConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            next_id: 1,
        }
    }
}

impl RowSource for PaintingRows {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "id",
            "title",
            "creation_year",
            "height",
            "subject",
            "medium",
            "description",
            "artist_id",
            "user_id",
            "price",
        ]
    }

    fn row_count(&self) -> u64 {
        self.config.paintings_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let id = self.next_id;
        self.next_id += 1;

        let title = format!(
            "{} {} {}",
            fields::choice(&mut self.rng, vocab::DESCRIPTIVE_WORDS),
            fields::word(&mut self.rng),
            fields::word(&mut self.rng),
        );
        let creation_year = self.rng.gen_range(CREATION_YEARS);
        let height = self.rng.gen_range(HEIGHT_METERS);
        let subject = fields::choice(&mut self.rng, vocab::SUBJECTS);
        let medium = fields::choice(&mut self.rng, vocab::MEDIUMS);
        let description = fields::paragraphs(&mut self.rng, 2).concat();
        let price = self.rng.gen_range(PRICE_RANGE);
        let artist_id = self.rng.gen_range(1..=self.config.artists_count);
        let user_id = self.rng.gen_range(1..=self.config.users_count);

        Ok(vec![
            id.to_string(),
            title,
            creation_year.to_string(),
            format!("{height:.2}"),
            subject.to_string(),
            medium.to_string(),
            description,
            artist_id.to_string(),
            user_id.to_string(),
            format!("{price:.2}"),
        ])
    }
}
