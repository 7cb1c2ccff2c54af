//! Rows for museums.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::SeedConfig;
use seed_generator::fields;

/// Museum rows with faked name/address/architect and a random owning user.
pub struct MuseumRows {
    config: SeedConfig,
    rng: StdRng,
    next_id: u64,
}

impl MuseumRows {
    pub fn new(config: &SeedConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            next_id: 1,
        }
    }
}

impl RowSource for MuseumRows {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "id",
            "name",
            "address",
            "foundation_date",
            "architect",
            "website",
            "user_id",
        ]
    }

    fn row_count(&self) -> u64 {
        self.config.museums_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let id = self.next_id;
        self.next_id += 1;

        let reference = self.config.reference_date;
        let name = format!("{} Museum", fields::company_name(&mut self.rng));
        let address = fields::street_address(&mut self.rng);
        let foundation_date = fields::date_between(
            &mut self.rng,
            fields::years_before(reference, 50),
            reference,
        );
        let architect = fields::full_name(&mut self.rng);
        let website = fields::website(&mut self.rng);
        let user_id = self.rng.gen_range(1..=self.config.users_count);

        Ok(vec![
            id.to_string(),
            name,
            address,
            foundation_date.to_string(),
            architect,
            website,
            user_id.to_string(),
        ])
    }
}
