//! Rows for user_profiles.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::{Gender, MaritalStatus, SeedConfig};
use seed_generator::fields;

/// Profile rows, one per user, with user_id equal to the profile id.
pub struct UserProfileRows {
    config: SeedConfig,
    rng: StdRng,
    next_id: u64,
}

impl UserProfileRows {
    pub fn new(config: &SeedConfig, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            next_id: 1,
        }
    }
}

impl RowSource for UserProfileRows {
    fn columns(&self) -> &'static [&'static str] {
        &[
            "id",
            "user_id",
            "bio",
            "location",
            "birthday",
            "gender",
            "marital_status",
            "page_preference",
        ]
    }

    fn row_count(&self) -> u64 {
        self.config.users_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let id = self.next_id;
        self.next_id += 1;

        let reference = self.config.reference_date;
        let bio = fields::paragraphs(&mut self.rng, 3).join("\n");
        let location = fields::city(&mut self.rng);
        // Adults between 18 and 60 years old
        let birthday = fields::date_between(
            &mut self.rng,
            fields::years_before(reference, 60),
            fields::years_before(reference, 18),
        );
        let gender = Gender::ALL[self.rng.gen_range(0..Gender::ALL.len())];
        let marital_status = MaritalStatus::ALL[self.rng.gen_range(0..MaritalStatus::ALL.len())];

        Ok(vec![
            id.to_string(),
            id.to_string(),
            bio,
            location,
            birthday.to_string(),
            gender.code().to_string(),
            marital_status.code().to_string(),
            self.config.page_preference.to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;

    #[test]
    fn test_rows_reference_their_own_user() {
        let config = SeedConfig {
            users_count: 10,
            reference_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            ..SeedConfig::default()
        };
        let mut source = UserProfileRows::new(&config, StdRng::seed_from_u64(42));

        for i in 1..=10u64 {
            let row = source.next_row().unwrap();
            assert_eq!(row.len(), source.columns().len());
            assert_eq!(row[0], i.to_string());
            assert_eq!(row[1], i.to_string());
            assert_eq!(row[7], "5");
        }
    }

    #[test]
    fn test_birthday_is_an_adult_age() {
        let reference = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let config = SeedConfig {
            users_count: 100,
            reference_date: reference,
            ..SeedConfig::default()
        };
        let mut source = UserProfileRows::new(&config, StdRng::seed_from_u64(42));

        for _ in 0..100 {
            let row = source.next_row().unwrap();
            let birthday: NaiveDate = row[4].parse().unwrap();
            assert!(birthday >= NaiveDate::from_ymd_opt(1963, 6, 1).unwrap());
            assert!(birthday <= NaiveDate::from_ymd_opt(2005, 6, 1).unwrap());
            let gender: u8 = row[5].parse().unwrap();
            let marital: u8 = row[6].parse().unwrap();
            assert!(gender <= 2);
            assert!(marital <= 4);
        }
    }
}
