//! Rows for exhibitions.csv.

use crate::error::CsvPopulateError;
use crate::source::RowSource;
use rand::rngs::StdRng;
use rand::Rng;
use seed_core::SeedConfig;
use seed_generator::{fields, IdPairDomain, UniqueSampler};

/// Exhibition rows keyed by unique (artist_id, museum_id) pairs.
///
/// The pairs are drawn up front so an infeasible request fails before any
/// file output; each accepted pair is emitted exactly once.
#[derive(Debug)]
pub struct ExhibitionRows {
    config: SeedConfig,
    rng: StdRng,
    pairs: std::vec::IntoIter<(u64, u64)>,
}

impl ExhibitionRows {
    pub fn new(config: &SeedConfig, mut rng: StdRng) -> Result<Self, CsvPopulateError> {
        let domain = IdPairDomain::new(1..=config.artists_count, 1..=config.museums_count);
        let pairs = UniqueSampler::new(domain).take(&mut rng, config.exhibitions_count)?;

        Ok(Self {
            config: config.clone(),
            rng,
            pairs: pairs.into_iter(),
        })
    }
}

impl RowSource for ExhibitionRows {
    fn columns(&self) -> &'static [&'static str] {
        &["artist_id", "museum_id", "start_date", "end_date", "user_id"]
    }

    fn row_count(&self) -> u64 {
        self.config.exhibitions_count
    }

    fn next_row(&mut self) -> Result<Vec<String>, CsvPopulateError> {
        let (artist_id, museum_id) = self
            .pairs
            .next()
            .expect("writer requests exactly row_count rows");

        let reference = self.config.reference_date;
        let start_date = fields::date_between(
            &mut self.rng,
            fields::years_before(reference, 10),
            reference,
        );
        let end_date = fields::date_between(&mut self.rng, start_date, reference);
        let user_id = self.rng.gen_range(1..=self.config.users_count);

        Ok(vec![
            artist_id.to_string(),
            museum_id.to_string(),
            start_date.to_string(),
            end_date.to_string(),
            user_id.to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use seed_generator::SampleError;
    use std::collections::HashSet;

    fn test_config() -> SeedConfig {
        SeedConfig {
            users_count: 10,
            artists_count: 6,
            museums_count: 4,
            exhibitions_count: 15,
            reference_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
            ..SeedConfig::default()
        }
    }

    #[test]
    fn test_each_pair_emitted_exactly_once() {
        let config = test_config();
        let mut source = ExhibitionRows::new(&config, StdRng::seed_from_u64(42)).unwrap();

        let mut pairs = HashSet::new();
        for _ in 0..15 {
            let row = source.next_row().unwrap();
            let artist_id: u64 = row[0].parse().unwrap();
            let museum_id: u64 = row[1].parse().unwrap();
            assert!((1..=6).contains(&artist_id));
            assert!((1..=4).contains(&museum_id));
            assert!(pairs.insert((artist_id, museum_id)));
        }
        assert_eq!(pairs.len(), 15);
    }

    #[test]
    fn test_end_date_never_precedes_start_date() {
        let config = test_config();
        let mut source = ExhibitionRows::new(&config, StdRng::seed_from_u64(42)).unwrap();

        for _ in 0..15 {
            let row = source.next_row().unwrap();
            let start: NaiveDate = row[2].parse().unwrap();
            let end: NaiveDate = row[3].parse().unwrap();
            assert!(start <= end);
            assert!(end <= config.reference_date);
        }
    }

    #[test]
    fn test_infeasible_request_fails_at_construction() {
        let config = SeedConfig {
            artists_count: 2,
            museums_count: 1,
            exhibitions_count: 3,
            ..test_config()
        };

        let err = ExhibitionRows::new(&config, StdRng::seed_from_u64(42)).unwrap_err();

        assert!(matches!(
            err,
            CsvPopulateError::Sample(SampleError::DomainExhausted { .. })
        ));
    }
}
