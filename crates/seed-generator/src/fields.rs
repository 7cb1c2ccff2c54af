//! Faked field values, driven by a caller-supplied RNG.
//!
//! Thin wrappers over the `fake` fakers plus date arithmetic, so row
//! generators stay declarative and every value is reproducible from the
//! worker seed.

use chrono::{Duration, Months, NaiveDate};
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::Username;
use fake::faker::lorem::en::{Paragraph, Word};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

/// Faked internet username.
pub fn username<R: Rng>(rng: &mut R) -> String {
    Username().fake_with_rng(rng)
}

/// Faked first name.
pub fn first_name<R: Rng>(rng: &mut R) -> String {
    FirstName().fake_with_rng(rng)
}

/// Faked last name.
pub fn last_name<R: Rng>(rng: &mut R) -> String {
    LastName().fake_with_rng(rng)
}

/// Faked "First Last" person name.
pub fn full_name<R: Rng>(rng: &mut R) -> String {
    format!("{} {}", first_name(rng), last_name(rng))
}

/// Faked city name.
pub fn city<R: Rng>(rng: &mut R) -> String {
    CityName().fake_with_rng(rng)
}

/// Faked street address ("<building number> <street>").
pub fn street_address<R: Rng>(rng: &mut R) -> String {
    let number: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    format!("{number} {street}")
}

/// Faked company name.
pub fn company_name<R: Rng>(rng: &mut R) -> String {
    CompanyName().fake_with_rng(rng)
}

/// Faked https URL.
pub fn website<R: Rng>(rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    format!("https://www.{word}.com")
}

/// Single lorem word.
pub fn word<R: Rng>(rng: &mut R) -> String {
    Word().fake_with_rng(rng)
}

/// `count` lorem paragraphs.
pub fn paragraphs<R: Rng>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count)
        .map(|_| Paragraph(3..8).fake_with_rng(rng))
        .collect()
}

/// Random date in `[start, end]`, inclusive.
///
/// An inverted range collapses to `start`, mirroring how the timestamp
/// generators guard degenerate ranges.
pub fn date_between<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if end <= start {
        return start;
    }
    let span_days = (end - start).num_days();
    start + Duration::days(rng.gen_range(0..=span_days))
}

/// The date `years` whole years before `date`.
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12)).unwrap_or(date)
}

/// Uniform choice from a non-empty slice.
///
/// Panics on an empty slice; callers pass the fixed vocabulary lists.
pub fn choice<'a, R: Rng>(rng: &mut R, items: &'a [&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_date_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

        for _ in 0..200 {
            let date = date_between(&mut rng, start, end);
            assert!(date >= start && date <= end);
        }
    }

    #[test]
    fn test_date_between_inverted_range_collapses_to_start() {
        let mut rng = StdRng::seed_from_u64(42);
        let start = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        assert_eq!(date_between(&mut rng, start, end), start);
    }

    #[test]
    fn test_years_before() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
        assert_eq!(
            years_before(date, 60),
            NaiveDate::from_ymd_opt(1963, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_years_before_handles_leap_day() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        // 2023-02-29 does not exist; chrono clamps to the month end
        assert_eq!(
            years_before(date, 1),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_choice_returns_member() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = ["a", "b", "c"];
        for _ in 0..50 {
            assert!(items.contains(&choice(&mut rng, &items)));
        }
    }

    #[test]
    fn test_fakers_produce_nonempty_values() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(!username(&mut rng).is_empty());
        assert!(!full_name(&mut rng).is_empty());
        assert!(!city(&mut rng).is_empty());
        assert!(!street_address(&mut rng).is_empty());
        assert!(!company_name(&mut rng).is_empty());
        assert!(website(&mut rng).starts_with("https://www."));
        assert_eq!(paragraphs(&mut rng, 3).len(), 3);
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        assert_eq!(username(&mut rng1), username(&mut rng2));
        assert_eq!(city(&mut rng1), city(&mut rng2));
    }
}
