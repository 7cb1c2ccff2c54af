//! Concrete sample domains for the two unique collections.

use crate::fields;
use crate::sample::SampleDomain;
use rand::Rng;
use std::ops::RangeInclusive;

/// Pairs of IDs drawn independently from two inclusive ranges.
///
/// Used for (artist_id, museum_id) exhibition pairs, where the domain size
/// is the product of the two range sizes and is a hard uniqueness ceiling.
#[derive(Debug, Clone)]
pub struct IdPairDomain {
    left: RangeInclusive<u64>,
    right: RangeInclusive<u64>,
}

impl IdPairDomain {
    pub fn new(left: RangeInclusive<u64>, right: RangeInclusive<u64>) -> Self {
        Self { left, right }
    }
}

impl SampleDomain for IdPairDomain {
    type Candidate = (u64, u64);

    fn draw<R: Rng>(&self, rng: &mut R) -> Self::Candidate {
        (
            rng.gen_range(self.left.clone()),
            rng.gen_range(self.right.clone()),
        )
    }

    fn cardinality(&self) -> Option<u64> {
        // A product overflowing u64 can never bind a real request.
        range_len(&self.left)?.checked_mul(range_len(&self.right)?)
    }
}

/// Faked internet usernames.
///
/// Free text: the distinct-value space is enormous and not enumerable, so
/// the domain reports no cardinality and uniqueness never exhausts.
#[derive(Debug, Clone, Copy)]
pub struct UsernameDomain;

impl SampleDomain for UsernameDomain {
    type Candidate = String;

    fn draw<R: Rng>(&self, rng: &mut R) -> Self::Candidate {
        fields::username(rng)
    }

    fn cardinality(&self) -> Option<u64> {
        None
    }
}

/// Number of values in an inclusive range, `None` on u64 overflow.
fn range_len(range: &RangeInclusive<u64>) -> Option<u64> {
    if range.end() < range.start() {
        Some(0)
    } else {
        (range.end() - range.start()).checked_add(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pair_cardinality_is_range_product() {
        assert_eq!(IdPairDomain::new(1..=5, 1..=1).cardinality(), Some(5));
        assert_eq!(IdPairDomain::new(1..=10, 1..=20).cardinality(), Some(200));
        assert_eq!(
            IdPairDomain::new(1..=1_000_000, 1..=1_000_000).cardinality(),
            Some(1_000_000_000_000)
        );
    }

    #[test]
    fn test_pair_cardinality_overflow_is_unbounded() {
        assert_eq!(
            IdPairDomain::new(1..=u64::MAX, 1..=2).cardinality(),
            None
        );
    }

    #[test]
    fn test_empty_range_has_zero_cardinality() {
        #[allow(clippy::reversed_empty_ranges)]
        let domain = IdPairDomain::new(5..=1, 1..=10);
        assert_eq!(domain.cardinality(), Some(0));
    }

    #[test]
    fn test_draws_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let domain = IdPairDomain::new(3..=7, 10..=12);
        for _ in 0..100 {
            let (a, b) = domain.draw(&mut rng);
            assert!((3..=7).contains(&a));
            assert!((10..=12).contains(&b));
        }
    }
}
