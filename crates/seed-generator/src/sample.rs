//! Unique sampling: draw-and-reject-if-seen with an exhaustion check.
//!
//! The reject-and-redraw pattern is sound only while the domain is larger
//! than the request, so every draw is preceded by a cardinality check and
//! fails with [`SampleError::DomainExhausted`] once the seen set covers the
//! whole domain. Domains that cannot enumerate their size (free text)
//! report `None` and are treated as unbounded.

use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;
use thiserror::Error;

/// Errors raised by [`UniqueSampler`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// The requested number of unique samples exceeds the distinct values
    /// the domain can produce.
    #[error("domain exhausted: requested {requested} unique samples, domain holds {available}")]
    DomainExhausted { requested: u64, available: u64 },
}

/// A space of candidate values to draw from.
pub trait SampleDomain {
    /// The candidate type; equality/hashing defines uniqueness.
    type Candidate: Clone + Eq + Hash;

    /// Draw one candidate, independently and uniformly.
    fn draw<R: Rng>(&self, rng: &mut R) -> Self::Candidate;

    /// Number of distinct candidates, or `None` if effectively unbounded.
    fn cardinality(&self) -> Option<u64>;
}

/// Accumulates pairwise-distinct samples from a domain.
///
/// The seen set lives for one generation task and is never shared or
/// persisted. Samples are returned in acceptance order.
pub struct UniqueSampler<D: SampleDomain> {
    domain: D,
    seen: HashSet<D::Candidate>,
}

impl<D: SampleDomain> UniqueSampler<D> {
    /// Create a sampler with an empty seen set.
    pub fn new(domain: D) -> Self {
        Self {
            domain,
            seen: HashSet::new(),
        }
    }

    /// Number of samples accepted so far.
    pub fn len(&self) -> u64 {
        self.seen.len() as u64
    }

    /// Whether no samples have been accepted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Draw one candidate not seen before.
    ///
    /// Redraws on collision without a retry cap; termination is guaranteed
    /// by the up-front exhaustion check.
    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Result<D::Candidate, SampleError> {
        self.check_capacity(1)?;
        loop {
            let candidate = self.domain.draw(rng);
            if self.seen.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
    }

    /// Draw `count` candidates not seen before, in acceptance order.
    pub fn take<R: Rng>(
        &mut self,
        rng: &mut R,
        count: u64,
    ) -> Result<Vec<D::Candidate>, SampleError> {
        self.check_capacity(count)?;
        (0..count).map(|_| self.sample(rng)).collect()
    }

    /// Fail fast if `additional` more samples cannot all be distinct.
    fn check_capacity(&self, additional: u64) -> Result<(), SampleError> {
        if let Some(available) = self.domain.cardinality() {
            let requested = self.len().saturating_add(additional);
            if requested > available {
                return Err(SampleError::DomainExhausted {
                    requested,
                    available,
                });
            }
        }
        Ok(())
    }
}
