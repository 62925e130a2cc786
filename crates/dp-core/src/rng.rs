//! Deterministic scenario-preparation RNG.
//!
//! # Determinism strategy
//!
//! Each pipeline invocation constructs one `ScenarioRng` from the configured
//! seed and consumes it in iteration order (persons for demand selection,
//! vehicle indices for fleet placement).  There is no process-wide generator:
//!
//! - the same seed and the same input order always yield the same draws;
//! - two pipelines never share a stream, so running the fleet synthesis
//!   before or after the demand transform does not change either result;
//! - the generator is not `Clone`, so a stream cannot be silently forked and
//!   replayed.
//!
//! Draws depend only on how many values were consumed before, so inserting a
//! person early in the population shifts the draws of every later person.
//! Appending persons leaves the earlier selections intact.
//!
//! The stream is `ChaCha8Rng`, whose output is fixed across platforms and
//! `rand` releases, so a seed names the same selection and fleet everywhere.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded generator scoped to one pipeline invocation.
pub struct ScenarioRng {
    inner: ChaCha8Rng,
    draws: u64,
}

impl ScenarioRng {
    pub fn new(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), draws: 0 }
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        self.inner.r#gen::<f64>()
    }

    /// Uniform index in `0..len`.  Returns `None` for `len == 0` without
    /// consuming a draw.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        self.draws += 1;
        Some(self.inner.gen_range(0..len))
    }

    /// Choose a uniformly random element of `slice` (with replacement across
    /// calls).  Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        self.index(slice.len()).map(|i| &slice[i])
    }

    /// Number of values drawn so far through the counted helpers.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}
