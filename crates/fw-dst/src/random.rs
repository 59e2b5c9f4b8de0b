//! Deterministic random number generation.
//!
//! Uses a seeded PRNG (Xoshiro256**) that produces identical sequences
//! for identical seeds, enabling reproducible fake webs.

use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Deterministic random number generator.
///
/// Wraps Xoshiro256** with a seed for reproducibility.
/// Given the same seed, always produces the same sequence.
///
/// # Example
///
/// ```rust
/// use fw_dst::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let a: u64 = rng.gen();
/// let b: u64 = rng.gen();
///
/// // Same seed produces same sequence
/// let mut rng2 = DeterministicRng::new(12345);
/// assert_eq!(rng2.gen::<u64>(), a);
/// assert_eq!(rng2.gen::<u64>(), b);
/// ```
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    /// Get the seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get number of random draws requested.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    /// Generate a random value of type T.
    pub fn gen<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.calls_count += 1;
        self.rng.gen()
    }

    /// Draw one value from `distribution`.
    pub fn sample<T, D>(&mut self, distribution: &D) -> T
    where
        D: Distribution<T>,
    {
        self.calls_count += 1;
        distribution.sample(&mut self.rng)
    }

    /// Sample `amount` distinct indices from `0..length`, uniformly and
    /// without replacement.
    ///
    /// Cost is proportional to `amount` when it is small relative to
    /// `length` (Floyd's algorithm or rejection sampling, chosen by
    /// `rand::seq::index::sample`). Returns `None` if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Option<Vec<usize>> {
        if amount > length {
            return None;
        }
        self.calls_count += 1;
        Some(rand::seq::index::sample(&mut self.rng, length, amount).into_vec())
    }

    /// Like [`sample_indices`](Self::sample_indices) but never returns
    /// `excluded`.
    ///
    /// Samples from `0..length - 1` and shifts every pick at or above
    /// `excluded` up by one, which keeps the distribution uniform over
    /// the remaining indices. Returns `None` if `amount > length - 1` or
    /// `excluded` is out of range.
    pub fn sample_indices_excluding(
        &mut self,
        length: usize,
        amount: usize,
        excluded: usize,
    ) -> Option<Vec<usize>> {
        if excluded >= length {
            return None;
        }
        let mut picks = self.sample_indices(length - 1, amount)?;
        for pick in &mut picks {
            if *pick >= excluded {
                *pick += 1;
            }
        }
        debug_assert!(picks.iter().all(|&pick| pick != excluded && pick < length));
        Some(picks)
    }
}
