//! Random account number adapter

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::account::{SUFFIX_MAX, SUFFIX_MIN};
use crate::ports::AccountNumberSource;

/// Draws suffixes uniformly from 100000..=999999
pub struct RandomAccountNumbers {
    rng: StdRng,
}

impl RandomAccountNumbers {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic source, for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAccountNumbers {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountNumberSource for RandomAccountNumbers {
    fn next_suffix(&mut self) -> u32 {
        self.rng.gen_range(SUFFIX_MIN..=SUFFIX_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffixes_stay_in_range() {
        let mut source = RandomAccountNumbers::seeded(7);
        for _ in 0..10_000 {
            let suffix = source.next_suffix();
            assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = RandomAccountNumbers::seeded(42);
        let mut b = RandomAccountNumbers::seeded(42);
        for _ in 0..16 {
            assert_eq!(a.next_suffix(), b.next_suffix());
        }
    }
}
