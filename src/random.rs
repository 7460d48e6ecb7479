//! Seeded random sources.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Seed used when a config leaves `seed` unset.
pub const DEFAULT_SEED: u64 = 42;

/// Creates a reproducible generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, falling back to [`DEFAULT_SEED`].
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    create_rng(seed.unwrap_or(DEFAULT_SEED))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..16 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_default_seed() {
        let mut a = rng_from_seed(None);
        let mut b = create_rng(DEFAULT_SEED);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }
}
