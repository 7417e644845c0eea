use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

// e * 100_000
const RANDOM_SEED: u64 = 271828;

pub fn new() -> impl Rng {
    with_seed(RANDOM_SEED)
}

/// Seeded variant for multi-run statistical checks and benchmarks.
pub fn with_seed(seed: u64) -> impl Rng {
    Xoshiro256PlusPlus::seed_from_u64(seed)
}
