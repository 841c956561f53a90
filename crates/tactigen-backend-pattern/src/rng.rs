//! Deterministic RNG using PCG32.
//!
//! All randomness in the pattern backend flows through a `Pcg32` passed in
//! by the caller. Batches derive one seed per pattern with BLAKE3 so each
//! pattern has an independent stream.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use tactigen_spec::derive_pattern_seed;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is expanded to 64 bits by duplicating it into both halves.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Creates the RNG for pattern `index` of a batch.
pub fn create_pattern_rng(base_seed: u32, index: u32) -> Pcg32 {
    create_rng(derive_pattern_seed(base_seed, index))
}
