//! Shared helpers for the toycrypt integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use toycrypt_algorithms::ec::Curve;
use toycrypt_params::TOY_97;

/// The fixed demo curve, constructed fresh.
pub fn toy_curve() -> Curve {
    Curve::new(&TOY_97).expect("Toy-97 parameters are coherent")
}

/// A deterministic rng so failures reproduce.
pub fn seeded_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}
