#![allow(clippy::unwrap_used)]

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

use crate::{DomainParams, Ecdsa};

/// A seeded RNG, so that key generation and signing can be replayed.
pub fn deterministic_rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// The scheme instantiated over [`DomainParams::validation_curve`].
pub fn validation_ecdsa() -> Ecdsa {
    DomainParams::validation_curve().into_ecdsa().unwrap()
}

/// The scheme instantiated over [`DomainParams::secp256k1`].
pub fn secp256k1_ecdsa() -> Ecdsa {
    DomainParams::secp256k1().into_ecdsa().unwrap()
}
