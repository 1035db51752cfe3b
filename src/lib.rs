//! ECDSA over prime-field short Weierstrass curves, built from exact
//! big-integer arithmetic.
//!
//! The crate is layered: [`modular`] arithmetic feeds the [`curve`] group law,
//! which feeds key generation, signing and verification in [`ecdsa`].
mod crypto;
mod errors;
mod serde;

pub mod curve;
pub mod ecdsa;
pub mod modular;
pub mod params;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use crypto::hash::{hash, HashOutput};
pub use crypto::random::{random_in_range, random_scalar};
pub use curve::{Curve, CurvePoint};
pub use ecdsa::{Ecdsa, KeyPair, PrivateKey, Signature};
pub use errors::Error;
pub use params::DomainParams;
