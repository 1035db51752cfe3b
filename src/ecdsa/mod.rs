//! ECDSA over a short Weierstrass [`Curve`].
//!
//! An [`Ecdsa`] instance binds a curve to a generator `G` and its order `n`.
//! The caller is responsible for supplying a consistent triple: the generator
//! is checked to be on the curve, but `n` is trusted to be the order of `G`.
mod private_key;
mod sign;
mod verify;

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed};
use rand_core::CryptoRngCore;

pub use private_key::PrivateKey;

use crate::crypto::random::random_scalar;
use crate::curve::{Curve, CurvePoint};
use crate::errors::Error;
use crate::modular::normalize;

/// The output of key generation.
#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: CurvePoint,
}

/// An ECDSA signature: two scalars in `[1, n-1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    /// The x-coordinate of the nonce point, reduced mod `n`.
    pub r: BigInt,
    pub s: BigInt,
}

impl Signature {
    pub fn new(r: BigInt, s: BigInt) -> Self {
        Self { r, s }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.r, self.s)
    }
}

/// ECDSA parameterized by a curve, a generator and the generator's order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ecdsa {
    curve: Curve,
    generator: CurvePoint,
    order: BigInt,
}

impl Ecdsa {
    pub fn new(curve: Curve, generator: CurvePoint, order: BigInt) -> Result<Self, Error> {
        if order <= BigInt::one() {
            return Err(Error::BadParameters(format!(
                "generator order must be > 1, found: {order}"
            )));
        }
        if generator.is_infinity() || !curve.is_valid(&generator) {
            return Err(Error::BadParameters(format!(
                "generator {generator} is not a point of the curve"
            )));
        }
        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    /// The order `n` of the generator.
    pub fn order(&self) -> &BigInt {
        &self.order
    }

    /// Generates a key pair `(d, Q)` with `d` uniform in `[1, n-1]` and `Q = d*G`.
    pub fn generate_pair<R: CryptoRngCore>(&self, rng: &mut R) -> Result<KeyPair, Error> {
        let d = random_scalar(rng, &self.order)?;
        self.key_pair_from_scalar(&d)
    }

    /// Rebuilds the key pair of a known private scalar.
    pub fn key_pair_from_scalar(&self, d: &BigInt) -> Result<KeyPair, Error> {
        if !d.is_positive() || d >= &self.order {
            return Err(Error::BadParameters(
                "private scalar must lie in [1, n-1]".to_string(),
            ));
        }
        let public_key = self.curve.scalar_mul(&self.generator, d)?;
        Ok(KeyPair {
            private_key: PrivateKey::from_scalar(d),
            public_key,
        })
    }

    /// The x-coordinate of a point as a scalar mod `n`; infinity maps to zero.
    fn x_coordinate(&self, point: &CurvePoint) -> BigInt {
        normalize(&point.x(), &self.order)
    }
}
