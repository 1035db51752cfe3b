//! Domain parameters `(a, b, p, G, n)` and the built-in sets.
use hex_literal::hex;
use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::curve::{Curve, CurvePoint};
use crate::ecdsa::Ecdsa;
use crate::errors::Error;

/// Everything needed to instantiate [`Ecdsa`]: the curve coefficients, the
/// field modulus, a generator and its order.
///
/// Integers are serialized as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainParams {
    #[serde(with = "crate::serde::decimal")]
    pub a: BigInt,
    #[serde(with = "crate::serde::decimal")]
    pub b: BigInt,
    #[serde(with = "crate::serde::decimal")]
    pub p: BigInt,
    #[serde(with = "crate::serde::decimal")]
    pub generator_x: BigInt,
    #[serde(with = "crate::serde::decimal")]
    pub generator_y: BigInt,
    #[serde(with = "crate::serde::decimal")]
    pub order: BigInt,
}

fn from_be(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

impl DomainParams {
    /// A 128-bit curve with a prime-order generator, small enough to keep
    /// tests fast.
    pub fn validation_curve() -> Self {
        Self {
            a: BigInt::from(-95_051),
            b: BigInt::from(11_279_326),
            p: BigInt::from(233_970_423_115_425_145_524_320_034_830_162_017_933_u128),
            generator_x: BigInt::from(182),
            generator_y: BigInt::from(85_518_893_674_295_321_206_118_380_980_485_522_083_u128),
            order: BigInt::from(29_246_302_889_428_143_187_362_802_287_225_875_743_u128),
        }
    }

    /// secp256k1, as specified in SEC 2.
    pub fn secp256k1() -> Self {
        Self {
            a: BigInt::from(0),
            b: BigInt::from(7),
            p: from_be(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F"
            )),
            generator_x: from_be(&hex!(
                "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
            )),
            generator_y: from_be(&hex!(
                "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
            )),
            order: from_be(&hex!(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141"
            )),
        }
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text)
            .map_err(|err| Error::BadParameters(format!("invalid domain parameters: {err}")))
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::BadParameters(format!("cannot encode domain parameters: {err}")))
    }

    pub fn generator(&self) -> CurvePoint {
        CurvePoint::affine(self.generator_x.clone(), self.generator_y.clone())
    }

    /// Validates the parameters and builds the signature scheme.
    pub fn into_ecdsa(self) -> Result<Ecdsa, Error> {
        let generator = self.generator();
        let curve = Curve::new(self.a, self.b, self.p)?;
        Ecdsa::new(curve, generator, self.order)
    }
}
