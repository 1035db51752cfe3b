//! `PrivateKey` stores the signing scalar as big-endian bytes which are wiped
//! from memory on drop. The integers rebuilt from it with `to_scalar` are not
//! wiped.
use std::fmt;

use num_bigint::{BigInt, Sign};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The secret scalar `d` of a key pair.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey(Vec<u8>);

impl PrivateKey {
    pub(crate) fn from_scalar(d: &BigInt) -> Self {
        let (_, bytes) = d.to_bytes_be();
        Self(bytes)
    }

    /// Convert back to an integer (for short-term use only).
    pub(crate) fn to_scalar(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.0)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}
