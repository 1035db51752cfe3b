use num_bigint::{BigInt, Sign};
use sha2::{Digest, Sha256};

const HASH_LEN: usize = 32;

/// The digest of a message, as fed to signing and verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashOutput([u8; HASH_LEN]);

impl HashOutput {
    /// The digest read as a big-endian unsigned integer.
    pub fn to_integer(&self) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &self.0)
    }
}

impl AsRef<[u8]> for HashOutput {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; HASH_LEN]> for HashOutput {
    fn from(bytes: [u8; HASH_LEN]) -> Self {
        Self(bytes)
    }
}

/// Hash a message to produce a short digest.
pub fn hash(message: &[u8]) -> HashOutput {
    HashOutput(Sha256::digest(message).into())
}
