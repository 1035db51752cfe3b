use thiserror::Error;

/// Errors raised by the arithmetic layers and by signature verification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operands of a modular inverse are not coprime.
    #[error("the modular inverse does not exist")]
    InverseNotExists,
    /// A modulus must be strictly positive.
    #[error("modulus must be positive")]
    InvalidModulus,
    /// The public key is not a point of the curve.
    #[error("public key is not a valid curve point")]
    InvalidKey,
    /// One of the signature scalars lies outside `[1, n-1]`.
    #[error("signature is out of bounds")]
    SignatureOutOfRange,
    /// Curve or domain parameters were rejected at construction.
    #[error("bad parameters: {0}")]
    BadParameters(String),
}
