use num_bigint::BigInt;
use num_traits::Signed;
use tracing::debug;

use super::{Ecdsa, Signature};
use crate::crypto::hash::{hash, HashOutput};
use crate::curve::CurvePoint;
use crate::errors::Error;
use crate::modular::{invmod, normalize};

impl Ecdsa {
    /// Verifies a signature over a message.
    ///
    /// `Ok(false)` means the signature is well formed but does not match.
    /// An error means it could not even be checked; callers should treat both
    /// the same way.
    pub fn verify(
        &self,
        signature: &Signature,
        public_key: &CurvePoint,
        message: &[u8],
    ) -> Result<bool, Error> {
        self.verify_digest(signature, public_key, &hash(message))
    }

    /// Verifies a signature over an already hashed message.
    pub fn verify_digest(
        &self,
        signature: &Signature,
        public_key: &CurvePoint,
        digest: &HashOutput,
    ) -> Result<bool, Error> {
        if !self.curve.is_valid(public_key) {
            debug!(target: "ecdsa", %public_key, "public key is not on the curve");
            return Err(Error::InvalidKey);
        }

        let n = &self.order;
        let in_range = |v: &BigInt| v.is_positive() && v < n;
        if !in_range(&signature.r) || !in_range(&signature.s) {
            debug!(target: "ecdsa", %signature, "signature is out of bounds");
            return Err(Error::SignatureOutOfRange);
        }

        let h = digest.to_integer();
        let w = invmod(&signature.s, n)?;
        let u1 = normalize(&(h * &w), n);
        let u2 = normalize(&(&signature.r * &w), n);

        let point = self.curve.add(
            &self.curve.scalar_mul(&self.generator, &u1)?,
            &self.curve.scalar_mul(public_key, &u2)?,
        )?;

        Ok(signature.r == self.x_coordinate(&point))
    }

    /// Collapses [`Ecdsa::verify`] into accept or reject: any error rejects.
    #[must_use]
    pub fn accepts(&self, signature: &Signature, public_key: &CurvePoint, message: &[u8]) -> bool {
        match self.verify(signature, public_key, message) {
            Ok(valid) => valid,
            Err(err) => {
                debug!(target: "ecdsa", %err, "rejecting signature");
                false
            }
        }
    }
}
