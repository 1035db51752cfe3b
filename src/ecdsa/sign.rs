use num_traits::Zero;
use rand_core::CryptoRngCore;
use tracing::trace;

use super::{Ecdsa, PrivateKey, Signature};
use crate::crypto::hash::{hash, HashOutput};
use crate::crypto::random::random_scalar;
use crate::errors::Error;
use crate::modular::{invmod, normalize};

impl Ecdsa {
    /// Signs a message with the given private key.
    pub fn sign<R: CryptoRngCore>(
        &self,
        private_key: &PrivateKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Signature, Error> {
        self.sign_digest(private_key, &hash(message), rng)
    }

    /// Signs an already hashed message.
    ///
    /// A fresh nonce is drawn until both `r` and `s` are non-zero. A nonce
    /// with no inverse mod `n` is discarded the same way, so the only errors
    /// surfaced here come from the curve arithmetic itself.
    pub fn sign_digest<R: CryptoRngCore>(
        &self,
        private_key: &PrivateKey,
        digest: &HashOutput,
        rng: &mut R,
    ) -> Result<Signature, Error> {
        let n = &self.order;
        let h = digest.to_integer();
        let d = private_key.to_scalar();

        loop {
            let k = random_scalar(rng, n)?;
            let big_r = self.curve.scalar_mul(&self.generator, &k)?;

            let r = self.x_coordinate(&big_r);
            if r.is_zero() {
                trace!(target: "ecdsa", "nonce point has r = 0, drawing a new nonce");
                continue;
            }

            let Ok(k_inv) = invmod(&k, n) else {
                trace!(target: "ecdsa", "nonce is not invertible mod n, drawing a new nonce");
                continue;
            };

            let s = normalize(&(normalize(&(&h + &r * &d), n) * k_inv), n);
            if s.is_zero() {
                trace!(target: "ecdsa", "signature has s = 0, drawing a new nonce");
                continue;
            }

            return Ok(Signature { r, s });
        }
    }
}
