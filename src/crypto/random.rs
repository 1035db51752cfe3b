use num_bigint::{BigInt, RandBigInt};
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::errors::Error;

/// Sample an integer uniformly from the inclusive range `[low, high]`.
///
/// An empty range (`low > high`) is rejected with [`Error::BadParameters`].
pub fn random_in_range<R: CryptoRngCore>(
    rng: &mut R,
    low: &BigInt,
    high: &BigInt,
) -> Result<BigInt, Error> {
    if low > high {
        return Err(Error::BadParameters(format!(
            "empty sampling range [{low}, {high}]"
        )));
    }
    Ok(rng.gen_bigint_range(low, &(high + 1u32)))
}

/// Sample a non-zero scalar modulo `order`, that is an integer in `[1, order - 1]`.
pub fn random_scalar<R: CryptoRngCore>(rng: &mut R, order: &BigInt) -> Result<BigInt, Error> {
    random_in_range(rng, &BigInt::one(), &(order - 1u32))
}
