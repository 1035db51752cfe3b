//! Exact modular arithmetic over arbitrary-precision integers.
//!
//! Everything here works on [`BigInt`] so that values of cryptographic size
//! never lose precision. Subtractions in the layers above routinely produce
//! negative intermediates, so [`normalize`] is the single place where a value
//! is brought back into `[0, m)`.
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use crate::errors::Error;

/// Reduces `a` into `[0, m)`.
///
/// `m` must be positive; every caller in this crate checks that once, when the
/// modulus enters the system.
pub fn normalize(a: &BigInt, m: &BigInt) -> BigInt {
    a.mod_floor(m)
}

/// Replaces `(old, current)` with `(current, old - quotient * current)`.
fn substitute(old: &mut BigInt, current: &mut BigInt, quotient: &BigInt) {
    let next = &*old - quotient * &*current;
    *old = std::mem::replace(current, next);
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` with `a*x + b*y = g`. For non-negative inputs `g` is
/// the greatest common divisor of `a` and `b`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = old_r.div_floor(&r);
        substitute(&mut old_r, &mut r, &quotient);
        substitute(&mut old_s, &mut s, &quotient);
        substitute(&mut old_t, &mut t, &quotient);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse: the `x` in `[0, m)` such that `a*x ≡ 1 (mod m)`.
///
/// `a` may be negative. Fails with [`Error::InverseNotExists`] when `a` and `m`
/// are not coprime.
pub fn invmod(a: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    if !m.is_positive() {
        return Err(Error::InvalidModulus);
    }
    let (g, x, _) = extended_gcd(&normalize(a, m), m);
    if !g.is_one() {
        return Err(Error::InverseNotExists);
    }
    Ok(normalize(&x, m))
}

/// Computes `base^exp mod n` by square-and-multiply.
///
/// A zero base short-circuits to zero, whatever the exponent.
pub fn modexp(base: &BigInt, exp: &BigUint, n: &BigInt) -> Result<BigInt, Error> {
    if !n.is_positive() {
        return Err(Error::InvalidModulus);
    }
    if base.is_zero() {
        return Ok(BigInt::zero());
    }

    let mut result = normalize(&BigInt::one(), n);
    let mut power = normalize(base, n);
    let mut e = exp.clone();

    while !e.is_zero() {
        if e.is_odd() {
            result = (&result * &power) % n;
        }
        power = (&power * &power) % n;
        e /= 2u32;
    }

    Ok(result)
}
