#![allow(dead_code)]
use num_bigint::BigInt;

/// Left-pads the big-endian encoding of a non-negative integer to 32 bytes.
#[allow(clippy::missing_panics_doc)]
pub fn to_field_bytes(value: &BigInt) -> [u8; 32] {
    let (_, bytes) = value.to_bytes_be();
    assert!(bytes.len() <= 32, "value does not fit in 32 bytes");
    let mut out = [0u8; 32];
    if let Some(tail) = out.get_mut(32 - bytes.len()..) {
        tail.copy_from_slice(&bytes);
    }
    out
}

/// Chooses the representative of `s` in the lower half of `[1, n-1]`.
pub fn low_s(s: &BigInt, order: &BigInt) -> BigInt {
    let negated = order - s;
    if &negated < s {
        negated
    } else {
        s.clone()
    }
}
