//! Serde helpers for big integers.
//!
//! Integers are written as decimal strings so that values wider than any JSON
//! number survive untouched. Reading also accepts `0x`-prefixed hex, which is
//! how standard curve constants are usually published.

/// `#[serde(with = "crate::serde::decimal")]` for [`num_bigint::BigInt`] fields.
pub(crate) mod decimal {
    use ::serde::{de, Deserialize, Deserializer, Serializer};
    use num_bigint::{BigInt, BigUint};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| de::Error::custom(format!("invalid integer: {text:?}")))
    }

    pub(crate) fn parse(text: &str) -> Option<BigInt> {
        let text = text.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let (digits, radix) = match digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
        {
            Some(hex) => (hex, 16),
            None => (digits, 10),
        };
        if digits.starts_with(['+', '-']) {
            return None;
        }
        let magnitude = BigInt::from(BigUint::parse_bytes(digits.as_bytes(), radix)?);
        Some(if negative { -magnitude } else { magnitude })
    }
}
