use std::fmt;

use num_bigint::BigInt;
use num_traits::Zero;

/// A point of a short Weierstrass curve.
///
/// Points are plain values: they carry no reference to their curve and are
/// never mutated once built. Whether a point actually lies on a given curve is
/// answered by [`super::Curve::is_valid`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// The identity of the group.
    Infinity,
    /// An affine point with coordinates in `[0, p)`.
    Affine { x: BigInt, y: BigInt },
}

impl CurvePoint {
    pub fn affine(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// The affine coordinates, or `None` for the point at infinity.
    pub fn coordinates(&self) -> Option<(&BigInt, &BigInt)> {
        match self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// The x-coordinate, with the point at infinity mapped to zero.
    pub fn x(&self) -> BigInt {
        match self {
            Self::Infinity => BigInt::zero(),
            Self::Affine { x, .. } => x.clone(),
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "infinity"),
            Self::Affine { x, y } => write!(f, "({x}, {y})"),
        }
    }
}
