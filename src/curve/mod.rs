//! Short Weierstrass curves `y^2 = x^3 + a*x + b` over a prime field.
//!
//! A [`Curve`] only owns its coefficients and the field modulus. Points are
//! separate values ([`CurvePoint`]) and every operation takes the curve it is
//! evaluated on, which keeps both types immutable and freely shareable.
mod point;

pub use point::CurvePoint;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::errors::Error;
use crate::modular::{invmod, normalize};

/// The curve `y^2 = x^3 + a*x + b (mod p)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    a: BigInt,
    b: BigInt,
    p: BigInt,
}

impl Curve {
    /// Builds a curve, checking `p > 2`, `a < p`, `0 < b < p` and that the
    /// discriminant `4a^3 + 27b^2` does not vanish mod `p`.
    ///
    /// A negative `a` is accepted and stored reduced into `[0, p)`.
    /// The primality of `p` is not checked.
    pub fn new(a: BigInt, b: BigInt, p: BigInt) -> Result<Self, Error> {
        if p <= BigInt::from(2) {
            return Err(Error::BadParameters(format!(
                "field modulus must be > 2, found: {p}"
            )));
        }
        if a >= p {
            return Err(Error::BadParameters(
                "coefficient a must be lower than the field modulus".to_string(),
            ));
        }
        if !b.is_positive() || b >= p {
            return Err(Error::BadParameters(
                "coefficient b must lie in (0, p)".to_string(),
            ));
        }

        let a = normalize(&a, &p);
        let discriminant = BigInt::from(4) * a.pow(3) + BigInt::from(27) * b.pow(2);
        if normalize(&discriminant, &p).is_zero() {
            return Err(Error::BadParameters("curve is singular".to_string()));
        }

        Ok(Self { a, b, p })
    }

    pub fn a(&self) -> &BigInt {
        &self.a
    }

    pub fn b(&self) -> &BigInt {
        &self.b
    }

    /// The field modulus.
    pub fn p(&self) -> &BigInt {
        &self.p
    }

    fn reduce(&self, value: &BigInt) -> BigInt {
        normalize(value, &self.p)
    }

    /// Curve membership. The point at infinity is always on the curve.
    pub fn is_valid(&self, point: &CurvePoint) -> bool {
        match point.coordinates() {
            None => true,
            Some((x, y)) => {
                let lhs = self.reduce(&(y * y));
                let rhs = self.reduce(&(x.pow(3) + &self.a * x + &self.b));
                lhs == rhs
            }
        }
    }

    /// The group law.
    ///
    /// Only fails if a slope denominator has no inverse mod `p`, which cannot
    /// happen for points of this curve when `p` is prime.
    pub fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint, Error> {
        let ((x1, y1), (x2, y2)) = match (p1.coordinates(), p2.coordinates()) {
            (None, _) => return Ok(p2.clone()),
            (_, None) => return Ok(p1.clone()),
            (Some(c1), Some(c2)) => (c1, c2),
        };

        // Vertical line: P2 = -P1, or doubling a point of order two.
        if x1 == x2 && (y1 != y2 || y1.is_zero()) {
            return Ok(CurvePoint::Infinity);
        }

        let slope = if x1 == x2 {
            let numerator = BigInt::from(3) * x1 * x1 + &self.a;
            numerator * invmod(&(BigInt::from(2) * y1), &self.p)?
        } else {
            (y1 - y2) * invmod(&(x1 - x2), &self.p)?
        };
        let slope = self.reduce(&slope);

        let x = self.reduce(&(&slope * &slope - x1 - x2));
        let y = self.reduce(&(&slope * (x1 - &x) - y1));
        Ok(CurvePoint::Affine { x, y })
    }

    pub fn double(&self, point: &CurvePoint) -> Result<CurvePoint, Error> {
        self.add(point, point)
    }

    /// The additive inverse `(x, -y)`.
    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match point.coordinates() {
            None => CurvePoint::Infinity,
            Some((x, y)) => CurvePoint::Affine {
                x: x.clone(),
                y: self.reduce(&-y),
            },
        }
    }

    /// Scalar multiplication by double-and-add.
    ///
    /// Non-positive scalars yield the point at infinity.
    pub fn scalar_mul(&self, point: &CurvePoint, k: &BigInt) -> Result<CurvePoint, Error> {
        let mut result = CurvePoint::Infinity;
        if point.is_infinity() {
            return Ok(result);
        }

        let mut accumulator = point.clone();
        let mut k = k.clone();
        while k.is_positive() {
            if k.is_odd() {
                result = self.add(&result, &accumulator)?;
            }
            accumulator = self.double(&accumulator)?;
            k /= 2u32;
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use proptest::prelude::*;

    const SMALL_ORDER: u32 = 19;

    /// y^2 = x^3 + 2x + 2 over F_17, generated by (5, 1) of order 19.
    fn small_curve() -> (Curve, CurvePoint) {
        let curve = Curve::new(2.into(), 2.into(), 17.into()).unwrap();
        (curve, CurvePoint::affine(5, 1))
    }

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    fn validation_curve() -> (Curve, CurvePoint, BigInt) {
        let p: BigInt = "233970423115425145524320034830162017933".parse().unwrap();
        let curve = Curve::new(int(-95051), int(11_279_326), p).unwrap();
        let g = CurvePoint::affine(
            182,
            "85518893674295321206118380980485522083"
                .parse::<BigInt>()
                .unwrap(),
        );
        let n = "29246302889428143187362802287225875743".parse().unwrap();
        (curve, g, n)
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let bad = [
            (0, 7, 2),
            (17, 2, 17),
            (2, 0, 17),
            (2, 17, 17),
            (2, -1, 17),
            // 4*(-3)^3 + 27*2^2 = 0
            (-3, 2, 101),
        ];
        for (a, b, p) in bad {
            assert!(
                matches!(Curve::new(int(a), int(b), int(p)), Err(Error::BadParameters(_))),
                "accepted a={a} b={b} p={p}"
            );
        }
    }

    #[test]
    fn test_negative_coefficient_is_reduced() {
        let curve = Curve::new(int(-3), int(7), int(101)).unwrap();
        assert_eq!(curve.a(), &int(98));
        assert_eq!(curve.b(), &int(7));
        assert_eq!(curve.p(), &int(101));
    }

    #[test]
    fn test_membership() {
        let (curve, g) = small_curve();
        assert!(curve.is_valid(&g));
        assert!(curve.is_valid(&CurvePoint::Infinity));
        assert!(!curve.is_valid(&CurvePoint::affine(5, 2)));

        let (curve, g, _) = validation_curve();
        assert!(curve.is_valid(&g));
        assert!(!curve.is_valid(&CurvePoint::affine(182, 1)));
    }

    #[test]
    fn test_small_curve_multiples() {
        let (curve, g) = small_curve();
        let expected = [
            (5, 1),
            (6, 3),
            (10, 6),
            (3, 1),
            (9, 16),
            (16, 13),
            (0, 6),
            (13, 7),
            (7, 6),
            (7, 11),
            (13, 10),
            (0, 11),
            (16, 4),
            (9, 1),
            (3, 16),
            (10, 11),
            (6, 14),
            (5, 16),
        ];
        for (k, (x, y)) in (1..).zip(expected) {
            let point = curve.scalar_mul(&g, &int(k)).unwrap();
            assert_eq!(point, CurvePoint::affine(x, y), "k = {k}");
            assert!(curve.is_valid(&point));
        }
        assert_eq!(
            curve.scalar_mul(&g, &int(SMALL_ORDER.into())).unwrap(),
            CurvePoint::Infinity
        );
    }

    #[test]
    fn test_validation_curve_multiples() {
        let (curve, g, n) = validation_curve();
        let p = curve.p().clone();

        let two_g = curve.double(&g).unwrap();
        assert_eq!(
            two_g,
            CurvePoint::affine(
                "231110995916992900219346197897292237295"
                    .parse::<BigInt>()
                    .unwrap(),
                "63844552430235414594643301238328922535"
                    .parse::<BigInt>()
                    .unwrap(),
            )
        );
        assert_eq!(
            curve.scalar_mul(&g, &int(12345)).unwrap(),
            CurvePoint::affine(
                "204495316738834270435734830013787698970"
                    .parse::<BigInt>()
                    .unwrap(),
                "169614769885181545458337754425729580447"
                    .parse::<BigInt>()
                    .unwrap(),
            )
        );

        let minus_g = curve.scalar_mul(&g, &(n.clone() - 1u32)).unwrap();
        assert_eq!(minus_g, curve.negate(&g));
        assert_eq!(minus_g.x(), int(182));
        assert_eq!(
            minus_g.coordinates().map(|(_, y)| y.clone()),
            Some(p - "85518893674295321206118380980485522083".parse::<BigInt>().unwrap())
        );
        assert_eq!(curve.scalar_mul(&g, &n).unwrap(), CurvePoint::Infinity);
    }

    #[test]
    fn test_order_two_point_doubles_to_infinity() {
        // (4, 0) lies on y^2 = x^3 + x + 1 over F_23
        let curve = Curve::new(int(1), int(1), int(23)).unwrap();
        let t = CurvePoint::affine(4, 0);
        assert!(curve.is_valid(&t));
        assert_eq!(curve.double(&t).unwrap(), CurvePoint::Infinity);
        assert_eq!(curve.scalar_mul(&t, &int(3)).unwrap(), t);
    }

    #[test]
    fn test_scalar_mul_boundaries() {
        let (curve, g) = small_curve();
        assert_eq!(curve.scalar_mul(&g, &int(0)).unwrap(), CurvePoint::Infinity);
        assert_eq!(curve.scalar_mul(&g, &int(-5)).unwrap(), CurvePoint::Infinity);
        assert_eq!(curve.scalar_mul(&g, &int(1)).unwrap(), g);
        assert_eq!(
            curve.scalar_mul(&CurvePoint::Infinity, &int(7)).unwrap(),
            CurvePoint::Infinity
        );
    }

    #[test]
    fn test_infinity_x_is_zero() {
        assert_eq!(CurvePoint::Infinity.x(), BigInt::zero());
        assert_eq!(CurvePoint::Infinity.to_string(), "infinity");
        assert_eq!(CurvePoint::affine(5, 1).to_string(), "(5, 1)");
    }

    proptest! {
        #[test]
        fn identity_is_neutral(k in 0u32..SMALL_ORDER) {
            let (curve, g) = small_curve();
            let point = curve.scalar_mul(&g, &k.into()).unwrap();
            prop_assert_eq!(curve.add(&point, &CurvePoint::Infinity).unwrap(), point.clone());
            prop_assert_eq!(curve.add(&CurvePoint::Infinity, &point).unwrap(), point);
        }

        #[test]
        fn point_plus_negation_is_infinity(k in 1u32..SMALL_ORDER) {
            let (curve, g) = small_curve();
            let point = curve.scalar_mul(&g, &k.into()).unwrap();
            let (x, y) = point.coordinates().unwrap();
            let mirrored = CurvePoint::affine(x.clone(), curve.p() - y);
            prop_assert_eq!(&mirrored, &curve.negate(&point));
            prop_assert_eq!(curve.add(&point, &mirrored).unwrap(), CurvePoint::Infinity);
        }

        #[test]
        fn scalar_mul_is_additive(j in 0u32..64, k in 0u32..64) {
            let (curve, g) = small_curve();
            let jg = curve.scalar_mul(&g, &j.into()).unwrap();
            let kg = curve.scalar_mul(&g, &k.into()).unwrap();
            let sum = curve.scalar_mul(&g, &(j + k).into()).unwrap();
            prop_assert_eq!(curve.add(&jg, &kg).unwrap(), sum.clone());
            prop_assert_eq!(curve.add(&kg, &jg).unwrap(), sum);
        }

        #[test]
        fn scalar_mul_wraps_at_order(k in 0u64..10_000) {
            let (curve, g) = small_curve();
            prop_assert_eq!(
                curve.scalar_mul(&g, &k.into()).unwrap(),
                curve.scalar_mul(&g, &(k % u64::from(SMALL_ORDER)).into()).unwrap()
            );
        }
    }
}
