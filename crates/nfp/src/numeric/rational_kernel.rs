//! Exact arbitrary-precision rational coordinates. `equals`/`smaller` are exact;
//! no epsilon is threaded through this backend at all.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use super::CoordKernel;

/// Exact rational coordinate kernel. Zero-sized: there is no tolerance to carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RationalKernel;

impl CoordKernel for RationalKernel {
    type Coord = BigRational;

    fn zero(&self) -> BigRational {
        BigRational::zero()
    }

    fn from_f64(&self, v: f64) -> BigRational {
        BigRational::from_f64(v).unwrap_or_else(BigRational::zero)
    }

    fn to_f64(&self, a: &BigRational) -> f64 {
        a.to_f64().unwrap_or(0.0)
    }

    fn add(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a + b
    }

    fn sub(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a - b
    }

    fn neg(&self, a: &BigRational) -> BigRational {
        -a.clone()
    }

    fn mul(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a * b
    }

    fn div(&self, a: &BigRational, b: &BigRational) -> BigRational {
        a / b
    }

    fn equals(&self, a: &BigRational, b: &BigRational) -> bool {
        a == b
    }

    fn smaller(&self, a: &BigRational, b: &BigRational) -> bool {
        a < b
    }
}

/// Convenience constructor for integer-coordinate test fixtures.
pub fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_and_smaller_are_exact() {
        let k = RationalKernel;
        let a = ratio(1, 3);
        let b = ratio(1, 3);
        assert!(k.equals(&a, &b));
        assert!(k.smaller(&ratio(1, 3), &ratio(2, 3)));
        assert!(!k.equals(&ratio(1, 3), &ratio(1, 3) + ratio(1, 1_000_000_000)));
    }
}
