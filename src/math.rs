// Number theory helpers for key derivation

use crate::RsaError;

use num_bigint::{BigInt, BigUint, Sign, ToBigUint};
use num_traits::{One, Zero};

pub fn greatest_common_divisor(mut a: BigUint, mut b: BigUint) -> BigUint {
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm.
///
/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());
    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
        let next_t = &old_t - &quotient * &t;
        old_t = std::mem::replace(&mut t, next_t);
    }
    (old_r, old_s, old_t)
}

///
/// # Modular Inverse
///
/// Calculates `a^-1 mod m`, the unique `x` in `[0, m)` with `a*x = 1 (mod m)`.
///
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, RsaError> {
    if m.is_zero() {
        return Err(RsaError::InvalidParameter(
            "modulus of an inverse must be positive".to_string(),
        ));
    }
    let m_int = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(a.clone()), &m_int);
    if !g.is_one() {
        return Err(RsaError::NoInverseExists);
    }
    // `%` keeps the sign of the dividend, so fold negatives back into [0, m).
    let mut inverse = x % &m_int;
    if inverse.sign() == Sign::Minus {
        inverse += &m_int;
    }
    ToBigUint::to_biguint(&inverse)
        .ok_or_else(|| RsaError::ValueOutOfRange("inverse left [0, m)".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(3120, 17, 1)]
    #[case(48, 18, 6)]
    #[case(18, 48, 6)]
    #[case(0, 5, 5)]
    #[case(7, 0, 7)]
    #[case(1071, 462, 21)]
    fn greatest_common_divisor_returns_gcd(#[case] a: u64, #[case] b: u64, #[case] expected: u64) {
        let gcd = greatest_common_divisor(BigUint::from(a), BigUint::from(b));

        assert_eq!(gcd, BigUint::from(expected));
    }

    #[rstest]
    #[case(240, 46)]
    #[case(46, 240)]
    #[case(17, 3120)]
    #[case(0, 9)]
    fn extended_gcd_satisfies_bezout_identity(#[case] a: i64, #[case] b: i64) {
        let (a, b) = (BigInt::from(a), BigInt::from(b));

        let (g, x, y) = extended_gcd(&a, &b);

        assert_eq!(&a * x + &b * y, g);
    }

    #[rstest]
    #[case(17, 3120, 2753)]
    #[case(3, 11, 4)]
    #[case(10, 17, 12)]
    #[case(1, 5, 1)]
    #[case(3120 + 17, 3120, 2753)]
    fn mod_inverse_returns_inverse_in_range(#[case] a: u64, #[case] m: u64, #[case] expected: u64) {
        let inverse = mod_inverse(&BigUint::from(a), &BigUint::from(m)).unwrap();

        assert_eq!(inverse, BigUint::from(expected));
        assert!((BigUint::from(a) * &inverse % BigUint::from(m)).is_one());
    }

    #[rstest]
    #[case(6, 3120)]
    #[case(0, 7)]
    #[case(4, 8)]
    fn mod_inverse_of_non_coprime_values_fails(#[case] a: u64, #[case] m: u64) {
        let result = mod_inverse(&BigUint::from(a), &BigUint::from(m));

        assert!(matches!(result, Err(RsaError::NoInverseExists)));
    }

    #[test]
    fn mod_inverse_with_zero_modulus_is_invalid() {
        let result = mod_inverse(&BigUint::from(3u64), &BigUint::zero());

        assert!(matches!(result, Err(RsaError::InvalidParameter(_))));
    }
}
