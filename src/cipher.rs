// Textbook RSA encryption and decryption

use crate::keygen::{PrivateKey, PublicKey};
use crate::RsaError;

use num_bigint::{BigUint, ToBigInt, ToBigUint};
use num_traits::Zero;

/// Compute `value^exponent mod modulus` by square-and-multiply.
///
/// `value` may be any integer type; negative values are rejected. Values at
/// or above `modulus` are reduced silently, which loses information.
pub fn rsa_apply<T: ToBigInt + ?Sized>(
    value: &T,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, RsaError> {
    if modulus.is_zero() {
        return Err(RsaError::InvalidParameter("modulus must be positive".to_string()));
    }
    let value = value
        .to_bigint()
        .and_then(|v| ToBigUint::to_biguint(&v))
        .ok_or_else(|| RsaError::ValueOutOfRange("value must be non-negative".to_string()))?;
    Ok(value.modpow(exponent, modulus))
}

/// `c = m^e mod n`
pub fn encrypt<T: ToBigInt + ?Sized>(
    m: &T,
    e: &BigUint,
    n: &BigUint,
) -> Result<BigUint, RsaError> {
    rsa_apply(m, e, n)
}

/// `m = c^d mod n`
pub fn decrypt<T: ToBigInt + ?Sized>(
    c: &T,
    d: &BigUint,
    n: &BigUint,
) -> Result<BigUint, RsaError> {
    rsa_apply(c, d, n)
}

impl PublicKey {
    pub fn encrypt<T: ToBigInt + ?Sized>(&self, m: &T) -> Result<BigUint, RsaError> {
        encrypt(m, &self.e, &self.n)
    }
}

impl PrivateKey {
    pub fn decrypt<T: ToBigInt + ?Sized>(&self, c: &T) -> Result<BigUint, RsaError> {
        decrypt(c, &self.d, &self.n)
    }
}
