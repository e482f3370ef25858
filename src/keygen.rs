// Textbook RSA key generation

use crate::format::{digit_count, first_n_digits};
use crate::math::{greatest_common_divisor, mod_inverse};
use crate::prime::{generate_prime_with_rounds, DEFAULT_MILLER_RABIN_ROUNDS};
use crate::random::random_in_range;
use crate::RsaError;

use std::fmt;

use log::{debug, info};
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

/// Smallest prime size that leaves room for two distinct primes.
pub const MIN_KEY_PRIME_BITS: u64 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Size of each of `p` and `q`; the modulus is roughly twice this.
    pub prime_bits: u64,
    pub primality_rounds: u32,
}

impl KeyGenConfig {
    pub fn new(prime_bits: u64) -> Self {
        Self {
            prime_bits,
            ..Self::default()
        }
    }
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            prime_bits: 512,
            primality_rounds: DEFAULT_MILLER_RABIN_ROUNDS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub n: BigUint,
    pub e: BigUint,
}

#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub n: BigUint,
    pub d: BigUint,
}

/// All values produced by one key generation.
///
/// `p`, `q`, `tot` and `d` are secret; only [`KeyPair::public_key`] may be
/// shared.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    p: BigUint,
    q: BigUint,
    n: BigUint,
    tot: BigUint,
    e: BigUint,
    d: BigUint,
}

impl KeyPair {
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    pub fn q(&self) -> &BigUint {
        &self.q
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }

    pub fn totient(&self) -> &BigUint {
        &self.tot
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            n: self.n.clone(),
            e: self.e.clone(),
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            n: self.n.clone(),
            d: self.d.clone(),
        }
    }

    /// Split into the shareable and secret halves, dropping `p`, `q` and `tot`.
    pub fn into_keys(self) -> (PublicKey, PrivateKey) {
        let public = PublicKey {
            n: self.n.clone(),
            e: self.e,
        };
        let private = PrivateKey {
            n: self.n,
            d: self.d,
        };
        (public, private)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("n", &self.n)
            .field("d", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n: {} ({} digits), e: {} ({} digits)",
            first_n_digits(&self.n, 10),
            digit_count(&self.n),
            first_n_digits(&self.e, 10),
            digit_count(&self.e),
        )
    }
}

pub fn compute_modulus(p: &BigUint, q: &BigUint) -> BigUint {
    p * q
}

/// Euler's totient of `p*q` for primes `p` and `q`: `(p-1)(q-1)`.
pub fn compute_totient(p: &BigUint, q: &BigUint) -> Result<BigUint, RsaError> {
    let one = BigUint::one();
    if p < &one || q < &one {
        return Err(RsaError::InvalidParameter(
            "totient factors must be positive".to_string(),
        ));
    }
    Ok((p - &one) * (q - &one))
}

/// Pick a random `e` in `[2, tot - 1]` with `gcd(e, tot) = 1`.
pub fn select_public_exponent<R: RngCore + ?Sized>(
    tot: &BigUint,
    rng: &mut R,
) -> Result<BigUint, RsaError> {
    let two = BigUint::from(2u64);
    if tot <= &two {
        return Err(RsaError::InvalidParameter(format!(
            "totient {tot} leaves no exponent in [2, tot - 1]"
        )));
    }

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let e = random_in_range(&two, tot, rng)?;
        if greatest_common_divisor(e.clone(), tot.clone()).is_one() {
            debug!(
                "selected public exponent with {} digits after {attempts} draws",
                digit_count(&e)
            );
            return Ok(e);
        }
    }
}

/// The private exponent `d` with `e*d = 1 (mod tot)`.
pub fn derive_private_exponent(e: &BigUint, tot: &BigUint) -> Result<BigUint, RsaError> {
    mod_inverse(e, tot)
}

/// Generate a key pair from two fresh `n_bits`-bit primes.
pub fn generate_key_pair<R: RngCore + ?Sized>(
    n_bits: u64,
    rng: &mut R,
) -> Result<KeyPair, RsaError> {
    generate_key_pair_with_config(&KeyGenConfig::new(n_bits), rng)
}

pub fn generate_key_pair_with_config<R: RngCore + ?Sized>(
    config: &KeyGenConfig,
    rng: &mut R,
) -> Result<KeyPair, RsaError> {
    if config.prime_bits < MIN_KEY_PRIME_BITS {
        return Err(RsaError::InvalidParameter(format!(
            "key primes must be at least {MIN_KEY_PRIME_BITS} bits, got {}",
            config.prime_bits
        )));
    }
    if config.primality_rounds == 0 {
        return Err(RsaError::InvalidParameter(
            "key generation needs at least one Miller-Rabin round".to_string(),
        ));
    }

    let p = generate_prime_with_rounds(config.prime_bits, config.primality_rounds, rng)?;
    let q = loop {
        let q = generate_prime_with_rounds(config.prime_bits, config.primality_rounds, rng)?;
        if q != p {
            break q;
        }
        debug!("drew q equal to p, redrawing");
    };

    let n = compute_modulus(&p, &q);
    let tot = compute_totient(&p, &q)?;
    let e = select_public_exponent(&tot, rng)?;
    let d = derive_private_exponent(&e, &tot)?;

    info!(
        "generated key pair with {}-bit primes: {}",
        config.prime_bits,
        PublicKey {
            n: n.clone(),
            e: e.clone()
        }
    );
    Ok(KeyPair { p, q, n, tot, e, d })
}
