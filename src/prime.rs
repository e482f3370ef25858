// Functions related to identification and generation of prime numbers.

use crate::prime_tables::SMALL_ODD_PRIMES;
use crate::random::{random_bytes, random_in_range};
use crate::RsaError;

use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

/// Miller-Rabin rounds used when the caller doesn't choose a confidence.
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 20;

pub fn is_likely_prime<R: RngCore + ?Sized>(
    candidate_prime: &BigUint,
    n_rounds: u32,
    miller_rabin_rng: &mut R,
) -> Result<bool, RsaError> {
    if n_rounds == 0 {
        return Err(RsaError::InvalidParameter(
            "primality test needs at least one Miller-Rabin round".to_string(),
        ));
    }
    let one = BigUint::one();
    if candidate_prime.is_zero() || candidate_prime == &one {
        return Ok(false);
    }
    let two = BigUint::from(2u64);
    if candidate_prime == &two {
        return Ok(true);
    }

    if !candidate_prime.bit(0) {
        return Ok(false);
    }

    for small_prime in SMALL_ODD_PRIMES {
        let x = BigUint::from(small_prime);
        if candidate_prime == &x {
            return Ok(true);
        }
        if (candidate_prime % &x).is_zero() {
            return Ok(false);
        }
    }

    miller_rabin(candidate_prime, n_rounds, miller_rabin_rng)
}

// Expects an odd candidate greater than 3.
fn miller_rabin<R: RngCore + ?Sized>(
    candidate_prime: &BigUint,
    n_rounds: u32,
    rng: &mut R,
) -> Result<bool, RsaError> {
    let one = BigUint::one();
    let two = BigUint::from(2u64);
    let candidate_minus_one = candidate_prime - &one;

    let mut d = candidate_minus_one.clone();
    let mut r = 0;
    while !d.bit(0) {
        d >>= 1;
        r += 1;
    }
    'witness: for _ in 0..n_rounds {
        let a = random_in_range(&two, &candidate_minus_one, rng)?;
        let mut x = a.modpow(&d, candidate_prime);
        if x == one || x == candidate_minus_one {
            continue;
        }
        for _ in 0..(r - 1) {
            x = x.modpow(&two, candidate_prime);
            if x == candidate_minus_one {
                continue 'witness;
            }
        }
        return Ok(false);
    }

    Ok(true)
}

/// Generate a random prime with exactly `n_bits` significant bits.
pub fn generate_prime<R: RngCore + ?Sized>(
    n_bits: u64,
    rng: &mut R,
) -> Result<BigUint, RsaError> {
    generate_prime_with_rounds(n_bits, DEFAULT_MILLER_RABIN_ROUNDS, rng)
}

/// Generate a random prime with exactly `n_bits` significant bits, accepting
/// candidates that survive `n_rounds` Miller-Rabin rounds.
///
/// Each candidate is built from `ceil(n_bits / 8)` random bytes. Bits above
/// the requested length are cleared, the two most significant requested bits
/// are set so the product of two such primes keeps its full length, and the
/// lowest bit is set so the candidate is odd.
pub fn generate_prime_with_rounds<R: RngCore + ?Sized>(
    n_bits: u64,
    n_rounds: u32,
    rng: &mut R,
) -> Result<BigUint, RsaError> {
    if n_bits < 2 {
        return Err(RsaError::InvalidParameter(format!(
            "prime size must be at least 2 bits, got {n_bits}"
        )));
    }
    if n_rounds == 0 {
        return Err(RsaError::InvalidParameter(
            "primality test needs at least one Miller-Rabin round".to_string(),
        ));
    }
    let n_bytes = n_bits.div_ceil(8) as usize;
    let top_bits = match n_bits % 8 {
        0 => 8,
        b => b as u32,
    };

    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let mut bytes = random_bytes(n_bytes, rng)?;
        bytes[0] &= ((1u16 << top_bits) - 1) as u8;
        if top_bits >= 2 {
            bytes[0] |= 3 << (top_bits - 2);
        } else {
            bytes[0] |= 1;
            if n_bytes > 1 {
                bytes[1] |= 0x80;
            }
        }
        bytes[n_bytes - 1] |= 1;

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_likely_prime(&candidate, n_rounds, rng)? {
            debug!("found {n_bits}-bit prime after {attempts} candidates");
            return Ok(candidate);
        }
        trace!("rejected composite {n_bits}-bit candidate");
    }
}
