// Uniform draws from a caller-supplied random source.

use crate::RsaError;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::RngCore;

/// Fill a buffer of `n_bytes` random bytes, surfacing source failures.
pub(crate) fn random_bytes<R: RngCore + ?Sized>(
    n_bytes: usize,
    rng: &mut R,
) -> Result<Vec<u8>, RsaError> {
    let mut bytes = vec![0u8; n_bytes];
    rng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

/// Draw a uniformly random integer in `[0, bound)`.
///
/// Draws `ceil(bits/8)` bytes with the excess high bits masked off and
/// rejects anything at or above `bound`, so each draw succeeds with
/// probability at least one half.
pub fn random_below<R: RngCore + ?Sized>(
    bound: &BigUint,
    rng: &mut R,
) -> Result<BigUint, RsaError> {
    if bound.is_zero() {
        return Err(RsaError::InvalidParameter(
            "cannot draw below an upper bound of zero".to_string(),
        ));
    }
    let bits = bound.bits();
    let n_bytes = bits.div_ceil(8) as usize;
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let top_mask = ((1u16 << top_bits) - 1) as u8;
    loop {
        let mut bytes = random_bytes(n_bytes, rng)?;
        bytes[0] &= top_mask;
        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < bound {
            return Ok(candidate);
        }
    }
}

/// Draw a uniformly random integer in `[low, high)`.
pub fn random_in_range<R: RngCore + ?Sized>(
    low: &BigUint,
    high: &BigUint,
    rng: &mut R,
) -> Result<BigUint, RsaError> {
    if low >= high {
        return Err(RsaError::InvalidParameter(format!(
            "empty range [{low}, {high})"
        )));
    }
    Ok(random_below(&(high - low), rng)? + low)
}
