// Byte-string messages as big-endian integers

use crate::keygen::{PrivateKey, PublicKey};
use crate::RsaError;

use num_bigint::BigUint;

pub fn encode_message(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(msg)
}

/// Leading zero bytes of the original message are not recoverable.
pub fn decode_message(m: &BigUint) -> Vec<u8> {
    if m.bits() == 0 {
        return Vec::new();
    }
    m.to_bytes_be()
}

fn encode_below(msg: &[u8], n: &BigUint) -> Result<BigUint, RsaError> {
    let m = encode_message(msg);
    if &m >= n {
        return Err(RsaError::ValueOutOfRange(format!(
            "{}-byte message does not fit below a {}-bit modulus",
            msg.len(),
            n.bits()
        )));
    }
    Ok(m)
}

/// Encrypt a byte message, rejecting messages too large for the modulus.
pub fn encrypt_bytes(msg: &[u8], key: &PublicKey) -> Result<Vec<u8>, RsaError> {
    let m = encode_below(msg, &key.n)?;
    Ok(key.encrypt(&m)?.to_bytes_be())
}

pub fn decrypt_bytes(ciphertext: &[u8], key: &PrivateKey) -> Result<Vec<u8>, RsaError> {
    let c = encode_below(ciphertext, &key.n)?;
    Ok(decode_message(&key.decrypt(&c)?))
}
