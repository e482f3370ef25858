// Errors raised by key generation and the cipher

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RsaError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("randomness source unavailable: {0}")]
    RandomnessUnavailable(#[from] rand::Error),
    #[error("no modular inverse exists: operands are not coprime")]
    NoInverseExists,
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),
}
