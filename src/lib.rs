mod batch;
mod cipher;
mod encoding;
mod error;
mod format;
mod keygen;
mod math;
mod prime;
mod prime_tables;
mod random;

pub use batch::generate_key_pairs;
pub use cipher::{decrypt, encrypt, rsa_apply};
pub use encoding::{decode_message, decrypt_bytes, encode_message, encrypt_bytes};
pub use error::RsaError;
pub use format::{digit_count, first_n_digits};
pub use keygen::{
    compute_modulus, compute_totient, derive_private_exponent, generate_key_pair,
    generate_key_pair_with_config, select_public_exponent, KeyGenConfig, KeyPair, PrivateKey,
    PublicKey, MIN_KEY_PRIME_BITS,
};
pub use math::{extended_gcd, greatest_common_divisor, mod_inverse};
pub use prime::{
    generate_prime, generate_prime_with_rounds, is_likely_prime, DEFAULT_MILLER_RABIN_ROUNDS,
};
pub use random::{random_below, random_in_range};
