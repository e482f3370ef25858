// Generate many independent key pairs in parallel

use crate::keygen::{generate_key_pair_with_config, KeyGenConfig, KeyPair};
use crate::RsaError;

use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

/// Generate `count` key pairs, each from its own `StdRng` seeded with
/// `seed + index`. The output order and values depend only on `seed`.
pub fn generate_key_pairs(
    count: usize,
    config: &KeyGenConfig,
    seed: u64,
) -> Result<Vec<KeyPair>, RsaError> {
    (0..count)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i as u64));
            generate_key_pair_with_config(config, &mut rng)
        })
        .collect()
}
