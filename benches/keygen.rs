use textbook_rsa::{generate_key_pair, generate_prime};

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

pub fn bench_generate_prime(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate_prime_256", |b| {
        b.iter(|| generate_prime(256, &mut rng).unwrap())
    });
}

pub fn bench_generate_key_pair(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    c.bench_function("generate_key_pair_256", |b| {
        b.iter(|| generate_key_pair(256, &mut rng).unwrap())
    });
}

pub fn bench_encrypt_decrypt(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let (public, private) = generate_key_pair(512, &mut rng).unwrap().into_keys();
    let msg = 0x5eed_u64;
    c.bench_function("encrypt_decrypt_512", |b| {
        b.iter(|| private.decrypt(&public.encrypt(&msg).unwrap()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_generate_prime,
    bench_generate_key_pair,
    bench_encrypt_decrypt,
);
criterion_main!(benches);
