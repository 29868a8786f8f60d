//! Shared data generators for the digest benchmarks.
//!
//! Generators are seeded so runs compare like with like.
#![allow(dead_code)]

use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed shared by every generator.
pub const BENCH_SEED: u64 = 0x5eed_0fd1_6e57;

/// Input sizes that hit every digest branch: tiny, 4..16, 16..48, and the 48-byte loop.
pub const INPUT_SIZES: &[usize] = &[0, 3, 8, 16, 32, 48, 64, 256, 1024, 4096, 65536];

fn rng() -> StdRng {
    StdRng::seed_from_u64(BENCH_SEED)
}

/// Random bytes of the given length.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng().fill(bytes.as_mut_slice());
    bytes
}

/// Batch of random alphanumeric strings of the given length.
pub fn generate_strings(count: usize, len: usize) -> Vec<String> {
    let mut rng = rng();
    (0..count)
        .map(|_| {
            (&mut rng)
                .sample_iter(&Alphanumeric)
                .take(len)
                .map(char::from)
                .collect()
        })
        .collect()
}

/// URL-like keys, the typical dedup workload.
pub fn generate_urls(count: usize) -> Vec<String> {
    generate_strings(count, 16)
        .into_iter()
        .map(|tail| format!("https://example.com/path/{tail}"))
        .collect()
}

/// Random u64 keys.
pub fn generate_u64s(count: usize) -> Vec<u64> {
    let mut rng = rng();
    (0..count).map(|_| rng.gen()).collect()
}
