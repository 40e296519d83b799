//! tests/common.rs
//! Shared constants and helpers across test files

/// Standard test key used across test files
#[allow(dead_code)]
pub const TEST_KEY: &str = "correct horse battery staple";

/// A second key, guaranteed different from [`TEST_KEY`]
#[allow(dead_code)]
pub const OTHER_KEY: &str = "Tr0ub4dor&3";

/// Common test data string
#[allow(dead_code)]
pub const TEST_DATA: &str = "attack at dawn";

/// Deterministic pseudo-random bytes (xorshift) — reproducible fixtures
/// without a test-only RNG dependency.
#[allow(dead_code)]
pub fn pseudo_random_bytes(mut seed: u64, len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    while out.len() < len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let chunk = seed.to_le_bytes();
        let take = chunk.len().min(len - out.len());
        out.extend_from_slice(&chunk[..take]);
    }
    out
}
