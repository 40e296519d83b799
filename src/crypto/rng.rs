//! Secure randomness for salts and IVs.
//!
//! Everything comes from the OS CSPRNG via the aead stack's `OsRng`. Salt
//! and IV are generated fresh per encryption call — never cached, never
//! counted — so two encryptions of the same plaintext under the same secret
//! can never share a salt/iv pair.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;

/// Fill a fixed-size array with CSPRNG bytes.
pub fn random_array<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// A fresh CSPRNG byte vector of the given length.
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}
