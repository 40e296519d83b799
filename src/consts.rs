//! # Constants
//!
//! Fixed field lengths of the container format, the compiled-in default
//! algorithm, and the scrypt cost parameters.

/// Salt length in bytes. Fixed for every algorithm and container.
pub const SALT_LEN: usize = 16;

/// Authentication tag length in bytes. All supported AEADs produce
/// 128-bit tags.
pub const TAG_LEN: usize = 16;

/// Name of the compiled-in default algorithm used by the fixed-function
/// API and by [`AlgorithmSpec::Default`](crate::AlgorithmSpec::Default).
pub const DEFAULT_ALGORITHM: &str = "aes-256-gcm";

/// Key length of the default algorithm (AES-256).
pub const DEFAULT_KEY_LEN: usize = 32;

/// IV length used by the fixed-function API and the default algorithm.
pub const DEFAULT_IV_LEN: usize = 16;

/// Shortest possible container in the default configuration: salt + iv +
/// tag with an empty ciphertext.
pub const MIN_CONTAINER_LEN: usize = SALT_LEN + DEFAULT_IV_LEN + TAG_LEN;

/// Shortest valid hex container in fixed-function mode (96 hex chars).
pub const MIN_CONTAINER_HEX_LEN: usize = MIN_CONTAINER_LEN * 2;

/// scrypt CPU/memory cost: N = 2^14 = 16384.
///
/// Together with [`SCRYPT_R`]/[`SCRYPT_P`] this keeps one derivation well
/// under 200 ms on commodity hardware while staying interoperable with
/// containers produced under the same fixed parameters.
pub const SCRYPT_LOG_N: u8 = 14;

/// scrypt block size.
pub const SCRYPT_R: u32 = 8;

/// scrypt parallelism.
pub const SCRYPT_P: u32 = 1;
