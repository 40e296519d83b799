//! # Key Stretching
//!
//! Turns a variable-length secret plus a fresh random salt into a
//! fixed-length symmetric key using scrypt with compiled-in cost parameters
//! ([`SCRYPT_LOG_N`]/[`SCRYPT_R`]/[`SCRYPT_P`] — N = 16384, r = 8, p = 1,
//! well under 200 ms per derivation on commodity hardware).
//!
//! The derivation is CPU-bound, so the async entry point runs it on the
//! blocking pool. Calls share no state: the salt must be fresh per
//! encryption and the derived key dies with the call.

use tokio::task;

use crate::consts::{SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use crate::error::PasslockError;
use crate::secret::{DerivedKey, SecretBytes};

/// Stretch `secret` + `salt` into `out_len` key bytes, synchronously.
///
/// # Errors
///
/// [`PasslockError::KeyDerivation`] if `out_len` is zero or the scrypt
/// primitive reports any error.
pub fn stretch_key_blocking(
    secret: &SecretBytes,
    salt: &[u8],
    out_len: usize,
) -> Result<DerivedKey, PasslockError> {
    if out_len == 0 {
        return Err(PasslockError::KeyDerivation(
            "requested key length is zero".into(),
        ));
    }

    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, out_len)
        .map_err(|e| PasslockError::KeyDerivation(format!("invalid scrypt parameters: {e}")))?;

    let mut out = vec![0u8; out_len];
    scrypt::scrypt(secret.expose_secret(), salt, &params, &mut out)
        .map_err(|e| PasslockError::KeyDerivation(format!("scrypt failed: {e}")))?;

    Ok(DerivedKey::from_vec(out))
}

/// Stretch on the blocking pool so async callers are never stalled on the
/// CPU-bound derivation. Concurrent derivations are fully independent.
pub async fn stretch_key(
    secret: SecretBytes,
    salt: Vec<u8>,
    out_len: usize,
) -> Result<DerivedKey, PasslockError> {
    task::spawn_blocking(move || stretch_key_blocking(&secret, &salt, out_len))
        .await
        .map_err(|e| PasslockError::KeyDerivation(format!("derivation task failed: {e}")))?
}
